//! Scalar arrays with a declared numeric type.

use std::fmt;

use super::{SharedArray, TypedArray};
use crate::core::{ArrayCodec, EncodedArray};
use crate::util::{DataType, Error, PrimitiveType, Result, ShapeDescriptor};

/// One scalar value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Float(f64),
    Int(i64),
}

impl Scalar {
    /// Value as f64.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Float(v) => v,
            Self::Int(v) => v as f64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
        }
    }
}

/// Shared array of scalars, `('*',)`.
///
/// Values are floating point unless built from integers; categorical
/// indices require the integer form.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarArray {
    Float(TypedArray<f64>),
    Int(TypedArray<i64>),
}

impl ScalarArray {
    /// Float array from values.
    pub fn from_floats(values: Vec<f64>) -> Self {
        Self::Float(TypedArray::from_vec(values))
    }

    /// Integer array from values.
    pub fn from_ints(values: Vec<i64>) -> Self {
        Self::Int(TypedArray::from_vec(values))
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Float(a) => a.len(),
            Self::Int(a) => a.len(),
        }
    }

    /// True if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a position.
    pub fn get(&self, i: usize) -> Option<Scalar> {
        match self {
            Self::Float(a) => a.get(i).copied().map(Scalar::Float),
            Self::Int(a) => a.get(i).copied().map(Scalar::Int),
        }
    }

    /// Primitive type of the values.
    pub fn primitive(&self) -> PrimitiveType {
        self.data_type().primitive
    }

    /// Integer values, None for float arrays.
    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Self::Int(a) => Some(a.as_slice()),
            Self::Float(_) => None,
        }
    }

    /// Float values, None for integer arrays.
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Float(a) => Some(a.as_slice()),
            Self::Int(_) => None,
        }
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Decode either numeric form; other data types are rejected.
    pub fn decode(codec: &dyn ArrayCodec, encoded: &EncodedArray) -> Result<Self> {
        match encoded.data_type {
            DataType::FLOAT64 => TypedArray::decode(codec, encoded).map(Self::Float),
            DataType::INT64 => TypedArray::decode(codec, encoded).map(Self::Int),
            other => Err(Error::type_mismatch("float64 or int64", other)),
        }
    }
}

impl SharedArray for ScalarArray {
    fn len(&self) -> usize {
        ScalarArray::len(self)
    }

    fn data_type(&self) -> DataType {
        match self {
            Self::Float(a) => a.data_type(),
            Self::Int(a) => a.data_type(),
        }
    }

    fn shape_descriptor(&self) -> ShapeDescriptor {
        ShapeDescriptor::Flat
    }

    fn encode(&self, codec: &dyn ArrayCodec) -> Result<EncodedArray> {
        match self {
            Self::Float(a) => a.encode(codec),
            Self::Int(a) => a.encode(codec),
        }
    }
}

impl Default for ScalarArray {
    fn default() -> Self {
        Self::Float(TypedArray::new())
    }
}

impl From<Vec<f64>> for ScalarArray {
    fn from(values: Vec<f64>) -> Self {
        Self::from_floats(values)
    }
}

impl From<Vec<i64>> for ScalarArray {
    fn from(values: Vec<i64>) -> Self {
        Self::from_ints(values)
    }
}
