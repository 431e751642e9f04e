//! DataType - combines a primitive type with an extent (row width).

use super::PrimitiveType;
use std::fmt;

/// DataType describes how one element (row) of an array is stored.
///
/// It combines a [`PrimitiveType`] with an extent. A 3D vector is
/// Float64 with extent 3, an RGB color is Uint8 with extent 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The component type
    pub primitive: PrimitiveType,
    /// Number of components per element (1 for scalars)
    pub extent: u8,
}

impl DataType {
    /// Create a new DataType with given primitive and extent.
    #[inline]
    pub const fn new(primitive: PrimitiveType, extent: u8) -> Self {
        Self { primitive, extent }
    }

    /// Create a scalar DataType (extent = 1).
    #[inline]
    pub const fn scalar(primitive: PrimitiveType) -> Self {
        Self { primitive, extent: 1 }
    }

    /// Returns the size in bytes of one element, 0 for variable-size types.
    #[inline]
    pub const fn num_bytes(&self) -> usize {
        self.primitive.num_bytes() * self.extent as usize
    }

    /// Unknown/invalid DataType.
    pub const UNKNOWN: Self = Self::new(PrimitiveType::Unknown, 0);

    pub const FLOAT64: Self = Self::scalar(PrimitiveType::Float64);
    pub const INT64: Self = Self::scalar(PrimitiveType::Int64);
    pub const STRING: Self = Self::scalar(PrimitiveType::String);
    pub const DATETIME: Self = Self::scalar(PrimitiveType::DateTime);

    pub const VEC2D: Self = Self::new(PrimitiveType::Float64, 2);
    pub const VEC3D: Self = Self::new(PrimitiveType::Float64, 3);

    pub const VEC2I: Self = Self::new(PrimitiveType::Int64, 2);
    pub const VEC3I: Self = Self::new(PrimitiveType::Int64, 3);

    pub const COLOR: Self = Self::new(PrimitiveType::Uint8, 3);
}

impl Default for DataType {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extent == 1 {
            write!(f, "{}", self.primitive.name())
        } else {
            write!(f, "{}[{}]", self.primitive.name(), self.extent)
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
