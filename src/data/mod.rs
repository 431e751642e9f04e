//! Attribute data - typed values bound to a mesh location.
//!
//! Each variant owns its array (and colormap or legends where it has them).
//! Setters validate the field they assign and leave the value unchanged on
//! failure; `validate()` runs the whole-object checks that need more than one
//! field.
//!
//! - [`ScalarData`] / [`DateTimeData`] - values with an optional colormap
//! - [`Vector2Data`] / [`Vector3Data`] - vectors
//! - [`ColorData`] - RGB colors, integer input clipped to 0-255
//! - [`StringData`] - text
//! - [`MappedData`] - categorical indices into one or more [`Legend`](crate::legend::Legend)s

mod scalar;
mod vector;
mod color;
mod string;
mod datetime;
mod mapped;

pub use scalar::ScalarData;
pub use vector::{Vector2Data, Vector3Data, VectorData};
pub use color::{ColorData, ColorValues};
pub use string::StringData;
pub use datetime::DateTimeData;
pub use mapped::{MappedData, ValueDict};

use crate::array::SharedArray;
use crate::core::{ArrayCodec, DataHeader, DataLocation, EncodedArray};
use crate::util::{Error, Result};

/// Interface shared by every attribute variant.
pub trait Attribute {
    /// Variant name used in diagnostics.
    fn kind(&self) -> &'static str;

    /// Name, description and location.
    fn header(&self) -> &DataHeader;

    /// Mutable header; these fields are not validated.
    fn header_mut(&mut self) -> &mut DataHeader;

    /// The values array, if set.
    fn array(&self) -> Option<&dyn SharedArray>;

    /// Whole-object validation.
    fn validate(&self) -> Result<()>;

    /// Attribute name.
    fn name(&self) -> &str {
        &self.header().name
    }

    /// Mesh location the values bind to.
    fn location(&self) -> DataLocation {
        self.header().location
    }

    /// Number of values (0 while the array is unset).
    fn num_values(&self) -> usize {
        self.array().map_or(0, |a| a.len())
    }

    /// Validate, then encode the values array.
    fn encode_array(&self, codec: &dyn ArrayCodec) -> Result<EncodedArray> {
        self.validate()?;
        let array = self
            .array()
            .ok_or_else(|| Error::missing(describe(self.kind(), self.header()), "array"))?;
        array.encode(codec)
    }
}

/// `Kind 'name'` label for diagnostics.
pub(crate) fn describe(kind: &str, header: &DataHeader) -> String {
    format!("{} '{}'", kind, header.name)
}

/// Borrow a required field or fail with a missing-field error.
pub(crate) fn require<'a, T>(
    field: &'a Option<T>,
    kind: &str,
    header: &DataHeader,
    name: &'static str,
) -> Result<&'a T> {
    field
        .as_ref()
        .ok_or_else(|| Error::missing(describe(kind, header), name))
}

/// Any attribute variant.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeData {
    Scalar(ScalarData),
    Vector2(Vector2Data),
    Vector3(Vector3Data),
    Color(ColorData),
    String(StringData),
    DateTime(DateTimeData),
    Mapped(MappedData),
}

impl AttributeData {
    /// The variant as a trait object.
    pub fn as_attribute(&self) -> &dyn Attribute {
        match self {
            Self::Scalar(d) => d,
            Self::Vector2(d) => d,
            Self::Vector3(d) => d,
            Self::Color(d) => d,
            Self::String(d) => d,
            Self::DateTime(d) => d,
            Self::Mapped(d) => d,
        }
    }

    /// The variant as a mutable trait object.
    pub fn as_attribute_mut(&mut self) -> &mut dyn Attribute {
        match self {
            Self::Scalar(d) => d,
            Self::Vector2(d) => d,
            Self::Vector3(d) => d,
            Self::Color(d) => d,
            Self::String(d) => d,
            Self::DateTime(d) => d,
            Self::Mapped(d) => d,
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        self.as_attribute().name()
    }

    /// Mesh location.
    pub fn location(&self) -> DataLocation {
        self.as_attribute().location()
    }

    /// Number of values.
    pub fn num_values(&self) -> usize {
        self.as_attribute().num_values()
    }

    /// Whole-object validation.
    pub fn validate(&self) -> Result<()> {
        self.as_attribute().validate()
    }

    /// Validate, then encode the values array.
    pub fn encode_array(&self, codec: &dyn ArrayCodec) -> Result<EncodedArray> {
        self.as_attribute().encode_array(codec)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for AttributeData {
                fn from(d: $ty) -> Self {
                    Self::$variant(d)
                }
            }
        )*
    };
}

impl_from_variant!(
    Scalar(ScalarData),
    Vector2(Vector2Data),
    Vector3(Vector3Data),
    Color(ColorData),
    String(StringData),
    DateTime(DateTimeData),
    Mapped(MappedData),
);
