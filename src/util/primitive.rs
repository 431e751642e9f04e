//! Primitive component types - the scalar building blocks of every array.

use std::fmt;

use super::{Error, Result, Timestamp};

/// Primitive type enum - represents the storage type of a single component.
///
/// Vector and color elements are made of several components of the same
/// primitive type; see [`DataType`](super::DataType) for the extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PrimitiveType {
    /// Unsigned 8-bit integer (color channels)
    Uint8 = 0,
    /// Signed 64-bit integer
    Int64 = 1,
    /// 64-bit floating point
    Float64 = 2,
    /// UTF-8 string
    String = 3,
    /// UTC timestamp
    DateTime = 4,
    /// Unknown/invalid type
    #[default]
    Unknown = 127,
}

impl PrimitiveType {
    /// Returns the size in bytes of one component, 0 for variable-size types.
    #[inline]
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Uint8 => 1,
            Self::Int64 => 8,
            Self::Float64 => 8,
            Self::String | Self::DateTime | Self::Unknown => 0,
        }
    }

    /// Returns the name of this type as a string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if components are stored with a fixed byte width.
    #[inline]
    pub const fn is_fixed_size(self) -> bool {
        self.num_bytes() > 0
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// === Component trait for byte-level conversion ===

/// A value that can be one component of an array element.
///
/// Fixed-size components go through `bytemuck`; strings and timestamps are
/// written as NUL-terminated UTF-8.
pub trait Component: Clone + PartialEq + fmt::Debug {
    /// The corresponding primitive type.
    const PRIMITIVE: PrimitiveType;

    /// Encode a row-major run of components into bytes.
    fn encode_slice(values: &[Self]) -> Result<Vec<u8>>;

    /// Decode bytes produced by [`Component::encode_slice`].
    fn decode_slice(bytes: &[u8]) -> Result<Vec<Self>>;
}

macro_rules! impl_pod_component {
    ($ty:ty, $prim:expr) => {
        impl Component for $ty {
            const PRIMITIVE: PrimitiveType = $prim;

            fn encode_slice(values: &[Self]) -> Result<Vec<u8>> {
                Ok(bytemuck::cast_slice::<$ty, u8>(values).to_vec())
            }

            fn decode_slice(bytes: &[u8]) -> Result<Vec<Self>> {
                let size = std::mem::size_of::<$ty>();
                if bytes.len() % size != 0 {
                    return Err(Error::shape(
                        format!("multiple of {} bytes", size),
                        format!("{} bytes", bytes.len()),
                    ));
                }
                Ok(bytemuck::pod_collect_to_vec(bytes))
            }
        }
    };
}

impl_pod_component!(u8, PrimitiveType::Uint8);
impl_pod_component!(i64, PrimitiveType::Int64);
impl_pod_component!(f64, PrimitiveType::Float64);

/// Split NUL-terminated UTF-8 strings.
fn split_terminated(bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let Some((&0, body)) = bytes.split_last() else {
        return Err(Error::other("string payload is not NUL-terminated"));
    };
    body.split(|&b| b == 0)
        .map(|s| String::from_utf8(s.to_vec()).map_err(Error::from))
        .collect()
}

/// Join strings with NUL terminators. Strings may not contain NUL.
fn join_terminated<'a>(values: impl Iterator<Item = &'a str>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for s in values {
        if s.contains('\0') {
            return Err(Error::InvalidString(s.escape_default().to_string()));
        }
        out.extend_from_slice(s.as_bytes());
        out.push(0);
    }
    Ok(out)
}

impl Component for String {
    const PRIMITIVE: PrimitiveType = PrimitiveType::String;

    fn encode_slice(values: &[Self]) -> Result<Vec<u8>> {
        join_terminated(values.iter().map(String::as_str))
    }

    fn decode_slice(bytes: &[u8]) -> Result<Vec<Self>> {
        split_terminated(bytes)
    }
}

impl Component for Timestamp {
    const PRIMITIVE: PrimitiveType = PrimitiveType::DateTime;

    fn encode_slice(values: &[Self]) -> Result<Vec<u8>> {
        let text: Vec<String> = values.iter().map(|t| t.to_rfc3339()).collect();
        join_terminated(text.iter().map(String::as_str))
    }

    fn decode_slice(bytes: &[u8]) -> Result<Vec<Self>> {
        split_terminated(bytes)?
            .iter()
            .map(|s| super::parse_timestamp(s))
            .collect()
    }
}
