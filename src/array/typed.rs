//! Generic typed array.

use std::ops::Index;

use tracing::trace;

use super::{ArrayElement, SharedArray};
use crate::core::{ArrayCodec, EncodedArray};
use crate::util::{
    parse_timestamp, Color, Component, DataType, Dimensions, Error, Result, ShapeDescriptor,
};

/// Homogeneous array of one element type.
///
/// Rank and row width are fixed by `T`; the length only changes by
/// replacing the whole array.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray<T: ArrayElement> {
    values: Vec<T>,
}

impl<T: ArrayElement> TypedArray<T> {
    /// Declared shape of this array variant.
    pub const DESCRIPTOR: ShapeDescriptor = ShapeDescriptor::from_extent(T::EXTENT);

    /// Create an empty array.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Wrap a vector of elements.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Build from untyped rows, each of which must hold exactly one
    /// element's worth of components.
    pub fn from_rows<R: AsRef<[T::Component]>>(rows: &[R]) -> Result<Self> {
        let width = Self::DESCRIPTOR.width();
        let values = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_ref();
                if row.len() != width {
                    return Err(Error::shape(
                        Self::DESCRIPTOR,
                        format!("row {} with {} components", i, row.len()),
                    ));
                }
                Ok(T::from_components(row))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Build from a flat row-major component buffer and its dimensions.
    pub fn from_components(components: Vec<T::Component>, dims: &Dimensions) -> Result<Self> {
        let rows = Self::DESCRIPTOR.check(dims)?;
        let expected = dims
            .num_points()
            .ok_or_else(|| Error::shape(Self::DESCRIPTOR, format!("{} (size overflows)", dims)))?;
        if components.len() != expected {
            return Err(Error::shape(
                format!("{} components for {}", expected, dims),
                format!("{} components", components.len()),
            ));
        }
        let width = Self::DESCRIPTOR.width();
        let values = components.chunks_exact(width).map(T::from_components).collect::<Vec<_>>();
        debug_assert_eq!(values.len(), rows);
        Ok(Self { values })
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at a position.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.values.get(i)
    }

    /// Iterate over elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Mutable access for in-crate fixups that keep the shape (e.g. clamping).
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Unwrap into the element vector.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Raw element data in row-major order.
    pub fn components(&self) -> Vec<T::Component> {
        let mut out = Vec::with_capacity(self.values.len() * T::EXTENT as usize);
        for v in &self.values {
            v.push_components(&mut out);
        }
        out
    }

    /// Decode an encoded array, rejecting payloads whose data type or
    /// shape does not match this variant.
    pub fn decode(codec: &dyn ArrayCodec, encoded: &EncodedArray) -> Result<Self> {
        if encoded.data_type != T::DATA_TYPE {
            return Err(Error::type_mismatch(T::DATA_TYPE, encoded.data_type));
        }
        let rows = Self::DESCRIPTOR.check(&encoded.dims)?;
        let raw = codec.decode(&encoded.payload)?;
        if T::DATA_TYPE.primitive.is_fixed_size() {
            let expected = rows.checked_mul(T::DATA_TYPE.num_bytes());
            if expected != Some(raw.len()) {
                return Err(Error::shape(
                    format!("{} rows of {} for {}", rows, T::DATA_TYPE, encoded.dims),
                    format!("{} bytes", raw.len()),
                ));
            }
        }
        let components = T::Component::decode_slice(&raw)?;
        trace!(
            "decoded {} {} components for {}",
            components.len(),
            T::DATA_TYPE,
            encoded.dims
        );
        Self::from_components(components, &encoded.dims)
    }
}

impl<T: ArrayElement> SharedArray for TypedArray<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn shape_descriptor(&self) -> ShapeDescriptor {
        Self::DESCRIPTOR
    }

    fn encode(&self, codec: &dyn ArrayCodec) -> Result<EncodedArray> {
        let raw = T::Component::encode_slice(&self.components())?;
        Ok(EncodedArray {
            data_type: T::DATA_TYPE,
            dims: self.dims(),
            payload: codec.encode(&raw)?,
        })
    }
}

impl<T: ArrayElement> Default for TypedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> Index<usize> for TypedArray<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

impl<T: ArrayElement> From<Vec<T>> for TypedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: ArrayElement> FromIterator<T> for TypedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a, T: ArrayElement> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl TypedArray<Color> {
    /// Build a color array from hex strings or color names.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        colors.iter().map(|s| s.as_ref().parse::<Color>()).collect()
    }
}

impl TypedArray<String> {
    /// Build a string array from anything string-like.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Self {
        values.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl TypedArray<crate::util::Timestamp> {
    /// Build a date-time array from RFC 3339 strings.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        values.iter().map(|s| parse_timestamp(s.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{ColorArray, DateTimeArray, Int2Array, StringArray, Vector2Array, Vector3Array};
    use crate::core::{PlainCodec, ZlibCodec};
    use crate::util::{DVec2, DVec3, I64Vec2};

    #[test]
    fn test_len_and_access() {
        let arr = Vector3Array::from_vec(vec![DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1], DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(arr.get(2), None);
        assert_eq!(arr.dims(), Dimensions::d2(2, 3));
        assert_eq!(arr.shape_descriptor().to_string(), "('*', 3)");
    }

    #[test]
    fn test_from_rows_rejects_wrong_width() {
        let ok = Vector2Array::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
        assert_eq!(ok[1], DVec2::new(2.0, 3.0));

        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        let err = Vector3Array::from_rows(&rows).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn test_from_components() {
        let arr = Int2Array::from_components(vec![1, 2, 3, 4], &Dimensions::d2(2, 2)).unwrap();
        assert_eq!(arr.as_slice(), &[I64Vec2::new(1, 2), I64Vec2::new(3, 4)]);
        assert_eq!(arr.components(), vec![1, 2, 3, 4]);

        assert!(Int2Array::from_components(vec![1, 2, 3, 4], &Dimensions::d2(1, 4)).is_err());
        assert!(Int2Array::from_components(vec![1, 2, 3], &Dimensions::d2(2, 2)).is_err());
        assert!(Int2Array::from_components(vec![1, 2, 3, 4], &Dimensions::d1(4)).is_err());
    }

    #[test]
    fn test_encode_decode() {
        let arr = ColorArray::parse(&["#ff0000", "blue", "#123"]).unwrap();
        let codec = ZlibCodec::default();
        let encoded = arr.encode(&codec).unwrap();
        assert_eq!(encoded.data_type, DataType::COLOR);
        assert_eq!(encoded.dims, Dimensions::d2(3, 3));
        assert_eq!(ColorArray::decode(&codec, &encoded).unwrap(), arr);
    }

    #[test]
    fn test_decode_rejects_mismatched_descriptor() {
        let strings = StringArray::from_strs(&["a", "b"]);
        let mut encoded = strings.encode(&PlainCodec).unwrap();

        let err = ColorArray::decode(&PlainCodec, &encoded).unwrap_err();
        assert!(matches!(err, Error::Type { .. }));

        encoded.dims = Dimensions::d2(1, 2);
        let err = StringArray::decode(&PlainCodec, &encoded).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn test_decode_rejects_row_count_mismatch() {
        let arr = Vector2Array::from_vec(vec![DVec2::ZERO, DVec2::ONE]);
        let mut encoded = arr.encode(&PlainCodec).unwrap();
        encoded.dims = Dimensions::d2(3, 2);
        assert!(matches!(
            Vector2Array::decode(&PlainCodec, &encoded),
            Err(Error::Shape { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_byte_count_mismatch() {
        let arr = Int2Array::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let mut encoded = arr.encode(&PlainCodec).unwrap();
        encoded.payload.truncate(24);
        assert!(matches!(
            Int2Array::decode(&PlainCodec, &encoded),
            Err(Error::Shape { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_overflowing_dims() {
        let arr = Vector3Array::from_vec(vec![DVec3::ONE]);
        let mut encoded = arr.encode(&PlainCodec).unwrap();
        encoded.dims = Dimensions::d2(usize::MAX, 3);
        assert!(matches!(
            Vector3Array::decode(&PlainCodec, &encoded),
            Err(Error::Shape { .. })
        ));
        assert!(matches!(
            Vector3Array::from_components(vec![1.0; 3], &Dimensions::d2(usize::MAX, 3)),
            Err(Error::Shape { .. })
        ));
    }

    #[test]
    fn test_strings_with_nul_rejected_on_encode() {
        let arr = StringArray::from_strs(&["a\0b", "c"]);
        assert!(matches!(arr.encode(&PlainCodec), Err(Error::InvalidString(_))));

        let ok = StringArray::from_strs(&["ab", "c"]);
        let encoded = ok.encode(&PlainCodec).unwrap();
        assert_eq!(StringArray::decode(&PlainCodec, &encoded).unwrap(), ok);
    }

    #[test]
    fn test_datetime_parse() {
        let arr = DateTimeArray::parse(&["2020-05-01T00:00:00Z", "2021-05-01T12:00:00-04:00"]).unwrap();
        assert_eq!(arr.len(), 2);
        assert!(arr[0] < arr[1]);
        assert!(DateTimeArray::parse(&["not a date"]).is_err());
    }
}
