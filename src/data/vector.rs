//! Vector attribute data.

use tracing::trace;

use super::{require, Attribute};
use crate::array::{ArrayElement, SharedArray, TypedArray};
use crate::core::{DataHeader, DataLocation};
use crate::util::{DVec2, DVec3, Result};

/// Vectors at mesh locations.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorData<V: ArrayElement> {
    pub header: DataHeader,
    array: Option<TypedArray<V>>,
}

/// 2D vectors at mesh locations.
pub type Vector2Data = VectorData<DVec2>;

/// 3D vectors at mesh locations.
pub type Vector3Data = VectorData<DVec3>;

impl<V: ArrayElement> VectorData<V> {
    /// Create with no values.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            array: None,
        }
    }

    /// Set the values.
    pub fn with_array(mut self, array: TypedArray<V>) -> Self {
        self.set_array(array);
        self
    }

    /// Values, if set.
    pub fn values(&self) -> Option<&TypedArray<V>> {
        self.array.as_ref()
    }

    /// Assign the values.
    pub fn set_array(&mut self, array: TypedArray<V>) {
        self.array = Some(array);
    }
}

impl<V: ArrayElement> Attribute for VectorData<V> {
    fn kind(&self) -> &'static str {
        match V::EXTENT {
            2 => "Vector2Data",
            _ => "Vector3Data",
        }
    }

    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut DataHeader {
        &mut self.header
    }

    fn array(&self) -> Option<&dyn SharedArray> {
        self.array.as_ref().map(|a| a as &dyn SharedArray)
    }

    fn validate(&self) -> Result<()> {
        trace!("validating {} '{}'", self.kind(), self.header.name);
        require(&self.array, self.kind(), &self.header, "array")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{Vector2Array, Vector3Array};
    use crate::util::Error;

    #[test]
    fn test_vector_data() {
        let data = Vector3Data::new("flow", DataLocation::Faces)
            .with_array(Vector3Array::from_vec(vec![DVec3::X, DVec3::Y]));
        data.validate().unwrap();
        assert_eq!(data.kind(), "Vector3Data");
        assert_eq!(data.num_values(), 2);
        assert_eq!(data.array().unwrap().dims().sizes(), &[2, 3]);

        let data = Vector2Data::new("uv", DataLocation::Vertices);
        assert_eq!(data.kind(), "Vector2Data");
        assert!(matches!(data.validate(), Err(Error::MissingField { .. })));

        let data = data.with_array(Vector2Array::from_rows(&[[0.5, 0.5]]).unwrap());
        assert_eq!(data.values().unwrap()[0], DVec2::splat(0.5));
    }
}
