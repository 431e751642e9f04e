//! Element types that can be stored in a typed array.

use std::fmt;

use crate::util::{Color, Component, DVec2, DVec3, DataType, I64Vec2, I64Vec3, Timestamp};

/// One row of a typed array, made of `EXTENT` components.
pub trait ArrayElement: Clone + PartialEq + fmt::Debug {
    /// Component type the element is made of.
    type Component: Component;

    /// Number of components per element.
    const EXTENT: u8;

    /// Element data type (component primitive + extent).
    const DATA_TYPE: DataType = DataType::new(<Self::Component as Component>::PRIMITIVE, Self::EXTENT);

    /// Append this element's components in row-major order.
    fn push_components(&self, out: &mut Vec<Self::Component>);

    /// Build an element from exactly `EXTENT` components.
    fn from_components(c: &[Self::Component]) -> Self;
}

macro_rules! impl_single {
    ($ty:ty) => {
        impl ArrayElement for $ty {
            type Component = $ty;
            const EXTENT: u8 = 1;

            #[inline]
            fn push_components(&self, out: &mut Vec<Self::Component>) {
                out.push(self.clone());
            }

            #[inline]
            fn from_components(c: &[Self::Component]) -> Self {
                c[0].clone()
            }
        }
    };
}

impl_single!(f64);
impl_single!(i64);
impl_single!(String);
impl_single!(Timestamp);

macro_rules! impl_glam {
    ($ty:ty, $comp:ty, 2) => {
        impl ArrayElement for $ty {
            type Component = $comp;
            const EXTENT: u8 = 2;

            #[inline]
            fn push_components(&self, out: &mut Vec<Self::Component>) {
                out.extend_from_slice(&self.to_array());
            }

            #[inline]
            fn from_components(c: &[Self::Component]) -> Self {
                <$ty>::new(c[0], c[1])
            }
        }
    };
    ($ty:ty, $comp:ty, 3) => {
        impl ArrayElement for $ty {
            type Component = $comp;
            const EXTENT: u8 = 3;

            #[inline]
            fn push_components(&self, out: &mut Vec<Self::Component>) {
                out.extend_from_slice(&self.to_array());
            }

            #[inline]
            fn from_components(c: &[Self::Component]) -> Self {
                <$ty>::new(c[0], c[1], c[2])
            }
        }
    };
}

impl_glam!(DVec2, f64, 2);
impl_glam!(DVec3, f64, 3);
impl_glam!(I64Vec2, i64, 2);
impl_glam!(I64Vec3, i64, 3);

impl ArrayElement for Color {
    type Component = u8;
    const EXTENT: u8 = 3;

    #[inline]
    fn push_components(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_array());
    }

    #[inline]
    fn from_components(c: &[u8]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_data_types() {
        assert_eq!(f64::DATA_TYPE, DataType::FLOAT64);
        assert_eq!(i64::DATA_TYPE, DataType::INT64);
        assert_eq!(DVec2::DATA_TYPE, DataType::VEC2D);
        assert_eq!(DVec3::DATA_TYPE, DataType::VEC3D);
        assert_eq!(I64Vec2::DATA_TYPE, DataType::VEC2I);
        assert_eq!(I64Vec3::DATA_TYPE, DataType::VEC3I);
        assert_eq!(String::DATA_TYPE, DataType::STRING);
        assert_eq!(Timestamp::DATA_TYPE, DataType::DATETIME);
        assert_eq!(Color::DATA_TYPE, DataType::COLOR);
    }

    #[test]
    fn test_components_row_major() {
        let mut out = Vec::new();
        DVec3::new(1.0, 2.0, 3.0).push_components(&mut out);
        DVec3::new(4.0, 5.0, 6.0).push_components(&mut out);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(DVec3::from_components(&out[3..6]), DVec3::new(4.0, 5.0, 6.0));
    }
}
