//! Array shapes and shape descriptors.
//!
//! [`Dimensions`] is the actual shape of a payload, [`ShapeDescriptor`] is
//! the contract an array variant declares for it: `('*',)` for one value
//! per row, `('*', 2)` and `('*', 3)` for fixed-width rows.

use smallvec::SmallVec;
use std::fmt;

use super::{Error, Result};

/// Actual dimensions of an array payload, outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    dims: SmallVec<[usize; 2]>,
}

impl Dimensions {
    /// Create 1D dimensions.
    pub fn d1(rows: usize) -> Self {
        Self { dims: smallvec::smallvec![rows] }
    }

    /// Create 2D dimensions.
    pub fn d2(rows: usize, width: usize) -> Self {
        Self { dims: smallvec::smallvec![rows, width] }
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Size of a dimension, None if out of range.
    pub fn size(&self, dim: usize) -> Option<usize> {
        self.dims.get(dim).copied()
    }

    /// All sizes as a slice.
    pub fn sizes(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of components (product of all sizes), None on overflow.
    pub fn num_points(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s))
    }
}

impl From<usize> for Dimensions {
    fn from(rows: usize) -> Self {
        Self::d1(rows)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, width): (usize, usize)) -> Self {
        Self::d2(rows, width)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "]")
    }
}

/// Declared shape contract of an array variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeDescriptor {
    /// `('*',)` - any number of single values.
    Flat,
    /// `('*', n)` - any number of rows of exactly `n` components.
    Rows(usize),
}

impl ShapeDescriptor {
    /// Descriptor for elements made of `extent` components.
    pub const fn from_extent(extent: u8) -> Self {
        if extent <= 1 {
            Self::Flat
        } else {
            Self::Rows(extent as usize)
        }
    }

    /// Number of components per row.
    pub const fn width(&self) -> usize {
        match self {
            Self::Flat => 1,
            Self::Rows(n) => *n,
        }
    }

    /// Dimensions of an array with `rows` elements under this descriptor.
    pub fn dims_for(&self, rows: usize) -> Dimensions {
        match self {
            Self::Flat => Dimensions::d1(rows),
            Self::Rows(n) => Dimensions::d2(rows, *n),
        }
    }

    /// Check actual dimensions against this descriptor.
    ///
    /// Returns the number of rows on success.
    pub fn check(&self, dims: &Dimensions) -> Result<usize> {
        let ok = match self {
            Self::Flat => dims.rank() == 1,
            Self::Rows(n) => dims.rank() == 2 && dims.size(1) == Some(*n),
        };
        if ok {
            Ok(dims.size(0).unwrap_or(0))
        } else {
            Err(Error::shape(self, dims))
        }
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "('*',)"),
            Self::Rows(n) => write!(f, "('*', {})", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let d = Dimensions::d2(640, 3);
        assert_eq!(d.rank(), 2);
        assert_eq!(d.size(0), Some(640));
        assert_eq!(d.size(2), None);
        assert_eq!(d.num_points(), Some(640 * 3));
        assert_eq!(Dimensions::d2(usize::MAX, 3).num_points(), None);
        assert_eq!(format!("{}", d), "[640 x 3]");

        let d: Dimensions = 12.into();
        assert_eq!(d.sizes(), &[12]);
    }

    #[test]
    fn test_descriptor_display() {
        assert_eq!(ShapeDescriptor::Flat.to_string(), "('*',)");
        assert_eq!(ShapeDescriptor::Rows(2).to_string(), "('*', 2)");
        assert_eq!(ShapeDescriptor::from_extent(3), ShapeDescriptor::Rows(3));
        assert_eq!(ShapeDescriptor::from_extent(1), ShapeDescriptor::Flat);
    }

    #[test]
    fn test_descriptor_check() {
        let flat = ShapeDescriptor::Flat;
        assert_eq!(flat.check(&Dimensions::d1(5)).unwrap(), 5);
        assert!(flat.check(&Dimensions::d2(5, 1)).is_err());

        let rows = ShapeDescriptor::Rows(3);
        assert_eq!(rows.check(&Dimensions::d2(4, 3)).unwrap(), 4);
        assert!(matches!(
            rows.check(&Dimensions::d2(4, 2)),
            Err(Error::Shape { .. })
        ));
        assert!(rows.check(&Dimensions::d1(12)).is_err());
    }
}
