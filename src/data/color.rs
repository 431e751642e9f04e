//! Color attribute data.
//!
//! Colors come either as an n x 3 integer array or as a [`ColorArray`].
//! Integer input is clipped into 0-255 on assignment instead of being
//! checked element by element; out-of-range values never error.

use tracing::{trace, warn};

use super::{require, Attribute};
use crate::array::{ColorArray, Int3Array, SharedArray};
use crate::core::{DataHeader, DataLocation};
use crate::util::{Color, I64Vec3, Result};

/// Either representation of a color array.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValues {
    Int3(Int3Array),
    Color(ColorArray),
}

impl ColorValues {
    /// Number of colors.
    pub fn len(&self) -> usize {
        match self {
            Self::Int3(a) => a.len(),
            Self::Color(a) => a.len(),
        }
    }

    /// True if there are no colors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Color at a position. Integer rows are clipped into range.
    pub fn get(&self, i: usize) -> Option<Color> {
        match self {
            Self::Int3(a) => a.get(i).map(|v| Color::clamped(v.to_array())),
            Self::Color(a) => a.get(i).copied(),
        }
    }

    /// All colors as a [`ColorArray`].
    pub fn to_color_array(&self) -> ColorArray {
        match self {
            Self::Int3(a) => a.iter().map(|v| Color::clamped(v.to_array())).collect(),
            Self::Color(a) => a.clone(),
        }
    }

    fn as_shared(&self) -> &dyn SharedArray {
        match self {
            Self::Int3(a) => a,
            Self::Color(a) => a,
        }
    }
}

impl From<Int3Array> for ColorValues {
    fn from(a: Int3Array) -> Self {
        Self::Int3(a)
    }
}

impl From<ColorArray> for ColorValues {
    fn from(a: ColorArray) -> Self {
        Self::Color(a)
    }
}

/// RGB colors at mesh locations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorData {
    pub header: DataHeader,
    array: Option<ColorValues>,
}

impl ColorData {
    /// Create with no values.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            array: None,
        }
    }

    /// Set the values, clipping integer input.
    pub fn with_array(mut self, array: impl Into<ColorValues>) -> Self {
        self.set_array(array);
        self
    }

    /// Values, if set.
    pub fn values(&self) -> Option<&ColorValues> {
        self.array.as_ref()
    }

    /// Assign the values. Integer components are clipped into 0-255 in
    /// place; a [`ColorArray`] is stored as is.
    pub fn set_array(&mut self, array: impl Into<ColorValues>) {
        let mut array = array.into();
        if let ColorValues::Int3(ints) = &mut array {
            let clipped = clip_colors(ints);
            if clipped > 0 {
                warn!(
                    "ColorData '{}': clipped {} color components into 0-255",
                    self.header.name, clipped
                );
            }
        }
        self.array = Some(array);
    }
}

/// Clamp every component into 0..=255, returning how many changed.
fn clip_colors(ints: &mut Int3Array) -> usize {
    let lo = I64Vec3::ZERO;
    let hi = I64Vec3::splat(255);
    let mut clipped = 0;
    for v in ints.as_mut_slice() {
        let c = v.clamp(lo, hi);
        clipped += (0..3).filter(|&k| c[k] != v[k]).count();
        *v = c;
    }
    clipped
}

impl Attribute for ColorData {
    fn kind(&self) -> &'static str {
        "ColorData"
    }

    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut DataHeader {
        &mut self.header
    }

    fn array(&self) -> Option<&dyn SharedArray> {
        self.array.as_ref().map(ColorValues::as_shared)
    }

    fn validate(&self) -> Result<()> {
        trace!("validating ColorData '{}'", self.header.name);
        require(&self.array, self.kind(), &self.header, "array")?;
        Ok(())
    }
}
