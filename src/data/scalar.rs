//! Scalar attribute data.

use tracing::trace;

use super::{require, Attribute};
use crate::array::{ScalarArray, SharedArray};
use crate::colormap::ScalarColormap;
use crate::core::{DataHeader, DataLocation};
use crate::util::Result;

/// Scalar values at mesh locations, optionally with a colormap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarData {
    pub header: DataHeader,
    array: Option<ScalarArray>,
    colormap: Option<ScalarColormap>,
}

impl ScalarData {
    /// Create with no values.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            ..Self::default()
        }
    }

    /// Set the values.
    pub fn with_array(mut self, array: ScalarArray) -> Self {
        self.set_array(array);
        self
    }

    /// Set the colormap.
    pub fn with_colormap(mut self, colormap: ScalarColormap) -> Self {
        self.set_colormap(Some(colormap));
        self
    }

    /// Values, if set.
    pub fn values(&self) -> Option<&ScalarArray> {
        self.array.as_ref()
    }

    /// Colormap, if set.
    pub fn colormap(&self) -> Option<&ScalarColormap> {
        self.colormap.as_ref()
    }

    /// Assign the values.
    pub fn set_array(&mut self, array: ScalarArray) {
        self.array = Some(array);
    }

    /// Assign or remove the colormap.
    pub fn set_colormap(&mut self, colormap: Option<ScalarColormap>) {
        self.colormap = colormap;
    }
}

impl Attribute for ScalarData {
    fn kind(&self) -> &'static str {
        "ScalarData"
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
        trace!("validating ScalarData '{}'", self.header.name);
        require(&self.array, self.kind(), &self.header, "array")?;
        if let Some(colormap) = &self.colormap {
            colormap.validate()?;
        }
        Ok(())
    }
}
