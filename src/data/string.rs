//! Text attribute data.

use tracing::trace;

use super::{require, Attribute};
use crate::array::{SharedArray, StringArray};
use crate::core::{DataHeader, DataLocation};
use crate::util::Result;

/// Text entries at mesh locations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringData {
    pub header: DataHeader,
    array: Option<StringArray>,
}

impl StringData {
    /// Create with no values.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            array: None,
        }
    }

    /// Set the values.
    pub fn with_array(mut self, array: StringArray) -> Self {
        self.set_array(array);
        self
    }

    /// Values, if set.
    pub fn values(&self) -> Option<&StringArray> {
        self.array.as_ref()
    }

    /// Assign the values.
    pub fn set_array(&mut self, array: StringArray) {
        self.array = Some(array);
    }
}

impl Attribute for StringData {
    fn kind(&self) -> &'static str {
        "StringData"
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
        trace!("validating StringData '{}'", self.header.name);
        require(&self.array, self.kind(), &self.header, "array")?;
        Ok(())
    }
}
