//! Header shared by all attribute data.

use super::DataLocation;

/// Descriptive fields every attribute carries.
///
/// These are plain attributes for the surrounding project model; the data
/// model itself does not validate them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataHeader {
    /// Display/reference name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Mesh topology tier the values bind to.
    pub location: DataLocation,
}

impl DataHeader {
    /// Create a header with a name and location.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            location,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
