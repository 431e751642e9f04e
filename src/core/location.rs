//! Mesh location an attribute binds to.

use std::fmt;
use std::str::FromStr;

use crate::util::{Error, Result};

/// Topology tier of a mesh that attribute values are attached to.
///
/// One value per vertex, per segment (line sets), per face (surfaces)
/// or per cell (volumes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataLocation {
    /// One value per vertex.
    #[default]
    Vertices,
    /// One value per line segment.
    Segments,
    /// One value per face.
    Faces,
    /// One value per volume cell.
    Cells,
}

impl DataLocation {
    /// All locations, in declaration order.
    pub const ALL: [Self; 4] = [Self::Vertices, Self::Segments, Self::Faces, Self::Cells];

    /// Name as stored alongside the data.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vertices => "vertices",
            Self::Segments => "segments",
            Self::Faces => "faces",
            Self::Cells => "cells",
        }
    }
}

impl FromStr for DataLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| Error::InvalidLocation(s.to_string()))
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
