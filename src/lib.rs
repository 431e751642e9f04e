//! # OMF data
//!
//! Rust implementation of the Open Mining Format attribute data model:
//! typed arrays of values bound to the vertices, segments, faces or cells of
//! a mesh, with colormaps for continuous data and legends for categorical
//! data.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (primitive/data types, shapes, colors, errors)
//! - [`core`] - Mesh locations, attribute headers, payload codecs
//! - [`array`] - Typed shared arrays
//! - [`colormap`] - Scalar and date-time colormaps
//! - [`legend`] - Category legends
//! - [`data`] - Attribute data variants
//!
//! ## Validation
//!
//! Setters validate the field they assign and leave the object unchanged on
//! failure. Checks that span several fields or objects (legend lengths,
//! indices against legends) run only when `validate()` is called, and
//! before an attribute's array is encoded.
//!
//! ## Example
//!
//! ```ignore
//! use omf::prelude::*;
//!
//! let rock = Legend::new("rock")
//!     .with_values(StringArray::from_strs(&["granite", "basalt", "shale"]));
//! let data = MappedData::new("lithology", DataLocation::Cells)
//!     .with_indices(ScalarArray::from_ints(vec![0, 2, -1, 1]))?
//!     .with_legend(rock);
//! data.validate()?;
//!
//! let entry = data.value_dict(1)?;
//! println!("{:?}", entry["rock"]);
//! ```

pub mod util;
pub mod core;
pub mod array;
pub mod colormap;
pub mod legend;
pub mod data;

// Re-export commonly used types
pub use util::{DataType, PrimitiveType, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Color, DataType, Error, PrimitiveType, Result, Timestamp, NO_DATA};
    pub use crate::core::{ArrayCodec, DataLocation, ZlibCodec};
    pub use crate::array::*;
    pub use crate::colormap::{DateTimeColormap, ScalarColormap, GRADIENT_LENGTH};
    pub use crate::legend::{Legend, LegendValue, LegendValues};
    pub use crate::data::*;
}
