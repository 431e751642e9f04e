//! Utility types and functions for OMF data.
//!
//! This module contains fundamental types used throughout the library:
//! - [`PrimitiveType`] / [`Component`] - Component storage types
//! - [`DataType`] - primitive + extent (row width)
//! - [`Dimensions`] / [`ShapeDescriptor`] - actual and declared shapes
//! - [`Color`] - 8-bit RGB
//! - [`Error`] / [`Result`] - Error handling
//! - Vector and timestamp re-exports

mod primitive;
mod data_type;
mod error;
mod math;
mod shape;
mod color;

pub use primitive::*;
pub use data_type::*;
pub use error::*;
pub use math::*;
pub use shape::*;
pub use color::*;
