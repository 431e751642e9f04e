//! Core layer - shared attribute plumbing.
//!
//! This module provides:
//! - [`DataLocation`] - mesh topology tier an attribute binds to
//! - [`DataHeader`] - name/description/location carried by every attribute
//! - [`ArrayCodec`] / [`ZlibCodec`] - the payload codec boundary

mod location;
mod header;
mod codec;

pub use location::DataLocation;
pub use header::DataHeader;
pub use codec::{ArrayCodec, EncodedArray, PlainCodec, ZlibCodec};
