//! Math type re-exports and time values.
//!
//! Vector elements are `glam` double-precision and 64-bit integer vectors.
//! Timestamps are `chrono` UTC date-times.

pub use glam::{DVec2, DVec3, I64Vec2, I64Vec3};

use chrono::{DateTime, Utc};

use super::{Error, Result};

/// Timestamp type - a UTC date-time.
pub type Timestamp = DateTime<Utc>;

/// Index type for categorical data.
pub type Index = i64;

/// Index value meaning "no data".
pub const NO_DATA: Index = -1;

/// Parse an RFC 3339 timestamp and normalize it to UTC.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp(format!("{}: {}", s, e)))
}
