//! Error types for the OMF data model.

use thiserror::Error;

/// Main error type for OMF data operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Array or gradient has the wrong rank, length or row width
    #[error("Shape error: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    /// Element type is not the one required (e.g. non-integer indices)
    #[error("Type error: expected {expected}, got {actual}")]
    Type { expected: String, actual: String },

    /// Colormap minimum and maximum are inverted
    #[error("Colormap {field} {value} is out of order with {other_field} {other_value}")]
    RangeOrder {
        field: &'static str,
        value: String,
        other_field: &'static str,
        other_value: String,
    },

    /// Index value below the no-data sentinel
    #[error("Indices of {data} must be >= -1, found {value}")]
    Range { data: String, value: i64 },

    /// Legend colors and values differ in length
    #[error("Length of colors ({colors}) does not match length of values ({values}) in legend {legend}")]
    LengthMismatch {
        legend: String,
        colors: usize,
        values: usize,
    },

    /// Index value exceeds the number of entries in a legend
    #[error("Indices of {data} exceed number of available entries in legend {legend} (index {index}, count {count})")]
    IndexOutOfRange {
        data: String,
        legend: String,
        index: i64,
        count: usize,
    },

    /// Required field not set at validation time
    #[error("{entity} is missing required field '{field}'")]
    MissingField { entity: String, field: &'static str },

    /// Positional access past the end of an array
    #[error("Position {index} out of bounds (count: {count})")]
    PositionOutOfBounds { index: usize, count: usize },

    /// Color value that cannot be interpreted as RGB
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown mesh location name
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Timestamp string that cannot be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// String that cannot be stored NUL-terminated
    #[error("String contains NUL: {0}")]
    InvalidString(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a shape error from anything displayable.
    pub fn shape(expected: impl ToString, actual: impl ToString) -> Self {
        Self::Shape {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a type error from anything displayable.
    pub fn type_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::Type {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a missing field error.
    pub fn missing(entity: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            entity: entity.into(),
            field,
        }
    }
}

/// Result type alias for OMF data operations.
pub type Result<T> = std::result::Result<T, Error>;
