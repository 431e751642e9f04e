//! Legends - category values that categorical indices point into.

use std::fmt;

use tracing::trace;

use crate::array::{ColorArray, DateTimeArray, Scalar, ScalarArray, SharedArray, StringArray};
use crate::util::{Color, Error, Result, Timestamp};

/// The category domain of a legend.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendValues {
    Color(ColorArray),
    DateTime(DateTimeArray),
    String(StringArray),
    Scalar(ScalarArray),
}

/// One category value.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendValue {
    Color(Color),
    DateTime(Timestamp),
    String(String),
    Scalar(Scalar),
}

impl LegendValues {
    /// Number of categories.
    pub fn len(&self) -> usize {
        match self {
            Self::Color(a) => a.len(),
            Self::DateTime(a) => a.len(),
            Self::String(a) => a.len(),
            Self::Scalar(a) => a.len(),
        }
    }

    /// True if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category at a position.
    pub fn get(&self, i: usize) -> Option<LegendValue> {
        match self {
            Self::Color(a) => a.get(i).copied().map(LegendValue::Color),
            Self::DateTime(a) => a.get(i).copied().map(LegendValue::DateTime),
            Self::String(a) => a.get(i).cloned().map(LegendValue::String),
            Self::Scalar(a) => a.get(i).map(LegendValue::Scalar),
        }
    }

    /// The underlying array, for the codec boundary.
    pub fn as_shared(&self) -> &dyn SharedArray {
        match self {
            Self::Color(a) => a,
            Self::DateTime(a) => a,
            Self::String(a) => a,
            Self::Scalar(a) => a,
        }
    }
}

impl From<ColorArray> for LegendValues {
    fn from(a: ColorArray) -> Self {
        Self::Color(a)
    }
}

impl From<DateTimeArray> for LegendValues {
    fn from(a: DateTimeArray) -> Self {
        Self::DateTime(a)
    }
}

impl From<StringArray> for LegendValues {
    fn from(a: StringArray) -> Self {
        Self::String(a)
    }
}

impl From<ScalarArray> for LegendValues {
    fn from(a: ScalarArray) -> Self {
        Self::Scalar(a)
    }
}

impl fmt::Display for LegendValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{}", c),
            Self::DateTime(t) => write!(f, "{}", t.to_rfc3339()),
            Self::String(s) => f.write_str(s),
            Self::Scalar(v) => write!(f, "{}", v),
        }
    }
}

/// Named category list, optionally with a display color per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    /// Name used as the key in value lookups and in diagnostics.
    pub name: String,
    /// Free-form description.
    pub description: String,
    values: Option<LegendValues>,
    colors: Option<ColorArray>,
}

impl Legend {
    /// Create an empty legend.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the values.
    pub fn with_values(mut self, values: impl Into<LegendValues>) -> Self {
        self.set_values(values);
        self
    }

    /// Set the per-category colors.
    pub fn with_colors(mut self, colors: ColorArray) -> Self {
        self.set_colors(colors);
        self
    }

    /// Category values, if set.
    pub fn values(&self) -> Option<&LegendValues> {
        self.values.as_ref()
    }

    /// Per-category colors, if set.
    pub fn colors(&self) -> Option<&ColorArray> {
        self.colors.as_ref()
    }

    /// Number of categories (0 while values are unset).
    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, LegendValues::len)
    }

    /// True if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign the values. The colors/values length check waits for
    /// [`Legend::validate`].
    pub fn set_values(&mut self, values: impl Into<LegendValues>) {
        self.values = Some(values.into());
    }

    /// Assign the colors.
    pub fn set_colors(&mut self, colors: ColorArray) {
        self.colors = Some(colors);
    }

    /// Remove the colors.
    pub fn clear_colors(&mut self) {
        self.colors = None;
    }

    /// Category at a position.
    pub fn value(&self, i: usize) -> Option<LegendValue> {
        self.values.as_ref()?.get(i)
    }

    /// Whole-object check: values are set, and colors (if any) have one
    /// entry per value.
    pub fn validate(&self) -> Result<()> {
        trace!("validating legend '{}'", self.name);
        let Some(values) = &self.values else {
            return Err(Error::missing(format!("Legend '{}'", self.name), "values"));
        };
        if let Some(colors) = &self.colors {
            if colors.len() != values.len() {
                return Err(Error::LengthMismatch {
                    legend: self.name.clone(),
                    colors: colors.len(),
                    values: values.len(),
                });
            }
        }
        Ok(())
    }
}
