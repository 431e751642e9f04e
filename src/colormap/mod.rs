//! Colormaps - a 128-entry color gradient stretched over a value range.
//!
//! [`ScalarColormap`] colors [`ScalarData`](crate::data::ScalarData),
//! [`DateTimeColormap`] colors [`DateTimeData`](crate::data::DateTimeData).
//!
//! The range fields are checked one at a time when they are assigned:
//! `min_value` against the current `max_value`, `max_value` against the
//! current `min_value`. [`Colormap::validate`] only checks that every field
//! is present.

use std::fmt;

use tracing::debug;

use crate::array::ColorArray;
use crate::util::{Color, Error, Result, Timestamp};

/// Required number of gradient entries.
pub const GRADIENT_LENGTH: usize = 128;

/// Value type a colormap range is expressed in.
pub trait RangeValue: Clone + PartialOrd + fmt::Debug + fmt::Display {
    /// Position on a linear axis, used to interpolate into the gradient.
    fn to_axis(&self) -> f64;
}

impl RangeValue for f64 {
    #[inline]
    fn to_axis(&self) -> f64 {
        *self
    }
}

impl RangeValue for Timestamp {
    #[inline]
    fn to_axis(&self) -> f64 {
        self.timestamp() as f64 + f64::from(self.timestamp_subsec_nanos()) * 1e-9
    }
}

/// Gradient plus value range.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap<T: RangeValue> {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    gradient: Option<ColorArray>,
    min_value: Option<T>,
    max_value: Option<T>,
}

/// Colormap over scalar values.
pub type ScalarColormap = Colormap<f64>;

/// Colormap over timestamps.
pub type DateTimeColormap = Colormap<Timestamp>;

impl<T: RangeValue> Colormap<T> {
    /// Create an empty colormap.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            gradient: None,
            min_value: None,
            max_value: None,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the gradient, validating its length.
    pub fn with_gradient(mut self, gradient: ColorArray) -> Result<Self> {
        self.set_gradient(gradient)?;
        Ok(self)
    }

    /// Set `min_value` then `max_value`, each validated on assignment.
    pub fn with_range(mut self, min_value: T, max_value: T) -> Result<Self> {
        self.set_min_value(min_value)?;
        self.set_max_value(max_value)?;
        Ok(self)
    }

    /// Gradient, if set.
    pub fn gradient(&self) -> Option<&ColorArray> {
        self.gradient.as_ref()
    }

    /// Data value at the start of the gradient, if set.
    pub fn min_value(&self) -> Option<&T> {
        self.min_value.as_ref()
    }

    /// Data value at the end of the gradient, if set.
    pub fn max_value(&self) -> Option<&T> {
        self.max_value.as_ref()
    }

    /// Assign the gradient. Fails with a shape error unless it has
    /// exactly [`GRADIENT_LENGTH`] entries.
    pub fn set_gradient(&mut self, gradient: ColorArray) -> Result<()> {
        if gradient.len() != GRADIENT_LENGTH {
            debug!("colormap '{}': rejected gradient of length {}", self.name, gradient.len());
            return Err(Error::shape(
                format!("gradient of length {}", GRADIENT_LENGTH),
                format!("length {}", gradient.len()),
            ));
        }
        self.gradient = Some(gradient);
        Ok(())
    }

    /// Assign `min_value`. Fails if `max_value` is set and smaller.
    pub fn set_min_value(&mut self, value: T) -> Result<()> {
        if let Some(max) = &self.max_value {
            if value > *max {
                debug!("colormap '{}': rejected min_value {} > max_value {}", self.name, value, max);
                return Err(Error::RangeOrder {
                    field: "min_value",
                    value: value.to_string(),
                    other_field: "max_value",
                    other_value: max.to_string(),
                });
            }
        }
        self.min_value = Some(value);
        Ok(())
    }

    /// Assign `max_value`. Fails if `min_value` is set and larger.
    pub fn set_max_value(&mut self, value: T) -> Result<()> {
        if let Some(min) = &self.min_value {
            if value < *min {
                debug!("colormap '{}': rejected max_value {} < min_value {}", self.name, value, min);
                return Err(Error::RangeOrder {
                    field: "max_value",
                    value: value.to_string(),
                    other_field: "min_value",
                    other_value: min.to_string(),
                });
            }
        }
        self.max_value = Some(value);
        Ok(())
    }

    /// Whole-object check: gradient, min and max must all be set.
    pub fn validate(&self) -> Result<()> {
        let entity = || format!("Colormap '{}'", self.name);
        if self.gradient.is_none() {
            return Err(Error::missing(entity(), "gradient"));
        }
        if self.min_value.is_none() {
            return Err(Error::missing(entity(), "min_value"));
        }
        if self.max_value.is_none() {
            return Err(Error::missing(entity(), "max_value"));
        }
        Ok(())
    }

    /// Gradient color for a data value; values outside the range take the
    /// end colors. None until every field is set.
    pub fn color_for(&self, value: &T) -> Option<Color> {
        let gradient = self.gradient.as_ref()?;
        let min = self.min_value.as_ref()?.to_axis();
        let max = self.max_value.as_ref()?.to_axis();
        let last = gradient.len().checked_sub(1)?;

        let span = max - min;
        let t = if span > 0.0 {
            ((value.to_axis() - min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        // NaN input lands on the first entry
        let i = (t * last as f64).round();
        let i = if i.is_nan() { 0 } else { i as usize };
        gradient.get(i.min(last)).copied()
    }
}

impl<T: RangeValue> Default for Colormap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn gradient(n: usize) -> ColorArray {
        (0..n).map(|i| Color::new(i as u8, 0, 255 - i as u8)).collect()
    }

    #[test]
    fn test_gradient_length() {
        let mut cmap = ScalarColormap::new();
        for n in [0, 1, 127, 129, 256] {
            let err = cmap.set_gradient(gradient(n)).unwrap_err();
            assert!(matches!(err, Error::Shape { .. }), "length {}", n);
            assert!(cmap.gradient().is_none());
        }
        cmap.set_gradient(gradient(128)).unwrap();
        assert_eq!(cmap.gradient().map(|g| g.len()), Some(128));
    }

    #[test]
    fn test_range_checked_on_assignment() {
        let mut cmap = ScalarColormap::new().with_range(5.0, 10.0).unwrap();

        assert!(matches!(cmap.set_min_value(11.0), Err(Error::RangeOrder { .. })));
        assert_eq!(cmap.min_value(), Some(&5.0));

        assert!(matches!(cmap.set_max_value(4.0), Err(Error::RangeOrder { .. })));
        assert_eq!(cmap.max_value(), Some(&10.0));

        cmap.set_min_value(3.0).unwrap();
        cmap.set_max_value(3.0).unwrap();
        assert!(matches!(cmap.set_max_value(2.0), Err(Error::RangeOrder { .. })));
    }

    #[test]
    fn test_range_unset_side_not_checked() {
        let mut cmap = ScalarColormap::new();
        cmap.set_max_value(-100.0).unwrap();
        cmap.set_max_value(100.0).unwrap();
        cmap.set_min_value(50.0).unwrap();
        assert_eq!(cmap.min_value(), Some(&50.0));
    }

    #[test]
    fn test_validate_requires_fields() {
        let cmap = ScalarColormap::new().with_name("grade");
        assert!(matches!(
            cmap.validate(),
            Err(Error::MissingField { field: "gradient", .. })
        ));

        let cmap = cmap.with_gradient(gradient(128)).unwrap();
        assert!(matches!(
            cmap.validate(),
            Err(Error::MissingField { field: "min_value", .. })
        ));

        let cmap = cmap.with_range(0.0, 1.0).unwrap();
        cmap.validate().unwrap();
    }

    #[test]
    fn test_color_for() {
        let cmap = ScalarColormap::new()
            .with_gradient(gradient(128))
            .unwrap()
            .with_range(0.0, 127.0)
            .unwrap();
        assert_eq!(cmap.color_for(&0.0), Some(Color::new(0, 0, 255)));
        assert_eq!(cmap.color_for(&64.0), Some(Color::new(64, 0, 191)));
        assert_eq!(cmap.color_for(&1000.0), Some(Color::new(127, 0, 128)));
        assert_eq!(cmap.color_for(&-5.0), Some(Color::new(0, 0, 255)));
        assert_eq!(cmap.color_for(&f64::NAN), Some(Color::new(0, 0, 255)));

        assert_eq!(ScalarColormap::new().color_for(&1.0), None);
    }

    #[test]
    fn test_datetime_colormap() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();

        let mut cmap = DateTimeColormap::new().with_range(start, end).unwrap();
        let later = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(cmap.set_min_value(later), Err(Error::RangeOrder { .. })));

        cmap.set_gradient(gradient(128)).unwrap();
        assert_eq!(cmap.color_for(&end), Some(Color::new(127, 0, 128)));
        cmap.validate().unwrap();
    }
}
