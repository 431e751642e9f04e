//! Date-time attribute data.

use tracing::trace;

use super::{require, Attribute};
use crate::array::{DateTimeArray, SharedArray};
use crate::colormap::DateTimeColormap;
use crate::core::{DataHeader, DataLocation};
use crate::util::Result;

/// Timestamps at mesh locations, optionally with a colormap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateTimeData {
    pub header: DataHeader,
    array: Option<DateTimeArray>,
    colormap: Option<DateTimeColormap>,
}

impl DateTimeData {
    /// Create with no values.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            ..Self::default()
        }
    }

    /// Set the values.
    pub fn with_array(mut self, array: DateTimeArray) -> Self {
        self.set_array(array);
        self
    }

    /// Set the colormap.
    pub fn with_colormap(mut self, colormap: DateTimeColormap) -> Self {
        self.set_colormap(Some(colormap));
        self
    }

    /// Values, if set.
    pub fn values(&self) -> Option<&DateTimeArray> {
        self.array.as_ref()
    }

    /// Colormap, if set.
    pub fn colormap(&self) -> Option<&DateTimeColormap> {
        self.colormap.as_ref()
    }

    /// Assign the values.
    pub fn set_array(&mut self, array: DateTimeArray) {
        self.array = Some(array);
    }

    /// Assign or remove the colormap.
    pub fn set_colormap(&mut self, colormap: Option<DateTimeColormap>) {
        self.colormap = colormap;
    }
}

impl Attribute for DateTimeData {
    fn kind(&self) -> &'static str {
        "DateTimeData"
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
        trace!("validating DateTimeData '{}'", self.header.name);
        require(&self.array, self.kind(), &self.header, "array")?;
        if let Some(colormap) = &self.colormap {
            colormap.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Error;

    #[test]
    fn test_datetime_data() {
        let dates = DateTimeArray::parse(&["2001-01-01T00:00:00Z", "2002-06-15T12:00:00Z"]).unwrap();
        let (first, last) = (dates[0], dates[1]);
        let data = DateTimeData::new("sampled", DataLocation::Vertices)
            .with_array(dates)
            .with_colormap(DateTimeColormap::new().with_range(first, last).unwrap());

        assert!(matches!(
            data.validate(),
            Err(Error::MissingField { field: "gradient", .. })
        ));
        assert_eq!(data.colormap().and_then(|c| c.min_value()), Some(&first));
        assert_eq!(data.num_values(), 2);
    }
}
