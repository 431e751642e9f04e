//! Categorical (mapped) attribute data.
//!
//! A [`MappedData`] holds one integer index per mesh location. Each index
//! selects an entry in every attached legend, or is `-1` for "no data".
//! All legends share the same index array, so every legend must be long
//! enough for the largest index present.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{describe, require, Attribute};
use crate::array::{ScalarArray, SharedArray};
use crate::core::{DataHeader, DataLocation};
use crate::legend::{Legend, LegendValue};
use crate::util::{DataType, Error, Index, Result, NO_DATA};

/// Legend name to value at one location; `None` where the index is `-1`.
pub type ValueDict = HashMap<String, Option<LegendValue>>;

/// Indices into one or more legends at mesh locations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MappedData {
    pub header: DataHeader,
    array: Option<ScalarArray>,
    legends: Vec<Legend>,
}

impl MappedData {
    /// Create with no indices and no legends.
    pub fn new(name: impl Into<String>, location: DataLocation) -> Self {
        Self {
            header: DataHeader::new(name, location),
            ..Self::default()
        }
    }

    /// Set the indices, validating them.
    pub fn with_indices(mut self, indices: ScalarArray) -> Result<Self> {
        self.set_indices(indices)?;
        Ok(self)
    }

    /// Append a legend.
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legends.push(legend);
        self
    }

    /// Replace the legend list.
    pub fn with_legends(mut self, legends: Vec<Legend>) -> Self {
        self.legends = legends;
        self
    }

    /// Index array, if set.
    pub fn indices(&self) -> Option<&ScalarArray> {
        self.array.as_ref()
    }

    /// Assign the index array; same as [`MappedData::set_array`].
    pub fn set_indices(&mut self, indices: ScalarArray) -> Result<()> {
        self.set_array(indices)
    }

    /// Assign the index array. Fails with a type error unless the values
    /// are integers, and with a range error if any index is below `-1`.
    /// Legends are not consulted here; see [`MappedData::validate`].
    pub fn set_array(&mut self, array: ScalarArray) -> Result<()> {
        let ints = self.integer_indices(&array)?;
        self.check_floor(ints)?;
        self.array = Some(array);
        Ok(())
    }

    /// Attached legends, in order.
    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    /// Mutable legend list; changes are checked by [`MappedData::validate`].
    pub fn legends_mut(&mut self) -> &mut Vec<Legend> {
        &mut self.legends
    }

    /// Legend by name.
    pub fn legend(&self, name: &str) -> Option<&Legend> {
        self.legends.iter().find(|l| l.name == name)
    }

    /// Legend entries for the location at position `i`.
    ///
    /// Every legend contributes its value at `indices[i]`; a `-1` index
    /// maps every legend name to `None`.
    pub fn value_dict(&self, i: usize) -> Result<ValueDict> {
        let array = require(&self.array, self.kind(), &self.header, "array")?;
        let ints = self.integer_indices(array)?;
        let index = *ints.get(i).ok_or(Error::PositionOutOfBounds {
            index: i,
            count: ints.len(),
        })?;

        let mut entry = ValueDict::with_capacity(self.legends.len());
        for legend in &self.legends {
            let value = if index == NO_DATA {
                None
            } else {
                let position = usize::try_from(index).map_err(|_| Error::Range {
                    data: self.header.name.clone(),
                    value: index,
                })?;
                let value = legend
                    .value(position)
                    .ok_or_else(|| self.out_of_range(legend, index))?;
                Some(value)
            };
            entry.insert(legend.name.clone(), value);
        }
        Ok(entry)
    }

    fn integer_indices<'a>(&self, array: &'a ScalarArray) -> Result<&'a [Index]> {
        array.as_ints().ok_or_else(|| {
            debug!("MappedData '{}': rejected non-integer indices", self.header.name);
            Error::type_mismatch(DataType::INT64, array.data_type())
        })
    }

    fn check_floor(&self, ints: &[Index]) -> Result<()> {
        match ints.iter().min() {
            Some(&min) if min < NO_DATA => {
                debug!("MappedData '{}': rejected index {}", self.header.name, min);
                Err(Error::Range {
                    data: self.header.name.clone(),
                    value: min,
                })
            }
            _ => Ok(()),
        }
    }

    fn out_of_range(&self, legend: &Legend, index: Index) -> Error {
        Error::IndexOutOfRange {
            data: self.header.name.clone(),
            legend: legend.name.clone(),
            index,
            count: legend.len(),
        }
    }
}

impl Attribute for MappedData {
    fn kind(&self) -> &'static str {
        "MappedData"
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

    /// Re-checks the `-1` floor, validates each legend, then checks that
    /// the largest index fits inside every legend. Reports the first
    /// failure.
    fn validate(&self) -> Result<()> {
        trace!(
            "validating {} with {} legends",
            describe(self.kind(), &self.header),
            self.legends.len()
        );
        let array = require(&self.array, self.kind(), &self.header, "array")?;
        let ints = self.integer_indices(array)?;
        self.check_floor(ints)?;

        let max = ints.iter().max().copied();
        for legend in &self.legends {
            legend.validate()?;
            if let Some(max) = max {
                if max >= legend.len() as Index {
                    return Err(self.out_of_range(legend, max));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{ColorArray, StringArray};
    use crate::legend::LegendValue;
    use crate::util::Color;

    fn names() -> Legend {
        Legend::new("names").with_values(StringArray::from_strs(&["x", "y", "z"]))
    }

    #[test]
    fn test_indices_must_be_integers() {
        let mut data = MappedData::new("rock", DataLocation::Cells);
        let err = data.set_indices(ScalarArray::from_floats(vec![0.0, 1.0])).unwrap_err();
        assert!(matches!(err, Error::Type { .. }));
        assert!(data.indices().is_none());
    }

    #[test]
    fn test_indices_floor() {
        let mut data = MappedData::new("rock", DataLocation::Cells);
        let err = data.set_indices(ScalarArray::from_ints(vec![0, -2, 1])).unwrap_err();
        assert!(matches!(err, Error::Range { value: -2, .. }));
        assert!(data.indices().is_none());

        data.set_indices(ScalarArray::from_ints(vec![0, -1, 1])).unwrap();
        let err = data.set_array(ScalarArray::from_ints(vec![-5])).unwrap_err();
        assert!(matches!(err, Error::Range { .. }));
        assert_eq!(data.indices().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_validate_against_legends() {
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![0, 1, -1, 2]))
            .unwrap()
            .with_legend(names());
        data.validate().unwrap();

        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![0, 1, -1, 3]))
            .unwrap()
            .with_legend(names());
        match data.validate() {
            Err(Error::IndexOutOfRange { data, legend, index, count }) => {
                assert_eq!(data, "rock");
                assert_eq!(legend, "names");
                assert_eq!(index, 3);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_every_legend_checked() {
        let short = Legend::new("short").with_values(StringArray::from_strs(&["only"]));
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![0, 2]))
            .unwrap()
            .with_legends(vec![names(), short]);
        assert!(matches!(
            data.validate(),
            Err(Error::IndexOutOfRange { ref legend, .. }) if legend == "short"
        ));
    }

    #[test]
    fn test_legend_problems_surface() {
        let bad_colors = names().with_colors(ColorArray::parse(&["red"]).unwrap());
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![0]))
            .unwrap()
            .with_legend(bad_colors);
        assert!(matches!(data.validate(), Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_all_no_data_and_empty() {
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![-1, -1]))
            .unwrap()
            .with_legend(Legend::new("none").with_values(StringArray::new()));
        data.validate().unwrap();

        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![]))
            .unwrap()
            .with_legend(names());
        data.validate().unwrap();

        let data = MappedData::new("rock", DataLocation::Cells);
        assert!(matches!(data.validate(), Err(Error::MissingField { .. })));
    }

    #[test]
    fn test_in_place_legend_edit_caught_by_validate() {
        let mut data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![2]))
            .unwrap()
            .with_legend(names());
        data.validate().unwrap();

        data.legends_mut()[0].set_values(StringArray::from_strs(&["x"]));
        assert!(matches!(data.validate(), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_value_dict() {
        let colors = Legend::new("colors")
            .with_values(ColorArray::parse(&["red", "green", "blue"]).unwrap());
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![2, -1, 0]))
            .unwrap()
            .with_legends(vec![names(), colors]);

        let entry = data.value_dict(0).unwrap();
        assert_eq!(entry.len(), 2);
        assert_eq!(entry["names"], Some(LegendValue::String("z".into())));
        assert_eq!(entry["colors"], Some(LegendValue::Color(Color::new(0, 0, 255))));

        let entry = data.value_dict(1).unwrap();
        assert_eq!(entry["names"], None);
        assert_eq!(entry["colors"], None);

        assert!(matches!(
            data.value_dict(3),
            Err(Error::PositionOutOfBounds { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_value_dict_index_past_legend() {
        let data = MappedData::new("rock", DataLocation::Cells)
            .with_indices(ScalarArray::from_ints(vec![5]))
            .unwrap()
            .with_legend(names());
        assert!(matches!(
            data.value_dict(0),
            Err(Error::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_legend_lookup() {
        let data = MappedData::new("rock", DataLocation::Cells).with_legend(names());
        assert!(data.legend("names").is_some());
        assert!(data.legend("missing").is_none());
    }
}
