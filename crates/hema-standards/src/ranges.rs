//! Reference range table and loader.
//!
//! Ranges are read from CSV with the columns `Parameter, Sex, Min, Max, Unit`.
//! A `Sex` of `any` applies the row to both sexes. Every table is checked on
//! construction: each range must satisfy `min < max`, every panel
//! parameter must have a range for both sexes, and parameters whose range
//! does not depend on sex must have the same range for both.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::OnceLock;

use hema_model::{NormalRange, Parameter, Sex};
use serde::Deserialize;

use crate::embedded;
use crate::error::{Result, StandardsError};

/// One resolved reference range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEntry {
    pub parameter: Parameter,
    pub sex: Sex,
    pub range: NormalRange,
    pub unit: String,
}

/// Validated lookup table of reference ranges.
#[derive(Debug, Clone)]
pub struct RangeTable {
    entries: BTreeMap<(Parameter, Sex), RangeEntry>,
    source: String,
}

static DEFAULT_TABLE: OnceLock<RangeTable> = OnceLock::new();

impl RangeTable {
    /// Build the table from the embedded reference data.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(embedded::REFERENCE_RANGES, embedded::REFERENCE_RANGES_FILE)
    }

    /// Shared process-wide table built from the embedded data on first use.
    pub fn shared() -> Result<&'static Self> {
        if let Some(table) = DEFAULT_TABLE.get() {
            return Ok(table);
        }
        let table = Self::embedded()?;
        Ok(DEFAULT_TABLE.get_or_init(|| table))
    }

    /// Load a table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StandardsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_str(&content, &path.display().to_string())
    }

    /// Parse and validate a table from CSV content.
    pub fn from_csv_str(content: &str, filename: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(content.as_bytes()));

        let mut entries = BTreeMap::new();
        for result in reader.deserialize::<RangeCsvRow>() {
            let row = result.map_err(|e| StandardsError::CsvParse {
                file: filename.to_string(),
                message: e.to_string(),
            })?;

            let parameter = Parameter::parse(&row.parameter).ok_or_else(|| {
                StandardsError::InvalidValue {
                    field: "Parameter",
                    value: row.parameter.clone(),
                    file: filename.to_string(),
                }
            })?;
            let sexes: &[Sex] = if row.sex.eq_ignore_ascii_case("any") {
                Sex::all()
            } else {
                match Sex::parse(&row.sex) {
                    Some(Sex::Male) => &[Sex::Male],
                    Some(Sex::Female) => &[Sex::Female],
                    None => {
                        return Err(StandardsError::InvalidValue {
                            field: "Sex",
                            value: row.sex.clone(),
                            file: filename.to_string(),
                        });
                    }
                }
            };

            let range = NormalRange::new(row.min, row.max);
            for &sex in sexes {
                if !range.is_valid() {
                    return Err(StandardsError::InvariantViolation {
                        parameter,
                        sex,
                        min: row.min,
                        max: row.max,
                    });
                }
                let entry = RangeEntry {
                    parameter,
                    sex,
                    range,
                    unit: row.unit.clone(),
                };
                if entries.insert((parameter, sex), entry).is_some() {
                    return Err(StandardsError::DuplicateRange {
                        parameter,
                        sex,
                        file: filename.to_string(),
                    });
                }
            }
        }

        for &parameter in Parameter::all() {
            for &sex in Sex::all() {
                if !entries.contains_key(&(parameter, sex)) {
                    return Err(StandardsError::MissingRange {
                        parameter,
                        sex,
                        file: filename.to_string(),
                    });
                }
            }
        }

        for &parameter in Parameter::all() {
            if parameter.is_sex_dependent() {
                continue;
            }
            let male = entries.get(&(parameter, Sex::Male)).map(|e| e.range);
            let female = entries.get(&(parameter, Sex::Female)).map(|e| e.range);
            if male != female {
                return Err(StandardsError::SexSpecificRange {
                    parameter,
                    file: filename.to_string(),
                });
            }
        }

        tracing::debug!(file = %filename, entries = entries.len(), "loaded reference ranges");

        Ok(Self {
            entries,
            source: filename.to_string(),
        })
    }

    /// Resolve the range for a parameter name.
    ///
    /// Fails with [`StandardsError::UnknownParameter`] for names outside the panel.
    pub fn resolve(&self, name: &str, sex: Sex) -> Result<NormalRange> {
        let parameter = Parameter::parse(name).ok_or_else(|| StandardsError::UnknownParameter {
            name: name.to_string(),
        })?;
        self.range(parameter, sex)
            .ok_or_else(|| StandardsError::MissingRange {
                parameter,
                sex,
                file: self.source.clone(),
            })
    }

    /// Range for a known parameter.
    pub fn range(&self, parameter: Parameter, sex: Sex) -> Option<NormalRange> {
        self.get(parameter, sex).map(|entry| entry.range)
    }

    /// Full entry, including the unit.
    pub fn get(&self, parameter: Parameter, sex: Sex) -> Option<&RangeEntry> {
        self.entries.get(&(parameter, sex))
    }

    /// Iterate entries in panel order, male before female.
    pub fn iter(&self) -> impl Iterator<Item = &RangeEntry> {
        self.entries.values()
    }

    /// Entries for one sex, in panel order.
    pub fn for_sex(&self, sex: Sex) -> impl Iterator<Item = &RangeEntry> {
        self.entries.values().filter(move |entry| entry.sex == sex)
    }

    /// Name of the file the table was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a range from the shared embedded table.
pub fn resolve(name: &str, sex: Sex) -> Result<NormalRange> {
    RangeTable::shared()?.resolve(name, sex)
}

#[derive(Debug, Deserialize)]
struct RangeCsvRow {
    #[serde(rename = "Parameter")]
    parameter: String,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Min")]
    min: f64,
    #[serde(rename = "Max")]
    max: f64,
    #[serde(rename = "Unit", default)]
    unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_complete() {
        let table = RangeTable::embedded().expect("embedded ranges");
        assert_eq!(table.len(), Parameter::all().len() * Sex::all().len());
        assert_eq!(table.source(), "reference_ranges.csv");
    }

    #[test]
    fn test_shared_table_is_reused() {
        let first = RangeTable::shared().expect("shared");
        let second = RangeTable::shared().expect("shared");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_any_row_applies_to_both_sexes() {
        let table = RangeTable::embedded().expect("embedded ranges");
        assert_eq!(
            table.range(Parameter::Leukocytes, Sex::Male),
            table.range(Parameter::Leukocytes, Sex::Female)
        );
        assert_eq!(
            table.get(Parameter::Thrombocytes, Sex::Female).map(|e| e.unit.as_str()),
            Some("/µL")
        );
    }
}
