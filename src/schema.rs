//! Field-type registry.
//!
//! Ordering comparisons (`greaterThan`, `lessThan`) need to know whether a
//! field holds numbers, ISO dates or free text. [`FieldTypes`] records that
//! per field; fields it does not mention compare as text.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::dataset::Record;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "number", alias = "integer")]
    Numeric,
    #[serde(alias = "string")]
    Text,
    Date,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldTypes(BTreeMap<String, FieldType>);

impl FieldTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, ty: FieldType) -> Self {
        self.insert(field, ty);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, ty: FieldType) {
        self.0.insert(field.into(), ty);
    }

    pub fn get(&self, field: &str) -> Option<FieldType> {
        self.0.get(field).copied()
    }

    /// Comparison type for `field`, falling back to text for unregistered fields.
    pub fn type_of(&self, field: &str) -> FieldType {
        self.get(field).unwrap_or(FieldType::Text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.0.iter().map(|(field, ty)| (field.as_str(), *ty))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads a YAML mapping of field name to `numeric`, `text` or `date`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Guesses a type for every field that has at least one non-null value.
    ///
    /// A field is numeric when every value is a YAML number, a date when every
    /// value is a `YYYY-MM-DD` string, and text otherwise.
    pub fn infer(records: &[Record]) -> Self {
        let mut seen: BTreeMap<String, (bool, bool)> = BTreeMap::new();

        for record in records {
            for (field, value) in record.iter() {
                if value.is_null() {
                    continue;
                }
                let entry = seen.entry(field.to_string()).or_insert((true, true));
                entry.0 &= value.is_number();
                entry.1 &= value.as_str().and_then(parse_date).is_some();
            }
        }

        let types = seen
            .into_iter()
            .map(|(field, (all_numbers, all_dates))| {
                let ty = if all_numbers {
                    FieldType::Numeric
                } else if all_dates {
                    FieldType::Date
                } else {
                    FieldType::Text
                };
                (field, ty)
            })
            .collect();

        FieldTypes(types)
    }

    /// Overlays `explicit` on top of `self`; explicit entries win.
    pub fn merge(mut self, explicit: FieldTypes) -> Self {
        self.0.extend(explicit.0);
        self
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date; surrounding whitespace is ignored.
///
/// Dates that do not exist (`2023-02-31`) are rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
