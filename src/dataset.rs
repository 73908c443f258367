use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value as YamlValue};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::{FieldType, FieldTypes};
use crate::source;

/// One table row: field names mapped to YAML scalars, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Mapping);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<YamlValue>) -> Self {
        self.0.insert(YamlValue::from(field), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&YamlValue> {
        self.0.get(field)
    }

    /// The field rendered as text, if it is a scalar.
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(scalar_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &YamlValue)> {
        self.0
            .iter()
            .filter_map(|(key, value)| Some((key.as_str()?, value)))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(field, _)| field)
    }
}

pub(crate) fn scalar_text(v: &YamlValue) -> Option<String> {
    match v {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Loads records from a YAML file, or from every YAML file under a directory.
///
/// Inside a directory, unreadable or malformed files are skipped with a warning.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    if !path.is_dir() {
        return load_file(path);
    }

    let mut records = Vec::new();
    for file in source::collect_data_files(path) {
        match load_file(&file) {
            Ok(mut batch) => {
                tracing::debug!(path = %file.display(), count = batch.len(), "loaded records");
                records.append(&mut batch);
            }
            Err(e) => tracing::warn!("skipping data file: {}", e),
        }
    }
    Ok(records)
}

pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_records(content: &str) -> std::result::Result<Vec<Record>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content)
}

pub fn sample_records() -> Vec<Record> {
    [
        ("Grace Harris", 29, "2023-09-01", "Active"),
        ("Henry Irving", 31, "2023-10-01", "Inactive"),
        ("Emma Thompson", 35, "2023-08-15", "Active"),
        ("Michael Chen", 27, "2023-11-05", "Active"),
        ("Sophia Rodriguez", 33, "2023-07-20", "Inactive"),
        ("Liam OConnor", 30, "2023-12-10", "Active"),
        ("Olivia Kim", 28, "2023-06-30", "Active"),
        ("Noah Patel", 32, "2023-09-25", "Inactive"),
    ]
    .into_iter()
    .map(|(name, age, date, status)| {
        Record::new()
            .with("name", name)
            .with("age", age)
            .with("date", date)
            .with("status", status)
    })
    .collect()
}

pub fn sample_types() -> FieldTypes {
    FieldTypes::new()
        .with("name", FieldType::Text)
        .with("age", FieldType::Numeric)
        .with("date", FieldType::Date)
        .with("status", FieldType::Text)
}
