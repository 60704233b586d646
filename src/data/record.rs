use indexmap::IndexMap;
use serde::Serialize;

use super::value::parse_value;

/// One row of the tabular dataset: attribute name to raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabularRecord {
    /// 1-based data row number (header excluded), used in diagnostics.
    pub row: usize,
    pub fields: IndexMap<String, String>,
}

impl TabularRecord {
    #[must_use]
    pub const fn new(row: usize, fields: IndexMap<String, String>) -> Self {
        Self { row, fields }
    }

    /// Build a record from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs<K, V>(row: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            row,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw cell text for `name`, if the column exists in this row.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Parsed numeric value for `name`; absent when missing or non-numeric.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.raw(name).and_then(parse_value)
    }

    /// Join key under `key_field`, compared verbatim. Empty keys count as missing.
    #[must_use]
    pub fn key(&self, key_field: &str) -> Option<&str> {
        self.raw(key_field).filter(|key| !key.is_empty())
    }
}
