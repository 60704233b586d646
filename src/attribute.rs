//! Candidate attributes and the active-attribute selection.
//!
//! An [`ActiveAttribute`] can only be obtained from an [`AttributeSet`], so it is
//! always one of the candidates.

use std::fmt;

use indexmap::IndexSet;

use crate::error::{ChoroplethError, Result};

/// The ordered, non-empty set of attributes that may drive the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    names: IndexSet<String>,
}

impl AttributeSet {
    /// Create a set from names in display order.
    ///
    /// # Errors
    /// Returns an error if `names` is empty or contains a duplicate or blank name.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ChoroplethError::Config(
                    "Attribute names must not be blank".to_string(),
                ));
            }
            if !set.insert(name.clone()) {
                return Err(ChoroplethError::Config(format!(
                    "Duplicate candidate attribute: '{name}'"
                )));
            }
        }
        if set.is_empty() {
            return Err(ChoroplethError::Config(
                "At least one candidate attribute is required".to_string(),
            ));
        }
        Ok(Self { names: set })
    }

    /// Derive candidates from tabular headers, skipping the key and name columns.
    ///
    /// # Errors
    /// Returns an error if no column remains.
    pub fn from_headers<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        excluded: &[&str],
    ) -> Result<Self> {
        let names: Vec<&str> = headers
            .into_iter()
            .filter(|h| !excluded.contains(h) && !h.trim().is_empty())
            .collect();
        if names.is_empty() {
            return Err(ChoroplethError::Config(
                "Tabular data has no attribute columns besides the key and name fields"
                    .to_string(),
            ));
        }
        Self::new(names)
    }

    /// The default selection: the first candidate.
    #[must_use]
    pub fn first(&self) -> ActiveAttribute {
        // Non-empty by construction.
        ActiveAttribute(self.names[0].clone())
    }

    /// Select a candidate by name.
    ///
    /// # Errors
    /// Returns [`ChoroplethError::UnknownAttribute`] if `name` is not a candidate.
    pub fn select(&self, name: &str) -> Result<ActiveAttribute> {
        if self.names.contains(name) {
            Ok(ActiveAttribute(name.to_string()))
        } else {
            Err(ChoroplethError::UnknownAttribute {
                name: name.to_string(),
                available: self.names.iter().cloned().collect(),
            })
        }
    }

    /// Select `name` when given, otherwise the first candidate.
    ///
    /// # Errors
    /// Returns an error if `name` is given but is not a candidate.
    pub fn select_or_first(&self, name: Option<&str>) -> Result<ActiveAttribute> {
        name.map_or_else(|| Ok(self.first()), |n| self.select(n))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The attribute currently driving colors, bar heights and the chart title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveAttribute(String);

impl ActiveAttribute {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActiveAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ActiveAttribute {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "attribute_tests.rs"]
mod tests;
