//! Input data model: tabular records, boundary features and their geometry.
//!
//! Both datasets are immutable snapshots once loaded. The join engine derives
//! [`crate::join::EnrichedFeature`] values from them without mutating either side.

mod feature;
mod geometry;
mod record;
mod value;

pub use feature::GeoFeature;
pub use geometry::{Geometry, Position};
pub use record::TabularRecord;
pub use value::parse_value;

/// Field names that tie the two datasets together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFields {
    /// Join key column in the tabular dataset.
    pub key_field: String,
    /// Display name column in the tabular dataset.
    pub name_field: String,
    /// Join key property on boundary features.
    pub feature_key: String,
    /// Display name property on boundary features.
    pub feature_name: String,
}

impl Default for DataFields {
    fn default() -> Self {
        Self {
            key_field: "CountryCode".to_string(),
            name_field: "country".to_string(),
            feature_key: "CC".to_string(),
            feature_name: "sovereignt".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
