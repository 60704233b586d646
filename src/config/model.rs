use serde::{Deserialize, Serialize};

use crate::classify::{DEFAULT_FALLBACK, DEFAULT_PALETTE, Palette};
use crate::data::DataFields;
use crate::error::Result;
use crate::join::DuplicateKeyPolicy;

/// Placeholder substituted with the active attribute in the chart title.
pub const TITLE_PLACEHOLDER: &str = "{attribute}";

/// Candidate attributes of the bundled migrant dataset.
pub const DEFAULT_CANDIDATES: [&str; 5] =
    ["Russian Federation", "Ukraine", "Kazakhstan", "Poland", "Romania"];

/// Top-level configuration (`.choropleth.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub attributes: AttributesConfig,
    pub classification: ClassificationConfig,
    pub join: JoinConfig,
    pub map: MapConfig,
    pub chart: ChartConfig,
}

/// Field names linking the tabular and boundary datasets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Join key column in the tabular file.
    pub key_field: String,
    /// Display name column in the tabular file.
    pub name_field: String,
    /// Join key property on boundary features.
    pub feature_key: String,
    /// Display name property on boundary features.
    pub feature_name: String,
    /// TopoJSON object to read; the first object when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_object: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        let fields = DataFields::default();
        Self {
            key_field: fields.key_field,
            name_field: fields.name_field,
            feature_key: fields.feature_key,
            feature_name: fields.feature_name,
            topology_object: None,
        }
    }
}

impl DataConfig {
    #[must_use]
    pub fn fields(&self) -> DataFields {
        DataFields {
            key_field: self.key_field.clone(),
            name_field: self.name_field.clone(),
            feature_key: self.feature_key.clone(),
            feature_name: self.feature_name.clone(),
        }
    }
}

/// Which attributes may be displayed, and which one is shown first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AttributesConfig {
    /// Ordered candidates. Empty means every tabular column except key and name.
    pub candidates: Vec<String>,
    /// Initial active attribute; the first candidate when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

impl Default for AttributesConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(ToString::to_string).collect(),
            active: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Five colors, lightest to darkest.
    pub palette: Vec<String>,
    /// Color for absent or non-numeric values.
    pub fallback: String,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ClassificationConfig {
    /// # Errors
    /// Returns an error if the palette does not have exactly five colors.
    pub fn palette(&self) -> Result<Palette> {
        Palette::new(&self.palette, self.fallback.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JoinConfig {
    pub duplicate_keys: DuplicateKeyPolicy,
}

/// Map frame and conic equal-area projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
    /// `[longitude, latitude]` placed at the frame center.
    pub center: [f64; 2],
    /// `[lambda, phi, gamma]` rotation in degrees.
    pub rotate: [f64; 3],
    /// Standard parallels in degrees.
    pub parallels: [f64; 2],
    pub scale: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 460.0,
            center: [15.57, 49.91],
            rotate: [-20.48, 0.0, 0.0],
            parallels: [43.09, 25.0],
            scale: 650.0,
        }
    }
}

/// Coordinated bar chart frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Value mapped to the full chart height.
    pub domain_max: f64,
    /// Title text; `{attribute}` is replaced with the active attribute.
    pub title_template: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 610.0,
            height: 460.0,
            domain_max: 100_000.0,
            title_template: format!("Number of People from {TITLE_PLACEHOLDER} in each country"),
        }
    }
}
