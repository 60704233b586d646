use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::geometry::Geometry;

/// A boundary feature: opaque geometry plus a property map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "nullable_properties")]
    pub properties: IndexMap<String, Value>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

// GeoJSON allows `"properties": null`.
fn nullable_properties<'de, D>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeoFeature {
    #[must_use]
    pub fn new(properties: IndexMap<String, Value>, geometry: Option<Geometry>) -> Self {
        Self {
            id: None,
            properties,
            geometry,
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Join key under `field`.
    ///
    /// Strings are used verbatim and numbers through their JSON text; any other
    /// property type (or an empty string) means the feature has no key.
    #[must_use]
    pub fn key(&self, field: &str) -> Option<String> {
        property_text(self.properties.get(field)?)
    }

    /// Display name under `field`, read the same way as the key.
    #[must_use]
    pub fn display_name(&self, field: &str) -> Option<String> {
        property_text(self.properties.get(field)?)
    }
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
