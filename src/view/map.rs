use serde::Serialize;

use crate::classify::ColorClass;
use crate::projection::PathGenerator;
use crate::session::Session;

use super::css::css_class;

/// One enumeration unit of the choropleth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapUnit {
    /// `"regions <name>"`.
    pub class_name: String,
    pub key: Option<String>,
    pub name: Option<String>,
    /// Active attribute value; `None` when unmatched or non-numeric.
    pub value: Option<f64>,
    pub color_class: ColorClass,
    pub fill: String,
    /// Rendered path descriptor; `None` when the feature has nothing to draw.
    pub path: Option<String>,
}

/// Compose one map unit per enriched feature, in feature order.
#[must_use]
pub fn compose_map(session: &Session, paths: &dyn PathGenerator) -> Vec<MapUnit> {
    let fields = &session.settings().fields;
    let attribute = session.active().name();
    let classifier = session.classifier();

    session
        .features()
        .iter()
        .map(|enriched| {
            let feature = &enriched.feature;
            let key = feature.key(&fields.feature_key);
            let name = feature.display_name(&fields.feature_name);
            let value = enriched.value(attribute);
            MapUnit {
                class_name: format!(
                    "regions {}",
                    css_class(name.as_deref().or(key.as_deref()).unwrap_or_default())
                ),
                key,
                name,
                value,
                color_class: classifier.class_of(value),
                fill: classifier.color_of(value).to_string(),
                path: feature.geometry.as_ref().and_then(|g| paths.path(g)),
            }
        })
        .collect()
}

/// Path descriptors of the context layer drawn beneath the units.
#[must_use]
pub fn compose_background(session: &Session, paths: &dyn PathGenerator) -> Vec<String> {
    session
        .background()
        .iter()
        .filter_map(|f| f.geometry.as_ref())
        .filter_map(|g| paths.path(g))
        .collect()
}
