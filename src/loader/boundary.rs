use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::{GeoFeature, Geometry};
use crate::error::{ChoroplethError, Result};

use super::topojson::Topology;

#[derive(Deserialize)]
struct Probe {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<GeoFeature>,
}

/// Parse a boundary document into features.
///
/// Accepts a GeoJSON `FeatureCollection`, a single `Feature` or bare geometry,
/// or a TopoJSON `Topology`. For topologies `object` picks the object to
/// convert; the first object is used when it is `None`.
///
/// # Errors
/// Returns [`ChoroplethError::BoundaryParse`] for malformed JSON and
/// [`ChoroplethError::Boundary`] for documents of an unsupported shape.
pub fn parse_boundaries(text: &str, object: Option<&str>, origin: &Path) -> Result<Vec<GeoFeature>> {
    let json_error = |source: serde_json::Error| ChoroplethError::BoundaryParse {
        path: origin.to_path_buf(),
        source,
    };

    let probe: Probe = serde_json::from_str(text).map_err(json_error)?;
    let features = match probe.kind.as_deref() {
        Some("FeatureCollection") => {
            serde_json::from_str::<FeatureCollection>(text)
                .map_err(json_error)?
                .features
        }
        Some("Feature") => vec![serde_json::from_str::<GeoFeature>(text).map_err(json_error)?],
        Some("Topology") => {
            let topology: Topology = serde_json::from_str(text).map_err(json_error)?;
            topology.features(object)?
        }
        Some(
            "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "Polygon"
            | "MultiPolygon" | "GeometryCollection",
        ) => {
            let geometry: Geometry = serde_json::from_str(text).map_err(json_error)?;
            vec![GeoFeature::new(indexmap::IndexMap::new(), Some(geometry))]
        }
        Some(other) => {
            return Err(ChoroplethError::Boundary(format!(
                "{}: unsupported document type '{other}'",
                origin.display()
            )));
        }
        None => {
            return Err(ChoroplethError::Boundary(format!(
                "{}: document has no 'type' member",
                origin.display()
            )));
        }
    };

    debug!(
        path = %origin.display(),
        features = features.len(),
        positions = features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .map(Geometry::position_count)
            .sum::<usize>(),
        "Parsed boundary document"
    );
    Ok(features)
}

/// Read and parse a boundary file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_boundaries(path: &Path, object: Option<&str>) -> Result<Vec<GeoFeature>> {
    let text = std::fs::read_to_string(path).map_err(|source| ChoroplethError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_boundaries(&text, object, path)
}
