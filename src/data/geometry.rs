use serde::{Deserialize, Serialize};

/// A GeoJSON position: `[longitude, latitude, ...]`.
pub type Position = Vec<f64>;

/// GeoJSON geometry. Only the path generator looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Self> },
}

impl Geometry {
    /// Number of positions across all parts.
    #[must_use]
    pub fn position_count(&self) -> usize {
        match self {
            Self::Point { .. } => 1,
            Self::MultiPoint { coordinates } | Self::LineString { coordinates } => {
                coordinates.len()
            }
            Self::MultiLineString { coordinates } | Self::Polygon { coordinates } => {
                coordinates.iter().map(Vec::len).sum()
            }
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(Vec::len))
                .sum(),
            Self::GeometryCollection { geometries } => {
                geometries.iter().map(Self::position_count).sum()
            }
        }
    }
}
