//! TopoJSON topology to GeoJSON feature conversion.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::data::{GeoFeature, Geometry, Position};
use crate::error::{ChoroplethError, Result};

#[derive(Debug, Deserialize)]
pub struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    #[serde(default)]
    objects: IndexMap<String, TopoGeometry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl Transform {
    fn apply(&self, x: f64, y: f64) -> Position {
        vec![
            x.mul_add(self.scale[0], self.translate[0]),
            y.mul_add(self.scale[1], self.translate[1]),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct TopoGeometry {
    #[serde(flatten)]
    shape: TopoShape,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TopoShape {
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
    GeometryCollection { geometries: Vec<TopoGeometry> },
}

impl Topology {
    /// Names of the objects in document order.
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Convert one object (the first when `name` is `None`) to features.
    ///
    /// A `GeometryCollection` object yields one feature per member; any other
    /// object yields a single feature.
    ///
    /// # Errors
    /// Returns an error if the object does not exist or references a missing arc.
    pub fn features(&self, name: Option<&str>) -> Result<Vec<GeoFeature>> {
        let object = match name {
            Some(name) => self.objects.get(name).ok_or_else(|| {
                ChoroplethError::Boundary(format!(
                    "Topology has no object '{name}' (available: {})",
                    self.object_names().collect::<Vec<_>>().join(", ")
                ))
            })?,
            None => self
                .objects
                .values()
                .next()
                .ok_or_else(|| ChoroplethError::Boundary("Topology has no objects".to_string()))?,
        };

        let arcs = self.decode_arcs();
        match &object.shape {
            TopoShape::GeometryCollection { geometries } => geometries
                .iter()
                .map(|g| to_feature(g, &arcs, self.transform.as_ref()))
                .collect(),
            _ => Ok(vec![to_feature(object, &arcs, self.transform.as_ref())?]),
        }
    }

    /// Absolute arc coordinates; quantized arcs are delta-decoded.
    fn decode_arcs(&self) -> Vec<Vec<Position>> {
        self.arcs
            .iter()
            .map(|arc| match &self.transform {
                Some(transform) => {
                    let (mut x, mut y) = (0.0, 0.0);
                    arc.iter()
                        .filter(|p| p.len() >= 2)
                        .map(|p| {
                            x += p[0];
                            y += p[1];
                            transform.apply(x, y)
                        })
                        .collect()
                }
                None => arc.clone(),
            })
            .collect()
    }
}

fn to_feature(
    geometry: &TopoGeometry,
    arcs: &[Vec<Position>],
    transform: Option<&Transform>,
) -> Result<GeoFeature> {
    Ok(GeoFeature {
        id: geometry.id.clone(),
        properties: geometry.properties.clone().unwrap_or_default(),
        geometry: Some(to_geometry(&geometry.shape, arcs, transform)?),
    })
}

fn to_geometry(
    shape: &TopoShape,
    arcs: &[Vec<Position>],
    transform: Option<&Transform>,
) -> Result<Geometry> {
    let point = |p: &Vec<f64>| match (transform, p.as_slice()) {
        (Some(t), [x, y, ..]) => t.apply(*x, *y),
        _ => p.clone(),
    };

    Ok(match shape {
        TopoShape::Point { coordinates } => Geometry::Point {
            coordinates: point(coordinates),
        },
        TopoShape::MultiPoint { coordinates } => Geometry::MultiPoint {
            coordinates: coordinates.iter().map(point).collect(),
        },
        TopoShape::LineString { arcs: refs } => Geometry::LineString {
            coordinates: line(refs, arcs)?,
        },
        TopoShape::MultiLineString { arcs: lines } => Geometry::MultiLineString {
            coordinates: lines
                .iter()
                .map(|refs| line(refs, arcs))
                .collect::<Result<_>>()?,
        },
        TopoShape::Polygon { arcs: rings } => Geometry::Polygon {
            coordinates: polygon(rings, arcs)?,
        },
        TopoShape::MultiPolygon { arcs: polygons } => Geometry::MultiPolygon {
            coordinates: polygons
                .iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<Result<_>>()?,
        },
        TopoShape::GeometryCollection { geometries } => Geometry::GeometryCollection {
            geometries: geometries
                .iter()
                .map(|g| to_geometry(&g.shape, arcs, transform))
                .collect::<Result<_>>()?,
        },
    })
}

/// Stitch arcs into one line. Negative references (`!i`) walk arc `i` backwards.
fn line(refs: &[i64], arcs: &[Vec<Position>]) -> Result<Vec<Position>> {
    let mut points: Vec<Position> = Vec::new();
    for &reference in refs {
        let (index, reversed) = if reference < 0 {
            (!reference, true)
        } else {
            (reference, false)
        };
        let arc = usize::try_from(index)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or_else(|| {
                ChoroplethError::Boundary(format!("Arc reference {reference} is out of range"))
            })?;

        // Consecutive arcs share their joining point.
        points.pop();
        if reversed {
            points.extend(arc.iter().rev().cloned());
        } else {
            points.extend(arc.iter().cloned());
        }
    }
    Ok(points)
}

fn ring(refs: &[i64], arcs: &[Vec<Position>]) -> Result<Vec<Position>> {
    let mut points = line(refs, arcs)?;
    if let Some(first) = points.first().cloned() {
        while points.len() < 4 {
            points.push(first.clone());
        }
    }
    Ok(points)
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Position>]) -> Result<Vec<Vec<Position>>> {
    rings.iter().map(|refs| ring(refs, arcs)).collect()
}
