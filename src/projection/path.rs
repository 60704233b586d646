use std::fmt::Write;

use tracing::warn;

use crate::data::{Geometry, Position};

use super::{PathGenerator, Projection};

/// Half the side of the square drawn for point geometries.
const POINT_RADIUS: f64 = 1.5;

/// Renders geometries as SVG path data through a projection.
///
/// Positions that do not project are skipped; a ring or line left with no
/// points contributes nothing. Paths are not clipped at the antimeridian; with
/// a frame width set, segments that jump across more than half of it are
/// reported as a warning.
#[derive(Debug, Clone)]
pub struct SvgPathGenerator<P: Projection> {
    projection: P,
    frame_width: Option<f64>,
}

impl<P: Projection> SvgPathGenerator<P> {
    #[must_use]
    pub const fn new(projection: P) -> Self {
        Self {
            projection,
            frame_width: None,
        }
    }

    #[must_use]
    pub const fn with_frame_width(mut self, width: f64) -> Self {
        self.frame_width = Some(width);
        self
    }

    /// Segments of `geometry` whose projected x jumps by more than half the
    /// frame width, the mark of a ring wrapping around the antimeridian.
    #[must_use]
    pub fn seam_crossings(&self, geometry: &Geometry) -> usize {
        let Some(width) = self.frame_width else {
            return 0;
        };
        let mut crossings = 0;
        visit_lines(geometry, &mut |positions| {
            let xs: Vec<f64> = positions
                .iter()
                .filter_map(|p| self.project(p))
                .map(|(x, _)| x)
                .collect();
            crossings += xs
                .windows(2)
                .filter(|pair| (pair[1] - pair[0]).abs() > width / 2.0)
                .count();
        });
        crossings
    }

    #[must_use]
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    fn project(&self, position: &Position) -> Option<(f64, f64)> {
        match position.as_slice() {
            [lon, lat, ..] => self.projection.project(*lon, *lat),
            _ => None,
        }
    }

    fn push_line(&self, out: &mut String, positions: &[Position], closed: bool) {
        // A closed ring repeats its first position; drop it and emit Z instead.
        let positions = if closed && positions.len() > 1 && positions.first() == positions.last() {
            &positions[..positions.len() - 1]
        } else {
            positions
        };

        let mut started = false;
        for (x, y) in positions.iter().filter_map(|p| self.project(p)) {
            let command = if started { 'L' } else { 'M' };
            let _ = write!(out, "{command}{},{}", coord(x), coord(y));
            started = true;
        }
        if started && closed {
            out.push('Z');
        }
    }

    fn push_point(&self, out: &mut String, position: &Position) {
        if let Some((x, y)) = self.project(position) {
            let side = coord(2.0 * POINT_RADIUS);
            let _ = write!(
                out,
                "M{},{}h{side}v{side}h-{side}Z",
                coord(x - POINT_RADIUS),
                coord(y - POINT_RADIUS)
            );
        }
    }

    fn push_geometry(&self, out: &mut String, geometry: &Geometry) {
        match geometry {
            Geometry::Point { coordinates } => self.push_point(out, coordinates),
            Geometry::MultiPoint { coordinates } => {
                for point in coordinates {
                    self.push_point(out, point);
                }
            }
            Geometry::LineString { coordinates } => self.push_line(out, coordinates, false),
            Geometry::MultiLineString { coordinates } => {
                for line in coordinates {
                    self.push_line(out, line, false);
                }
            }
            Geometry::Polygon { coordinates } => {
                for ring in coordinates {
                    self.push_line(out, ring, true);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for ring in coordinates.iter().flatten() {
                    self.push_line(out, ring, true);
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for geometry in geometries {
                    self.push_geometry(out, geometry);
                }
            }
        }
    }
}

impl<P: Projection> PathGenerator for SvgPathGenerator<P> {
    fn path(&self, geometry: &Geometry) -> Option<String> {
        let mut out = String::new();
        self.push_geometry(&mut out, geometry);
        let crossings = self.seam_crossings(geometry);
        if crossings > 0 {
            warn!(crossings, "Path wraps across the antimeridian and may draw streaks");
        }
        (!out.is_empty()).then_some(out)
    }
}

/// Call `f` with every line and ring of `geometry`.
fn visit_lines(geometry: &Geometry, f: &mut impl FnMut(&[Position])) {
    match geometry {
        Geometry::Point { .. } | Geometry::MultiPoint { .. } => {}
        Geometry::LineString { coordinates } => f(coordinates),
        Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
            for line in coordinates {
                f(line);
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for ring in coordinates.iter().flatten() {
                f(ring);
            }
        }
        Geometry::GeometryCollection { geometries } => {
            for geometry in geometries {
                visit_lines(geometry, f);
            }
        }
    }
}

/// Two decimals, trailing zeros removed.
fn coord(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
