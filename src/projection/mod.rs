//! Map projection and SVG path generation.
//!
//! The core never looks inside geometries; views hand them to a
//! [`PathGenerator`] and treat the result as an opaque path descriptor.

mod conic;
mod path;

use crate::data::Geometry;

pub use conic::ConicEqualArea;
pub use path::SvgPathGenerator;

/// Maps a longitude/latitude pair in degrees to screen coordinates.
pub trait Projection {
    /// `None` when the position cannot be projected.
    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)>;
}

/// Turns a geometry into a renderable path descriptor.
pub trait PathGenerator {
    /// `None` when nothing of the geometry is drawable.
    fn path(&self, geometry: &Geometry) -> Option<String>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
