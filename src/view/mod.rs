//! View composers for the two coordinated views.
//!
//! Both composers take the same [`crate::session::Session`], so the map and the
//! chart always encode one active attribute with one classification.

mod chart;
mod css;
mod map;

pub use chart::{BarSpec, ChartModel, chart_title, compose_chart};
pub use css::css_class;
pub use map::{MapUnit, compose_background, compose_map};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
