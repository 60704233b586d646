//! SVG primitives for the map and chart frames.
//!
//! Frames use a fixed viewBox; colors are either palette values or page CSS
//! variables (`var(--color-*)`). Every bar and region carries a `<title>`.

mod builder;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use element::{Bar, Label, MapPath, SvgElement};
pub use format::{format_number, html_escape};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
