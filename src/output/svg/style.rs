//! Paint and text placement for SVG elements.

use std::fmt;

use super::format::html_escape;

/// Fill or stroke color: a palette color or a page CSS variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Literal color from the palette, e.g. `#DD1C77`.
    Hex(String),
    /// Page variable name, e.g. `stroke` for `var(--color-stroke)`.
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Attribute-safe CSS value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(color) => html_escape(color),
            Self::CssVar(name) => format!("var(--color-{})", html_escape(name)),
        }
    }
}

/// `text-anchor` of a label; chart labels are centred over their bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
