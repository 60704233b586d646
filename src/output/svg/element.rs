//! Primitive SVG elements: bars, map paths and text labels.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A single bar of the coordinated chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub class_name: String,
    /// Tooltip text.
    pub title: String,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let class_name = html_escape(&self.class_name);
        let title = html_escape(&self.title);
        format!(
            r#"<rect class="{class_name}" x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{title}</title>
</rect>"#,
            self.x, self.y, self.width, self.height
        )
    }
}

/// One enumeration unit (or background shape) of the map.
#[derive(Debug, Clone)]
pub struct MapPath {
    pub d: String,
    pub fill: ChartColor,
    pub stroke: ChartColor,
    pub class_name: String,
    /// Tooltip text; omitted when empty.
    pub title: String,
}

impl MapPath {
    #[must_use]
    pub fn new(d: impl Into<String>, fill: ChartColor) -> Self {
        Self {
            d: d.into(),
            fill,
            stroke: ChartColor::css_var("stroke"),
            class_name: String::new(),
            title: String::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl SvgElement for MapPath {
    fn render(&self) -> String {
        let mut output = String::from("<path");
        if !self.class_name.is_empty() {
            let _ = write!(output, r#" class="{}""#, html_escape(&self.class_name));
        }
        let _ = write!(
            output,
            r#" d="{}" fill="{}" stroke="{}" stroke-width="0.5""#,
            self.d,
            self.fill.to_css(),
            self.stroke.to_css()
        );
        if self.title.is_empty() {
            output.push_str("/>");
        } else {
            let _ = write!(
                output,
                ">\n    <title>{}</title>\n</path>",
                html_escape(&self.title)
            );
        }
        output
    }
}

/// A positioned text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub class_name: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            class_name: String::new(),
            anchor: TextAnchor::Start,
            font_size: 12.0,
            color: ChartColor::css_var("text"),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let class_attr = if self.class_name.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, html_escape(&self.class_name))
        };
        format!(
            r#"<text{class_attr} x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}
