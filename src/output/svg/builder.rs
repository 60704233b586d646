//! SVG composition builder for the map and chart frames.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Builder for one `<svg>` frame.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    class_name: String,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            class_name: String::new(),
            title: String::new(),
            elements: Vec::new(),
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

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_all<'a, E: SvgElement + 'a>(
        mut self,
        elements: impl IntoIterator<Item = &'a E>,
    ) -> Self {
        self.elements.extend(elements.into_iter().map(|e| e.render()));
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let class_attr = if self.class_name.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, html_escape(&self.class_name))
        };
        let _ = writeln!(
            output,
            r#"<svg{class_attr} width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = self.width,
            h = self.height
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}
