mod html;
mod html_template;
mod json;
mod model;
pub mod svg;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use model::{MapModel, RenderModel};
pub use text::{TextFormatter, write_legend};

use crate::error::Result;

/// Trait for turning a render model into an output document.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, model: &RenderModel) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Html => Box::new(HtmlFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Text => Box::new(TextFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
