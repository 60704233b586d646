use serde::Serialize;

use crate::error::{ChoroplethError, Result};

use super::scale::{CLASS_COUNT, ColorClass};

pub const DEFAULT_PALETTE: [&str; CLASS_COUNT] =
    ["#D4B9DA", "#C994C7", "#DF65B0", "#DD1C77", "#980043"];
pub const DEFAULT_FALLBACK: &str = "#CCC";

/// Five class colors (lightest to darkest) plus the fallback gray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    classes: [String; CLASS_COUNT],
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            classes: DEFAULT_PALETTE.map(str::to_string),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl Palette {
    /// # Errors
    /// Returns an error unless exactly five class colors are given and the
    /// fallback differs from all of them.
    pub fn new(classes: &[String], fallback: impl Into<String>) -> Result<Self> {
        let classes: [String; CLASS_COUNT] = classes.to_vec().try_into().map_err(|v: Vec<String>| {
            ChoroplethError::Config(format!(
                "Palette needs exactly {CLASS_COUNT} colors, got {}",
                v.len()
            ))
        })?;
        let fallback = fallback.into();
        if classes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&fallback))
        {
            return Err(ChoroplethError::Config(format!(
                "Fallback color {fallback} must differ from every palette color"
            )));
        }
        Ok(Self { classes, fallback })
    }

    #[must_use]
    pub fn color(&self, class: ColorClass) -> &str {
        match class {
            ColorClass::Class(i) => self.classes.get(i).map_or(&self.fallback, |c| c),
            ColorClass::Fallback => &self.fallback,
        }
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
