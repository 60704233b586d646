//! Quantile color classification of the active attribute.
//!
//! The domain comes from the raw tabular records only, never from the joined
//! features, so coverage gaps between the datasets do not shift the boundaries.

mod palette;
mod scale;

use serde::Serialize;
use tracing::debug;

use crate::attribute::ActiveAttribute;
use crate::data::TabularRecord;

pub use palette::{DEFAULT_FALLBACK, DEFAULT_PALETTE, Palette};
pub use scale::{CLASS_COUNT, ColorClass, QuantileScale};

/// One legend entry: a palette class and the domain values that fall in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBreak {
    pub index: usize,
    pub color: String,
    /// Lower threshold (exclusive); `None` for the first class.
    pub lower: Option<f64>,
    /// Upper threshold (inclusive); `None` for the last class.
    pub upper: Option<f64>,
    /// Domain members in this class.
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A color function for one attribute over one record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    attribute: ActiveAttribute,
    scale: QuantileScale,
    palette: Palette,
}

impl Classifier {
    /// Build from the active attribute's values across `records`.
    ///
    /// Missing and non-numeric cells are left out of the domain.
    #[must_use]
    pub fn build(records: &[TabularRecord], attribute: &ActiveAttribute, palette: Palette) -> Self {
        let values = records.iter().filter_map(|r| r.value(attribute.name()));
        let scale = QuantileScale::new(values);
        debug!(
            attribute = %attribute,
            domain = scale.domain().len(),
            excluded = records.len() - scale.domain().len(),
            thresholds = ?scale.thresholds(),
            "Built quantile classification"
        );
        Self {
            attribute: attribute.clone(),
            scale,
            palette,
        }
    }

    #[must_use]
    pub const fn attribute(&self) -> &ActiveAttribute {
        &self.attribute
    }

    #[must_use]
    pub fn class_of(&self, value: Option<f64>) -> ColorClass {
        self.scale.classify(value)
    }

    /// Fill color for `value`; the fallback for anything not finite.
    #[must_use]
    pub fn color_of(&self, value: Option<f64>) -> &str {
        self.palette.color(self.class_of(value))
    }

    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        self.scale.thresholds()
    }

    #[must_use]
    pub fn domain_len(&self) -> usize {
        self.scale.domain().len()
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Legend entries for every palette class, in ascending order.
    #[must_use]
    pub fn breaks(&self) -> Vec<ClassBreak> {
        let thresholds = self.scale.thresholds();
        (0..CLASS_COUNT)
            .map(|index| {
                let members: Vec<f64> = self
                    .scale
                    .domain()
                    .iter()
                    .copied()
                    .filter(|v| self.class_of(Some(*v)) == ColorClass::Class(index))
                    .collect();
                ClassBreak {
                    index,
                    color: self.palette.color(ColorClass::Class(index)).to_string(),
                    lower: index.checked_sub(1).and_then(|i| thresholds.get(i).copied()),
                    upper: thresholds.get(index).copied(),
                    count: members.len(),
                    min: members.first().copied(),
                    max: members.last().copied(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
