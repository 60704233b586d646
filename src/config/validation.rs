//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing.

use std::collections::HashSet;

use crate::classify::CLASS_COUNT;
use crate::config::Config;
use crate::{ChoroplethError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the palette size is wrong, a color is not a CSS color,
/// a dimension is not positive, candidates repeat, or `attributes.active` is
/// not a candidate.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_data_section(config)?;
    validate_attributes_section(config)?;
    validate_classification_section(config)?;
    validate_frames(config)?;
    Ok(())
}

fn validate_data_section(config: &Config) -> Result<()> {
    let data = &config.data;
    for (name, value) in [
        ("data.key_field", &data.key_field),
        ("data.name_field", &data.name_field),
        ("data.feature_key", &data.feature_key),
        ("data.feature_name", &data.feature_name),
    ] {
        if value.trim().is_empty() {
            return Err(ChoroplethError::Config(format!("{name} must not be empty")));
        }
    }
    Ok(())
}

fn validate_attributes_section(config: &Config) -> Result<()> {
    let attributes = &config.attributes;
    let mut seen = HashSet::new();
    for (i, name) in attributes.candidates.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ChoroplethError::Config(format!(
                "attributes.candidates[{i}] must not be empty"
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(ChoroplethError::Config(format!(
                "attributes.candidates contains '{name}' more than once"
            )));
        }
    }

    // With derived candidates the active name is checked once headers are known.
    if let Some(active) = &attributes.active
        && !attributes.candidates.is_empty()
        && !attributes.candidates.contains(active)
    {
        return Err(ChoroplethError::Config(format!(
            "attributes.active '{active}' is not one of attributes.candidates"
        )));
    }
    Ok(())
}

fn validate_classification_section(config: &Config) -> Result<()> {
    let classification = &config.classification;
    if classification.palette.len() != CLASS_COUNT {
        return Err(ChoroplethError::Config(format!(
            "classification.palette must have exactly {CLASS_COUNT} colors, got {}",
            classification.palette.len()
        )));
    }
    let colors = classification
        .palette
        .iter()
        .enumerate()
        .map(|(i, color)| (format!("classification.palette[{i}]"), color))
        .chain(std::iter::once((
            "classification.fallback".to_string(),
            &classification.fallback,
        )));
    for (name, color) in colors {
        if !is_css_color(color) {
            return Err(ChoroplethError::Config(format!(
                "{name} is not a CSS color: '{color}'"
            )));
        }
    }
    classification.palette().map(|_| ())
}

/// Hex, named and functional colors (`#C994C7`, `gray`, `rgb(1, 2, 3)`).
fn is_css_color(color: &str) -> bool {
    !color.trim().is_empty()
        && color.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-')
        })
}

fn validate_frames(config: &Config) -> Result<()> {
    let positive = [
        ("map.width", config.map.width),
        ("map.height", config.map.height),
        ("map.scale", config.map.scale),
        ("chart.width", config.chart.width),
        ("chart.height", config.chart.height),
        ("chart.domain_max", config.chart.domain_max),
    ];
    for (name, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(ChoroplethError::Config(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }

    let [p0, p1] = config.map.parallels;
    if (p0 + p1).abs() < f64::EPSILON {
        return Err(ChoroplethError::Config(
            "map.parallels must not be symmetric about the equator".to_string(),
        ));
    }
    Ok(())
}
