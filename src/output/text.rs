use std::fmt::Write;

use crate::classify::ClassBreak;
use crate::error::Result;

use super::svg::format_number;
use super::{OutputFormatter, RenderModel};

/// Plain-text summary: title, class breaks, per-region values and join stats.
pub struct TextFormatter;

fn class_range(entry: &ClassBreak) -> String {
    match (entry.lower, entry.upper) {
        (None, Some(upper)) => format!("<= {}", format_number(upper)),
        (Some(lower), Some(upper)) => {
            format!("{} .. {}", format_number(lower), format_number(upper))
        }
        (Some(lower), None) => format!("> {}", format_number(lower)),
        (None, None) => "no data".to_string(),
    }
}

/// Append the legend table, one line per class plus the fallback.
pub fn write_legend(output: &mut String, legend: &[ClassBreak], fallback: &str) {
    let _ = writeln!(output, "Classes:");
    for entry in legend {
        let _ = writeln!(
            output,
            "  {}  {:<8} {:<22} {} value(s)",
            entry.index + 1,
            entry.color,
            class_range(entry),
            entry.count
        );
    }
    let _ = writeln!(output, "  -  {fallback:<8} {:<22}", "no data");
}

fn value_text(value: Option<f64>) -> String {
    value.map_or_else(|| "no data".to_string(), |v| v.to_string())
}

impl OutputFormatter for TextFormatter {
    fn format(&self, model: &RenderModel) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "{}", model.title);
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Active attribute: {} (candidates: {})",
            model.active_attribute,
            model.attributes.join(", ")
        );
        let _ = writeln!(output);

        write_legend(&mut output, &model.legend, &model.fallback);
        let _ = writeln!(output);

        let _ = writeln!(output, "Regions:");
        let labels: Vec<String> = model
            .map
            .units
            .iter()
            .map(|unit| match (&unit.name, &unit.key) {
                (Some(name), Some(key)) => format!("{name} ({key})"),
                (Some(label), None) | (None, Some(label)) => label.clone(),
                (None, None) => "<unnamed>".to_string(),
            })
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for (label, unit) in labels.iter().zip(&model.map.units) {
            let _ = writeln!(
                output,
                "  {label:<width$}  {:>12}  {}",
                value_text(unit.value),
                unit.fill
            );
        }
        let _ = writeln!(output);

        let join = &model.join;
        if join.is_complete() {
            let _ = writeln!(output, "Join: all {} region(s) matched", join.matched_features);
        } else {
            let _ = writeln!(
                output,
                "Join: {} matched, {} unmatched feature(s), {} unmatched record(s)",
                join.matched_features,
                join.unmatched_features.len(),
                join.unmatched_records.len()
            );
        }
        if join.keyless_records > 0 {
            let _ = writeln!(output, "  {} record(s) without a key were skipped", join.keyless_records);
        }
        if join.duplicate_keys > 0 {
            let _ = writeln!(output, "  {} duplicate key(s) resolved last-wins", join.duplicate_keys);
        }

        Ok(output)
    }
}
