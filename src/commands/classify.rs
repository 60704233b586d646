use std::fmt::Write;

use serde::Serialize;

use crate::classify::{ClassBreak, Classifier, ColorClass};
use crate::cli::{ClassifyArgs, ClassifyFormat, Cli};
use crate::loader::{TabularData, load_tabular};
use crate::output::write_legend;
use crate::session::SessionSettings;
use crate::{EXIT_SUCCESS, Result};

use super::{load_config, report_error};

/// Classification of one attribute over the tabular records, without boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub attribute: String,
    /// Values that entered the quantile domain.
    pub domain_size: usize,
    /// Records left out of the domain (blank or non-numeric).
    pub excluded: usize,
    pub thresholds: Vec<f64>,
    pub legend: Vec<ClassBreak>,
    pub fallback: String,
    pub records: Vec<RecordClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordClass {
    pub key: Option<String>,
    pub name: Option<String>,
    pub raw: Option<String>,
    pub value: Option<f64>,
    pub color_class: ColorClass,
    pub fill: String,
}

impl ClassificationReport {
    /// # Errors
    /// Returns an error if the attribute is not a candidate or the palette is invalid.
    pub fn build(tabular: &TabularData, settings: &SessionSettings) -> Result<Self> {
        let (_, active) = settings.resolve_attributes(&tabular.headers)?;
        let classifier = Classifier::build(&tabular.records, &active, settings.palette.clone());
        let fields = &settings.fields;

        let records = tabular
            .records
            .iter()
            .map(|record| {
                let value = record.value(active.name());
                RecordClass {
                    key: record.key(&fields.key_field).map(str::to_string),
                    name: record.raw(&fields.name_field).map(str::to_string),
                    raw: record.raw(active.name()).map(str::to_string),
                    value,
                    color_class: classifier.class_of(value),
                    fill: classifier.color_of(value).to_string(),
                }
            })
            .collect();

        Ok(Self {
            attribute: active.name().to_string(),
            domain_size: classifier.domain_len(),
            excluded: tabular.records.len() - classifier.domain_len(),
            thresholds: classifier.thresholds().to_vec(),
            legend: classifier.breaks(),
            fallback: classifier.palette().fallback().to_string(),
            records,
        })
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Quantile classes for {} ({} values, {} excluded)",
            self.attribute, self.domain_size, self.excluded
        );
        let _ = writeln!(output);
        write_legend(&mut output, &self.legend, &self.fallback);
        let _ = writeln!(output);

        let _ = writeln!(output, "Records:");
        let labels: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.name.as_deref().or(r.key.as_deref()).unwrap_or("<unnamed>"))
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for (label, record) in labels.iter().zip(&self.records) {
            let class = match record.color_class {
                ColorClass::Class(i) => (i + 1).to_string(),
                ColorClass::Fallback => "-".to_string(),
            };
            let _ = writeln!(
                output,
                "  {label:<width$}  {:>12}  {class}  {}",
                record.raw.as_deref().unwrap_or_default(),
                record.fill
            );
        }
        output
    }
}

#[must_use]
pub fn run_classify(args: &ClassifyArgs, cli: &Cli) -> i32 {
    match run_classify_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Print the classification of the active attribute.
///
/// # Errors
/// Returns an error if configuration is invalid, the CSV cannot be loaded or
/// the attribute is unknown.
pub fn run_classify_impl(args: &ClassifyArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let settings = SessionSettings::from_config(&config)?.with_active(args.attribute.clone());
    let tabular = load_tabular(&args.tabular)?;

    let report = ClassificationReport::build(&tabular, &settings)?;
    let output = match args.format {
        ClassifyFormat::Text => report.to_text(),
        ClassifyFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
    };
    print!("{output}");
    Ok(())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
