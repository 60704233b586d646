use std::fmt::Write;

use crate::cli::{AttributesArgs, Cli};
use crate::loader::{TabularData, load_tabular};
use crate::session::SessionSettings;
use crate::{EXIT_SUCCESS, Result};

use super::{load_config, report_error};

/// One line per candidate; `*` marks the active one.
///
/// # Errors
/// Returns an error if the candidates cannot be resolved.
pub fn format_attribute_list(tabular: &TabularData, settings: &SessionSettings) -> Result<String> {
    let (attributes, active) = settings.resolve_attributes(&tabular.headers)?;
    let mut output = String::new();
    for name in attributes.iter() {
        let marker = if name == active.name() { '*' } else { ' ' };
        let _ = write!(output, "{marker} {name}");
        if !tabular.headers.iter().any(|h| h == name) {
            output.push_str("  (not in data)");
        }
        output.push('\n');
    }
    Ok(output)
}

#[must_use]
pub fn run_attributes(args: &AttributesArgs, cli: &Cli) -> i32 {
    match run_attributes_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// List the candidate attributes for a CSV file.
///
/// # Errors
/// Returns an error if configuration is invalid or the CSV cannot be loaded.
pub fn run_attributes_impl(args: &AttributesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let settings = SessionSettings::from_config(&config)?;
    let tabular = load_tabular(&args.tabular)?;
    print!("{}", format_attribute_list(&tabular, &settings)?);
    Ok(())
}
