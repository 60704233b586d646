pub mod attributes;
pub mod classify;
pub mod init;
pub mod render;

use std::fmt::Write;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{ChoroplethError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SESSION_FAILURE};

pub use attributes::{format_attribute_list, run_attributes, run_attributes_impl};
pub use classify::{ClassificationReport, run_classify, run_classify_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{run_render, run_render_impl};

/// Load configuration from `--config`, the default locations, or not at all.
///
/// # Errors
/// Returns an error if a config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    let result = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    Ok(result.config)
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(error: &ChoroplethError) -> i32 {
    if error.is_session_failure() {
        EXIT_SESSION_FAILURE
    } else {
        EXIT_CONFIG_ERROR
    }
}

/// `error` labelled with its category, followed by its source chain.
#[must_use]
pub fn format_error_report(error: &ChoroplethError) -> String {
    let mut report = format!("{} error: {error}\n", error.error_type());
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let _ = writeln!(report, "  Caused by: {cause}");
        source = cause.source();
    }
    report
}

/// Print `error` to stderr and map it to an exit code.
#[must_use]
pub fn report_error(error: &ChoroplethError) -> i32 {
    eprint!("{}", format_error_report(error));
    exit_code_for(error)
}

/// Write to `output` when given, otherwise to stdout.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
