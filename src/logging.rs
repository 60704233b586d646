//! Diagnostic logging to stderr.
//!
//! Rendered output goes to stdout or `--output`, so logs never mix with it.
//! `RUST_LOG` overrides the level chosen from `-v`/`-q`.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags.
#[must_use]
pub const fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
