use std::fs;

use crate::cli::InitArgs;
use crate::{ChoroplethError, EXIT_SUCCESS, Result};

use super::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Writes a configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChoroplethError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# choropleth configuration file
# Every key is optional; the values shown are the defaults.

[data]
# Join key and display name columns in the CSV
key_field = "CountryCode"
name_field = "country"
# Join key and display name properties on boundary features
feature_key = "CC"
feature_name = "sovereignt"
# TopoJSON object to read (default: the first object)
# topology_object = "EuropeCountries"

[attributes]
# Attributes that may be displayed, in order. An empty list uses every CSV
# column except the key and name columns.
candidates = ["Russian Federation", "Ukraine", "Kazakhstan", "Poland", "Romania"]
# Attribute shown first (default: the first candidate)
# active = "Ukraine"

[classification]
# Five colors for the quantile classes, lightest to darkest
palette = ["#D4B9DA", "#C994C7", "#DF65B0", "#DD1C77", "#980043"]
# Color for regions without a numeric value
fallback = "#CCC"

[join]
# What to do when two CSV rows share a key: "reject" or "last-wins"
duplicate_keys = "reject"

[map]
width = 700.0
height = 460.0
# Conic equal-area projection
center = [15.57, 49.91]
rotate = [-20.48, 0.0, 0.0]
parallels = [43.09, 25.0]
scale = 650.0

[chart]
width = 610.0
height = 460.0
# Value drawn at full chart height
domain_max = 100000.0
title_template = "Number of People from {attribute} in each country"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
