use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

/// Output format for the `classify` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ClassifyFormat {
    /// Human-readable legend and values
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "choropleth")]
#[command(author, version, about = "Render a choropleth map and coordinated bar chart")]
#[command(long_about = "Joins a CSV of per-country values onto GeoJSON/TopoJSON boundaries, \
    classifies the active attribute into five quantile classes and renders a map \
    with a coordinated bar chart.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Input could not be loaded or joined\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join, classify and render the map and chart
    Render(RenderArgs),

    /// Print the quantile classification of one attribute
    Classify(ClassifyArgs),

    /// List candidate attributes
    Attributes(AttributesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Tabular data (CSV with a header row)
    pub tabular: PathBuf,

    /// Boundary data (GeoJSON or TopoJSON)
    pub boundaries: PathBuf,

    /// Context layer drawn beneath the choropleth (GeoJSON or TopoJSON)
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Attribute to display (defaults to the first candidate)
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// Output format [possible values: html, json, text]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Tabular data (CSV with a header row)
    pub tabular: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Attribute to classify (defaults to the first candidate)
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ClassifyFormat,
}

#[derive(Parser, Debug)]
pub struct AttributesArgs {
    /// Tabular data (CSV with a header row)
    pub tabular: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
