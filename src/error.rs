use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChoroplethError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tabular data: {path}")]
    Tabular {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse boundary data: {path}")]
    BoundaryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid boundary data: {0}")]
    Boundary(String),

    #[error("Unknown attribute '{name}' (available: {})", available.join(", "))]
    UnknownAttribute { name: String, available: Vec<String> },

    #[error("Duplicate join key '{key}' in rows {first_row} and {second_row}")]
    DuplicateKey {
        key: String,
        first_row: usize,
        second_row: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ChoroplethError {
    /// Short category label used when reporting the error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Tabular { .. } | Self::BoundaryParse { .. } => "Load",
            Self::Boundary(_) => "Boundary",
            Self::UnknownAttribute { .. } => "Attribute",
            Self::DuplicateKey { .. } => "Join",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Whether the error aborts a session after inputs were requested.
    ///
    /// Load and join failures are terminal; everything else is a usage problem.
    #[must_use]
    pub const fn is_session_failure(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::Tabular { .. }
                | Self::BoundaryParse { .. }
                | Self::Boundary(_)
                | Self::DuplicateKey { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChoroplethError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
