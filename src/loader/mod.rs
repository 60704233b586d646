//! Dataset loading and the two-phase load barrier.
//!
//! The tabular and boundary inputs load independently; nothing downstream runs
//! until every load has finished, and any failure aborts the whole session.

mod boundary;
mod tabular;
mod topojson;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::GeoFeature;
use crate::error::Result;

pub use boundary::{load_boundaries, parse_boundaries};
pub use tabular::{TabularData, load_tabular, parse_tabular};
pub use topojson::Topology;

/// Files that make up one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub tabular: PathBuf,
    pub boundaries: PathBuf,
    /// Optional context layer drawn underneath the choropleth.
    pub background: Option<PathBuf>,
    /// TopoJSON object to read from `boundaries`.
    pub object: Option<String>,
}

impl InputPaths {
    #[must_use]
    pub fn new(tabular: impl Into<PathBuf>, boundaries: impl Into<PathBuf>) -> Self {
        Self {
            tabular: tabular.into(),
            boundaries: boundaries.into(),
            background: None,
            object: None,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Option<PathBuf>) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_object(mut self, object: Option<String>) -> Self {
        self.object = object;
        self
    }
}

/// Everything a session needs, fully loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    pub tabular: TabularData,
    pub features: Vec<GeoFeature>,
    pub background: Vec<GeoFeature>,
}

fn load_background(path: Option<&Path>) -> Result<Vec<GeoFeature>> {
    path.map_or_else(|| Ok(Vec::new()), |p| load_boundaries(p, None))
}

/// Load all inputs concurrently and wait for every one of them.
///
/// # Errors
/// Returns the first failure in input order (tabular, boundaries, background);
/// no partial result is ever returned.
pub fn load_inputs(paths: &InputPaths) -> Result<Inputs> {
    let (tabular, (features, background)) = rayon::join(
        || load_tabular(&paths.tabular),
        || {
            rayon::join(
                || load_boundaries(&paths.boundaries, paths.object.as_deref()),
                || load_background(paths.background.as_deref()),
            )
        },
    );

    let inputs = Inputs {
        tabular: tabular?,
        features: features?,
        background: background?,
    };

    info!(
        records = inputs.tabular.records.len(),
        features = inputs.features.len(),
        background = inputs.background.len(),
        "Loaded inputs"
    );
    Ok(inputs)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
