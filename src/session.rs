//! The derived state shared by both coordinated views.
//!
//! A [`Session`] owns the loaded inputs, the enriched features, the active
//! attribute and the classifier built for it. The map and the chart both borrow
//! the same session, so they always render one active attribute with one
//! classification. [`Session::select_attribute`] is the only way to change it.

use tracing::info;

use crate::attribute::{ActiveAttribute, AttributeSet};
use crate::classify::{Classifier, Palette};
use crate::config::{ChartConfig, Config, MapConfig};
use crate::data::{DataFields, GeoFeature, TabularRecord};
use crate::error::Result;
use crate::join::{DuplicateKeyPolicy, EnrichedFeature, JoinReport, join};
use crate::loader::{Inputs, TabularData};

/// Everything a session needs besides its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub fields: DataFields,
    /// Candidate attributes in display order; empty means derive from headers.
    pub candidates: Vec<String>,
    /// Initial active attribute; the first candidate when `None`.
    pub active: Option<String>,
    pub palette: Palette,
    pub duplicate_keys: DuplicateKeyPolicy,
    pub map: MapConfig,
    pub chart: ChartConfig,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            fields: DataFields::default(),
            candidates: Config::default().attributes.candidates,
            active: None,
            palette: Palette::default(),
            duplicate_keys: DuplicateKeyPolicy::default(),
            map: MapConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl SessionSettings {
    /// # Errors
    /// Returns an error if the configured palette is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            fields: config.data.fields(),
            candidates: config.attributes.candidates.clone(),
            active: config.attributes.active.clone(),
            palette: config.classification.palette()?,
            duplicate_keys: config.join.duplicate_keys,
            map: config.map.clone(),
            chart: config.chart.clone(),
        })
    }

    /// Override the initial active attribute (e.g. from the command line).
    #[must_use]
    pub fn with_active(mut self, active: Option<String>) -> Self {
        if active.is_some() {
            self.active = active;
        }
        self
    }

    /// Resolve the candidate set against the tabular headers.
    ///
    /// # Errors
    /// Returns an error if no candidates are configured and none can be derived.
    pub fn attribute_set(&self, headers: &[String]) -> Result<AttributeSet> {
        if self.candidates.is_empty() {
            AttributeSet::from_headers(
                headers.iter().map(String::as_str),
                &[self.fields.key_field.as_str(), self.fields.name_field.as_str()],
            )
        } else {
            AttributeSet::new(self.candidates.iter().cloned())
        }
    }

    /// Resolve the candidate set and the initial active attribute.
    ///
    /// # Errors
    /// Returns an error if the candidates are unusable or the requested
    /// attribute is not among them.
    pub fn resolve_attributes(&self, headers: &[String]) -> Result<(AttributeSet, ActiveAttribute)> {
        let attributes = self.attribute_set(headers)?;
        let active = attributes.select_or_first(self.active.as_deref())?;
        Ok((attributes, active))
    }
}

/// Single derived-state object for one load of the inputs.
#[derive(Debug, Clone)]
pub struct Session {
    tabular: TabularData,
    features: Vec<EnrichedFeature>,
    background: Vec<GeoFeature>,
    attributes: AttributeSet,
    active: ActiveAttribute,
    classifier: Classifier,
    report: JoinReport,
    settings: SessionSettings,
}

impl Session {
    /// Join and classify the loaded inputs.
    ///
    /// The classifier reads only the raw records, so it is built alongside the
    /// join rather than after it.
    ///
    /// # Errors
    /// Returns an error if the attributes cannot be resolved or the join
    /// rejects a duplicate key.
    pub fn build(inputs: Inputs, settings: SessionSettings) -> Result<Self> {
        let Inputs {
            tabular,
            features,
            background,
        } = inputs;
        let (attributes, active) = settings.resolve_attributes(&tabular.headers)?;

        let (joined, classifier) = rayon::join(
            || {
                join(
                    &features,
                    &tabular.records,
                    &attributes,
                    &settings.fields,
                    settings.duplicate_keys,
                )
            },
            || Classifier::build(&tabular.records, &active, settings.palette.clone()),
        );
        let joined = joined?;

        info!(
            active = %active,
            candidates = attributes.len(),
            classes = classifier.thresholds().len() + 1,
            "Session ready"
        );

        Ok(Self {
            tabular,
            features: joined.features,
            background,
            attributes,
            active,
            classifier,
            report: joined.report,
            settings,
        })
    }

    /// Make `name` the active attribute and reclassify.
    ///
    /// On error the session is left unchanged.
    ///
    /// # Errors
    /// Returns [`crate::ChoroplethError::UnknownAttribute`] if `name` is not a candidate.
    pub fn select_attribute(&mut self, name: &str) -> Result<()> {
        let active = self.attributes.select(name)?;
        if active == self.active {
            return Ok(());
        }
        self.classifier = Classifier::build(
            &self.tabular.records,
            &active,
            self.settings.palette.clone(),
        );
        info!(from = %self.active, to = %active, "Active attribute changed");
        self.active = active;
        Ok(())
    }

    #[must_use]
    pub const fn active(&self) -> &ActiveAttribute {
        &self.active
    }

    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    #[must_use]
    pub fn records(&self) -> &[TabularRecord] {
        &self.tabular.records
    }

    #[must_use]
    pub fn features(&self) -> &[EnrichedFeature] {
        &self.features
    }

    #[must_use]
    pub fn background(&self) -> &[GeoFeature] {
        &self.background
    }

    #[must_use]
    pub const fn report(&self) -> &JoinReport {
        &self.report
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
