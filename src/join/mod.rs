//! Join engine: merges tabular attribute values into boundary features.
//!
//! Records are indexed by key once; every feature whose key matches an indexed
//! record receives one parsed value per candidate attribute. Features without a
//! match keep no candidate values at all.

mod report;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::attribute::AttributeSet;
use crate::data::{DataFields, GeoFeature, TabularRecord, parse_value};
use crate::error::{ChoroplethError, Result};

pub use report::JoinReport;

/// How a second record with an already-indexed key is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeyPolicy {
    /// Surface the duplicate as a data-integrity error.
    #[default]
    Reject,
    /// Later records replace earlier ones.
    LastWins,
}

impl std::str::FromStr for DuplicateKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "last-wins" | "last_wins" => Ok(Self::LastWins),
            _ => Err(format!("Unknown duplicate key policy: {s}")),
        }
    }
}

/// A boundary feature extended with the candidate attribute values of its match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedFeature {
    pub feature: GeoFeature,
    /// One entry per candidate attribute when matched; empty otherwise.
    /// `None` marks a value that did not parse as a finite number.
    pub joined: IndexMap<String, Option<f64>>,
}

impl EnrichedFeature {
    #[must_use]
    pub fn unmatched(feature: GeoFeature) -> Self {
        Self {
            feature,
            joined: IndexMap::new(),
        }
    }

    /// Numeric value for `attribute`; absent when unmatched or unparseable.
    #[must_use]
    pub fn value(&self, attribute: &str) -> Option<f64> {
        self.joined.get(attribute).copied().flatten()
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        !self.joined.is_empty()
    }
}

/// Output of [`join`]: enriched features in input order plus match statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Joined {
    pub features: Vec<EnrichedFeature>,
    pub report: JoinReport,
}

/// Index records by key, honouring the duplicate policy.
fn index_records<'a>(
    records: &'a [TabularRecord],
    key_field: &str,
    policy: DuplicateKeyPolicy,
    report: &mut JoinReport,
) -> Result<IndexMap<&'a str, &'a TabularRecord>> {
    let mut index: IndexMap<&str, &TabularRecord> = IndexMap::with_capacity(records.len());

    for record in records {
        let Some(key) = record.key(key_field) else {
            warn!(row = record.row, key_field, "Tabular record has no join key; skipping");
            report.keyless_records += 1;
            continue;
        };

        match index.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicateKeyPolicy::Reject => {
                    return Err(ChoroplethError::DuplicateKey {
                        key: key.to_string(),
                        first_row: slot.get().row,
                        second_row: record.row,
                    });
                }
                DuplicateKeyPolicy::LastWins => {
                    warn!(
                        key,
                        replaced_row = slot.get().row,
                        row = record.row,
                        "Duplicate join key; later record wins"
                    );
                    report.duplicate_keys += 1;
                    slot.insert(record);
                }
            },
        }
    }

    Ok(index)
}

fn enrich(record: &TabularRecord, attributes: &AttributeSet) -> IndexMap<String, Option<f64>> {
    attributes
        .iter()
        .map(|attribute| {
            let value = record.raw(attribute).and_then(parse_value);
            if value.is_none() {
                debug!(
                    row = record.row,
                    attribute,
                    raw = record.raw(attribute).unwrap_or_default(),
                    "Attribute value is not numeric"
                );
            }
            (attribute.to_string(), value)
        })
        .collect()
}

/// Join tabular records onto boundary features by key.
///
/// Output order and length match `features`. Key comparison is exact string
/// equality. A feature with no matching record is returned with no candidate
/// values; a value that does not parse is carried as the non-numeric marker.
///
/// # Errors
/// Returns [`ChoroplethError::DuplicateKey`] when two records share a key and
/// `policy` is [`DuplicateKeyPolicy::Reject`].
pub fn join(
    features: &[GeoFeature],
    records: &[TabularRecord],
    attributes: &AttributeSet,
    fields: &DataFields,
    policy: DuplicateKeyPolicy,
) -> Result<Joined> {
    let mut report = JoinReport::default();
    let index = index_records(records, &fields.key_field, policy, &mut report)?;
    let mut used: Vec<bool> = vec![false; index.len()];

    let enriched: Vec<EnrichedFeature> = features
        .iter()
        .map(|feature| {
            let matched = feature
                .key(&fields.feature_key)
                .and_then(|key| index.get_full(key.as_str()));

            match matched {
                Some((position, _, record)) => {
                    used[position] = true;
                    report.matched_features += 1;
                    EnrichedFeature {
                        feature: feature.clone(),
                        joined: enrich(record, attributes),
                    }
                }
                None => {
                    let label = feature
                        .key(&fields.feature_key)
                        .or_else(|| feature.display_name(&fields.feature_name))
                        .unwrap_or_else(|| "<no key>".to_string());
                    debug!(feature = %label, "No tabular record for feature");
                    report.unmatched_features.push(label);
                    EnrichedFeature::unmatched(feature.clone())
                }
            }
        })
        .collect();

    report.unmatched_records = index
        .keys()
        .zip(&used)
        .filter(|&(_, used)| !used)
        .map(|(key, _)| (*key).to_string())
        .collect();

    info!(
        features = features.len(),
        records = records.len(),
        matched = report.matched_features,
        unmatched_features = report.unmatched_features.len(),
        unmatched_records = report.unmatched_records.len(),
        "Joined tabular data onto boundaries"
    );

    Ok(Joined {
        features: enriched,
        report,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
