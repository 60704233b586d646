use serde::Serialize;

/// Match statistics for one join.
///
/// Misses are expected (not every region has tabular data) and never fail the join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    /// Features that received candidate values.
    pub matched_features: usize,
    /// Keys (or display names when keyless) of features without a record.
    pub unmatched_features: Vec<String>,
    /// Record keys that matched no feature, in record order.
    pub unmatched_records: Vec<String>,
    /// Records skipped because the key field was missing or empty.
    pub keyless_records: usize,
    /// Records replaced under the last-wins duplicate policy.
    pub duplicate_keys: usize,
}

impl JoinReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched_features.is_empty() && self.unmatched_records.is_empty()
    }
}
