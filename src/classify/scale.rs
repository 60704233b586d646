use serde::Serialize;

/// Number of color classes.
pub const CLASS_COUNT: usize = 5;

/// Classification result for a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum ColorClass {
    /// Palette bucket, `0` (lightest) to `CLASS_COUNT - 1` (darkest).
    Class(usize),
    /// Absent or non-finite value, or nothing to classify against.
    Fallback,
}

/// Quantile binning over a fixed numeric domain.
///
/// Thresholds sit at the 20/40/60/80% quantiles, interpolated linearly between
/// order statistics at rank `(n - 1) * p`. A value equal to a threshold belongs
/// to the lower class.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    domain: Vec<f64>,
    thresholds: Vec<f64>,
}

impl QuantileScale {
    /// Build a scale from raw domain values. Non-finite values are dropped.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut domain: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        domain.sort_by(f64::total_cmp);

        let thresholds = if domain.is_empty() {
            Vec::new()
        } else {
            (1..CLASS_COUNT)
                .map(|i| quantile_sorted(&domain, i, CLASS_COUNT))
                .collect()
        };

        Self { domain, thresholds }
    }

    #[must_use]
    pub fn classify(&self, value: Option<f64>) -> ColorClass {
        match value {
            Some(v) if v.is_finite() && !self.domain.is_empty() => {
                ColorClass::Class(self.thresholds.partition_point(|t| *t < v))
            }
            _ => ColorClass::Fallback,
        }
    }

    /// Sorted domain values.
    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// Class boundaries; empty when the domain is empty.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

/// Linearly interpolated `num / den` quantile of an ascending, non-empty slice.
///
/// The rank is formed from integers so boundaries that land on an order
/// statistic are exact.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile_sorted(sorted: &[f64], num: usize, den: usize) -> f64 {
    let rank = ((sorted.len() - 1) * num) as f64 / den as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let weight = rank - rank.floor();
    (sorted[upper] - sorted[lower]).mul_add(weight, sorted[lower])
}
