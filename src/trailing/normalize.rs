//! Batch min-max normalization of growth rates into risk scores, and the
//! summary statistics reported alongside them.

use crate::models::{Statistics, TrailingRecord};

/// Convert growth rates into inverted min-max risk scores.
///
/// The highest growth maps to 0 and the lowest to 1. When every rate is the
/// same (including a single rate) all scores are 0. Scores are relative to
/// this batch only.
pub fn risk_scores(growth_rates: &[f64]) -> Vec<f64> {
    if growth_rates.is_empty() {
        return Vec::new();
    }

    let min = growth_rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = growth_rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![0.0; growth_rates.len()];
    }

    let range = max - min;
    growth_rates
        .iter()
        .map(|g| 1.0 - (g - min) / range)
        .collect()
}

impl Statistics {
    /// Summarize a set of records, or `None` if there are none.
    pub fn summarize(records: &[TrailingRecord]) -> Option<Self> {
        let last = records.last()?;

        let mut min_risk = f64::INFINITY;
        let mut max_risk = f64::NEG_INFINITY;
        let mut total = 0.0;
        for record in records {
            min_risk = min_risk.min(record.risk_score);
            max_risk = max_risk.max(record.risk_score);
            total += record.risk_score;
        }
        // Summation error can push the mean a hair past the extremes.
        let avg_risk = (total / records.len() as f64).clamp(min_risk, max_risk);

        Some(Self {
            current_risk: last.risk_score,
            avg_risk,
            min_risk,
            max_risk,
            current_return: last.trailing_3yr_return * 100.0,
        })
    }
}
