use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrailingRecord — One qualifying observation with its return and risk
// ---------------------------------------------------------------------------

/// A qualifying observation with its annualized trailing return and its
/// batch-normalized risk score.
///
/// `trailing_3yr_return` is a fraction (0.05 == 5%). `risk_score` is in
/// `[0, 1]`, higher meaning riskier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingRecord {
    pub date: NaiveDate,
    pub price: f64,
    pub trailing_3yr_return: f64,
    pub risk_score: f64,
}

// ---------------------------------------------------------------------------
// Statistics — Summary over a set of trailing records
// ---------------------------------------------------------------------------

/// Summary statistics over a [`TrailingReturns`] set.
///
/// "Current" values come from the last record as produced, which is not
/// necessarily the chronologically latest one. `current_return` is a
/// percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub current_risk: f64,
    pub avg_risk: f64,
    pub min_risk: f64,
    pub max_risk: f64,
    pub current_return: f64,
}

// ---------------------------------------------------------------------------
// TrailingReturns — Calculator output
// ---------------------------------------------------------------------------

/// Records in the order their observations appear in the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailingReturns {
    pub records: Vec<TrailingRecord>,
}

impl TrailingReturns {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `None` when there are no records.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::summarize(&self.records)
    }
}

// ---------------------------------------------------------------------------
// RiskReport — Full answer for one series
// ---------------------------------------------------------------------------

/// Riskometer output for a single series, shaped for the JSON API.
///
/// An empty `data` with all-zero `statistics` means "no qualifying data",
/// which is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub index_name: String,
    pub data: Vec<TrailingRecord>,
    pub statistics: Statistics,
}

impl RiskReport {
    pub fn new(index_name: impl Into<String>, returns: TrailingReturns) -> Self {
        let statistics = returns.statistics().unwrap_or_default();
        Self {
            index_name: index_name.into(),
            data: returns.records,
            statistics,
        }
    }
}
