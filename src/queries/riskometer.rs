//! Riskometer computation for a named series.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{RiskReport, TrailingReturns};
use crate::queries::series::SeriesQuery;
use crate::trailing;

// ---------------------------------------------------------------------------
// RiskQuery
// ---------------------------------------------------------------------------

/// Computes trailing 3-year returns and risk scores for a series of the
/// backing table.
///
/// Every call reloads the series from disk and recomputes from scratch.
pub struct RiskQuery<'a> {
    conn: &'a Connection,
}

impl<'a> RiskQuery<'a> {
    /// Create a new `RiskQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Trailing returns for a series, without summary statistics.
    ///
    /// `years` trims the input to the last `years` years before the
    /// calculation runs, so anchors older than the window are not used.
    pub fn trailing_returns(&self, name: &str, years: Option<u32>) -> Result<TrailingReturns> {
        let series = SeriesQuery::new(self.conn).window(name, years)?;
        Ok(trailing::trailing_returns(&series.observations))
    }

    /// Full riskometer report: records plus summary statistics.
    ///
    /// Returns `NotFound` for an unknown series. A series without three
    /// years of history gives an empty report with zero statistics.
    pub fn compute(&self, name: &str, years: Option<u32>) -> Result<RiskReport> {
        let returns = self.trailing_returns(name, years)?;
        let report = RiskReport::new(name, returns);

        tracing::info!(
            series = name,
            years = ?years,
            records = report.data.len(),
            current_risk = report.statistics.current_risk,
            "computed riskometer"
        );
        Ok(report)
    }
}
