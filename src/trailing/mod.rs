//! Trailing 3-year return and risk score calculator.
//!
//! For every observation the calculator looks for the observation nearest to
//! the same date three calendar years earlier, annualizes the growth between
//! the two over the actual elapsed time, then normalizes all growth rates of
//! the batch into inverted `[0, 1]` risk scores.
//!
//! The computation is pure: the same observations always produce the same
//! [`TrailingReturns`].

pub mod anchor;
pub mod normalize;

pub use anchor::DateIndex;
pub use normalize::risk_scores;

use chrono::{Months, NaiveDate};

use crate::config::{DAYS_PER_YEAR, LOOKBACK_MONTHS, QUALIFYING_MONTHS};
use crate::models::{Observation, TrailingRecord, TrailingReturns};

/// Compute trailing returns and risk scores for a series.
///
/// Observations may be in any order and may repeat dates. Records are
/// returned in input order, one per qualifying observation. A series with
/// no qualifying observation yields an empty result, not an error.
pub fn trailing_returns(observations: &[Observation]) -> TrailingReturns {
    let index = DateIndex::new(observations.iter().map(|o| o.date));

    let points: Vec<(NaiveDate, f64, f64)> = observations
        .iter()
        .filter_map(|current| {
            let anchor = find_anchor(observations, &index, current.date)?;
            let current_price = current.price.filter(|p| !p.is_nan())?;
            let anchor_price = anchor.price.filter(|p| *p > 0.0)?;

            let years = elapsed_years(anchor.date, current.date);
            let growth = annualized_growth(anchor_price, current_price, years)?;
            Some((current.date, current_price, growth))
        })
        .collect();

    let growth_rates: Vec<f64> = points.iter().map(|(_, _, growth)| *growth).collect();
    let scores = risk_scores(&growth_rates);

    let records: Vec<TrailingRecord> = points
        .into_iter()
        .zip(scores)
        .map(|((date, price, growth), risk_score)| TrailingRecord {
            date,
            price,
            trailing_3yr_return: growth,
            risk_score,
        })
        .collect();

    tracing::debug!(
        observations = observations.len(),
        qualifying = records.len(),
        "computed trailing returns"
    );

    TrailingReturns { records }
}

/// Pick the anchor for an observation dated `date`.
///
/// The candidate is the observation nearest to `date - 3 years`. It only
/// qualifies if it lies at least 2 years 11 months before `date`; otherwise
/// the series has no real 3-year history at that point and `None` is
/// returned.
pub fn find_anchor<'a>(
    observations: &'a [Observation],
    index: &DateIndex,
    date: NaiveDate,
) -> Option<&'a Observation> {
    let lookback = date.checked_sub_months(Months::new(LOOKBACK_MONTHS))?;
    let threshold = date.checked_sub_months(Months::new(QUALIFYING_MONTHS))?;

    let anchor = observations.get(index.nearest(lookback)?)?;
    (anchor.date <= threshold).then_some(anchor)
}

/// Days between two dates in 365.25-day years. Negative if `to` precedes `from`.
pub fn elapsed_years(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Geometric-mean annual growth from `start` to `end` over `years`.
///
/// `None` when `years` is not strictly positive or the result is not a
/// finite number (e.g. a negative `end` raised to a fractional power).
pub fn annualized_growth(start: f64, end: f64, years: f64) -> Option<f64> {
    if years <= 0.0 {
        return None;
    }
    let growth = (end / start).powf(1.0 / years) - 1.0;
    growth.is_finite().then_some(growth)
}
