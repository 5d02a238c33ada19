//! Trailing-return calculator tests on in-memory observations.

mod common;

use common::{approx_eq, date, missing, monthly, obs, Lcg};
use riskometer::trailing::{
    annualized_growth, elapsed_years, find_anchor, trailing_returns, DateIndex,
};
use riskometer::Observation;

// ---------------------------------------------------------------------------
// Reference scenario
// ---------------------------------------------------------------------------

#[test]
fn three_year_steps_anchor_on_previous_point() {
    let observations = vec![
        obs(2011, 1, 1, 100.0),
        obs(2014, 1, 1, 110.0),
        obs(2017, 1, 1, 121.0),
    ];

    let result = trailing_returns(&observations);

    // The first point has nothing three years before it.
    assert_eq!(result.len(), 2);
    let last = result.records[1];
    assert_eq!(last.date, date(2017, 1, 1));
    assert_eq!(last.price, 121.0);
    let years = elapsed_years(date(2014, 1, 1), date(2017, 1, 1));
    assert!((years - 3.0).abs() < 1e-3);
    assert!(approx_eq(last.trailing_3yr_return, 1.1_f64.powf(1.0 / years) - 1.0));
    assert!((last.trailing_3yr_return - 0.03228).abs() < 1e-4);
    // Both windows grew 10% over 3 years, so normalization is degenerate.
    assert!(result.records.iter().all(|r| r.risk_score == 0.0));
}

#[test]
fn single_qualifying_point_has_zero_risk() {
    let observations = vec![obs(2014, 1, 1, 110.0), obs(2017, 1, 1, 121.0)];

    let result = trailing_returns(&observations);

    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].risk_score, 0.0);
    let years = 1096.0 / 365.25;
    assert!(approx_eq(
        result.records[0].trailing_3yr_return,
        1.1_f64.powf(1.0 / years) - 1.0
    ));
}

#[test]
fn higher_growth_gets_lower_risk() {
    let observations = vec![
        obs(2011, 1, 1, 100.0),
        obs(2014, 1, 1, 200.0),
        obs(2017, 1, 1, 250.0),
    ];

    let result = trailing_returns(&observations);

    assert_eq!(result.len(), 2);
    assert_eq!(result.records[0].date, date(2014, 1, 1));
    assert_eq!(result.records[0].risk_score, 0.0);
    assert_eq!(result.records[1].date, date(2017, 1, 1));
    assert_eq!(result.records[1].risk_score, 1.0);
}

// ---------------------------------------------------------------------------
// Empty and short histories
// ---------------------------------------------------------------------------

#[test]
fn empty_series_yields_empty_result() {
    let result = trailing_returns(&[]);
    assert!(result.is_empty());
    assert!(result.statistics().is_none());
}

#[test]
fn less_than_three_years_yields_empty_result() {
    let observations = monthly(2020, 30, |i| 100.0 + i as f64);
    let result = trailing_returns(&observations);
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// Qualification threshold (2 years 11 months)
// ---------------------------------------------------------------------------

#[test]
fn anchor_two_years_ten_months_back_is_excluded() {
    let observations = vec![obs(2010, 3, 1, 100.0), obs(2013, 1, 1, 120.0)];
    let result = trailing_returns(&observations);
    assert!(result.is_empty());
}

#[test]
fn anchor_exactly_two_years_eleven_months_back_qualifies() {
    let observations = vec![obs(2010, 2, 1, 100.0), obs(2013, 1, 1, 120.0)];

    let result = trailing_returns(&observations);

    assert_eq!(result.len(), 1);
    let years = 1065.0 / 365.25;
    let expected = 1.2_f64.powf(1.0 / years) - 1.0;
    assert!(approx_eq(result.records[0].trailing_3yr_return, expected));
}

#[test]
fn anchor_one_day_short_of_threshold_is_excluded() {
    let observations = vec![obs(2010, 2, 2, 100.0), obs(2013, 1, 1, 120.0)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn nearest_date_after_lookback_still_qualifies_within_threshold() {
    // Lookback target is 2010-06-15; the nearest point is two weeks later,
    // which is still more than 2y11m before the current date.
    let observations = vec![
        obs(2009, 1, 1, 50.0),
        obs(2010, 6, 29, 100.0),
        obs(2013, 6, 15, 130.0),
    ];
    let index = DateIndex::new(observations.iter().map(|o| o.date));

    let anchor = find_anchor(&observations, &index, date(2013, 6, 15)).unwrap();
    assert_eq!(anchor.date, date(2010, 6, 29));
}

// ---------------------------------------------------------------------------
// Validity checks
// ---------------------------------------------------------------------------

#[test]
fn zero_anchor_price_is_excluded() {
    let observations = vec![obs(2010, 1, 1, 0.0), obs(2013, 1, 1, 100.0)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn negative_anchor_price_is_excluded() {
    let observations = vec![obs(2010, 1, 1, -5.0), obs(2013, 1, 1, 100.0)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn missing_anchor_price_is_excluded() {
    let observations = vec![missing(2010, 1, 1), obs(2013, 1, 1, 100.0)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn nan_anchor_price_is_excluded() {
    let observations = vec![obs(2010, 1, 1, f64::NAN), obs(2013, 1, 1, 100.0)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn missing_current_price_is_excluded() {
    let observations = vec![obs(2010, 1, 1, 100.0), missing(2013, 1, 1)];
    assert!(trailing_returns(&observations).is_empty());
}

#[test]
fn missing_prices_mid_series_only_drop_affected_points() {
    let mut observations = monthly(2010, 60, |i| 100.0 + i as f64);
    observations[40].price = None;

    let full = trailing_returns(&monthly(2010, 60, |i| 100.0 + i as f64));
    let result = trailing_returns(&observations);

    // Month 40 loses its own record; month 76 would anchor on it but is out of range.
    assert_eq!(result.len(), full.len() - 1);
    assert!(result.records.iter().all(|r| r.date != observations[40].date));
}

#[test]
fn negative_current_price_is_excluded() {
    let observations = vec![
        obs(2010, 1, 1, 100.0),
        obs(2011, 1, 1, 100.0),
        obs(2013, 1, 1, 120.0),
        obs(2014, 1, 1, -10.0),
    ];

    let result = trailing_returns(&observations);

    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].date, date(2013, 1, 1));
    assert!(result.records[0].trailing_3yr_return.is_finite());
}

#[test]
fn zero_current_price_is_total_loss() {
    let observations = vec![obs(2010, 1, 1, 100.0), obs(2013, 1, 1, 0.0)];
    let result = trailing_returns(&observations);
    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].trailing_3yr_return, -1.0);
}

#[test]
fn duplicate_current_date_does_not_anchor_on_itself() {
    let observations = vec![obs(2013, 1, 1, 100.0), obs(2013, 1, 1, 101.0)];
    assert!(trailing_returns(&observations).is_empty());
}

// ---------------------------------------------------------------------------
// Growth formula
// ---------------------------------------------------------------------------

#[test]
fn annualized_growth_uses_actual_elapsed_years() {
    let growth = annualized_growth(100.0, 200.0, 2.0).unwrap();
    assert!(approx_eq(growth, 2.0_f64.sqrt() - 1.0));
}

#[test]
fn annualized_growth_rejects_non_positive_span() {
    assert!(annualized_growth(100.0, 120.0, 0.0).is_none());
    assert!(annualized_growth(100.0, 120.0, -1.0).is_none());
}

#[test]
fn elapsed_years_uses_365_25_day_years() {
    assert_eq!(elapsed_years(date(2012, 1, 1), date(2012, 1, 1)), 0.0);
    assert!(approx_eq(
        elapsed_years(date(2011, 1, 1), date(2012, 1, 1)),
        365.0 / 365.25
    ));
}

// ---------------------------------------------------------------------------
// Anchor search and tie-break
// ---------------------------------------------------------------------------

#[test]
fn lookback_from_leap_day_clamps_to_month_end() {
    // 2016-02-29 minus 3 years is 2013-02-28.
    let observations = vec![
        obs(2013, 2, 27, 90.0),
        obs(2013, 2, 28, 100.0),
        obs(2016, 2, 29, 130.0),
    ];
    let index = DateIndex::new(observations.iter().map(|o| o.date));

    let anchor = find_anchor(&observations, &index, date(2016, 2, 29)).unwrap();
    assert_eq!(anchor.date, date(2013, 2, 28));
}

#[test]
fn equidistant_anchors_resolve_to_first_in_input_order() {
    // Lookback target 2010-07-01 sits 10 days from both candidates.
    let before = obs(2010, 6, 21, 100.0);
    let after = obs(2010, 7, 11, 200.0);
    let current = obs(2013, 7, 1, 300.0);

    let after_first = vec![after, before, current];
    let index = DateIndex::new(after_first.iter().map(|o| o.date));
    let anchor = find_anchor(&after_first, &index, current.date).unwrap();
    assert_eq!(anchor.date, after.date);

    let before_first = vec![before, after, current];
    let index = DateIndex::new(before_first.iter().map(|o| o.date));
    let anchor = find_anchor(&before_first, &index, current.date).unwrap();
    assert_eq!(anchor.date, before.date);
}

#[test]
fn duplicate_anchor_dates_resolve_to_first_occurrence() {
    let observations = vec![
        obs(2013, 1, 1, 150.0),
        obs(2010, 1, 1, 0.0),
        obs(2010, 1, 1, 100.0),
    ];

    // The first 2010-01-01 row has a zero price, so the point is dropped
    // rather than falling back to the second row.
    assert!(trailing_returns(&observations).is_empty());

    let reordered = vec![observations[2], observations[1], observations[0]];
    assert_eq!(trailing_returns(&reordered).len(), 1);
}

#[test]
fn date_index_matches_linear_scan() {
    let mut rng = Lcg(42);
    let base = date(2000, 1, 1);
    let dates: Vec<_> = (0..300)
        .map(|_| base + chrono::Days::new(rng.below(4000) as u64))
        .collect();
    let index = DateIndex::new(dates.iter().copied());

    for _ in 0..2000 {
        let target = base + chrono::Days::new(rng.below(4400) as u64);
        assert_eq!(index.nearest(target), linear_scan(&dates, target));
    }
}

#[test]
fn date_index_on_empty_column() {
    let index = DateIndex::new(Vec::<chrono::NaiveDate>::new());
    assert!(index.is_empty());
    assert_eq!(index.nearest(date(2020, 1, 1)), None);
}

/// First position with the smallest absolute distance to `target`.
fn linear_scan(dates: &[chrono::NaiveDate], target: chrono::NaiveDate) -> Option<usize> {
    let mut best: Option<(i64, usize)> = None;
    for (pos, d) in dates.iter().enumerate() {
        let dist = (*d - target).num_days().abs();
        if best.map_or(true, |(b, _)| dist < b) {
            best = Some((dist, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

// ---------------------------------------------------------------------------
// Ordering and batch properties
// ---------------------------------------------------------------------------

#[test]
fn records_follow_input_order_not_date_order() {
    let sorted = monthly(2010, 72, |i| 100.0 * (1.0 + 0.01 * (i as f64 * 0.7).sin()) + i as f64);
    let mut shuffled = sorted.clone();
    let mut rng = Lcg(7);
    for i in (1..shuffled.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        shuffled.swap(i, j);
    }

    let expected = trailing_returns(&sorted);
    let result = trailing_returns(&shuffled);

    assert_eq!(result.len(), expected.len());
    let qualifying_input_order: Vec<_> = shuffled
        .iter()
        .map(|o| o.date)
        .filter(|d| expected.records.iter().any(|r| r.date == *d))
        .collect();
    let result_order: Vec<_> = result.records.iter().map(|r| r.date).collect();
    assert_eq!(result_order, qualifying_input_order);

    for record in &result.records {
        let same = expected.records.iter().find(|r| r.date == record.date).unwrap();
        assert_eq!(record, same);
    }
}

#[test]
fn risk_scores_are_bounded_and_inverse_to_growth() {
    let observations: Vec<Observation> =
        monthly(2005, 150, |i| 100.0 + 30.0 * (i as f64 / 9.0).sin() + i as f64 * 0.5);

    let result = trailing_returns(&observations);
    assert!(!result.is_empty());

    for a in &result.records {
        assert!((0.0..=1.0).contains(&a.risk_score));
        for b in &result.records {
            if a.trailing_3yr_return > b.trailing_3yr_return + 1e-12 {
                assert!(a.risk_score < b.risk_score);
            }
        }
    }
    let min = result.records.iter().map(|r| r.risk_score).fold(f64::INFINITY, f64::min);
    let max = result.records.iter().map(|r| r.risk_score).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.0);
    assert_eq!(max, 1.0);
}

#[test]
fn constant_growth_gives_zero_risk_everywhere() {
    // Price doubles every 4 years; every span is 1461 days with the same ratio.
    let observations: Vec<Observation> = (0..10)
        .map(|i| obs(2000 + i * 4, 1, 1, 100.0 * 2.0_f64.powi(i)))
        .collect();

    let result = trailing_returns(&observations);

    // Each lookback target is one year after the previous point, which is
    // still the nearest and old enough, so growth runs over the 4-year span.
    assert!(!result.is_empty());
    let first = result.records[0].trailing_3yr_return;
    for record in &result.records {
        assert!((record.trailing_3yr_return - first).abs() < 1e-12);
        assert_eq!(record.risk_score, 0.0);
    }
}

#[test]
fn computation_is_idempotent() {
    let observations = monthly(2008, 100, |i| 50.0 + (i * i) as f64 * 0.1);
    assert_eq!(trailing_returns(&observations), trailing_returns(&observations));
}
