use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskometerError};

// ---------------------------------------------------------------------------
// Observation — Single dated price point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub price: Option<f64>,
}

impl Observation {
    pub fn new(date: NaiveDate, price: Option<f64>) -> Self {
        Self { date, price }
    }
}

// ---------------------------------------------------------------------------
// PriceSeries — One named column of the backing table, in file order
// ---------------------------------------------------------------------------

/// A named price series as loaded from the data source.
///
/// Observations keep the order they have in the file. That order is not
/// guaranteed to be sorted or free of duplicate dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub name: String,
    pub observations: Vec<Observation>,
}

impl PriceSeries {
    pub fn new(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    /// Build a series from positionally aligned date and price columns.
    ///
    /// Returns `InvalidArgument` when the two columns differ in length.
    pub fn from_parallel(
        name: impl Into<String>,
        dates: &[NaiveDate],
        prices: &[Option<f64>],
    ) -> Result<Self> {
        if dates.len() != prices.len() {
            return Err(RiskometerError::InvalidArgument(format!(
                "date and price columns differ in length ({} vs {})",
                dates.len(),
                prices.len()
            )));
        }
        let observations = dates
            .iter()
            .zip(prices)
            .map(|(date, price)| Observation::new(*date, *price))
            .collect();
        Ok(Self::new(name, observations))
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Latest date in the series, regardless of position.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.observations.iter().map(|o| o.date).max()
    }

    /// Keep only observations on or after `max_date - years`.
    ///
    /// `years == 0` leaves the series untouched. The cutoff is a calendar
    /// subtraction, clamped to the end of the month (29 Feb -> 28 Feb).
    pub fn trailing_window(self, years: u32) -> Self {
        if years == 0 {
            return self;
        }
        let Some(max_date) = self.max_date() else {
            return self;
        };
        let cutoff = max_date
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);

        let observations = self
            .observations
            .into_iter()
            .filter(|o| o.date >= cutoff)
            .collect();
        Self {
            name: self.name,
            observations,
        }
    }
}
