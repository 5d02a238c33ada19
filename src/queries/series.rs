//! Series listing and loading against the `observations` DuckDB view.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::PriceSeries;

// ---------------------------------------------------------------------------
// SeriesQuery
// ---------------------------------------------------------------------------

/// Query interface for the raw price series of the backing table.
pub struct SeriesQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SeriesQuery<'a> {
    /// Create a new `SeriesQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Names of all series in the table, in column order.
    pub fn list(&self) -> Result<Vec<String>> {
        self.conn.series_names()
    }

    /// Whether a series with this exact name exists.
    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|n| n == name))
    }

    /// Load a series with its dates, in file order.
    ///
    /// Returns `NotFound` for an unknown name.
    pub fn get(&self, name: &str) -> Result<PriceSeries> {
        self.conn.load_series(name)
    }

    /// Load a series restricted to its last `years` years.
    ///
    /// The window ends at the series' latest date. `None` or `Some(0)`
    /// returns the full series.
    pub fn window(&self, name: &str, years: Option<u32>) -> Result<PriceSeries> {
        let series = self.get(name)?;
        Ok(match years {
            Some(years) => series.trailing_window(years),
            None => series,
        })
    }
}
