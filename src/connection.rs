//! DuckDB connection wrapper that exposes the backing CSV as a view and
//! loads individual series from it.
//!
//! The CSV is read with every column as VARCHAR; dates and prices are parsed
//! here so that malformed cells surface as `DataAccess` errors naming the
//! offending row and column.

use crate::config::{self, DATE_COLUMN, DATE_FORMAT, OBSERVATIONS_VIEW};
use crate::error::{Result, RiskometerError};
use crate::models::{Observation, PriceSeries};
use crate::source::DataSource;
use chrono::NaiveDate;
use duckdb::Connection as DuckDbConnection;

/// Wraps an in-memory DuckDB connection over a [`DataSource`].
///
/// The view is re-created on every load, so each query re-reads the file
/// and nothing is cached between calls.
pub struct Connection {
    conn: DuckDbConnection,
    /// The CSV file backing the view.
    pub source: DataSource,
}

impl Connection {
    /// Create a connection backed by the given data source.
    ///
    /// Opens an in-memory DuckDB database. The file itself is not touched
    /// until the first query.
    pub fn new(source: DataSource) -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self { conn, source })
    }

    /// (Re-)register the CSV file as the `observations` view.
    pub fn register_view(&self) -> Result<()> {
        self.source.ensure_readable()?;
        let path_str = self.source.sql_path();

        self.conn.execute_batch(&format!(
            "CREATE OR REPLACE VIEW {} AS \
             SELECT * FROM read_csv('{}', header = true, all_varchar = true)",
            OBSERVATIONS_VIEW, path_str
        ))?;
        tracing::debug!(view = OBSERVATIONS_VIEW, path = %path_str, "registered view");

        Ok(())
    }

    /// Column names of the table in file order, including the date column.
    ///
    /// Fails with `DataAccess` if the table has no `DATE` column.
    pub fn columns(&self) -> Result<Vec<String>> {
        self.register_view()?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT column_name FROM (DESCRIBE SELECT * FROM {})",
            OBSERVATIONS_VIEW
        ))?;
        let mut rows = stmt.query([])?;

        let mut columns: Vec<String> = Vec::new();
        while let Some(row) = rows.next()? {
            let col_name: String = row.get(0)?;
            columns.push(col_name);
        }

        if !columns.iter().any(|c| c == DATE_COLUMN) {
            return Err(RiskometerError::DataAccess(format!(
                "data file {} has no {} column",
                self.source.path.display(),
                DATE_COLUMN
            )));
        }
        Ok(columns)
    }

    /// Names of every series column, i.e. every column except `DATE`.
    pub fn series_names(&self) -> Result<Vec<String>> {
        Ok(self
            .columns()?
            .into_iter()
            .filter(|c| c != DATE_COLUMN)
            .collect())
    }

    /// Load one series with its dates, in file order.
    ///
    /// Returns `NotFound` if `name` is not a series column of the table.
    pub fn load_series(&self, name: &str) -> Result<PriceSeries> {
        let names = self.series_names()?;
        if !names.iter().any(|n| n == name) {
            return Err(RiskometerError::NotFound(format!("Index '{}' not found", name)));
        }

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {}, {} FROM {}",
            quote_ident(DATE_COLUMN),
            quote_ident(name),
            OBSERVATIONS_VIEW
        ))?;
        let mut rows = stmt.query([])?;

        let mut observations: Vec<Observation> = Vec::new();
        while let Some(row) = rows.next()? {
            let row_no = observations.len() + 1;
            let raw_date: Option<String> = row.get(0)?;
            let raw_price: Option<String> = row.get(1)?;

            let date = parse_date(raw_date.as_deref()).ok_or_else(|| {
                RiskometerError::DataAccess(format!(
                    "row {}: invalid {} value {:?}, expected {}",
                    row_no,
                    DATE_COLUMN,
                    raw_date.as_deref().unwrap_or(""),
                    DATE_FORMAT
                ))
            })?;
            let price = parse_price(raw_price.as_deref()).map_err(|bad| {
                RiskometerError::DataAccess(format!(
                    "row {}: invalid number {:?} in column '{}'",
                    row_no, bad, name
                ))
            })?;

            observations.push(Observation::new(date, price));
        }

        tracing::debug!(series = name, rows = observations.len(), "loaded series");
        Ok(PriceSeries::new(name, observations))
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Parse a `DATE` cell (`dd/mm/yy`). Two-digit years 70-99 are 19xx, 00-69 are 20xx.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = raw?.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Parse a price cell.
///
/// Missing markers (empty, `NA`, `NaN`, ...) yield `Ok(None)`. Anything else
/// that is not a number is returned back as the error.
pub fn parse_price(raw: Option<&str>) -> std::result::Result<Option<f64>, String> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let text = raw.trim();
    if config::missing_markers().contains(&text) {
        return Ok(None);
    }
    text.parse::<f64>().map(Some).map_err(|_| raw.to_string())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
