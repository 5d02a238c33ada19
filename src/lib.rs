//! Riskometer for historical index prices.
//!
//! Loads a CSV table of index prices (a `DATE` column plus one column per
//! index) through DuckDB and computes, for every observation, the annualized
//! trailing 3-year return and a risk score in `[0, 1]` obtained by inverting
//! the min-max normalized returns of the whole series.
//!
//! # Quick start
//!
//! ```no_run
//! use riskometer::Riskometer;
//!
//! let rm = Riskometer::builder().data_file("data.csv").build().unwrap();
//!
//! // Available indices
//! let names = rm.list_series().unwrap();
//!
//! // Riskometer over the last 10 years of data
//! let report = rm.compute("NIFTY 50", Some(10)).unwrap();
//! println!("current risk: {}", report.statistics.current_risk);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;
pub mod trailing;

#[cfg(feature = "async")]
pub use async_client::AsyncRiskometer;
pub use connection::Connection;
pub use error::{Result, RiskometerError};
pub use models::{Observation, PriceSeries, RiskReport, Statistics, TrailingRecord, TrailingReturns};
pub use source::DataSource;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// RiskometerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Riskometer`] instance.
///
/// Use [`Riskometer::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](RiskometerBuilder::build).
#[derive(Default)]
pub struct RiskometerBuilder {
    data_file: Option<PathBuf>,
}

impl RiskometerBuilder {
    /// Set the CSV file to read.
    ///
    /// If not set, `$RISKOMETER_DATA_FILE` is used, falling back to
    /// `data.csv` in the working directory.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the riskometer, opening the DuckDB connection.
    ///
    /// The data file is **not** read here; it is read (again) by every query.
    pub fn build(self) -> Result<Riskometer> {
        let source = DataSource::new(self.data_file);
        let conn = Connection::new(source)?;
        Ok(Riskometer { conn })
    }
}

// ---------------------------------------------------------------------------
// Riskometer
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Wraps a [`Connection`] and exposes the query interfaces as lightweight
/// borrowing wrappers. Created via [`Riskometer::builder()`].
pub struct Riskometer {
    conn: Connection,
}

impl Riskometer {
    /// Create a new builder.
    pub fn builder() -> RiskometerBuilder {
        RiskometerBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the series query interface (listing and raw loading).
    pub fn series(&self) -> queries::SeriesQuery<'_> {
        queries::SeriesQuery::new(&self.conn)
    }

    /// Access the riskometer query interface.
    pub fn risk(&self) -> queries::RiskQuery<'_> {
        queries::RiskQuery::new(&self.conn)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Names of all series in the data file.
    pub fn list_series(&self) -> Result<Vec<String>> {
        self.series().list()
    }

    /// Compute the riskometer report for a series.
    ///
    /// `years`, when non-zero, limits the analysis to the last `years` years
    /// of the series before the calculation runs.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the series does not exist.
    /// * `DataAccess`, `DuckDb` or `Io` if the data file is missing or malformed.
    pub fn compute(&self, name: &str, years: Option<u32>) -> Result<RiskReport> {
        self.risk().compute(name, years)
    }

    /// Path of the backing data file.
    pub fn data_file(&self) -> &Path {
        &self.conn.source.path
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Riskometer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Riskometer(data_file={})", self.data_file().display())
    }
}
