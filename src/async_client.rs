//! Async wrapper around [`Riskometer`] for use in Tokio runtimes.
//!
//! Runs every operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the CSV is read and the series is computed.
//!
//! # Example
//!
//! ```no_run
//! use riskometer::AsyncRiskometer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let rm = AsyncRiskometer::builder().data_file("data.csv").build().await.unwrap();
//!
//!     let names = rm.list_series().await.unwrap();
//!     let report = rm.compute(&names[0], None).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{Result, RiskometerError};
use crate::models::RiskReport;
use crate::Riskometer;

// ---------------------------------------------------------------------------
// AsyncRiskometerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncRiskometer`] instance.
#[derive(Default)]
pub struct AsyncRiskometerBuilder {
    data_file: Option<PathBuf>,
}

impl AsyncRiskometerBuilder {
    /// Set the CSV file to read.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the async riskometer on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncRiskometer> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Riskometer::builder();
            if let Some(path) = self.data_file {
                builder = builder.data_file(path);
            }
            let rm = builder.build()?;
            Ok(AsyncRiskometer {
                inner: Arc::new(Mutex::new(rm)),
            })
        })
        .await
        .map_err(|e| RiskometerError::DataAccess(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncRiskometer
// ---------------------------------------------------------------------------

/// Async wrapper around [`Riskometer`].
///
/// The DuckDB connection is not `Sync`, so the [`Riskometer`] sits behind a
/// [`Mutex`] and calls are serialized. Each call is still an independent,
/// full recomputation. Cloning shares the same underlying instance.
#[derive(Clone)]
pub struct AsyncRiskometer {
    inner: Arc<Mutex<Riskometer>>,
}

impl AsyncRiskometer {
    /// Create a new builder.
    pub fn builder() -> AsyncRiskometerBuilder {
        AsyncRiskometerBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use riskometer::AsyncRiskometer;
    /// # async fn example() -> riskometer::Result<()> {
    /// # let rm = AsyncRiskometer::builder().build().await?;
    /// let series = rm.run(|r| r.series().get("NIFTY 50")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Riskometer) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let rm = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = rm
                .lock()
                .map_err(|_| RiskometerError::DataAccess("Riskometer lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| RiskometerError::DataAccess(format!("Task join error: {e}")))?
    }

    /// Names of all series in the data file.
    pub async fn list_series(&self) -> Result<Vec<String>> {
        self.run(|r| r.list_series()).await
    }

    /// Compute the riskometer report for a series.
    pub async fn compute(&self, name: &str, years: Option<u32>) -> Result<RiskReport> {
        let name = name.to_string();
        self.run(move |r| r.compute(&name, years)).await
    }
}
