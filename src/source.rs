//! Location and validation of the backing CSV file.
//!
//! The file is never copied or cached: every load goes back to the path on
//! disk, so edits to the CSV are visible on the next query.

use crate::config;
use crate::error::{Result, RiskometerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Points at the CSV table holding the `DATE` column and one column per series.
#[derive(Debug, Clone)]
pub struct DataSource {
    /// Path of the CSV file.
    pub path: PathBuf,
}

impl DataSource {
    /// Create a data source.
    ///
    /// If `path` is `None`, uses `$RISKOMETER_DATA_FILE` or `data.csv` in the
    /// working directory.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(config::default_data_file),
        }
    }

    /// Check that the file exists and is a regular file.
    ///
    /// Failures are reported as `DataAccess`, never `NotFound`: a missing data
    /// file is a broken deployment, not an unknown series.
    pub fn ensure_readable(&self) -> Result<&Path> {
        let meta = fs::metadata(&self.path).map_err(|e| {
            RiskometerError::DataAccess(format!(
                "cannot read data file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if !meta.is_file() {
            return Err(RiskometerError::DataAccess(format!(
                "data file {} is not a regular file",
                self.path.display()
            )));
        }
        Ok(self.path.as_path())
    }

    /// The path as a DuckDB string literal body.
    ///
    /// Uses forward slashes and doubles single quotes.
    pub fn sql_path(&self) -> String {
        self.path
            .to_string_lossy()
            .replace('\\', "/")
            .replace('\'', "''")
    }
}
