#[derive(Debug, thiserror::Error)]
pub enum RiskometerError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RiskometerError {
    /// True when the backing data could not be read or parsed.
    ///
    /// Callers use this to tell a broken data source apart from a request
    /// for a series that does not exist.
    pub fn is_data_access(&self) -> bool {
        matches!(
            self,
            RiskometerError::DuckDb(_) | RiskometerError::Io(_) | RiskometerError::DataAccess(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RiskometerError>;
