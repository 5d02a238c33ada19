use std::path::PathBuf;

/// Environment variable that overrides the default data file location.
pub const DATA_FILE_ENV: &str = "RISKOMETER_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Name of the date column in the backing CSV. Every other column is a series.
pub const DATE_COLUMN: &str = "DATE";
/// chrono format of the date column (`31/12/19`).
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// Name of the DuckDB view the CSV is registered under.
pub const OBSERVATIONS_VIEW: &str = "observations";

// Trailing-return policy
pub const LOOKBACK_MONTHS: u32 = 36;
pub const QUALIFYING_MONTHS: u32 = 35;
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Cell values treated as a missing price.
pub fn missing_markers() -> &'static [&'static str] {
    &[
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ]
}

pub fn default_data_file() -> PathBuf {
    match std::env::var_os(DATA_FILE_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_FILE),
    }
}
