use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_INDEX_HTML: &str = "index.html";

/// Server settings read from the environment.
///
/// | variable                | default      |
/// |-------------------------|--------------|
/// | `HOST`                  | `0.0.0.0`    |
/// | `PORT`                  | `8001`       |
/// | `RISKOMETER_DATA_FILE`  | `data.csv`   |
/// | `RISKOMETER_INDEX_HTML` | `index.html` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` lets the library resolve its own default.
    pub data_file: Option<PathBuf>,
    pub index_html: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ParseIntError> {
        let port = match non_empty_var("PORT") {
            Some(port) => port.parse()?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host: non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_file: non_empty_var(riskometer::config::DATA_FILE_ENV).map(PathBuf::from),
            index_html: non_empty_var("RISKOMETER_INDEX_HTML")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_HTML)),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
