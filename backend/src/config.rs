use std::env;

/// Runtime configuration, read from environment variables with in-source
/// fallback defaults.
///
/// The read key default is a development placeholder; deployments set
/// `SHEETS_READ_API_KEY`.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the per-kind sheet files.
    pub data_dir: String,
    /// Key required by the feedback values read endpoint.
    pub read_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("FORMS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("FORMS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("SHEETS_DATA_DIR").unwrap_or_else(|_| "./sheets".to_string()),
            read_api_key: env::var("SHEETS_READ_API_KEY")
                .unwrap_or_else(|_| "dev-read-key-7f3a".to_string()),
        }
    }
}
