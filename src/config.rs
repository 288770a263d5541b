use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub struct Config {
    pub api_url: String,
    pub storage_path: PathBuf,
    pub request_timeout: Duration,
    pub search_query: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_raw = lookup("REQUEST_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string());
        let timeout_secs: u64 =
            timeout_raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    var: "REQUEST_TIMEOUT_SECS",
                    value: timeout_raw.clone(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            api_url: lookup("API_URL").unwrap_or_else(|| "http://localhost:3333".to_string()),
            storage_path: lookup("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dt-money-storage.json")),
            request_timeout: Duration::from_secs(timeout_secs),
            search_query: lookup("SEARCH_QUERY").filter(|q| !q.trim().is_empty()),
        })
    }
}
