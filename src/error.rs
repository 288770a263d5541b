use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}
