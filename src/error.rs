use thiserror::Error;

/// Errors surfaced by motivar operations. Every variant is terminal for the
/// current invocation; `main` reports it and exits 1.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("language not supported. Use 'br' or 'us'")]
    UnsupportedLanguage,

    #[error("format not supported. Use 'csv' or 'json'")]
    UnsupportedFormat,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} fetching {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("the body ({length} bytes) exceeded the limit ({limit} bytes)")]
    BodyTooLarge { length: usize, limit: usize },

    #[error("invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
