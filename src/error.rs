//! Error types for city-suggest

use thiserror::Error;

/// Main error type for city-suggest operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("q parameter is required")]
    MissingQuery,

    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for city-suggest operations
pub type Result<T> = std::result::Result<T, Error>;
