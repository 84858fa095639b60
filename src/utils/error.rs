//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the BigQuery REST API
#[derive(Error, Debug)]
pub enum BigQueryError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("BigQuery API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Invalid query response: {0}")]
    InvalidResponse(String),

    #[error("Query did not complete within the request deadline")]
    JobIncomplete,

    #[error("Malformed result row: {0}")]
    MalformedRow(String),

    #[error("Insufficient data: found {0} distinct dates, need at least 2 for comparison")]
    InsufficientDates(usize),
}

/// Errors that can occur during report file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading the settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Settings TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
