//! Configuration and constants for the CLI.
//!
//! Holds the compile-time defaults plus the optional TOML settings
//! file that cron deployments use instead of long flag lists.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ConfigError;

/// Base URL for the BigQuery REST API
pub const BIGQUERY_API_BASE: &str = "https://bigquery.googleapis.com/bigquery/v2";

/// Default timeout for BigQuery HTTP requests
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// Default retention window for generated report files
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Default number of top movers shown per measure
pub const DEFAULT_TOP_MOVERS: usize = 10;

/// Filename prefix shared by all generated reports (retention keys off this)
pub const REPORT_FILE_PREFIX: &str = "domain_report_";

/// Timestamp format embedded in report filenames
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Settings file contents
///
/// Every field is optional; CLI flags override file values and
/// file values override built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// BigQuery source table coordinates
    #[serde(default)]
    pub bigquery: BigQuerySettings,

    /// Report output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// `[bigquery]` section of the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BigQuerySettings {
    /// GCP project that owns the table
    pub project: Option<String>,

    /// Dataset containing the table
    pub dataset: Option<String>,

    /// Table with per-domain daily metrics
    pub table: Option<String>,
}

/// `[output]` section of the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    /// Directory for generated reports
    pub dir: Option<PathBuf>,

    /// Days to keep old report files
    pub retention_days: Option<u32>,
}

/// Load settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML settings file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If the file cannot be read
/// * `ConfigError::ParseFailed` - If the TOML is invalid
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;
    Ok(settings)
}
