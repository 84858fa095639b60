//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod dates;
pub mod report;

// Re-export main command functions
pub use dates::{execute_dates, DatesArgs};
pub use report::{execute_report, validate_args, ReportArgs};

use anyhow::Result;

/// Validate a BigQuery identifier segment (project, dataset, or table)
///
/// Keeps query assembly safe: identifiers are interpolated into SQL, so
/// only the characters BigQuery itself allows may pass.
pub(crate) fn validate_identifier(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!("{} contains invalid characters: {}", what, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier_accepts_normal_names() {
        assert!(validate_identifier("acme-analytics", "project").is_ok());
        assert!(validate_identifier("dap_daily", "dataset").is_ok());
    }

    #[test]
    fn test_validate_identifier_rejects_sql() {
        assert!(validate_identifier("", "project").is_err());
        assert!(validate_identifier("x`; DROP TABLE", "table").is_err());
        assert!(validate_identifier("a b", "dataset").is_err());
    }
}
