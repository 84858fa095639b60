//! Dates command implementation.
//!
//! Prints the two dates a report run would compare. Useful for checking
//! table freshness from cron without generating any files.

use crate::bigquery::{BigQueryClient, TableRef};
use anyhow::{Context, Result};

use super::validate_identifier;

/// Arguments for the dates command
#[derive(Debug, Clone, Default)]
pub struct DatesArgs {
    /// GCP project that owns the source table
    pub project: String,

    /// Dataset containing the source table
    pub dataset: String,

    /// Source table with per-domain daily metrics
    pub table: String,

    /// OAuth bearer token for the BigQuery API
    pub token: String,
}

/// Execute the dates command
pub fn execute_dates(args: DatesArgs) -> Result<()> {
    validate_identifier(&args.project, "project")?;
    validate_identifier(&args.dataset, "dataset")?;
    validate_identifier(&args.table, "table")?;
    if args.token.is_empty() {
        anyhow::bail!("Access token cannot be empty (use --token or DOMAIN_PULSE_TOKEN)");
    }

    let table = TableRef::new(&args.project, &args.dataset, &args.table);
    let client = BigQueryClient::new(&args.token).context("Failed to create BigQuery client")?;

    let (previous, latest) = client
        .recent_dates(&table)
        .context("Failed to resolve comparison dates")?;

    println!("Previous date: {}", previous);
    println!("Latest date:   {}", latest);

    Ok(())
}
