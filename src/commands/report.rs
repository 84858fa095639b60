//! Report command implementation.
//!
//! The report command:
//! 1. Connects to BigQuery
//! 2. Resolves the two most recent dates
//! 3. Fetches aggregated per-domain rows and partitions them
//! 4. Computes the day-over-day comparison
//! 5. Writes the text and CSV reports
//! 6. Applies the retention policy to the output directory

use crate::bigquery::{BigQueryClient, TableRef};
use crate::diff::compare_domains;
use crate::output::{cleanup_old_reports, report_paths, write_report};
use crate::report::{render_csv_report, render_terminal_summary, render_text_report, ReportContext};
use crate::snapshot::partition_rows;
use crate::utils::config::{DEFAULT_RETENTION_DAYS, DEFAULT_TOP_MOVERS};
use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

use super::validate_identifier;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// GCP project that owns the source table
    pub project: String,

    /// Dataset containing the source table
    pub dataset: String,

    /// Source table with per-domain daily metrics
    pub table: String,

    /// OAuth bearer token for the BigQuery API
    pub token: String,

    /// Directory for generated report files
    pub output_dir: PathBuf,

    /// Days to keep old report files
    pub retention_days: u32,

    /// Rows per top-movers table
    pub top_movers: usize,

    /// Print a colored summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            project: String::new(),
            dataset: String::new(),
            table: String::new(),
            token: String::new(),
            output_dir: PathBuf::from("domain_reports"),
            retention_days: DEFAULT_RETENTION_DAYS,
            top_movers: DEFAULT_TOP_MOVERS,
            print_summary: false,
        }
    }
}

/// Validate report arguments
///
/// **Public** - called before execute_report for early failure
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    validate_identifier(&args.project, "project")?;
    validate_identifier(&args.dataset, "dataset")?;
    validate_identifier(&args.table, "table")?;

    if args.token.is_empty() {
        anyhow::bail!("Access token cannot be empty (use --token or DOMAIN_PULSE_TOKEN)");
    }

    if args.top_movers == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_movers > 1000 {
        anyhow::bail!("top is too large (max 1000)");
    }

    if args.retention_days == 0 {
        anyhow::bail!("retention-days must be greater than 0");
    }

    Ok(())
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * BigQuery connection or query failures
/// * Fewer than two distinct dates in the source table
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();
    let table = TableRef::new(&args.project, &args.dataset, &args.table);

    info!("Starting domain report for table {}", table.qualified());

    // Step 1: Connect
    info!("Step 1/6: Connecting to BigQuery...");
    let client = BigQueryClient::new(&args.token).context("Failed to create BigQuery client")?;

    // Step 2: Resolve the comparison dates. Fails here, before the diff,
    // when the table holds fewer than two distinct dates.
    info!("Step 2/6: Resolving comparison dates...");
    let (previous_date, latest_date) = client
        .recent_dates(&table)
        .context("Failed to resolve comparison dates")?;

    // Step 3: Fetch and partition rows
    info!("Step 3/6: Fetching domain rows...");
    let rows = client
        .domain_snapshots(&table, previous_date, latest_date)
        .context("Failed to fetch domain rows")?;
    let pair = partition_rows(rows, previous_date, latest_date);

    debug!(
        "Partitioned rows: {} previous, {} latest",
        pair.previous.len(),
        pair.latest.len()
    );

    // Step 4: Compare
    info!("Step 4/6: Calculating day-over-day changes...");
    let comparisons = compare_domains(&pair.previous, &pair.latest);
    info!("Calculated changes for {} domains", comparisons.len());

    // Step 5: Render and write both reports
    info!("Step 5/6: Writing report files...");
    let ctx = ReportContext {
        previous_date,
        latest_date,
        generated_at: Local::now(),
    };
    let (txt_path, csv_path) = report_paths(&args.output_dir, ctx.generated_at);

    write_report(&render_text_report(&comparisons, &ctx, args.top_movers), &txt_path)
        .context("Failed to write text report")?;
    write_report(&render_csv_report(&comparisons, &ctx), &csv_path)
        .context("Failed to write CSV report")?;

    // Step 6: Retention sweep
    info!("Step 6/6: Cleaning up old reports...");
    cleanup_old_reports(&args.output_dir, args.retention_days)
        .context("Failed to clean up old reports")?;

    if args.print_summary {
        println!("{}", render_terminal_summary(&comparisons, &ctx));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());
    info!("TXT report: {}", txt_path.display());
    info!("CSV report: {}", csv_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> ReportArgs {
        ReportArgs {
            project: "acme-analytics".to_string(),
            dataset: "daily".to_string(),
            table: "domain_metrics".to_string(),
            token: "ya29.token".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_project() {
        let args = ReportArgs {
            project: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_token() {
        let args = ReportArgs {
            token: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_bounds() {
        let zero = ReportArgs {
            top_movers: 0,
            ..valid_args()
        };
        assert!(validate_args(&zero).is_err());

        let huge = ReportArgs {
            top_movers: 2000,
            ..valid_args()
        };
        assert!(validate_args(&huge).is_err());
    }

    #[test]
    fn test_validate_args_zero_retention() {
        let args = ReportArgs {
            retention_days: 0,
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }
}
