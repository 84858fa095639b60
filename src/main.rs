//! Domain Pulse CLI
//!
//! A day-over-day domain analytics reporter for BigQuery tables.
//! Generates text and CSV reports from the two most recent dates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use domain_pulse::commands::{execute_dates, execute_report, validate_args, DatesArgs, ReportArgs};
use domain_pulse::utils::config::{
    load_settings, Settings, DEFAULT_RETENTION_DAYS, DEFAULT_TOP_MOVERS,
};

/// Domain Pulse - day-over-day domain analytics from BigQuery
#[derive(Parser, Debug)]
#[command(name = "domain-pulse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the day-over-day domain report
    Report {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// GCP project that owns the source table
        #[arg(long)]
        project: Option<String>,

        /// Dataset containing the source table
        #[arg(long)]
        dataset: Option<String>,

        /// Source table with per-domain daily metrics
        #[arg(long)]
        table: Option<String>,

        /// OAuth bearer token for the BigQuery API
        #[arg(long, env = "DOMAIN_PULSE_TOKEN", hide_env_values = true)]
        token: String,

        /// Directory for generated report files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Days to keep old report files
        #[arg(long)]
        retention_days: Option<u32>,

        /// Rows per top-movers table
        #[arg(long, default_value_t = DEFAULT_TOP_MOVERS)]
        top: usize,

        /// Print a colored summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print the two dates a report would compare
    Dates {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// GCP project that owns the source table
        #[arg(long)]
        project: Option<String>,

        /// Dataset containing the source table
        #[arg(long)]
        dataset: Option<String>,

        /// Source table with per-domain daily metrics
        #[arg(long)]
        table: Option<String>,

        /// OAuth bearer token for the BigQuery API
        #[arg(long, env = "DOMAIN_PULSE_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            config,
            project,
            dataset,
            table,
            token,
            output_dir,
            retention_days,
            top,
            summary,
        } => {
            let settings = load_optional_settings(config.as_deref())?;

            let args = ReportArgs {
                project: require(project, settings.bigquery.project.clone(), "project")?,
                dataset: require(dataset, settings.bigquery.dataset.clone(), "dataset")?,
                table: require(table, settings.bigquery.table.clone(), "table")?,
                token,
                output_dir: output_dir
                    .or(settings.output.dir.clone())
                    .unwrap_or_else(|| PathBuf::from("domain_reports")),
                retention_days: retention_days
                    .or(settings.output.retention_days)
                    .unwrap_or(DEFAULT_RETENTION_DAYS),
                top_movers: top,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute report
            execute_report(args)?;
        }

        Commands::Dates {
            config,
            project,
            dataset,
            table,
            token,
        } => {
            let settings = load_optional_settings(config.as_deref())?;

            let args = DatesArgs {
                project: require(project, settings.bigquery.project.clone(), "project")?,
                dataset: require(dataset, settings.bigquery.dataset.clone(), "dataset")?,
                table: require(table, settings.bigquery.table.clone(), "table")?,
                token,
            };

            execute_dates(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Load the settings file when one was given, defaults otherwise
fn load_optional_settings(path: Option<&std::path::Path>) -> Result<Settings> {
    match path {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// Resolve a required value from flag, then settings file
fn require(flag: Option<String>, from_file: Option<String>, what: &str) -> Result<String> {
    flag.or(from_file).with_context(|| {
        format!(
            "{} is required (pass --{} or set it in the settings file)",
            what, what
        )
    })
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Domain Pulse v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Day-over-day domain analytics reporting from BigQuery.");
}
