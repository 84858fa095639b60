//! Report file management.
//!
//! This module handles everything that touches the output directory:
//! - timestamped filename pairs for each run
//! - validated, buffered report writes
//! - the retention sweep that deletes old reports

pub mod files;

// Re-export main functions
pub use files::{cleanup_old_reports, report_paths, validate_output_path, write_report};
