//! Output directory plumbing: filenames, writes, retention.

use chrono::{DateTime, Local};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::utils::config::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::utils::error::OutputError;

/// Timestamped output paths for one report run
///
/// # Returns
/// `(txt_path, csv_path)`, both under `dir`
pub fn report_paths(dir: &Path, generated_at: DateTime<Local>) -> (PathBuf, PathBuf) {
    let stamp = generated_at.format(REPORT_TIMESTAMP_FORMAT);
    let txt = dir.join(format!("{}{}.txt", REPORT_FILE_PREFIX, stamp));
    let csv = dir.join(format!("{}{}.csv", REPORT_FILE_PREFIX, stamp));
    (txt, csv)
}

/// Write report contents to a file
///
/// Creates parent directories as needed.
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, or path is a directory
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    info!(
        "Report written: {} ({} bytes)",
        output_path.display(),
        contents.len()
    );

    Ok(())
}

/// Validate that an output path is usable
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Delete report files older than the retention window
///
/// Only files whose name starts with the report prefix are considered;
/// anything else in the directory is left alone. A missing directory
/// counts as nothing to clean.
///
/// # Returns
/// Number of files deleted
pub fn cleanup_old_reports(dir: &Path, retention_days: u32) -> Result<usize, OutputError> {
    if !dir.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now() - Duration::from_secs(u64::from(retention_days) * 86_400);
    let mut deleted = 0usize;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with(REPORT_FILE_PREFIX) {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        if modified < cutoff {
            fs::remove_file(&path)?;
            deleted += 1;
            info!("Deleted old report: {}", name);
        }
    }

    if deleted > 0 {
        info!("Cleanup complete: {} old files removed", deleted);
    } else {
        info!("Cleanup complete: no old files to remove");
    }

    Ok(deleted)
}
