//! Tests for report file output and retention.

use chrono::TimeZone;
use domain_pulse::output::{cleanup_old_reports, report_paths, validate_output_path, write_report};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

#[test]
fn test_write_and_read_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("domain_report_test.txt");

    write_report("hello report\n", &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "hello report\n");
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("nested/dirs/domain_report_test.csv");

    write_report("a,b\n", &nested).unwrap();

    assert!(nested.exists());
}

#[test]
fn test_write_rejects_directory_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(write_report("x", temp_dir.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_output_path(Path::new("")).is_err());
}

#[test]
fn test_report_paths_pair() {
    let when = chrono::Local.with_ymd_and_hms(2025, 8, 7, 6, 30, 5).unwrap();
    let (txt, csv) = report_paths(Path::new("reports"), when);

    assert!(txt.to_str().unwrap().ends_with("domain_report_2025-08-07_063005.txt"));
    assert!(csv.to_str().unwrap().ends_with("domain_report_2025-08-07_063005.csv"));
}

#[test]
fn test_cleanup_removes_only_old_reports() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let old_report = dir.join("domain_report_2020-01-01_000000.txt");
    let fresh_report = dir.join("domain_report_2025-08-07_063000.txt");
    let unrelated = dir.join("notes.txt");
    fs::write(&old_report, "old").unwrap();
    fs::write(&fresh_report, "fresh").unwrap();
    fs::write(&unrelated, "keep me").unwrap();

    // Age the old report's mtime past the retention window
    let stale = SystemTime::now() - Duration::from_secs(40 * 86_400);
    set_mtime(&old_report, stale);

    let deleted = cleanup_old_reports(dir, 30).unwrap();

    assert_eq!(deleted, 1);
    assert!(!old_report.exists());
    assert!(fresh_report.exists());
    assert!(unrelated.exists());
}

#[test]
fn test_cleanup_missing_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("never_created");

    assert_eq!(cleanup_old_reports(&missing, 30).unwrap(), 0);
}

/// Set a file's modification time (test helper)
fn set_mtime(path: &Path, to: SystemTime) {
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_times(fs::FileTimes::new().set_modified(to)).unwrap();
}
