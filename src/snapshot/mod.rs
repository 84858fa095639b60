//! Per-domain metric snapshots.
//!
//! A snapshot is one row per `(date, domain_name)` with measures already
//! summed across any secondary dimension by the source query.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Aggregated metrics for one domain on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Date the metrics were recorded for
    pub date: NaiveDate,

    /// Domain the metrics belong to
    pub domain_name: String,

    /// Total active users across all sub-dimensions
    pub active_users: u64,

    /// Total pageviews across all sub-dimensions
    pub pageviews: u64,
}

/// The two labeled snapshot sets a comparison runs over
#[derive(Debug, Clone)]
pub struct SnapshotPair {
    /// The earlier of the two dates
    pub previous_date: NaiveDate,

    /// The most recent date
    pub latest_date: NaiveDate,

    /// Rows recorded on `previous_date`
    pub previous: Vec<MetricSnapshot>,

    /// Rows recorded on `latest_date`
    pub latest: Vec<MetricSnapshot>,
}

/// Split a flat row set into previous and latest snapshot sets
///
/// Rows carrying any other date are dropped; the source query already
/// filters to the two dates, so anything else is stray data.
///
/// # Arguments
/// * `rows` - Fetched rows for both dates
/// * `previous_date` - The earlier date label
/// * `latest_date` - The most recent date label
pub fn partition_rows(
    rows: Vec<MetricSnapshot>,
    previous_date: NaiveDate,
    latest_date: NaiveDate,
) -> SnapshotPair {
    let mut previous = Vec::new();
    let mut latest = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        if row.date == previous_date {
            previous.push(row);
        } else if row.date == latest_date {
            latest.push(row);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!("Skipped {} rows outside the comparison dates", skipped);
    }

    SnapshotPair {
        previous_date,
        latest_date,
        previous,
        latest,
    }
}
