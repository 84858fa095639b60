//! Schema definitions for comparison results.
//!
//! Field names are a stable contract: the CSV export and any downstream
//! consumers read these names verbatim.

use serde::{Deserialize, Serialize};

/// Day-over-day comparison for a single domain
///
/// One row exists per domain observed on either of the two dates.
/// A domain missing on one side has its counters for that side set to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainComparison {
    /// Domain the row describes, unique within a comparison set
    pub domain_name: String,

    /// Active users on the previous date (0 if absent)
    pub previous_users: u64,

    /// Active users on the latest date (0 if absent)
    pub latest_users: u64,

    /// Signed change in active users (latest - previous)
    pub users_change: i64,

    /// Percent change in active users, one decimal place.
    /// Exactly 0.0 when the previous count is 0.
    pub users_pct_change: f64,

    /// Pageviews on the previous date (0 if absent)
    pub previous_views: u64,

    /// Pageviews on the latest date (0 if absent)
    pub latest_views: u64,

    /// Signed change in pageviews (latest - previous)
    pub views_change: i64,

    /// Percent change in pageviews, one decimal place.
    /// Exactly 0.0 when the previous count is 0.
    pub views_pct_change: f64,
}
