//! Core comparison engine.
//!
//! Merges two snapshot sets into one comparison row per domain,
//! including edge cases like division by zero and one-sided domains.

use std::collections::{BTreeSet, HashMap};

use crate::snapshot::MetricSnapshot;

use super::schema::DomainComparison;

/// Compare two snapshot sets domain by domain
///
/// Performs a full outer join on `domain_name`: every domain present in
/// either set produces exactly one output row, with the absent side
/// counted as 0. Each set must hold at most one row per domain (the
/// source query aggregates before this runs).
///
/// The result is not ranked for presentation; callers sort it. Rows come
/// out in domain-name order so repeated runs are reproducible.
///
/// # Arguments
/// * `previous` - Snapshot set for the earlier date
/// * `latest` - Snapshot set for the most recent date
pub fn compare_domains(
    previous: &[MetricSnapshot],
    latest: &[MetricSnapshot],
) -> Vec<DomainComparison> {
    let previous_by_domain: HashMap<&str, &MetricSnapshot> = previous
        .iter()
        .map(|snap| (snap.domain_name.as_str(), snap))
        .collect();

    let latest_by_domain: HashMap<&str, &MetricSnapshot> = latest
        .iter()
        .map(|snap| (snap.domain_name.as_str(), snap))
        .collect();

    // Union of domain names across both sides
    let mut domains: BTreeSet<&str> = previous_by_domain.keys().copied().collect();
    domains.extend(latest_by_domain.keys().copied());

    domains
        .into_iter()
        .map(|domain| {
            let prev = previous_by_domain.get(domain);
            let curr = latest_by_domain.get(domain);

            let previous_users = prev.map_or(0, |snap| snap.active_users);
            let latest_users = curr.map_or(0, |snap| snap.active_users);
            let previous_views = prev.map_or(0, |snap| snap.pageviews);
            let latest_views = curr.map_or(0, |snap| snap.pageviews);

            let users_change = (latest_users as i64) - (previous_users as i64);
            let views_change = (latest_views as i64) - (previous_views as i64);

            DomainComparison {
                domain_name: domain.to_string(),
                previous_users,
                latest_users,
                users_change,
                users_pct_change: percent_change(users_change, previous_users),
                previous_views,
                latest_views,
                views_change,
                views_pct_change: percent_change(views_change, previous_views),
            }
        })
        .collect()
}

/// Calculate percentage change, rounded to one decimal place
///
/// A zero previous count yields 0.0 rather than an infinite or undefined
/// ratio. Domains that are new on the latest date must not be reported as
/// infinite growth; consumers rely on this convention.
///
/// # Arguments
/// * `change` - Absolute change (can be negative)
/// * `previous` - Count on the previous date
pub fn percent_change(change: i64, previous: u64) -> f64 {
    if previous == 0 {
        0.0
    } else {
        let pct = (change as f64 / previous as f64) * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_normal() {
        assert_eq!(percent_change(50, 100), 50.0);
        assert_eq!(percent_change(-25, 100), -25.0);
    }

    #[test]
    fn test_percent_change_zero_previous() {
        // Should not panic and should return 0.0
        assert_eq!(percent_change(10, 0), 0.0);
        assert_eq!(percent_change(0, 0), 0.0);
    }

    #[test]
    fn test_percent_change_rounds_to_one_decimal() {
        // 1 / 300 * 100 = 0.333... -> 0.3
        assert_eq!(percent_change(1, 300), 0.3);
        // 2 / 300 * 100 = 0.666... -> 0.7
        assert_eq!(percent_change(2, 300), 0.7);
        assert_eq!(percent_change(-100, 1000), -10.0);
    }

    #[test]
    fn test_percent_change_is_finite() {
        assert!(percent_change(i64::MAX / 2, 1).is_finite());
        assert!(percent_change(0, 0).is_finite());
    }
}
