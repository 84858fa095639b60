//! Ranking and summary statistics over comparison rows.

use serde::{Deserialize, Serialize};

use super::schema::DomainComparison;

/// Selects which measure of a comparison row to rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measure {
    /// Active users
    ActiveUsers,
    /// Screen pageviews
    Pageviews,
}

impl Measure {
    /// Signed change of this measure for a row
    pub fn change(&self, row: &DomainComparison) -> i64 {
        match self {
            Measure::ActiveUsers => row.users_change,
            Measure::Pageviews => row.views_change,
        }
    }

    /// Percent change of this measure for a row
    pub fn pct_change(&self, row: &DomainComparison) -> f64 {
        match self {
            Measure::ActiveUsers => row.users_pct_change,
            Measure::Pageviews => row.views_pct_change,
        }
    }

    /// Previous-date count of this measure for a row
    pub fn previous(&self, row: &DomainComparison) -> u64 {
        match self {
            Measure::ActiveUsers => row.previous_users,
            Measure::Pageviews => row.previous_views,
        }
    }

    /// Latest-date count of this measure for a row
    pub fn latest(&self, row: &DomainComparison) -> u64 {
        match self {
            Measure::ActiveUsers => row.latest_users,
            Measure::Pageviews => row.latest_views,
        }
    }

    /// Human-readable name used in report headings
    pub fn label(&self) -> &'static str {
        match self {
            Measure::ActiveUsers => "ACTIVE USERS",
            Measure::Pageviews => "PAGEVIEWS",
        }
    }
}

/// Aggregate statistics for one measure across a full comparison set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSummary {
    /// Domains whose change is positive
    pub gainers: usize,

    /// Domains whose change is negative
    pub decliners: usize,

    /// Sum of signed changes across every domain
    pub total_change: i64,
}

/// Rank the top movers for a measure
///
/// Orders by descending signed change; equal changes fall back to
/// domain name ascending so rankings are deterministic.
///
/// # Arguments
/// * `comparisons` - Full comparison set
/// * `measure` - Measure to rank by
/// * `n` - Maximum number of rows to return
pub fn top_movers<'a>(
    comparisons: &'a [DomainComparison],
    measure: Measure,
    n: usize,
) -> Vec<&'a DomainComparison> {
    let mut ranked: Vec<&DomainComparison> = comparisons.iter().collect();
    ranked.sort_by(|a, b| {
        measure
            .change(b)
            .cmp(&measure.change(a))
            .then_with(|| a.domain_name.cmp(&b.domain_name))
    });
    ranked.truncate(n);
    ranked
}

/// Summarize gainers, decliners, and the total change for a measure
pub fn summarize(comparisons: &[DomainComparison], measure: Measure) -> MeasureSummary {
    let mut summary = MeasureSummary::default();

    for row in comparisons {
        let change = measure.change(row);
        if change > 0 {
            summary.gainers += 1;
        } else if change < 0 {
            summary.decliners += 1;
        }
        summary.total_change += change;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(domain: &str, users_change: i64, views_change: i64) -> DomainComparison {
        DomainComparison {
            domain_name: domain.to_string(),
            previous_users: 0,
            latest_users: 0,
            users_change,
            users_pct_change: 0.0,
            previous_views: 0,
            latest_views: 0,
            views_change,
            views_pct_change: 0.0,
        }
    }

    #[test]
    fn test_top_movers_orders_by_signed_change() {
        let rows = vec![row("a.com", -5, 0), row("b.com", 10, 0), row("c.com", 3, 0)];
        let ranked = top_movers(&rows, Measure::ActiveUsers, 3);

        let names: Vec<&str> = ranked.iter().map(|r| r.domain_name.as_str()).collect();
        assert_eq!(names, vec!["b.com", "c.com", "a.com"]);
    }

    #[test]
    fn test_top_movers_tie_break_by_domain() {
        let rows = vec![row("z.com", 5, 0), row("a.com", 5, 0), row("m.com", 5, 0)];
        let ranked = top_movers(&rows, Measure::ActiveUsers, 3);

        let names: Vec<&str> = ranked.iter().map(|r| r.domain_name.as_str()).collect();
        assert_eq!(names, vec!["a.com", "m.com", "z.com"]);
    }

    #[test]
    fn test_top_movers_truncates() {
        let rows = vec![row("a.com", 1, 0), row("b.com", 2, 0), row("c.com", 3, 0)];
        assert_eq!(top_movers(&rows, Measure::ActiveUsers, 2).len(), 2);
    }

    #[test]
    fn test_summarize_counts_and_total() {
        let rows = vec![
            row("a.com", 10, -1),
            row("b.com", -4, -2),
            row("c.com", 0, 5),
        ];

        let users = summarize(&rows, Measure::ActiveUsers);
        assert_eq!(users.gainers, 1);
        assert_eq!(users.decliners, 1);
        assert_eq!(users.total_change, 6);

        let views = summarize(&rows, Measure::Pageviews);
        assert_eq!(views.gainers, 1);
        assert_eq!(views.decliners, 2);
        assert_eq!(views.total_change, 2);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], Measure::Pageviews);
        assert_eq!(summary, MeasureSummary::default());
    }
}
