//! Flat CSV export writer.
//!
//! Column names mirror the comparison schema exactly; existing export
//! consumers parse them by name, so they must not drift.

use crate::diff::{top_movers, DomainComparison, Measure};

use super::ReportContext;

/// Column header row
const HEADER: &str = "domain_name,previous_users,latest_users,users_change,users_pct_change,\
previous_views,latest_views,views_change,views_pct_change,\
report_date,previous_date,latest_date";

/// Render the CSV export with every domain in the comparison set
///
/// Rows are sorted by `users_change` descending (ties by domain name)
/// so the biggest movers lead the file.
pub fn render_csv_report(comparisons: &[DomainComparison], ctx: &ReportContext) -> String {
    let report_date = ctx.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let ordered = top_movers(comparisons, Measure::ActiveUsers, comparisons.len());

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for row in ordered {
        out.push_str(&format!(
            "{},{},{},{},{:.1},{},{},{},{:.1},{},{},{}\n",
            escape_field(&row.domain_name),
            row.previous_users,
            row.latest_users,
            row.users_change,
            row.users_pct_change,
            row.previous_views,
            row.latest_views,
            row.views_change,
            row.views_pct_change,
            escape_field(&report_date),
            ctx.previous_date,
            ctx.latest_date
        ));
    }

    out
}

/// Quote a field if it contains separators or quotes
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
