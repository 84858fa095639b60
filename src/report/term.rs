//! Terminal summary rendering.
//!
//! A compact colored digest printed behind `--summary`, for humans
//! running the tool by hand rather than from cron.

use colored::*;

use crate::diff::{summarize, top_movers, DomainComparison, Measure};

use super::{format_count, format_percent, ReportContext};

/// Movers shown per measure in the terminal digest
const TERM_TOP_MOVERS: usize = 5;

/// Render a colored summary of a comparison run
pub fn render_terminal_summary(comparisons: &[DomainComparison], ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"Domain Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Previous: {}\n", ctx.previous_date));
    out.push_str(&format!("Latest:   {}\n", ctx.latest_date));
    out.push_str(&format!("Domains:  {}\n", comparisons.len()));

    out.push_str(&render_measure(comparisons, Measure::ActiveUsers, "Active Users"));
    out.push_str(&render_measure(comparisons, Measure::Pageviews, "Pageviews"));

    out
}

fn render_measure(comparisons: &[DomainComparison], measure: Measure, title: &str) -> String {
    let summary = summarize(comparisons, measure);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", title.bold()));
    out.push_str(&format!(
        "  {} gainers, {} decliners, net {}\n",
        summary.gainers.to_string().green(),
        summary.decliners.to_string().red(),
        format_count(summary.total_change)
    ));

    for row in top_movers(comparisons, measure, TERM_TOP_MOVERS) {
        let change = measure.change(row);
        let delta = format!(
            "{} ({})",
            format_count(change),
            format_percent(measure.pct_change(row))
        );
        let delta = if change > 0 {
            delta.green()
        } else if change < 0 {
            delta.red()
        } else {
            delta.normal()
        };

        out.push_str(&format!(
            "  {:<40} {} -> {} {}\n",
            row.domain_name,
            format_count(measure.previous(row) as i64),
            format_count(measure.latest(row) as i64),
            delta
        ));
    }

    out
}
