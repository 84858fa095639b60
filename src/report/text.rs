//! Fixed-width text report writer.

use crate::diff::{summarize, top_movers, DomainComparison, Measure};

use super::{direction_arrow, format_count, format_percent, ReportContext};

/// Report line width, matching the widest table row
const LINE_WIDTH: usize = 120;

/// Render the complete text report
///
/// # Arguments
/// * `comparisons` - Full comparison set
/// * `ctx` - Date range and generation timestamp
/// * `top_n` - Rows per top-movers table
pub fn render_text_report(
    comparisons: &[DomainComparison],
    ctx: &ReportContext,
    top_n: usize,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(LINE_WIDTH);

    // Header block
    out.push_str(&rule);
    out.push('\n');
    out.push_str("DOMAIN ANALYSIS REPORT\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        ctx.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Data Range: {} to {}\n",
        ctx.previous_date, ctx.latest_date
    ));
    out.push_str(&format!("Total Domains Analyzed: {}\n", comparisons.len()));

    out.push_str(&render_measure_table(
        comparisons,
        Measure::ActiveUsers,
        ctx,
        top_n,
        1,
    ));
    out.push_str("\n\n");
    out.push_str(&render_measure_table(
        comparisons,
        Measure::Pageviews,
        ctx,
        top_n,
        2,
    ));
    out.push_str("\n\n");

    // Footer
    out.push_str(&rule);
    out.push('\n');
    out.push_str("End of Report\n");
    out.push_str(&rule);
    out.push('\n');

    out
}

/// Render one top-movers table with its summary line
fn render_measure_table(
    comparisons: &[DomainComparison],
    measure: Measure,
    ctx: &ReportContext,
    top_n: usize,
    table_number: usize,
) -> String {
    let movers = top_movers(comparisons, measure, top_n);
    let summary = summarize(comparisons, measure);

    let mut lines = Vec::new();
    lines.push(format!("\n{}", "=".repeat(LINE_WIDTH)));
    lines.push(format!(
        "TABLE {}: TOP {} DOMAINS BY {} CHANGE",
        table_number,
        top_n,
        measure.label()
    ));
    lines.push("=".repeat(LINE_WIDTH));
    lines.push(String::new());

    // Column headers carry the actual dates, latest first
    lines.push(format!(
        "{:<6} {:<40} {:<15} {:<15} {:<15} {:<12} {:<4}",
        "Rank",
        "Domain",
        ctx.latest_date.to_string(),
        ctx.previous_date.to_string(),
        "Change",
        "Change %",
        "Dir"
    ));
    lines.push("-".repeat(LINE_WIDTH));

    for (rank, row) in movers.iter().enumerate() {
        let change = measure.change(row);
        lines.push(format!(
            "{:<6} {:<40} {:<15} {:<15} {:<15} {:<12} {:<4}",
            rank + 1,
            row.domain_name,
            format_count(measure.latest(row) as i64),
            format_count(measure.previous(row) as i64),
            format_count(change),
            format_percent(measure.pct_change(row)),
            direction_arrow(change)
        ));
    }

    lines.push("-".repeat(LINE_WIDTH));
    lines.push(format!(
        "Summary: {} gainers, {} decliners | Total change: {}",
        summary.gainers,
        summary.decliners,
        format_count(summary.total_change)
    ));
    lines.push("=".repeat(LINE_WIDTH));

    lines.join("\n")
}
