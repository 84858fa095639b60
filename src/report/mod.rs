//! Report rendering.
//!
//! This module turns a comparison set into the three consumer formats:
//! - fixed-width text report (file)
//! - flat CSV export (file)
//! - compact colored summary (terminal, behind --summary)
//!
//! Renderers produce strings; the `output` module owns file I/O.

pub mod csv;
pub mod term;
pub mod text;

// Re-export main entry points
pub use csv::render_csv_report;
pub use term::render_terminal_summary;
pub use text::render_text_report;

use chrono::{DateTime, Local, NaiveDate};

/// Metadata shared by every renderer
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// The earlier comparison date
    pub previous_date: NaiveDate,

    /// The most recent comparison date
    pub latest_date: NaiveDate,

    /// When this report run started
    pub generated_at: DateTime<Local>,
}

/// Format a count with comma thousands separators
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a percentage with an explicit sign and one decimal place
pub fn format_percent(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Direction arrow for a signed change
pub fn direction_arrow(change: i64) -> &'static str {
    if change > 0 {
        "↑"
    } else if change < 0 {
        "↓"
    } else {
        "→"
    }
}
