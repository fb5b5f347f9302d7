//! Output formatting utilities.

use cadastro_documents::{DocumentReport, ReportStatus};

/// Formats a report as a simple table row.
pub fn format_table_row(line: usize, report: &DocumentReport) -> String {
    let kind = report.kind.map(|k| k.label()).unwrap_or("?");
    let status = match report.status {
        ReportStatus::Valid => "VALID",
        ReportStatus::Invalid => "INVALID",
    };

    format!(
        "{:<6} {:<5} {:<20} {:<8} {}",
        line,
        kind,
        truncate(&report.formatted, 20),
        status,
        report.reason.as_deref().unwrap_or("")
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<6} {:<5} {:<20} {:<8} {}",
        "LINE", "KIND", "DOCUMENT", "STATUS", "REASON"
    );
    println!("{}", "-".repeat(80));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
