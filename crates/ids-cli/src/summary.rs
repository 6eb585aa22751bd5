//! Human-readable validation summaries.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use ids_model::{IssueSeverity, ValidationReport};

/// Print the validation outcome for one document to stdout.
pub fn print_report(document: &str, report: &ValidationReport) {
    if report.issues.is_empty() {
        println!("{document}: valid, no findings");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Severity", "Message", "Path"]);
    for issue in &report.issues {
        table.add_row(vec![
            severity_label(issue.severity),
            issue.message.as_str(),
            issue.path_hint.as_deref().unwrap_or("-"),
        ]);
    }
    println!("{table}");
    println!(
        "{document}: {}, {} error(s), {} warning(s)",
        if report.is_valid() { "valid" } else { "invalid" },
        report.error_count(),
        report.warning_count()
    );
}

fn severity_label(severity: IssueSeverity) -> &'static str {
    match severity {
        IssueSeverity::Error => "error",
        IssueSeverity::Warning => "warning",
    }
}
