//! JSON report output.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use ids_model::{IssueSeverity, ValidationReport};

const REPORT_SCHEMA: &str = "ids-studio.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Serializable envelope for one validation run.
#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub document: String,
    pub valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<ValidationIssueJson>,
}

#[derive(Debug, Serialize)]
pub struct ValidationIssueJson {
    pub severity: IssueSeverity,
    pub message: String,
    pub path_hint: Option<String>,
}

impl ValidationReportPayload {
    pub fn new(document: &str, report: &ValidationReport) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            document: document.to_string(),
            valid: report.is_valid(),
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            issues: report
                .issues
                .iter()
                .map(|issue| ValidationIssueJson {
                    severity: issue.severity,
                    message: issue.message.clone(),
                    path_hint: issue.path_hint.clone(),
                })
                .collect(),
        }
    }
}

/// Write the validation report as pretty-printed JSON.
pub fn write_validation_report_json(
    output_path: &Path,
    document: &str,
    report: &ValidationReport,
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let payload = ValidationReportPayload::new(document, report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use ids_model::ValidationIssue;

    use super::*;

    #[test]
    fn payload_carries_counts_and_validity() {
        let mut report = ValidationReport::default();
        report.add(ValidationIssue::error("missing title", Some("ids/info")));
        report.add(ValidationIssue::warning("no description", None));
        let payload = ValidationReportPayload::new("walls.ids", &report);
        assert!(!payload.valid);
        assert_eq!(payload.error_count, 1);
        assert_eq!(payload.warning_count, 1);
        assert_eq!(payload.issues.len(), 2);
        let json = serde_json::to_string(&payload).expect("serialize payload");
        assert!(json.contains("ids-studio.validation-report"));
    }

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let report = ValidationReport::default();
        let written =
            write_validation_report_json(&path, "walls.ids", &report).expect("write report");
        let content = std::fs::read_to_string(written).expect("read report");
        assert!(content.contains("\"valid\": true"));
    }
}
