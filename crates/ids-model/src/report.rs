use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single structural finding from validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    /// Human-readable message describing the defect.
    pub message: String,
    /// Slash-separated hint to the offending element, e.g. `ids/info/version`.
    pub path_hint: Option<String>,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>, path_hint: Option<&str>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
            path_hint: path_hint.map(str::to_string),
        }
    }

    pub fn warning(message: impl Into<String>, path_hint: Option<&str>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
            path_hint: path_hint.map(str::to_string),
        }
    }
}

/// Accumulated validation findings for one document.
///
/// Validity is derived from errors only; warnings never flip a document to
/// invalid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}
