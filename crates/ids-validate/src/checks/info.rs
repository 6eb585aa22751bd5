//! Info block checks.
//!
//! Exactly four sub-fields are required: title, version, author, date.
//! Other documented sub-fields stay unenforced even though a stricter
//! external schema knows about them; a missing description is worth a
//! warning because downstream consumers display it prominently.

use ids_model::{ValidationIssue, ValidationReport};
use roxmltree::Node;

use crate::util::find_child;

const REQUIRED_FIELDS: &[&str] = &["title", "version", "author", "date"];

pub fn check(root: Node<'_, '_>, report: &mut ValidationReport) {
    let Some(info) = find_child(root, "info") else {
        report.add(ValidationIssue::error(
            "missing 'info' element",
            Some("ids/info"),
        ));
        return;
    };

    for field in REQUIRED_FIELDS {
        if find_child(info, field).is_none() {
            let path = format!("ids/info/{field}");
            report.add(ValidationIssue::error(
                format!("missing required info field '{field}'"),
                Some(path.as_str()),
            ));
        }
    }

    if find_child(info, "description").is_none() {
        report.add(ValidationIssue::warning(
            "info field 'description' is recommended",
            Some("ids/info/description"),
        ));
    }
}
