//! Root element checks.

use ids_model::{ValidationIssue, ValidationReport};
use roxmltree::Node;

use crate::util::local_name;

/// Substring every acceptable IDS namespace URI contains.
const NAMESPACE_AUTHORITY: &str = "standards.buildingsmart.org";

/// Check the root spelling (prefixed or bare `ids`) and that some namespace
/// declaration names the expected authority.
pub fn check(root: Node<'_, '_>, report: &mut ValidationReport) {
    if local_name(root) != "ids" {
        report.add(ValidationIssue::error(
            format!("root element must be 'ids', found '{}'", local_name(root)),
            Some("ids"),
        ));
    }

    let has_ids_namespace = root
        .namespaces()
        .any(|ns| ns.uri().contains(NAMESPACE_AUTHORITY));
    if !has_ids_namespace {
        report.add(ValidationIssue::error(
            format!("missing IDS namespace declaration (expected a URI containing '{NAMESPACE_AUTHORITY}')"),
            Some("ids"),
        ));
    }
}
