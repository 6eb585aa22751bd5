//! Structural check modules.
//!
//! Each module covers one region of the document. Checks accumulate issues;
//! only an absent or empty specifications block stops early, because the
//! per-specification checks are meaningless without it.

mod info;
mod root;
mod specifications;

use ids_model::ValidationReport;
use roxmltree::Document;

/// Apply the full checklist to a parsed document.
pub fn run_all(doc: &Document, report: &mut ValidationReport) {
    let root = doc.root_element();

    // 1. Root spelling and namespace authority.
    root::check(root, report);

    // 2. Required info sub-fields.
    info::check(root, report);

    // 3. Specifications block and per-specification shape.
    specifications::check(root, report);
}
