//! Specifications block checks.

use ids_model::{ValidationIssue, ValidationReport};
use roxmltree::Node;

use crate::util::{element_children, find_child, has_attribute, local_name};

/// Check the specifications block. An absent or empty block is one error and
/// stops further inspection; per-specification findings accumulate.
pub fn check(root: Node<'_, '_>, report: &mut ValidationReport) {
    let Some(specifications) = find_child(root, "specifications") else {
        report.add(ValidationIssue::error(
            "missing 'specifications' element",
            Some("ids/specifications"),
        ));
        return;
    };

    let entries: Vec<Node> = element_children(specifications)
        .filter(|child| local_name(*child) == "specification")
        .collect();
    if entries.is_empty() {
        report.add(ValidationIssue::error(
            "'specifications' contains no specification entries",
            Some("ids/specifications"),
        ));
        return;
    }

    for (index, specification) in entries.iter().enumerate() {
        check_specification(*specification, index, report);
    }
}

fn check_specification(node: Node<'_, '_>, index: usize, report: &mut ValidationReport) {
    let path = format!("ids/specifications/specification[{}]", index + 1);

    if !has_attribute(node, "name") {
        report.add(ValidationIssue::error(
            "specification is missing the 'name' attribute",
            Some(path.as_str()),
        ));
    }
    if !has_attribute(node, "ifcVersion") {
        report.add(ValidationIssue::error(
            "specification is missing the 'ifcVersion' attribute",
            Some(path.as_str()),
        ));
    }

    check_applicability(node, &path, report);
    check_requirements(node, &path, report);
}

fn check_applicability(node: Node<'_, '_>, path: &str, report: &mut ValidationReport) {
    let path = format!("{path}/applicability");
    let Some(applicability) = find_child(node, "applicability") else {
        report.add(ValidationIssue::error(
            "specification is missing the 'applicability' element",
            Some(path.as_str()),
        ));
        return;
    };

    let mut facets = element_children(applicability).peekable();
    if facets.peek().is_none() {
        report.add(ValidationIssue::error(
            "'applicability' has no facets",
            Some(path.as_str()),
        ));
        return;
    }

    for facet in facets {
        match local_name(facet) {
            "entity" => {
                require_subfield(facet, "name", &path, report);
            }
            "classification" => {
                require_subfield(facet, "system", &path, report);
            }
            // Other facet kinds are not produced by this generator and are
            // left to a full schema check.
            _ => {}
        }
    }
}

fn check_requirements(node: Node<'_, '_>, path: &str, report: &mut ValidationReport) {
    let path = format!("{path}/requirements");
    let Some(requirements) = find_child(node, "requirements") else {
        report.add(ValidationIssue::error(
            "specification is missing the 'requirements' element",
            Some(path.as_str()),
        ));
        return;
    };

    let mut facets = element_children(requirements).peekable();
    if facets.peek().is_none() {
        report.add(ValidationIssue::error(
            "'requirements' has no facets",
            Some(path.as_str()),
        ));
        return;
    }

    for facet in facets {
        match local_name(facet) {
            "property" => {
                require_subfield(facet, "propertySet", &path, report);
                require_subfield(facet, "baseName", &path, report);
            }
            "classification" => {
                require_subfield(facet, "system", &path, report);
            }
            "attribute" => {
                require_subfield(facet, "name", &path, report);
            }
            _ => {}
        }
    }
}

fn require_subfield(facet: Node<'_, '_>, field: &str, path: &str, report: &mut ValidationReport) {
    if find_child(facet, field).is_none() {
        let facet_path = format!("{path}/{}", local_name(facet));
        report.add(ValidationIssue::error(
            format!("'{}' facet is missing '{field}'", local_name(facet)),
            Some(facet_path.as_str()),
        ));
    }
}
