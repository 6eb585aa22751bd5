//! Structural validation of IDS documents.
//!
//! This is deliberately not a schema-language type checker: it parses a
//! candidate document and applies a fixed checklist of presence and shape
//! checks that catch the common authoring mistakes. Findings accumulate into
//! one report so a caller can show every defect at once; only a parse failure
//! (and an absent or empty specifications block) short-circuits.

mod checks;
mod report;
mod util;

pub use report::{ValidationIssueJson, ValidationReportPayload, write_validation_report_json};

use ids_model::{ValidationIssue, ValidationReport};

/// Validate a raw XML document against the structural checklist.
///
/// A parse failure yields a report with a single fatal error; everything else
/// is accumulated. Validation never mutates or repairs the document.
pub fn validate_document(xml: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    let doc = match roxmltree::Document::parse(xml) {
        Ok(doc) => doc,
        Err(error) => {
            report.add(ValidationIssue::error(
                format!("document is not well-formed XML: {error}"),
                None,
            ));
            return report;
        }
    };
    checks::run_all(&doc, &mut report);
    report
}

/// Parse-sanity check for a host-supplied schema document (ids.xsd).
///
/// The schema is never used for type-level checking; this only confirms the
/// auxiliary file is well-formed XML so a caller can report a broken download
/// before shipping it alongside the exported document.
pub fn validate_schema_document(xml: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    if let Err(error) = roxmltree::Document::parse(xml) {
        report.add(ValidationIssue::error(
            format!("schema document is not well-formed XML: {error}"),
            None,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>Walls</title>
    <version>1.0.0</version>
    <author>a@b.c</author>
    <date>2024-01-01</date>
    <description>Wall checks</description>
  </info>
  <specifications>
    <specification name="Wall spec" identifier="S1" ifcVersion="IFC4">
      <applicability minOccurs="1" maxOccurs="unbounded">
        <entity><name><simpleValue>IFCWALL</simpleValue></name></entity>
      </applicability>
      <requirements>
        <property>
          <propertySet><simpleValue>Pset_WallCommon</simpleValue></propertySet>
          <baseName><simpleValue>IsExternal</simpleValue></baseName>
        </property>
      </requirements>
    </specification>
  </specifications>
</ids>"#;

    #[test]
    fn minimal_document_is_valid() {
        let report = validate_document(MINIMAL_VALID);
        assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn parse_failure_is_single_fatal_error() {
        let report = validate_document("<ids><unclosed>");
        assert!(!report.is_valid());
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn missing_version_is_exactly_one_error() {
        let broken = MINIMAL_VALID.replace("<version>1.0.0</version>", "");
        let report = validate_document(&broken);
        assert!(!report.is_valid());
        let errors: Vec<_> = report
            .issues
            .iter()
            .filter(|issue| issue.severity == ids_model::IssueSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("version"));
    }

    #[test]
    fn missing_specifications_short_circuits() {
        let broken = r#"<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>t</title><version>1</version><author>a</author><date>2024-01-01</date>
    <description>d</description>
  </info>
</ids>"#;
        let report = validate_document(broken);
        assert_eq!(report.error_count(), 1);
        assert!(report.issues.iter().any(|i| i.message.contains("specifications")));
    }

    #[test]
    fn empty_specifications_short_circuits() {
        let broken = r#"<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>t</title><version>1</version><author>a</author><date>2024-01-01</date>
    <description>d</description>
  </info>
  <specifications/>
</ids>"#;
        let report = validate_document(broken);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn tolerates_namespace_prefixed_tags() {
        let prefixed = r#"<?xml version="1.0"?>
<ids:ids xmlns:ids="http://standards.buildingsmart.org/IDS">
  <ids:info>
    <ids:title>t</ids:title>
    <ids:version>1</ids:version>
    <ids:author>a</ids:author>
    <ids:date>2024-01-01</ids:date>
    <ids:description>d</ids:description>
  </ids:info>
  <ids:specifications>
    <ids:specification name="s" ifcVersion="IFC4">
      <ids:applicability>
        <ids:entity><ids:name><ids:simpleValue>IFCWALL</ids:simpleValue></ids:name></ids:entity>
      </ids:applicability>
      <ids:requirements>
        <ids:attribute><ids:name><ids:simpleValue>Name</ids:simpleValue></ids:name></ids:attribute>
      </ids:requirements>
    </ids:specification>
  </ids:specifications>
</ids:ids>"#;
        let report = validate_document(prefixed);
        assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn missing_namespace_declaration_is_reported() {
        let bare = MINIMAL_VALID.replace(
            r#" xmlns="http://standards.buildingsmart.org/IDS""#,
            "",
        );
        let report = validate_document(&bare);
        assert!(!report.is_valid());
        assert!(report.issues.iter().any(|i| i.message.contains("namespace")));
    }

    #[test]
    fn missing_description_is_a_warning_not_an_error() {
        let without = MINIMAL_VALID.replace("<description>Wall checks</description>", "");
        let report = validate_document(&without);
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn empty_applicability_and_requirements_are_errors() {
        let broken = r#"<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>t</title><version>1</version><author>a</author><date>2024-01-01</date>
    <description>d</description>
  </info>
  <specifications>
    <specification name="s" ifcVersion="IFC4">
      <applicability/>
      <requirements/>
    </specification>
  </specifications>
</ids>"#;
        let report = validate_document(broken);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn facet_required_subfields_are_checked() {
        let broken = r#"<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>t</title><version>1</version><author>a</author><date>2024-01-01</date>
    <description>d</description>
  </info>
  <specifications>
    <specification name="s" ifcVersion="IFC4">
      <applicability>
        <entity/>
        <classification/>
      </applicability>
      <requirements>
        <property><baseName><simpleValue>P</simpleValue></baseName></property>
        <classification/>
        <attribute/>
      </requirements>
    </specification>
  </specifications>
</ids>"#;
        let report = validate_document(broken);
        // entity name, classification system (applicability), property
        // propertySet, classification system (requirement), attribute name.
        assert_eq!(report.error_count(), 5);
    }

    #[test]
    fn missing_specification_attributes_are_reported() {
        let broken = r#"<ids xmlns="http://standards.buildingsmart.org/IDS">
  <info>
    <title>t</title><version>1</version><author>a</author><date>2024-01-01</date>
    <description>d</description>
  </info>
  <specifications>
    <specification>
      <applicability>
        <entity><name><simpleValue>IFCWALL</simpleValue></name></entity>
      </applicability>
      <requirements>
        <attribute><name><simpleValue>Name</simpleValue></name></attribute>
      </requirements>
    </specification>
  </specifications>
</ids>"#;
        let report = validate_document(broken);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn schema_sanity_check_accepts_well_formed_xml() {
        assert!(validate_schema_document("<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\"/>").is_valid());
        assert!(!validate_schema_document("<xs:schema").is_valid());
    }
}
