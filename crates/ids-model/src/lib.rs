pub mod draft;
pub mod metadata;
pub mod report;
pub mod specification;

pub use draft::{
    DraftApplicabilityKind, DraftDocument, DraftProperty, DraftRequirement, DraftSpecification,
    FacetKind,
};
pub use metadata::SpecificationMetadata;
pub use report::{IssueSeverity, ValidationIssue, ValidationReport};
pub use specification::{
    Applicability, Cardinality, PropertyRef, Requirement, Specification,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let mut report = ValidationReport::default();
        report.add(ValidationIssue::error(
            "missing info/version",
            Some("ids/info"),
        ));
        report.add(ValidationIssue::warning(
            "info/description is recommended",
            Some("ids/info"),
        ));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn specification_serializes() {
        let spec = Specification {
            name: "Walls".to_string(),
            applicability: Applicability::ByType {
                target_types: vec!["IFCWALL".to_string()],
            },
            schema_versions: vec!["IFC4".to_string()],
            requirements: vec![Requirement::Property {
                property_set: "Pset_WallCommon".to_string(),
                properties: vec![PropertyRef {
                    name: "IsExternal".to_string(),
                    allowed_values: vec![],
                }],
                data_type: None,
                cardinality: Cardinality::Required,
            }],
        };
        let json = serde_json::to_string(&spec).expect("serialize specification");
        let round: Specification = serde_json::from_str(&json).expect("deserialize specification");
        assert_eq!(round.name, "Walls");
        assert_eq!(round.requirements.len(), 1);
    }
}
