//! Self-consistency between the generator and the checker: a rendered
//! document built from well-formed input must validate clean.

use ids_compile::{normalize_specification, resolve_specification};
use ids_model::{
    Applicability, Cardinality, DraftApplicabilityKind, DraftProperty, DraftRequirement,
    DraftSpecification, FacetKind, PropertyRef, Requirement, Specification,
    SpecificationMetadata,
};
use ids_export::render_ids_xml;
use ids_validate::validate_document;

fn metadata() -> SpecificationMetadata {
    SpecificationMetadata {
        title: "Walls".to_string(),
        version: "1.0.0".to_string(),
        author: "a@b.c".to_string(),
        date: "2024-01-01".to_string(),
        description: Some("Wall delivery requirements".to_string()),
        purpose: None,
        milestone: None,
    }
}

fn render(specs: &[Specification]) -> String {
    let resolved: Vec<_> = specs.iter().map(resolve_specification).collect();
    render_ids_xml(&metadata(), &resolved).expect("render")
}

#[test]
fn generated_document_validates_clean() {
    let specs = vec![
        Specification {
            name: "Wall properties".to_string(),
            applicability: Applicability::ByType {
                target_types: vec!["IFCWALL".to_string(), "IFCWALLSTANDARDCASE".to_string()],
            },
            schema_versions: vec!["IFC4".to_string()],
            requirements: vec![Requirement::Property {
                property_set: "Pset_WallCommon".to_string(),
                properties: vec![
                    PropertyRef {
                        name: "IsExternal".to_string(),
                        allowed_values: vec!["true".to_string()],
                    },
                    PropertyRef {
                        name: "LoadBearing".to_string(),
                        allowed_values: vec![],
                    },
                    PropertyRef {
                        name: "FireRating".to_string(),
                        allowed_values: vec![],
                    },
                ],
                data_type: None,
                cardinality: Cardinality::Required,
            }],
        },
        Specification {
            name: "Classified elements".to_string(),
            applicability: Applicability::ByClassification {
                system: "Uniclass".to_string(),
            },
            schema_versions: vec!["IFC4".to_string(), "IFC4X3_ADD2".to_string()],
            requirements: vec![
                Requirement::Classification {
                    system_name: "Uniclass".to_string(),
                    allowed_class_names: vec!["EF_25_10".to_string(), "EF_25_20".to_string()],
                    data_type: None,
                    cardinality: Cardinality::Required,
                },
                Requirement::Attribute {
                    pattern_source: "Name".to_string(),
                    data_type: None,
                    cardinality: Cardinality::Optional,
                },
            ],
        },
    ];
    let xml = render(&specs);
    let report = validate_document(&xml);
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.warning_count(), 0);
}

#[test]
fn draft_pipeline_end_to_end() {
    let draft = DraftSpecification {
        name: "Walls".to_string(),
        applicability: DraftApplicabilityKind::ByType,
        target_types: vec!["IfcWall".to_string()],
        classification_system: None,
        schema_versions: vec![],
        requirements: vec![DraftRequirement {
            id: "r1".to_string(),
            facet: FacetKind::Property,
            property_set: Some("Pset_WallCommon".to_string()),
            properties: vec![DraftProperty {
                id: "p1".to_string(),
                name: "IsExternal".to_string(),
            }],
            value_map: [("p1".to_string(), vec!["true".to_string()])]
                .into_iter()
                .collect(),
            pattern_source: None,
            classification_system: None,
            class_names: vec![],
            data_type: Some("IFCBOOLEAN".to_string()),
            cardinality: Cardinality::Required,
        }],
    };
    let spec = normalize_specification(&draft);
    assert_eq!(spec.schema_versions, vec!["IFC4".to_string()]);
    let xml = render(&[spec]);
    assert!(xml.contains(r#"dataType="IFCBOOLEAN""#));
    let report = validate_document(&xml);
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn empty_requirements_are_caught_by_validation() {
    let spec = Specification {
        name: "Empty".to_string(),
        applicability: Applicability::ByType {
            target_types: vec!["IfcWall".to_string()],
        },
        schema_versions: vec!["IFC4".to_string()],
        requirements: vec![],
    };
    let xml = render(&[spec]);
    let report = validate_document(&xml);
    assert!(!report.is_valid());
    assert!(
        report
            .issues
            .iter()
            .any(|issue| issue.message.contains("requirements"))
    );
}

#[test]
fn attribute_under_classification_probes_marker_entity() {
    let spec = Specification {
        name: "Classified attrs".to_string(),
        applicability: Applicability::ByClassification {
            system: "Uniclass".to_string(),
        },
        schema_versions: vec!["IFC4".to_string()],
        requirements: vec![Requirement::Attribute {
            pattern_source: "Name".to_string(),
            data_type: None,
            cardinality: Cardinality::Required,
        }],
    };
    let xml = render(&[spec]);
    assert!(xml.contains("IFCCLASSIFICATIONREFERENCE"));
    assert!(validate_document(&xml).is_valid());
}
