//! Draft normalization.
//!
//! Converts editing-time drafts (value maps keyed by internal ids) into the
//! compiler model, resolving defaults in one place instead of at every
//! serializer call site. Normalization is total: questionable input is
//! trimmed or dropped with a warning, never rejected.

use std::collections::HashMap;

use tracing::warn;

use ids_model::{
    Applicability, DraftApplicabilityKind, DraftDocument, DraftRequirement, DraftSpecification,
    FacetKind, PropertyRef, Requirement, Specification, SpecificationMetadata,
};

/// Schema versions assumed when a draft names none.
pub const DEFAULT_SCHEMA_VERSIONS: &[&str] = &["IFC4"];

/// Normalize a whole draft document into the compiler model.
pub fn normalize_document(draft: &DraftDocument) -> (SpecificationMetadata, Vec<Specification>) {
    let specifications = draft
        .specifications
        .iter()
        .map(normalize_specification)
        .collect();
    (draft.info.clone(), specifications)
}

/// Normalize one draft specification.
pub fn normalize_specification(draft: &DraftSpecification) -> Specification {
    let applicability = match draft.applicability {
        DraftApplicabilityKind::ByType => Applicability::ByType {
            target_types: non_blank(&draft.target_types),
        },
        DraftApplicabilityKind::ByClassification => Applicability::ByClassification {
            system: draft
                .classification_system
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
        },
    };

    let schema_versions = {
        let versions = non_blank(&draft.schema_versions);
        if versions.is_empty() {
            DEFAULT_SCHEMA_VERSIONS
                .iter()
                .map(|v| (*v).to_string())
                .collect()
        } else {
            versions
        }
    };

    let mut seen_constraints: HashMap<(String, String), Vec<String>> = HashMap::new();
    let requirements = draft
        .requirements
        .iter()
        .map(|requirement| normalize_requirement(&draft.name, requirement, &mut seen_constraints))
        .collect();

    Specification {
        name: draft.name.trim().to_string(),
        applicability,
        schema_versions,
        requirements,
    }
}

/// Normalize one draft requirement, reading only the fields that belong to
/// its declared facet.
fn normalize_requirement(
    spec_name: &str,
    draft: &DraftRequirement,
    seen_constraints: &mut HashMap<(String, String), Vec<String>>,
) -> Requirement {
    match draft.facet {
        FacetKind::Property => {
            let property_set = draft
                .property_set
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string();
            let mut properties: Vec<PropertyRef> = Vec::new();
            for property in &draft.properties {
                let name = property.name.trim().to_string();
                if name.is_empty() {
                    warn!(
                        specification = spec_name,
                        requirement = %draft.id,
                        "dropping property with blank name"
                    );
                    continue;
                }
                if properties.iter().any(|existing| existing.name == name) {
                    warn!(
                        specification = spec_name,
                        requirement = %draft.id,
                        property = %name,
                        "dropping duplicate property name within requirement"
                    );
                    continue;
                }
                let allowed_values = draft
                    .value_map
                    .get(&property.id)
                    .cloned()
                    .unwrap_or_default();

                // Conflicting constraints for the same (set, name) across
                // requirements of one specification: first occurrence wins.
                let key = (property_set.clone(), name.clone());
                match seen_constraints.get(&key) {
                    Some(existing) if existing != &allowed_values => {
                        warn!(
                            specification = spec_name,
                            requirement = %draft.id,
                            property_set = %property_set,
                            property = %name,
                            "dropping property with conflicting value constraint; first occurrence wins"
                        );
                        continue;
                    }
                    Some(_) => {}
                    None => {
                        seen_constraints.insert(key, allowed_values.clone());
                    }
                }

                properties.push(PropertyRef {
                    name,
                    allowed_values,
                });
            }
            Requirement::Property {
                property_set,
                properties,
                data_type: draft.data_type.clone(),
                cardinality: draft.cardinality,
            }
        }
        FacetKind::Attribute => Requirement::Attribute {
            pattern_source: draft
                .pattern_source
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            data_type: draft.data_type.clone(),
            cardinality: draft.cardinality,
        },
        FacetKind::Classification => Requirement::Classification {
            system_name: draft
                .classification_system
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            allowed_class_names: non_blank(&draft.class_names),
            data_type: draft.data_type.clone(),
            cardinality: draft.cardinality,
        },
    }
}

/// Trim entries and drop the blank ones, preserving order.
fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
