//! Enumeration/cardinality resolution.
//!
//! Decides, per requirement, whether a field is encoded as a single value, a
//! pattern, or an enumerated restriction, and splits multi-property
//! requirements into per-property facets when individual value constraints
//! differ.

use ids_model::{Applicability, Cardinality, Requirement, Specification};

/// Entity type probed when an attribute requirement runs under
/// classification-mode applicability: the check targets the classification
/// reference attached to the entity, not its schema type.
pub const CLASSIFICATION_ENTITY: &str = "IFCCLASSIFICATIONREFERENCE";

/// How a single field is matched in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMatch {
    /// Exactly one literal value.
    Single(String),
    /// A free-form pattern match.
    Pattern(String),
    /// Two or more literal alternatives, in caller-supplied order.
    AnyOf(Vec<String>),
}

impl ValueMatch {
    /// Fold a literal list into the narrowest encoding. One entry stays a
    /// direct value, several become an enumeration. No reordering, no
    /// deduplication.
    pub fn from_literals(mut values: Vec<String>) -> Option<ValueMatch> {
        match values.len() {
            0 => None,
            1 => Some(ValueMatch::Single(values.remove(0))),
            _ => Some(ValueMatch::AnyOf(values)),
        }
    }
}

/// The applicability descriptor of one specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedApplicability {
    Entity { name: ValueMatch },
    Classification { system: ValueMatch },
}

/// One requirement facet ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFacet {
    Property {
        property_set: String,
        base_name: ValueMatch,
        value: Option<ValueMatch>,
        data_type: Option<String>,
        cardinality: Cardinality,
    },
    Attribute {
        name: ValueMatch,
        data_type: Option<String>,
        cardinality: Cardinality,
    },
    Classification {
        system: ValueMatch,
        value: Option<ValueMatch>,
        data_type: Option<String>,
        cardinality: Cardinality,
    },
}

/// One specification after resolution, ready for serialization.
///
/// `applicability` is `None` when the input degenerated to nothing applicable
/// (for example a by-type specification with no target types); the serializer
/// still renders the specification and the validator reports the empty
/// applicability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpecification {
    pub name: String,
    pub schema_versions: Vec<String>,
    pub applicability: Option<ResolvedApplicability>,
    pub requirements: Vec<ResolvedFacet>,
}

/// Fold the applicability of a specification into one descriptor.
///
/// A single target type becomes a direct-value entity name; two or more
/// become one enumerated name listing every type in caller order.
pub fn resolve_applicability(spec: &Specification) -> Option<ResolvedApplicability> {
    match &spec.applicability {
        Applicability::ByType { target_types } => {
            let name = ValueMatch::from_literals(target_types.clone())?;
            Some(ResolvedApplicability::Entity { name })
        }
        Applicability::ByClassification { system } => {
            if system.trim().is_empty() {
                return None;
            }
            Some(ResolvedApplicability::Classification {
                system: ValueMatch::Single(system.clone()),
            })
        }
    }
}

/// Resolve one requirement into zero or more facets.
///
/// Property requirements fan out: every property with its own allowed-value
/// list gets its own facet (so value restrictions stay attached to the right
/// property name), and the remaining unvalued properties collapse into at
/// most one facet whose name is a direct value (one property) or an
/// enumeration (several).
pub fn resolve_requirement(requirement: &Requirement) -> Vec<ResolvedFacet> {
    match requirement {
        Requirement::Property {
            property_set,
            properties,
            data_type,
            cardinality,
        } => {
            let mut facets = Vec::new();
            let mut unvalued: Vec<String> = Vec::new();
            for property in properties {
                if property.allowed_values.is_empty() {
                    unvalued.push(property.name.clone());
                    continue;
                }
                facets.push(ResolvedFacet::Property {
                    property_set: property_set.clone(),
                    base_name: ValueMatch::Single(property.name.clone()),
                    value: ValueMatch::from_literals(property.allowed_values.clone()),
                    data_type: data_type.clone(),
                    cardinality: *cardinality,
                });
            }
            if let Some(base_name) = ValueMatch::from_literals(unvalued) {
                facets.push(ResolvedFacet::Property {
                    property_set: property_set.clone(),
                    base_name,
                    value: None,
                    data_type: data_type.clone(),
                    cardinality: *cardinality,
                });
            }
            facets
        }
        Requirement::Attribute {
            pattern_source,
            data_type,
            cardinality,
        } => vec![ResolvedFacet::Attribute {
            name: ValueMatch::Pattern(pattern_source.clone()),
            data_type: data_type.clone(),
            cardinality: *cardinality,
        }],
        Requirement::Classification {
            system_name,
            allowed_class_names,
            data_type,
            cardinality,
        } => {
            let (system, value) = if allowed_class_names.is_empty() {
                (ValueMatch::Single(system_name.clone()), None)
            } else {
                (
                    ValueMatch::Pattern(system_name.clone()),
                    ValueMatch::from_literals(allowed_class_names.clone()),
                )
            };
            vec![ResolvedFacet::Classification {
                system,
                value,
                data_type: data_type.clone(),
                cardinality: *cardinality,
            }]
        }
    }
}

/// Resolve a full specification: applicability descriptor plus the flattened
/// facet list, with fan-out facets emitted contiguously in place of their
/// source requirement.
pub fn resolve_specification(spec: &Specification) -> ResolvedSpecification {
    let mut applicability = resolve_applicability(spec);

    // Attribute checks under classification-mode applicability always probe
    // the classification reference entity, never a literal schema type.
    let has_attribute = spec
        .requirements
        .iter()
        .any(|requirement| matches!(requirement, Requirement::Attribute { .. }));
    if has_attribute && matches!(spec.applicability, Applicability::ByClassification { .. }) {
        applicability = Some(ResolvedApplicability::Entity {
            name: ValueMatch::Single(CLASSIFICATION_ENTITY.to_string()),
        });
    }

    let requirements = spec
        .requirements
        .iter()
        .flat_map(resolve_requirement)
        .collect();

    ResolvedSpecification {
        name: spec.name.clone(),
        schema_versions: spec.schema_versions.clone(),
        applicability,
        requirements,
    }
}
