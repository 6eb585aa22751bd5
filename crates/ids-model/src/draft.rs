//! Editing-time shapes as produced by the host application.
//!
//! Drafts keep allowed values in a map keyed by internal property ids; the
//! normalizer in `ids-compile` resolves ids to names and flattens the maps
//! into the compiler model of [`crate::specification`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::SpecificationMetadata;
use crate::specification::Cardinality;

/// The requirement kind carried by a draft requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Property,
    Attribute,
    Classification,
}

/// A property as edited: an internal id plus the resolved display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProperty {
    pub id: String,
    pub name: String,
}

/// One requirement as edited.
///
/// All facet-specific fields are optional here; which ones are meaningful
/// depends on `facet`. The normalizer reads only the fields belonging to the
/// declared facet, so stale values left over from switching the facet kind in
/// the editor cannot leak into the compiled model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequirement {
    pub id: String,
    pub facet: FacetKind,
    #[serde(default)]
    pub property_set: Option<String>,
    #[serde(default)]
    pub properties: Vec<DraftProperty>,
    /// Allowed values keyed by draft property id.
    #[serde(default)]
    pub value_map: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub pattern_source: Option<String>,
    #[serde(default)]
    pub classification_system: Option<String>,
    #[serde(default)]
    pub class_names: Vec<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub cardinality: Cardinality,
}

/// Applicability selection as edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftApplicabilityKind {
    ByType,
    ByClassification,
}

/// One specification as edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSpecification {
    pub name: String,
    pub applicability: DraftApplicabilityKind,
    #[serde(default)]
    pub target_types: Vec<String>,
    #[serde(default)]
    pub classification_system: Option<String>,
    /// Empty means "use the default schema version list".
    #[serde(default)]
    pub schema_versions: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<DraftRequirement>,
}

/// A complete draft document: metadata plus an ordered specification list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDocument {
    pub info: SpecificationMetadata,
    #[serde(default)]
    pub specifications: Vec<DraftSpecification>,
}
