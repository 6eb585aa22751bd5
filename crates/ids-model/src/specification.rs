use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a requirement's presence is mandatory, optional, or forbidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    #[default]
    Required,
    Optional,
    Prohibited,
}

impl Cardinality {
    /// The attribute value used in the rendered document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Required => "required",
            Cardinality::Optional => "optional",
            Cardinality::Prohibited => "prohibited",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named property within a property requirement.
///
/// An empty `allowed_values` list means any value is acceptable; a
/// single-entry list constrains the property to exactly that value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    pub name: String,
    #[serde(default)]
    pub allowed_values: Vec<String>,
}

/// One requirement of a specification, tagged by facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", rename_all = "lowercase")]
pub enum Requirement {
    Property {
        property_set: String,
        properties: Vec<PropertyRef>,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        cardinality: Cardinality,
    },
    Attribute {
        /// Literal name or pattern to match, derived from a model or class name.
        pattern_source: String,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        cardinality: Cardinality,
    },
    Classification {
        system_name: String,
        /// Empty means any class under the system is acceptable.
        #[serde(default)]
        allowed_class_names: Vec<String>,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        cardinality: Cardinality,
    },
}

/// Which modeled entities a specification's requirements apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Applicability {
    /// Apply to entities of one or more named types.
    ByType { target_types: Vec<String> },
    /// Apply to entities carrying a reference into a classification system.
    ByClassification { system: String },
}

/// One exportable specification: applicability plus an ordered requirement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub applicability: Applicability,
    /// Target schema versions, e.g. `["IFC4", "IFC4X3_ADD2"]`.
    pub schema_versions: Vec<String>,
    pub requirements: Vec<Requirement>,
}
