use serde::{Deserialize, Serialize};

/// Export-level metadata written to the document info block.
///
/// Title and version must be non-empty by the time a document is exported;
/// the compiler does not reject them, the structural validator reports the
/// resulting holes instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificationMetadata {
    pub title: String,
    pub version: String,
    pub author: String,
    /// ISO calendar date (YYYY-MM-DD), emitted exactly as provided.
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub milestone: Option<String>,
}
