//! IDS compilation: draft normalization and requirement resolution.
//!
//! The compiler is a pure, total pipeline. Malformed input is never rejected
//! here; it degrades to an empty fan-out and the structural validator reports
//! the resulting holes in the rendered document.

mod normalize;
mod resolve;

pub use normalize::{DEFAULT_SCHEMA_VERSIONS, normalize_document, normalize_specification};
pub use resolve::{
    CLASSIFICATION_ENTITY, ResolvedApplicability, ResolvedFacet, ResolvedSpecification,
    ValueMatch, resolve_applicability, resolve_requirement, resolve_specification,
};
