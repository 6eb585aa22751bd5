//! IDS XML output generation.
//!
//! The serializer is a pure function from (metadata, resolved specifications)
//! to a UTF-8 XML string. It always produces a document, even a structurally
//! empty one; conformance is judged separately by `ids-validate`.

mod common;
mod error;
mod ids_xml;

pub use common::{IDS_NS, IDS_SCHEMA_LOCATION, XS_NS, XSI_NS, suggested_filename};
pub use error::ExportError;
pub use ids_xml::{render_ids_xml, write_ids_file};
