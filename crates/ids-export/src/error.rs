//! Error type for XML rendering.

use thiserror::Error;

/// Errors that can occur while rendering or encoding the document.
///
/// Rendering to an in-memory buffer cannot fail for well-typed input; these
/// variants exist because the event writer and the UTF-8 conversion are
/// fallible APIs, not because the serializer rejects anything.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Event writer failure.
    #[error("xml write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writer I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered buffer was not valid UTF-8.
    #[error("output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
