//! Shared constants and write helpers for IDS output.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use ids_compile::ValueMatch;

use crate::error::ExportError;

/// IDS namespace.
pub const IDS_NS: &str = "http://standards.buildingsmart.org/IDS";

/// XML Schema namespace, used for restriction encodings.
pub const XS_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Schema location pair declared on the root element.
pub const IDS_SCHEMA_LOCATION: &str =
    "http://standards.buildingsmart.org/IDS http://standards.buildingsmart.org/IDS/1.0/ids.xsd";

/// File extension for exported documents.
pub const IDS_EXTENSION: &str = "ids";

/// Write a simple text element. Text escaping is handled by the event writer.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), ExportError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write one matched field under a wrapper element.
///
/// A single literal becomes `simpleValue`; several literals become an
/// `xs:restriction` with one `xs:enumeration` per alternative in supplied
/// order; a pattern becomes an `xs:restriction` with one `xs:pattern`.
pub fn write_value_match<W: Write>(
    writer: &mut Writer<W>,
    wrapper: &str,
    value: &ValueMatch,
) -> Result<(), ExportError> {
    writer.write_event(Event::Start(BytesStart::new(wrapper)))?;
    match value {
        ValueMatch::Single(literal) => {
            write_text_element(writer, "simpleValue", literal)?;
        }
        ValueMatch::AnyOf(literals) => {
            let mut restriction = BytesStart::new("xs:restriction");
            restriction.push_attribute(("base", "xs:string"));
            writer.write_event(Event::Start(restriction))?;
            for literal in literals {
                let mut enumeration = BytesStart::new("xs:enumeration");
                enumeration.push_attribute(("value", literal.as_str()));
                writer.write_event(Event::Empty(enumeration))?;
            }
            writer.write_event(Event::End(BytesEnd::new("xs:restriction")))?;
        }
        ValueMatch::Pattern(pattern) => {
            let mut restriction = BytesStart::new("xs:restriction");
            restriction.push_attribute(("base", "xs:string"));
            writer.write_event(Event::Start(restriction))?;
            let mut pattern_node = BytesStart::new("xs:pattern");
            pattern_node.push_attribute(("value", pattern.as_str()));
            writer.write_event(Event::Empty(pattern_node))?;
            writer.write_event(Event::End(BytesEnd::new("xs:restriction")))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(wrapper)))?;
    Ok(())
}

/// Derive a download filename from the document title.
///
/// Characters outside `[A-Za-z0-9._-]` collapse to single underscores; an
/// all-blank title falls back to "specification".
pub fn suggested_filename(title: &str) -> String {
    let mut stem = String::new();
    let mut last_underscore = false;
    for ch in title.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            stem.push(ch);
            last_underscore = false;
        } else if !last_underscore {
            stem.push('_');
            last_underscore = true;
        }
    }
    let stem = stem.trim_matches('_');
    let stem = if stem.is_empty() {
        "specification"
    } else {
        stem
    };
    format!("{stem}.{IDS_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_safe_characters() {
        assert_eq!(suggested_filename("Walls-1.0"), "Walls-1.0.ids");
    }

    #[test]
    fn filename_collapses_unsafe_runs() {
        assert_eq!(
            suggested_filename("Walls / external (draft)"),
            "Walls_external_draft.ids"
        );
    }

    #[test]
    fn filename_defaults_when_blank() {
        assert_eq!(suggested_filename("   "), "specification.ids");
        assert_eq!(suggested_filename("///"), "specification.ids");
    }
}
