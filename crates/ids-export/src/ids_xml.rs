//! IDS document rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use ids_compile::{ResolvedApplicability, ResolvedFacet, ResolvedSpecification};
use ids_model::{Cardinality, SpecificationMetadata};

use crate::common::{
    IDS_NS, IDS_SCHEMA_LOCATION, XS_NS, XSI_NS, write_text_element, write_value_match,
};
use crate::error::ExportError;

/// Render the full IDS document to a string.
///
/// Rendering is deterministic: the same metadata and the same ordered
/// specification list produce byte-identical output. Specification
/// identifiers are positional (`S1`, `S2`, ...) and are not stable across
/// reordering or removal.
pub fn render_ids_xml(
    metadata: &SpecificationMetadata,
    specifications: &[ResolvedSpecification],
) -> Result<String, ExportError> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("ids");
    root.push_attribute(("xmlns", IDS_NS));
    root.push_attribute(("xmlns:xs", XS_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xsi:schemaLocation", IDS_SCHEMA_LOCATION));
    xml.write_event(Event::Start(root))?;

    write_info(&mut xml, metadata)?;

    xml.write_event(Event::Start(BytesStart::new("specifications")))?;
    for (index, specification) in specifications.iter().enumerate() {
        let identifier = format!("S{}", index + 1);
        write_specification(&mut xml, specification, &identifier)?;
    }
    xml.write_event(Event::End(BytesEnd::new("specifications")))?;

    xml.write_event(Event::End(BytesEnd::new("ids")))?;

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8(bytes)?)
}

/// Render and write the document to disk.
pub fn write_ids_file(
    output_path: &Path,
    metadata: &SpecificationMetadata,
    specifications: &[ResolvedSpecification],
) -> Result<String> {
    let xml = render_ids_xml(metadata, specifications).context("render ids document")?;
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    fs::write(output_path, &xml).with_context(|| format!("write {}", output_path.display()))?;
    Ok(xml)
}

fn write_info<W: std::io::Write>(
    xml: &mut Writer<W>,
    metadata: &SpecificationMetadata,
) -> Result<(), ExportError> {
    xml.write_event(Event::Start(BytesStart::new("info")))?;
    write_text_element(xml, "title", &metadata.title)?;
    write_text_element(xml, "version", &metadata.version)?;
    write_text_element(xml, "author", &metadata.author)?;
    write_text_element(xml, "date", &metadata.date)?;
    if let Some(description) = metadata.description.as_ref() {
        write_text_element(xml, "description", description)?;
    }
    if let Some(purpose) = metadata.purpose.as_ref() {
        write_text_element(xml, "purpose", purpose)?;
    }
    if let Some(milestone) = metadata.milestone.as_ref() {
        write_text_element(xml, "milestone", milestone)?;
    }
    xml.write_event(Event::End(BytesEnd::new("info")))?;
    Ok(())
}

fn write_specification<W: std::io::Write>(
    xml: &mut Writer<W>,
    specification: &ResolvedSpecification,
    identifier: &str,
) -> Result<(), ExportError> {
    let ifc_version = specification.schema_versions.join(" ");
    let mut node = BytesStart::new("specification");
    node.push_attribute(("name", specification.name.as_str()));
    node.push_attribute(("identifier", identifier));
    node.push_attribute(("ifcVersion", ifc_version.as_str()));
    xml.write_event(Event::Start(node))?;

    let mut applicability = BytesStart::new("applicability");
    applicability.push_attribute(("minOccurs", "1"));
    applicability.push_attribute(("maxOccurs", "unbounded"));
    xml.write_event(Event::Start(applicability))?;
    if let Some(descriptor) = specification.applicability.as_ref() {
        match descriptor {
            ResolvedApplicability::Entity { name } => {
                xml.write_event(Event::Start(BytesStart::new("entity")))?;
                write_value_match(xml, "name", name)?;
                xml.write_event(Event::End(BytesEnd::new("entity")))?;
            }
            ResolvedApplicability::Classification { system } => {
                xml.write_event(Event::Start(BytesStart::new("classification")))?;
                write_value_match(xml, "system", system)?;
                xml.write_event(Event::End(BytesEnd::new("classification")))?;
            }
        }
    }
    xml.write_event(Event::End(BytesEnd::new("applicability")))?;

    xml.write_event(Event::Start(BytesStart::new("requirements")))?;
    for facet in &specification.requirements {
        write_facet(xml, facet)?;
    }
    xml.write_event(Event::End(BytesEnd::new("requirements")))?;

    xml.write_event(Event::End(BytesEnd::new("specification")))?;
    Ok(())
}

fn write_facet<W: std::io::Write>(
    xml: &mut Writer<W>,
    facet: &ResolvedFacet,
) -> Result<(), ExportError> {
    match facet {
        ResolvedFacet::Property {
            property_set,
            base_name,
            value,
            data_type,
            cardinality,
        } => {
            let mut node = BytesStart::new("property");
            push_facet_attributes(&mut node, data_type.as_deref(), *cardinality);
            xml.write_event(Event::Start(node))?;
            write_value_match(
                xml,
                "propertySet",
                &ids_compile::ValueMatch::Single(property_set.clone()),
            )?;
            write_value_match(xml, "baseName", base_name)?;
            if let Some(value) = value {
                write_value_match(xml, "value", value)?;
            }
            xml.write_event(Event::End(BytesEnd::new("property")))?;
        }
        ResolvedFacet::Attribute {
            name,
            data_type,
            cardinality,
        } => {
            let mut node = BytesStart::new("attribute");
            push_facet_attributes(&mut node, data_type.as_deref(), *cardinality);
            xml.write_event(Event::Start(node))?;
            write_value_match(xml, "name", name)?;
            xml.write_event(Event::End(BytesEnd::new("attribute")))?;
        }
        ResolvedFacet::Classification {
            system,
            value,
            data_type,
            cardinality,
        } => {
            let mut node = BytesStart::new("classification");
            push_facet_attributes(&mut node, data_type.as_deref(), *cardinality);
            xml.write_event(Event::Start(node))?;
            if let Some(value) = value {
                write_value_match(xml, "value", value)?;
            }
            write_value_match(xml, "system", system)?;
            xml.write_event(Event::End(BytesEnd::new("classification")))?;
        }
    }
    Ok(())
}

fn push_facet_attributes(node: &mut BytesStart, data_type: Option<&str>, cardinality: Cardinality) {
    if let Some(data_type) = data_type {
        node.push_attribute(("dataType", data_type));
    }
    if cardinality != Cardinality::Required {
        node.push_attribute(("cardinality", cardinality.as_str()));
    }
}
