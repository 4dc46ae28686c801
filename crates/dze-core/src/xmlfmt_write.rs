//! Serializing the mutated tree back to XML.

use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::xmlfmt::{Element, Node, TypesDoc};

/// Write a types document to disk. The caller is responsible for picking an
/// output path distinct from the input.
pub fn write_types<P: AsRef<Path>>(doc: &TypesDoc, path: P) -> Result<()> {
    let xml = serialize_types(doc)?;
    fs::write(path, xml)?;
    Ok(())
}

/// Serialize a types document to an XML string with a declaration.
pub fn serialize_types(doc: &TypesDoc) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 4);

    let encoding = doc.encoding.as_deref().unwrap_or("utf-8");
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding), None)))?;

    write_element(&mut writer, &doc.root)?;

    let xml = String::from_utf8(output)?;
    Ok(xml)
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, el: &Element) -> Result<()> {
    let mut start = BytesStart::new(el.tag.as_str());
    for (key, value) in &el.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &el.children {
        match child {
            Node::Element(c) => write_element(writer, c)?,
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
            // Comment text is stored raw; escaping it would alter it.
            Node::Comment(c) => writer.write_event(Event::Comment(BytesText::from_escaped(c.as_str())))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(el.tag.as_str())))?;
    Ok(())
}
