//! Owned XML tree for types.xml and the quick-xml reader that builds it.
//!
//! The tree is deliberately generic: every element, attribute, text run and
//! comment inside the root element is kept, so structure this tool does not
//! understand passes through a parse/serialize round trip unchanged.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct TypesDoc {
    /// Encoding named in the input declaration, reused on write.
    pub encoding: Option<String>,
    pub root: Element,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrite an attribute in place, or append it if not present yet.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    /// Run `f` over this element and every descendant whose tag matches,
    /// in document order. The first error aborts the walk.
    pub fn visit_tag_mut<F>(&mut self, tag: &str, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Element) -> Result<()>,
    {
        if self.tag == tag {
            f(self)?;
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.visit_tag_mut(tag, f)?;
            }
        }
        Ok(())
    }

    pub fn find_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                el.find_by_tag(tag, out);
            }
        }
    }
}

impl TypesDoc {
    /// All `<type>` entries in document order.
    pub fn type_entries(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.find_by_tag("type", &mut out);
        out
    }
}

/// Read a types.xml file from disk.
pub fn read_types<P: AsRef<Path>>(path: P) -> Result<TypesDoc> {
    let content = fs::read_to_string(path)?;
    parse_types(&content)
}

/// Parse a types document from an XML string.
pub fn parse_types(content: &str) -> Result<TypesDoc> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut encoding: Option<String> = None;
    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Decl(d)) => {
                if let Some(Ok(enc)) = d.encoding() {
                    encoding = Some(String::from_utf8_lossy(&enc).into_owned());
                }
            }
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let el = element_from_start(&e)?;
                attach(Node::Element(el), &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = stack.pop() {
                    attach(Node::Element(completed), &mut stack, &mut root);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape()?.into_owned();
                if !text.is_empty() {
                    attach(Node::Text(text), &mut stack, &mut root);
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                attach(Node::Text(text), &mut stack, &mut root);
            }
            Ok(Event::Comment(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                attach(Node::Comment(text), &mut stack, &mut root);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    match root {
        Some(root) => Ok(TypesDoc { encoding, root }),
        None => Err(Error::NoRootElement),
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        tag,
        attrs,
        children: Vec::new(),
    })
}

// Text and comments outside the root element are dropped.
fn attach(node: Node, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if let Node::Element(el) = node
        && root.is_none()
    {
        *root = Some(el);
    }
}
