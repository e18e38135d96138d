//! Namespace-aware element tree that remembers where each element's raw
//! inner content sits in the source text.

use std::fs;
use std::ops::Range;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::DocumentError;

/// An element of a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Local name, without any prefix
    pub name: String,
    /// Resolved namespace URI, `None` when the element is unqualified
    pub namespace: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Line of the start tag (1-indexed)
    pub line: usize,
    inner: Range<usize>,
}

impl Element {
    fn open(name: String, namespace: Option<String>, line: usize, inner_start: usize) -> Self {
        Self {
            name,
            namespace,
            children: Vec::new(),
            line,
            inner: inner_start..inner_start,
        }
    }

    /// Whether the element belongs to `namespace`. An empty URI means "no namespace".
    pub fn in_namespace(&self, namespace: &str) -> bool {
        match &self.namespace {
            Some(ns) => ns == namespace,
            None => namespace.is_empty(),
        }
    }

    /// Whether the element has the given local name in `namespace`
    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.in_namespace(namespace)
    }

    /// Child elements that belong to `namespace`
    pub fn children_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |child| child.in_namespace(namespace))
    }

    /// Child elements with the given name in `namespace`
    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |child| child.is(name, namespace))
    }

    /// First child with the given name in `namespace`
    pub fn child(&self, name: &str, namespace: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.is(name, namespace))
    }
}

/// A parsed XML document that owns its source text.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

impl Document {
    /// Read and parse a UTF-8 XML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let source = fs::read_to_string(path)?;
        Self::parse(source)
    }

    /// Parse XML text
    pub fn parse(source: impl Into<String>) -> Result<Self, DocumentError> {
        let source = source.into();
        let root = build_tree(&source)?;
        Ok(Self { source, root })
    }

    /// The document element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Raw markup between the element's start and end tags, untouched
    pub fn inner_xml(&self, element: &Element) -> &str {
        &self.source[element.inner.clone()]
    }
}

/// Tracks the current line while offsets only move forward.
struct LineTracker<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineTracker<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let end = offset.min(self.bytes.len());
        if end > self.offset {
            self.line += self.bytes[self.offset..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.offset = end;
        }
        self.line
    }
}

fn build_tree(source: &str) -> Result<Element, DocumentError> {
    let mut reader = NsReader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut lines = LineTracker::new(source);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = resolve_namespace(resolved)?;
        let event_end = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                let line = lines.line_at(event_start);
                stack.push(Element::open(local_name(&e)?, namespace, line, event_end));
            }
            Event::Empty(e) => {
                let line = lines.line_at(event_start);
                let element = Element::open(local_name(&e)?, namespace, line, event_end);
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or_else(|| {
                    DocumentError::Malformed("closing tag without open tag".to_string())
                })?;
                element.inner.end = event_start;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) if stack.is_empty() => {
                if !e.iter().all(u8::is_ascii_whitespace) {
                    return Err(DocumentError::Malformed(
                        "text outside the document element".to_string(),
                    ));
                }
            }
            Event::CData(_) if stack.is_empty() => {
                return Err(DocumentError::Malformed(
                    "CDATA outside the document element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(DocumentError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| DocumentError::Malformed("no root element found".to_string()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DocumentError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(DocumentError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    Ok(())
}

fn resolve_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, DocumentError> {
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(std::str::from_utf8(uri)?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(DocumentError::Malformed(format!(
            "unknown namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn local_name(e: &BytesStart<'_>) -> Result<String, DocumentError> {
    let local = e.local_name();
    Ok(std::str::from_utf8(local.as_ref())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://tempuri.org";

    #[test]
    fn test_inner_xml_is_verbatim() {
        let doc = Document::parse(
            r#"<root xmlns="http://tempuri.org"><Item><name>Fish &amp; Chips</name><note><b>x</b> y</note></Item></root>"#,
        )
        .unwrap();

        let item = doc.root().child("Item", NS).unwrap();
        let name = item.child("name", NS).unwrap();
        let note = item.child("note", NS).unwrap();

        assert_eq!(doc.inner_xml(name), "Fish &amp; Chips");
        assert_eq!(doc.inner_xml(note), "<b>x</b> y");
    }

    #[test]
    fn test_empty_element_has_empty_inner_xml() {
        let doc = Document::parse(r#"<root xmlns="http://tempuri.org"><Item><id/><name></name></Item></root>"#)
            .unwrap();

        let item = doc.root().child("Item", NS).unwrap();
        assert_eq!(doc.inner_xml(item.child("id", NS).unwrap()), "");
        assert_eq!(doc.inner_xml(item.child("name", NS).unwrap()), "");
    }

    #[test]
    fn test_namespace_resolution() {
        let doc = Document::parse(
            r#"<root xmlns="http://tempuri.org"><Item/><other:Item xmlns:other="urn:other"/></root>"#,
        )
        .unwrap();

        let root = doc.root();
        assert!(root.is("root", NS));
        assert_eq!(root.children_named("Item", NS).count(), 1);
        assert_eq!(root.children_named("Item", "urn:other").count(), 1);
        assert!(!root.in_namespace(""));
    }

    #[test]
    fn test_unqualified_elements_match_empty_namespace() {
        let doc = Document::parse("<root><Item/></root>").unwrap();
        assert!(doc.root().is("root", ""));
        assert!(!doc.root().is("root", NS));
    }

    #[test]
    fn test_line_numbers() {
        let doc = Document::parse("<root>\n  <Item/>\n  <Item>\n  </Item>\n</root>").unwrap();
        let lines: Vec<_> = doc.root().children.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(Document::parse("<root><Item></root>").is_err());
        assert!(Document::parse("<root><Item>").is_err());
        assert!(Document::parse("<a/><b/>").is_err());
        assert!(Document::parse("").is_err());
        assert!(Document::parse("junk<root><a/></root>").is_err());
        assert!(Document::parse("<root><a/></root>junk").is_err());
        assert!(Document::parse("<root/><![CDATA[x]]>").is_err());
    }

    #[test]
    fn test_whitespace_and_prolog_around_root() {
        let doc = Document::parse("<?xml version=\"1.0\"?>\n<!-- export -->\n<root><a/></root>\n\n").unwrap();
        assert_eq!(doc.root().name, "root");
        assert_eq!(doc.root().children.len(), 1);
    }
}
