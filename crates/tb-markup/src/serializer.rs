//! Compact XHTML serializer.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use crate::node::{Element, Node};

/// HTML void elements, written self-closed when they have no children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serialize an [`Element`] tree back to markup.
///
/// Output is compact: no whitespace is added between tags. Attributes are
/// written in stored order, so the same tree always yields the same string.
pub struct MarkupSerializer;

impl MarkupSerializer {
    /// Create a new serializer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serialize an element and its descendants.
    #[must_use]
    pub fn serialize(&self, element: &Element) -> String {
        let mut out = String::with_capacity(1024);
        write_element(element, &mut out);
        out
    }

    /// Serialize a sequence of sibling nodes.
    #[must_use]
    pub fn serialize_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::with_capacity(1024);
        for node in nodes {
            write_node(node, &mut out);
        }
        out
    }
}

impl Default for MarkupSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => escape_into(text, false, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }

    if element.children.is_empty() && VOID_ELEMENTS.contains(&element.tag.as_str()) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Escape XML special characters; quotes only inside attribute values.
fn escape_into(text: &str, in_attr: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\'' if in_attr => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
