//! Markup tree writer.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use crate::tree::{Element, Node, is_raw_text_element, is_void_element};

/// Write an [`Element`] tree back to markup.
pub struct MarkupSerializer;

impl MarkupSerializer {
    /// Create a new serializer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serialize the children of `root`.
    ///
    /// The root element itself (usually the parser's wrapper) is not written.
    pub fn serialize(&self, root: &Element) -> String {
        let mut out = String::with_capacity(4096);
        for child in &root.children {
            serialize_node(child, &mut out);
        }
        out
    }

    /// Serialize a list of nodes.
    pub fn serialize_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            serialize_node(node, &mut out);
        }
        out
    }
}

impl Default for MarkupSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Element(el) => serialize_element(el, out),
    }
}

fn serialize_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if is_void_element(&el.tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    if is_raw_text_element(&el.tag) {
        for child in &el.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(child) => serialize_element(child, out),
            }
        }
    } else {
        for child in &el.children {
            serialize_node(child, out);
        }
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Escape text content.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
