//! Tolerant XHTML reader.
//!
//! Rendered markdown is well-formed apart from whatever raw HTML authors
//! embed, so the reader is lenient: void elements never open a scope,
//! unmatched end tags are ignored and unclosed elements are closed at the end
//! of input.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::entities::convert_html_entities;
use crate::error::MarkupError;
use crate::tree::{Element, Node, ROOT_TAG, is_void_element};

/// Start tag of an element whose body is raw text.
static RAW_TEXT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(script|style|textarea)(?:\s[^>]*)?>").expect("invalid raw text regex")
});

/// Read markup into an [`Element`] tree.
pub struct MarkupParser;

impl MarkupParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a markup fragment.
    ///
    /// Returns a synthetic [`ROOT_TAG`] element whose children are the
    /// top-level nodes of the fragment. Comments, declarations and processing
    /// instructions are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment is not readable as XML even with the
    /// lenient settings (for example an unterminated comment).
    pub fn parse(&self, html: &str) -> Result<Element, MarkupError> {
        let html = prepare(html);
        let wrapped = format!("<{ROOT_TAG}>{html}</{ROOT_TAG}>");

        let mut reader = Reader::from_str(&wrapped);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let el = self.element(&reader, &e);
                    if stack.is_empty() {
                        // The wrapper itself.
                        stack.push(el);
                    } else if is_void_element(&el.tag) {
                        push_child(&mut stack, Node::Element(el));
                    } else {
                        stack.push(el);
                    }
                }
                Event::Empty(e) => {
                    let el = self.element(&reader, &e);
                    push_child(&mut stack, Node::Element(el));
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    push_text(&mut stack, &text);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?;
                    push_text(&mut stack, &decode_entity(&entity));
                }
                Event::CData(e) => {
                    push_text(&mut stack, &String::from_utf8_lossy(&e));
                }
                Event::End(e) => {
                    let tag = self.decode_name(&reader, e.name().as_ref());
                    if let Some(pos) = stack.iter().rposition(|el| el.tag == tag) {
                        close_to_depth(&mut stack, pos.max(1));
                    }
                }
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        close_to_depth(&mut stack, 1);
        Ok(stack.pop().unwrap_or_else(|| Element::new(ROOT_TAG)))
    }

    fn element(&self, reader: &Reader<&[u8]>, e: &BytesStart) -> Element {
        let tag = self.decode_name(reader, e.name().as_ref());
        let mut el = Element::new(tag);

        for attr in e.html_attributes().flatten() {
            let key = self
                .decode_name(reader, attr.key.as_ref())
                .to_ascii_lowercase();
            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                std::borrow::Cow::into_owned,
            );
            el.attrs.push((key, value));
        }
        el
    }

    fn decode_name(&self, reader: &Reader<&[u8]>, name: &[u8]) -> String {
        reader
            .decoder()
            .decode(name)
            .map_or_else(
                |_| String::from_utf8_lossy(name).into_owned(),
                std::borrow::Cow::into_owned,
            )
            .to_ascii_lowercase()
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Make HTML readable as XML.
///
/// Bodies of `script`, `style` and `textarea` are wrapped in CDATA sections so
/// the reader keeps them as text. Everything else gets its named entities
/// converted and bare ampersands escaped.
fn prepare(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(caps) = RAW_TEXT_START.captures(rest) {
        let Some(start) = caps.get(0) else { break };
        out.push_str(&convert_html_entities(&rest[..start.end()]));
        rest = &rest[start.end()..];
        if start.as_str().ends_with("/>") {
            continue;
        }

        let close = format!("</{}", caps[1].to_ascii_lowercase());
        let end = rest
            .to_ascii_lowercase()
            .find(&close)
            .unwrap_or(rest.len());
        let body = &rest[..end];
        if !body.is_empty() {
            out.push_str("<![CDATA[");
            out.push_str(&body.replace("]]>", "]]]]><![CDATA[>"));
            out.push_str("]]>");
        }
        rest = &rest[end..];
    }

    out.push_str(&convert_html_entities(rest));
    out
}

fn push_child(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn push_text(stack: &mut [Element], text: &str) {
    if let Some(parent) = stack.last_mut() {
        parent.push_text(text);
    }
}

/// Pop open elements into their parents until `depth` elements remain.
fn close_to_depth(stack: &mut Vec<Element>, depth: usize) {
    while stack.len() > depth {
        if let Some(child) = stack.pop() {
            push_child(stack, Node::Element(child));
        }
    }
}

/// Decode an entity reference name to its text.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}
