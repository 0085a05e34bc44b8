//! Markup tree nodes.

use crate::serializer::MarkupSerializer;

/// Tag of the synthetic wrapper element returned by the parser.
pub const ROOT_TAG: &str = "folio-root";

/// Elements that never have children and are written self-closed.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check whether a tag is an HTML void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Elements whose content is text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

/// Check whether a tag holds raw text that is neither parsed nor escaped.
#[must_use]
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Node in a markup tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with tag, attributes and children.
    Element(Element),
    /// Unescaped text content.
    Text(String),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Borrow the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutably borrow the element, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Check whether this node is an element with the given tag.
    #[must_use]
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|el| el.is(tag))
    }

    /// Check whether this node is text made only of whitespace.
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Markup element.
///
/// Attributes keep their source order so that serialization is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in source order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Add one or more space-separated classes.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    /// Check the tag name (ASCII case-insensitive).
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Check whether the tag is one of `tags`.
    #[must_use]
    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.is(tag))
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Remove an attribute and return its value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Iterate over classes in the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Check whether the element carries a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add one or more space-separated classes, skipping ones already present.
    pub fn add_class(&mut self, class: &str) {
        let mut classes: Vec<String> = self.classes().map(str::to_owned).collect();
        for c in class.split_whitespace() {
            if !classes.iter().any(|existing| existing == c) {
                classes.push(c.to_owned());
            }
        }
        if !classes.is_empty() {
            self.set_attr("class", classes.join(" "));
        }
    }

    /// Remove a class. The `class` attribute is dropped once empty.
    pub fn remove_class(&mut self, class: &str) {
        let remaining: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.remove_attr("class");
        } else {
            let joined = remaining.join(" ");
            self.set_attr("class", joined);
        }
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::text(text));
        }
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Iterate over element children, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Last element child, skipping trailing text.
    pub fn last_element_child_mut(&mut self) -> Option<&mut Element> {
        self.children.iter_mut().rev().find_map(Node::as_element_mut)
    }

    /// Visit this element and all descendant elements in document order.
    pub fn walk_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(f);
            }
        }
    }

    /// Serialize the children of this element.
    #[must_use]
    pub fn inner_html(&self) -> String {
        MarkupSerializer::new().serialize(self)
    }
}
