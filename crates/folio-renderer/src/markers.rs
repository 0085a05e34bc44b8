//! `{.class}` markers.
//!
//! Authors attach presentation classes with a brace marker:
//!
//! - `[Intro](https://youtu.be/x){.youtube}` adds `youtube` to the link
//! - `![Logo](logo.png){.align-center}` adds `align-center` to the image
//! - a paragraph ending in `{.is-info}` gets the `is-info` class
//!
//! Markers are applied on the markup tree after rendering, before the
//! content transforms run.

use std::sync::LazyLock;

use folio_markup::{Element, Node};
use regex::Regex;

/// Marker at the start of the text following a link or image.
static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{((?:\s*\.[\w-]+)+)\s*\}").expect("invalid leading marker regex")
});

/// Marker at the end of a paragraph.
static TRAILING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\{((?:\s*\.[\w-]+)+)\s*\}\s*$").expect("invalid trailing marker regex")
});

/// Elements that take a marker placed directly after them.
const MARKED_INLINE: &[&str] = &["a", "img"];

/// Move `{.class}` markers in `root` onto their elements.
pub fn apply_class_markers(root: &mut Element) {
    root.walk_mut(&mut |el| {
        attach_to_previous(el);
        if el.is("p") {
            attach_trailing(el);
        }
    });
}

/// `.a .b` to `a b`.
fn marker_classes(marker: &str) -> String {
    marker
        .split_whitespace()
        .map(|c| c.trim_start_matches('.'))
        .collect::<Vec<_>>()
        .join(" ")
}

fn attach_to_previous(el: &mut Element) {
    let mut i = 1;
    while i < el.children.len() {
        let found = match (&el.children[i - 1], &el.children[i]) {
            (Node::Element(prev), Node::Text(text)) if prev.is_any(MARKED_INLINE) => {
                LEADING_MARKER
                    .captures(text)
                    .map(|caps| (caps[0].len(), marker_classes(&caps[1])))
            }
            _ => None,
        };

        if let Some((len, classes)) = found {
            if let Some(prev) = el.children[i - 1].as_element_mut() {
                prev.add_class(&classes);
            }
            if let Node::Text(text) = &mut el.children[i] {
                text.drain(..len);
                if text.is_empty() {
                    el.children.remove(i);
                    continue;
                }
            }
        }
        i += 1;
    }
}

fn attach_trailing(p: &mut Element) {
    let Some(Node::Text(text)) = p.children.last_mut() else {
        return;
    };
    let Some(caps) = TRAILING_MARKER.captures(text) else {
        return;
    };
    let classes = marker_classes(&caps[1]);
    let start = caps.get(0).map_or(text.len(), |m| m.start());

    text.truncate(start);
    if text.is_empty() {
        p.children.pop();
    }
    p.add_class(&classes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_markup::{MarkupParser, MarkupSerializer};
    use pretty_assertions::assert_eq;

    fn apply(html: &str) -> String {
        let mut root = MarkupParser::new().parse(html).unwrap();
        apply_class_markers(&mut root);
        MarkupSerializer::new().serialize(&root)
    }

    #[test]
    fn test_marker_after_link() {
        assert_eq!(
            apply(r#"<p><a href="https://youtu.be/x">Intro</a>{.youtube}</p>"#),
            r#"<p><a href="https://youtu.be/x" class="youtube">Intro</a></p>"#
        );
    }

    #[test]
    fn test_marker_after_image_keeps_following_text() {
        assert_eq!(
            apply(r#"<p><img src="a.png" alt="" />{.align-center .wide} caption</p>"#),
            r#"<p><img src="a.png" alt="" class="align-center wide" /> caption</p>"#
        );
    }

    #[test]
    fn test_marker_at_paragraph_end() {
        assert_eq!(
            apply("<blockquote><p>Careful now {.is-warning}</p></blockquote>"),
            r#"<blockquote><p class="is-warning">Careful now</p></blockquote>"#
        );
    }

    #[test]
    fn test_link_and_paragraph_markers() {
        assert_eq!(
            apply(r#"<p><a href="v.mp4">clip</a>{.video} note {.is-info}</p>"#),
            r#"<p class="is-info"><a href="v.mp4" class="video">clip</a> note</p>"#
        );
    }

    #[test]
    fn test_marker_after_plain_text_in_middle_is_kept() {
        let html = "<p>use {.x} here</p>";
        assert_eq!(apply(html), html);
    }

    #[test]
    fn test_marker_not_after_link_outside_paragraph() {
        let html = "<li>item {.x}</li>";
        assert_eq!(apply(html), html);
    }

    #[test]
    fn test_invalid_marker_ignored() {
        let html = "<p>braces {not a marker}</p>";
        assert_eq!(apply(html), html);
    }

    #[test]
    fn test_marker_classes() {
        assert_eq!(marker_classes(" .a  .b-c"), "a b-c");
    }
}
