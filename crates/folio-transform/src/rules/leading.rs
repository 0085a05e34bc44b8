//! Leading paragraph cleanup.

use folio_markup::{Element, Node};

use crate::rule::Rule;

/// Class marking a first paragraph that holds only an image.
pub const GAPLESS_CLASS: &str = "is-gapless";

/// Drops empty paragraphs at the start of the document.
///
/// When the first paragraph holds nothing but an image it is kept and marked
/// with [`GAPLESS_CLASS`] so the image sits flush with the top of the page.
pub struct LeadingParagraphRule;

impl Rule for LeadingParagraphRule {
    fn name(&self) -> &'static str {
        "leading-paragraph"
    }

    fn apply(&self, root: &mut Element) {
        loop {
            let Some(pos) = root.children.iter().position(|n| !n.is_blank_text()) else {
                return;
            };
            let Some(first) = root.children[pos].as_element_mut() else {
                return;
            };
            if !first.is("p") {
                return;
            }
            if is_image_only(first) {
                first.add_class(GAPLESS_CLASS);
                return;
            }
            if !is_empty(first) {
                return;
            }
            root.children.remove(pos);
        }
    }
}

fn is_image_only(p: &Element) -> bool {
    let mut elements = p.element_children();
    let only_image = elements.next().is_some_and(|el| el.is("img")) && elements.next().is_none();
    only_image && p.children.iter().all(|n| n.is_element("img") || n.is_blank_text())
}

fn is_empty(p: &Element) -> bool {
    p.children.iter().all(Node::is_blank_text)
}
