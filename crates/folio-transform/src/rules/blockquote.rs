//! Blockquote class hoisting.

use folio_markup::Element;

use crate::rule::Rule;
use crate::rules::sections::is_section_container;

/// Moves the classes of a top-level blockquote's last child onto the quote.
///
/// A trailing `{.is-warning}` marker on the last paragraph of a quote thereby
/// styles the whole quote. Section containers left by [`SectionRule`] keep
/// their classes.
///
/// [`SectionRule`]: crate::SectionRule
pub struct BlockquoteClassRule;

impl Rule for BlockquoteClassRule {
    fn name(&self) -> &'static str {
        "blockquote-classes"
    }

    fn apply(&self, root: &mut Element) {
        for node in &mut root.children {
            let Some(quote) = node.as_element_mut() else {
                continue;
            };
            if !quote.is("blockquote") {
                continue;
            }
            let Some(last) = quote.last_element_child_mut() else {
                continue;
            };
            if is_section_container(last) {
                continue;
            }
            let Some(classes) = last.remove_attr("class") else {
                continue;
            };
            quote.add_class(&classes);
        }
    }
}
