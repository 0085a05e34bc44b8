//! Built-in content rules.

mod blockquote;
mod headings;
mod images;
mod leading;
mod sections;

pub use blockquote::BlockquoteClassRule;
pub use headings::HeadingLinkRule;
pub use images::{ALIGN_CENTER_CLASS, ImageAlignRule};
pub use leading::{GAPLESS_CLASS, LeadingParagraphRule};
pub use sections::{H2_SECTION_CLASS, H3_SECTION_CLASS, SectionRule};

use folio_markup::Node;

/// Merge runs of adjacent text nodes.
pub(crate) fn merge_text(children: &mut Vec<Node>) {
    for node in std::mem::take(children) {
        if let Node::Text(text) = &node
            && let Some(Node::Text(last)) = children.last_mut()
        {
            last.push_str(text);
            continue;
        }
        children.push(node);
    }
}

#[cfg(test)]
pub(crate) fn run(rule: &dyn crate::Rule, html: &str) -> String {
    let mut root = folio_markup::MarkupParser::new().parse(html).unwrap();
    rule.apply(&mut root);
    folio_markup::MarkupSerializer::new().serialize(&root)
}
