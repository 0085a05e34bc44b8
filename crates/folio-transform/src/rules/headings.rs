//! Link stripping in headings.

use folio_markup::{Element, Node};

use crate::rule::Rule;
use crate::rules::merge_text;

/// Headings whose links are flattened.
const STRIPPED_HEADINGS: &[&str] = &["h1", "h2", "h3"];

/// Class of the permalink anchor the renderer puts in every heading.
const PERMALINK_CLASS: &str = "toc-anchor";

/// Replaces links inside H1-H3 with their text.
///
/// The heading's own permalink anchor (`a.toc-anchor`) is kept.
pub struct HeadingLinkRule;

impl Rule for HeadingLinkRule {
    fn name(&self) -> &'static str {
        "heading-links"
    }

    fn apply(&self, root: &mut Element) {
        root.walk_mut(&mut |el| {
            if el.is_any(STRIPPED_HEADINGS) {
                unwrap_links(el);
            }
        });
    }
}

fn unwrap_links(el: &mut Element) {
    let mut changed = false;
    for child in &mut el.children {
        let Node::Element(inner) = child else {
            continue;
        };
        if inner.is("a") && !inner.has_class(PERMALINK_CLASS) {
            let text = inner.text_content();
            *child = Node::Text(text);
            changed = true;
        } else {
            unwrap_links(inner);
        }
    }
    if changed {
        merge_text(&mut el.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_link_keeps_permalink() {
        assert_eq!(
            run(
                &HeadingLinkRule,
                r##"<h2 id="docs"><a class="toc-anchor" href="#docs">¶</a> <a href="https://x.dev">Docs</a> page</h2>"##
            ),
            r##"<h2 id="docs"><a class="toc-anchor" href="#docs">¶</a> Docs page</h2>"##
        );
    }

    #[test]
    fn test_flattens_formatted_link_text() {
        assert_eq!(
            run(&HeadingLinkRule, r#"<h1><a href="/x"><code>cargo</code> run</a></h1>"#),
            "<h1>cargo run</h1>"
        );
    }

    #[test]
    fn test_strips_nested_links() {
        assert_eq!(
            run(&HeadingLinkRule, r#"<h3><em><a href="/x">deep</a></em></h3>"#),
            "<h3><em>deep</em></h3>"
        );
    }

    #[test]
    fn test_deeper_headings_untouched() {
        let html = r#"<h4><a href="/x">keep</a></h4><p><a href="/y">keep</a></p>"#;
        assert_eq!(run(&HeadingLinkRule, html), html);
    }
}
