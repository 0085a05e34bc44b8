//! Section enclosure.

use folio_markup::{Element, Node};

use crate::rule::Rule;

/// Class of the container following each H2.
pub const H2_SECTION_CLASS: &str = "indent-h2";

/// Class of the container following each H3.
pub const H3_SECTION_CLASS: &str = "indent-h3";

struct Section {
    heading: &'static str,
    /// Headings that end the section.
    boundaries: &'static [&'static str],
    class: &'static str,
}

/// Enclosure passes, outermost first so H3 containers nest inside H2 ones.
const SECTIONS: [Section; 2] = [
    Section {
        heading: "h2",
        boundaries: &["h1", "h2"],
        class: H2_SECTION_CLASS,
    },
    Section {
        heading: "h3",
        boundaries: &["h1", "h2", "h3"],
        class: H3_SECTION_CLASS,
    },
];

/// Wraps the content following each H2 and H3 in a container `div`.
///
/// Everything after an H2 up to the next H1 or H2 moves into a
/// `div.indent-h2` inserted right after the heading; H3 sections are then
/// enclosed the same way in `div.indent-h3`, ending at the next H1-H3.
/// A heading already followed by its container keeps it, so the rule can be
/// re-applied.
pub struct SectionRule;

impl Rule for SectionRule {
    fn name(&self) -> &'static str {
        "section-enclosure"
    }

    fn apply(&self, root: &mut Element) {
        for section in &SECTIONS {
            root.walk_mut(&mut |el| enclose(el, section));
        }
    }
}

/// Check whether `el` is a container inserted by this rule.
pub(crate) fn is_section_container(el: &Element) -> bool {
    el.is("div") && SECTIONS.iter().any(|section| el.has_class(section.class))
}

fn is_container(node: &Node, class: &str) -> bool {
    node.as_element()
        .is_some_and(|el| el.is("div") && el.has_class(class))
}

fn enclose(parent: &mut Element, section: &Section) {
    let mut i = 0;
    while i < parent.children.len() {
        if !parent.children[i].is_element(section.heading) {
            i += 1;
            continue;
        }

        let start = i + 1;
        let end = parent.children[start..]
            .iter()
            .position(|n| n.as_element().is_some_and(|el| el.is_any(section.boundaries)))
            .map_or(parent.children.len(), |offset| start + offset);

        let existing = parent
            .children
            .get(start)
            .is_some_and(|n| is_container(n, section.class));
        let content_start = if existing { start + 1 } else { start };
        let captured: Vec<Node> = parent.children.drain(content_start..end).collect();

        if existing {
            if let Some(container) = parent.children[start].as_element_mut() {
                container.children.extend(captured);
            }
        } else {
            let container = Element::new("div")
                .with_class(section.class)
                .with_children(captured);
            parent.children.insert(start, container.into());
        }

        i = start + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encloses_h2_sections() {
        assert_eq!(
            run(&SectionRule, "<h1>T</h1><p>intro</p><h2>A</h2><p>a</p><ul><li>x</li></ul><h2>B</h2><p>b</p>"),
            concat!(
                "<h1>T</h1><p>intro</p>",
                r#"<h2>A</h2><div class="indent-h2"><p>a</p><ul><li>x</li></ul></div>"#,
                r#"<h2>B</h2><div class="indent-h2"><p>b</p></div>"#,
            )
        );
    }

    #[test]
    fn test_h1_ends_h2_section() {
        assert_eq!(
            run(&SectionRule, "<h2>A</h2><p>a</p><h1>T</h1><p>t</p>"),
            r#"<h2>A</h2><div class="indent-h2"><p>a</p></div><h1>T</h1><p>t</p>"#
        );
    }

    #[test]
    fn test_nests_h3_inside_h2() {
        assert_eq!(
            run(&SectionRule, "<h2>A</h2><p>a</p><h3>A1</h3><p>a1</p><h3>A2</h3><h2>B</h2>"),
            concat!(
                r#"<h2>A</h2><div class="indent-h2"><p>a</p>"#,
                r#"<h3>A1</h3><div class="indent-h3"><p>a1</p></div>"#,
                r#"<h3>A2</h3><div class="indent-h3"></div>"#,
                "</div>",
                r#"<h2>B</h2><div class="indent-h2"></div>"#,
            )
        );
    }

    #[test]
    fn test_h3_without_h2() {
        assert_eq!(
            run(&SectionRule, "<h1>T</h1><h3>S</h3><p>s</p>"),
            r#"<h1>T</h1><h3>S</h3><div class="indent-h3"><p>s</p></div>"#
        );
    }

    #[test]
    fn test_reapplying_is_stable() {
        let once = run(&SectionRule, "<h2>A</h2><p>a</p><h3>B</h3><p>b</p>");
        assert_eq!(run(&SectionRule, &once), once);
    }

    #[test]
    fn test_existing_container_absorbs_new_content() {
        assert_eq!(
            run(
                &SectionRule,
                r#"<h2>A</h2><div class="indent-h2"><p>a</p></div><p>late</p>"#
            ),
            r#"<h2>A</h2><div class="indent-h2"><p>a</p><p>late</p></div>"#
        );
    }

    #[test]
    fn test_no_headings_untouched() {
        let html = "<p>a</p><blockquote><p>b</p></blockquote>";
        assert_eq!(run(&SectionRule, html), html);
    }
}
