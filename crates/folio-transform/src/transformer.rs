//! Ordered rule pipeline.

use folio_markup::Element;

use crate::rule::Rule;
use crate::rules::{
    BlockquoteClassRule, HeadingLinkRule, ImageAlignRule, LeadingParagraphRule, SectionRule,
};
use crate::video::VideoEmbedResolver;

/// Applies the content rules to a markup tree, in order.
///
/// The built-in order is part of the contract: links are stripped from
/// headings before sections are measured, and images are aligned after video
/// links have been embedded. Extra rules added with
/// [`with_rule`](Self::with_rule) run after the built-in ones.
pub struct ContentTransformer {
    rules: Vec<Box<dyn Rule>>,
}

impl ContentTransformer {
    /// Create a transformer with the built-in rules and the given video
    /// resolver.
    #[must_use]
    pub fn new(videos: VideoEmbedResolver) -> Self {
        Self {
            rules: vec![
                Box::new(LeadingParagraphRule),
                Box::new(HeadingLinkRule),
                Box::new(BlockquoteClassRule),
                Box::new(SectionRule),
                Box::new(videos),
                Box::new(ImageAlignRule),
            ],
        }
    }

    /// Append a rule to the pipeline.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Rewrite `root` in place.
    pub fn transform(&self, root: &mut Element) {
        for rule in &self.rules {
            tracing::trace!(rule = rule.name(), "Applying content rule");
            rule.apply(root);
        }
    }
}

impl Default for ContentTransformer {
    fn default() -> Self {
        Self::new(VideoEmbedResolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_markup::{MarkupParser, MarkupSerializer};
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(ContentTransformer: Send, Sync);
    static_assertions::assert_impl_all!(VideoEmbedResolver: Send, Sync, Clone);

    fn transform(html: &str) -> String {
        let mut root = MarkupParser::new().parse(html).unwrap();
        ContentTransformer::default().transform(&mut root);
        MarkupSerializer::new().serialize(&root)
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = ContentTransformer::default().rule_names().collect();
        assert_eq!(
            names,
            vec![
                "leading-paragraph",
                "heading-links",
                "blockquote-classes",
                "section-enclosure",
                "video-embed",
                "image-align",
            ]
        );
    }

    #[test]
    fn test_full_pipeline() {
        let input = concat!(
            "<p></p>",
            r##"<h2 id="intro"><a class="toc-anchor" href="#intro">¶</a> <a href="/x">Intro</a></h2>"##,
            r#"<blockquote><p class="is-info">note</p></blockquote>"#,
            r#"<p><a href="https://youtu.be/abc123" class="youtube">demo</a></p>"#,
            r#"<p><img src="a.png" alt="" class="align-center" /></p>"#,
        );
        assert_eq!(
            transform(input),
            concat!(
                r##"<h2 id="intro"><a class="toc-anchor" href="#intro">¶</a> Intro</h2>"##,
                r#"<div class="indent-h2">"#,
                r#"<blockquote class="is-info"><p>note</p></blockquote>"#,
                r#"<p><iframe width="640" height="360" src="https://www.youtube.com/embed/abc123?rel=0" frameborder="0" allowfullscreen=""></iframe></p>"#,
                r#"<p class="align-center"><img src="a.png" alt="" /></p>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_blockquote_hoisting_before_sections() {
        // Only top-level quotes are hoisted, so this must run before enclosure.
        let out = transform(r#"<h2>A</h2><blockquote><p class="is-warning">w</p></blockquote>"#);
        assert!(out.contains(r#"<blockquote class="is-warning"><p>w</p></blockquote>"#));
    }

    #[test]
    fn test_idempotent() {
        let input = concat!(
            r#"<p><img src="hero.png" alt="" /></p>"#,
            "<h1>T</h1><h2>A</h2><p>a</p><h3>B</h3>",
            r#"<p><a class="video" href="/v.mp4">v</a></p>"#,
            "<h2>C</h2>",
        );
        let once = transform(input);
        assert_eq!(transform(&once), once);
    }

    #[test]
    fn test_idempotent_with_heading_in_blockquote() {
        let once = transform("<blockquote><h2>Note</h2><p>body text</p></blockquote>");
        assert_eq!(
            once,
            r#"<blockquote><h2>Note</h2><div class="indent-h2"><p>body text</p></div></blockquote>"#
        );
        assert_eq!(transform(&once), once);
    }

    #[test]
    fn test_custom_rule_runs_last() {
        struct MarkTables;

        impl Rule for MarkTables {
            fn name(&self) -> &'static str {
                "mark-tables"
            }

            fn apply(&self, root: &mut Element) {
                root.walk_mut(&mut |el| {
                    if el.is("table") {
                        el.add_class("table");
                    }
                });
            }
        }

        let transformer = ContentTransformer::default().with_rule(MarkTables);
        assert_eq!(transformer.rule_names().last(), Some("mark-tables"));

        let mut root = MarkupParser::new().parse("<h2>A</h2><table></table>").unwrap();
        transformer.transform(&mut root);
        assert_eq!(
            MarkupSerializer::new().serialize(&root),
            r#"<h2>A</h2><div class="indent-h2"><table class="table"></table></div>"#
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(transform(""), "");
    }
}
