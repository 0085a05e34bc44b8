//! Video link embedding.

use std::sync::LazyLock;

use folio_markup::{Element, MarkupParser, escape_attr};
use regex::Regex;

use crate::error::VideoRuleError;
use crate::rule::Rule;

/// Placeholder replaced by the video identifier in embed templates.
const PLACEHOLDER: &str = "{0}";

/// Built-in rules as (class, pattern, template), in priority order.
const BUILTIN_RULES: &[(&str, Option<&str>, &str)] = &[
    (
        "youtube",
        Some(r"(?i)(?:youtu\.be/|v/|vi/|u/\w/|embed/|(?:watch)?\?vi?=|&vi?=)([^#&?]*)"),
        r#"<iframe width="640" height="360" src="https://www.youtube.com/embed/{0}?rel=0" frameborder="0" allowfullscreen=""></iframe>"#,
    ),
    (
        "vimeo",
        Some(r"vimeo\.com/(?:channels/(?:\w+/)?|groups/[^/]*/videos/|album/\d+/video/|)(\d+)(?:$|/|\?)"),
        r#"<iframe src="https://player.vimeo.com/video/{0}" width="640" height="360" frameborder="0" allowfullscreen=""></iframe>"#,
    ),
    (
        "dailymotion",
        Some(r"(?:dailymotion\.com(?:/embed)?(?:/video|/hub)|dai\.ly)/([0-9a-z]+)(?:[-_0-9a-zA-Z]+(?:#video=)?([a-z0-9]+)?)?"),
        r#"<iframe width="640" height="360" src="//www.dailymotion.com/embed/video/{0}?endscreen-enable=false" frameborder="0" allowfullscreen=""></iframe>"#,
    ),
    (
        "video",
        None,
        r#"<video width="640" height="360" controls="" preload="metadata"><source src="{0}" type="video/mp4" /></video>"#,
    ),
];

static DEFAULT_RULES: LazyLock<Vec<VideoRule>> = LazyLock::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(class, pattern, template)| {
            VideoRule::new(*class, *pattern, *template).expect("invalid built-in video rule")
        })
        .collect()
});

/// How links of one class turn into an embed.
///
/// A link matches when it is an `a` element carrying the rule's class. The
/// identifier is the last non-empty capture group of `pattern` applied to
/// the link's `href`, or the whole match for a pattern without groups. The
/// whole `href` is used when there is no pattern, it does not match or every
/// group is empty. Every `{0}` in the template is replaced by the identifier.
#[derive(Debug, Clone)]
pub struct VideoRule {
    class: String,
    pattern: Option<Regex>,
    template: String,
}

impl VideoRule {
    /// Create a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `class` is empty, the template has no `{0}`
    /// placeholder or the pattern is not a valid regex.
    pub fn new(
        class: impl Into<String>,
        pattern: Option<&str>,
        template: impl Into<String>,
    ) -> Result<Self, VideoRuleError> {
        let class = class.into();
        let template = template.into();

        if class.trim().is_empty() {
            return Err(VideoRuleError::EmptyClass);
        }
        if !template.contains(PLACEHOLDER) {
            return Err(VideoRuleError::MissingPlaceholder { class });
        }
        let pattern = pattern
            .map(Regex::new)
            .transpose()
            .map_err(|source| VideoRuleError::InvalidPattern {
                class: class.clone(),
                source,
            })?;

        Ok(Self {
            class,
            pattern,
            template,
        })
    }

    /// The built-in rules: YouTube, Vimeo, Dailymotion and self-hosted video.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_RULES.clone()
    }

    /// Link class this rule applies to.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Check whether `link` is handled by this rule.
    #[must_use]
    pub fn matches(&self, link: &Element) -> bool {
        link.is("a") && link.has_class(&self.class)
    }

    /// Extract the video identifier from `href`.
    #[must_use]
    pub fn identifier<'h>(&self, href: &'h str) -> &'h str {
        let Some(caps) = self.pattern.as_ref().and_then(|p| p.captures(href)) else {
            return href;
        };
        if caps.len() == 1 {
            return caps.get(0).map_or(href, |m| m.as_str());
        }
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .last()
            .unwrap_or(href)
    }

    /// Embed markup for `href`.
    #[must_use]
    pub fn embed(&self, href: &str) -> String {
        self.template
            .replace(PLACEHOLDER, &escape_attr(self.identifier(href)))
    }
}

/// Replaces video links with embeds.
///
/// Rules are tried in order and the first one whose class the link carries
/// wins. Links without an `href` are left alone.
#[derive(Debug, Clone)]
pub struct VideoEmbedResolver {
    rules: Vec<VideoRule>,
}

impl VideoEmbedResolver {
    /// Create a resolver with the given rules, in priority order.
    #[must_use]
    pub fn new(rules: Vec<VideoRule>) -> Self {
        Self { rules }
    }

    /// Rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[VideoRule] {
        &self.rules
    }

    /// Embed markup for `link`, if a rule handles it.
    #[must_use]
    pub fn resolve(&self, link: &Element) -> Option<String> {
        let rule = self.rules.iter().find(|rule| rule.matches(link))?;
        let href = link.attr("href")?;
        Some(rule.embed(href))
    }

    fn embed_children(&self, el: &mut Element) {
        let mut i = 0;
        while i < el.children.len() {
            let Some(embed) = el.children[i]
                .as_element()
                .and_then(|link| self.resolve(link))
            else {
                i += 1;
                continue;
            };

            match MarkupParser::new().parse(&embed) {
                Ok(fragment) => {
                    let len = fragment.children.len();
                    el.children.splice(i..=i, fragment.children);
                    i += len;
                }
                Err(e) => {
                    tracing::warn!(error = %e, embed = %embed, "Failed to parse video embed");
                    i += 1;
                }
            }
        }
    }
}

impl Default for VideoEmbedResolver {
    fn default() -> Self {
        Self::new(VideoRule::defaults())
    }
}

impl Rule for VideoEmbedResolver {
    fn name(&self) -> &'static str {
        "video-embed"
    }

    fn apply(&self, root: &mut Element) {
        root.walk_mut(&mut |el| self.embed_children(el));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::run;
    use pretty_assertions::assert_eq;

    fn link(class: &str, href: &str) -> Element {
        Element::new("a")
            .with_attr("href", href)
            .with_class(class)
            .with_text("video")
    }

    fn default_rule(class: &str) -> VideoRule {
        VideoRule::defaults()
            .into_iter()
            .find(|rule| rule.class() == class)
            .unwrap()
    }

    #[test]
    fn test_youtube_identifiers() {
        let rule = default_rule("youtube");
        assert_eq!(rule.identifier("https://youtu.be/abc123"), "abc123");
        assert_eq!(
            rule.identifier("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            rule.identifier("https://www.youtube.com/embed/xyz?start=5"),
            "xyz"
        );
        assert_eq!(
            rule.identifier("https://YOUTU.BE/Case"),
            "Case"
        );
    }

    #[test]
    fn test_vimeo_identifier() {
        let rule = default_rule("vimeo");
        assert_eq!(rule.identifier("https://vimeo.com/76979871"), "76979871");
        assert_eq!(
            rule.identifier("https://vimeo.com/channels/staffpicks/123456"),
            "123456"
        );
    }

    #[test]
    fn test_dailymotion_last_capture_wins() {
        let rule = default_rule("dailymotion");
        assert_eq!(
            rule.identifier("https://www.dailymotion.com/video/x7tgad0"),
            "x7tgad0"
        );
        assert_eq!(rule.identifier("https://dai.ly/x7tgad0"), "x7tgad0");
        assert_eq!(
            rule.identifier("https://www.dailymotion.com/hub/x1wp_Kids#video=x2abc9"),
            "x2abc9"
        );
    }

    #[test]
    fn test_unmatched_pattern_uses_href() {
        let rule = default_rule("vimeo");
        assert_eq!(rule.identifier("https://example.com/clip"), "https://example.com/clip");
    }

    #[test]
    fn test_empty_captures_use_href() {
        let rule = default_rule("youtube");
        assert_eq!(rule.identifier("https://youtu.be/?t=1"), "https://youtu.be/?t=1");
    }

    #[test]
    fn test_pattern_without_groups_uses_match() {
        let rule = VideoRule::new("clip", Some(r"\d+"), "<video src=\"/v/{0}\"></video>").unwrap();
        assert_eq!(rule.identifier("https://clips.example.com/42"), "42");
    }

    #[test]
    fn test_resolve_youtube_embed() {
        let embed = VideoEmbedResolver::default()
            .resolve(&link("youtube", "https://youtu.be/abc123"))
            .unwrap();
        assert!(embed.contains(r#"src="https://www.youtube.com/embed/abc123?rel=0""#));
    }

    #[test]
    fn test_resolve_generic_video_uses_raw_href() {
        let embed = VideoEmbedResolver::default()
            .resolve(&link("video", "/media/intro.mp4"))
            .unwrap();
        assert!(embed.contains(r#"<source src="/media/intro.mp4" type="video/mp4" />"#));
    }

    #[test]
    fn test_resolve_escapes_identifier() {
        let embed = VideoEmbedResolver::default()
            .resolve(&link("video", r#"/a.mp4" onload="x"#))
            .unwrap();
        assert!(embed.contains(r#"src="/a.mp4&quot; onload=&quot;x""#));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let resolver = VideoEmbedResolver::default();
        let both = Element::new("a")
            .with_attr("href", "https://youtu.be/abc")
            .with_class("video youtube");
        let embed = resolver.resolve(&both).unwrap();
        assert!(embed.contains("youtube.com/embed/abc"));
    }

    #[test]
    fn test_resolve_skips_missing_href_and_other_links() {
        let resolver = VideoEmbedResolver::default();
        assert!(
            resolver
                .resolve(&Element::new("a").with_class("youtube"))
                .is_none()
        );
        assert!(
            resolver
                .resolve(&link("external", "https://youtu.be/abc"))
                .is_none()
        );
        assert!(
            resolver
                .resolve(&Element::new("span").with_attr("href", "x").with_class("youtube"))
                .is_none()
        );
    }

    #[test]
    fn test_apply_replaces_link_in_place() {
        let html = run(
            &VideoEmbedResolver::default(),
            r#"<p>Watch <a href="https://vimeo.com/42" class="vimeo">this</a> now</p>"#,
        );
        assert_eq!(
            html,
            r#"<p>Watch <iframe src="https://player.vimeo.com/video/42" width="640" height="360" frameborder="0" allowfullscreen=""></iframe> now</p>"#
        );
    }

    #[test]
    fn test_apply_leaves_missing_href() {
        let html = r#"<p><a class="youtube">broken</a></p>"#;
        assert_eq!(run(&VideoEmbedResolver::default(), html), html);
    }

    #[test]
    fn test_custom_rule() {
        let rule = VideoRule::new(
            "peertube",
            Some(r"/w/([A-Za-z0-9]+)"),
            r#"<iframe src="https://tube.example/videos/embed/{0}"></iframe>"#,
        )
        .unwrap();
        let html = run(
            &VideoEmbedResolver::new(vec![rule]),
            r#"<p><a class="peertube" href="https://tube.example/w/kkGMgK9Z">v</a></p>"#,
        );
        assert_eq!(
            html,
            r#"<p><iframe src="https://tube.example/videos/embed/kkGMgK9Z"></iframe></p>"#
        );
    }

    #[test]
    fn test_rule_validation() {
        assert!(matches!(
            VideoRule::new("", None, "{0}"),
            Err(VideoRuleError::EmptyClass)
        ));
        assert!(matches!(
            VideoRule::new("x", None, "<video></video>"),
            Err(VideoRuleError::MissingPlaceholder { .. })
        ));
        assert!(matches!(
            VideoRule::new("x", Some("("), "{0}"),
            Err(VideoRuleError::InvalidPattern { .. })
        ));
    }
}
