//! Source renderer capability.
//!
//! The document pipeline needs two things from a markdown engine: the event
//! stream (for heading extraction and text indexing) and rendered markup.
//! [`SourceRenderer`] names exactly that, so the pipeline can be driven by
//! synthetic streams in tests.

use std::sync::Arc;

use pulldown_cmark::{Event, Parser};

use crate::code_block::CodeBlockProcessor;
use crate::html::HtmlBackend;
use crate::renderer::{MarkdownRenderer, RenderResult, parser_options};

/// Narrow interface to a markdown engine.
pub trait SourceRenderer: Send + Sync {
    /// Parse `source` into an event stream.
    fn events<'a>(&self, source: &'a str) -> Vec<Event<'a>>;

    /// Render `source` to markup.
    fn render(&self, source: &str) -> RenderResult;
}

/// [`SourceRenderer`] backed by pulldown-cmark and [`HtmlBackend`].
#[derive(Clone)]
pub struct PulldownRenderer {
    gfm: bool,
    math: bool,
    processors: Vec<Arc<dyn CodeBlockProcessor>>,
}

impl PulldownRenderer {
    /// Create a renderer with GFM enabled and math disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            math: false,
            processors: Vec::new(),
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable math.
    #[must_use]
    pub fn with_math(mut self, enabled: bool) -> Self {
        self.math = enabled;
        self
    }

    /// Add a code block processor used by [`render`](SourceRenderer::render).
    #[must_use]
    pub fn with_processor(mut self, processor: Arc<dyn CodeBlockProcessor>) -> Self {
        self.processors.push(processor);
        self
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRenderer for PulldownRenderer {
    fn events<'a>(&self, source: &'a str) -> Vec<Event<'a>> {
        Parser::new_ext(source, parser_options(self.gfm, self.math)).collect()
    }

    fn render(&self, source: &str) -> RenderResult {
        let mut renderer = MarkdownRenderer::<HtmlBackend>::new()
            .with_gfm(self.gfm)
            .with_math(self.math);
        for processor in &self.processors {
            renderer = renderer.with_processor(Arc::clone(processor));
        }
        renderer.render_markdown(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Tag, TagEnd};

    #[test]
    fn test_events_respect_gfm() {
        let source = "| A |\n|---|\n| 1 |";
        let has_table = |events: &[Event<'_>]| {
            events
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::Table(_))))
        };

        assert!(has_table(&PulldownRenderer::new().events(source)));
        assert!(!has_table(&PulldownRenderer::new().with_gfm(false).events(source)));
    }

    #[test]
    fn test_events_balanced() {
        let events = PulldownRenderer::new().events("# Title\n\nBody");
        assert!(matches!(events.first(), Some(Event::Start(Tag::Heading { .. }))));
        assert!(matches!(events.last(), Some(Event::End(TagEnd::Paragraph))));
    }

    #[test]
    fn test_render_with_math() {
        let result = PulldownRenderer::new().with_math(true).render("$x$");
        assert_eq!(
            result.html,
            r#"<p><span class="math-inline">\(x\)</span></p>"#
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = PulldownRenderer::new();
        let first = renderer.render("## A\n\n## A");
        let second = renderer.render("## A\n\n## A");
        assert_eq!(first.html, second.html);
        assert!(second.html.contains(r#"id="a-1""#));
    }
}
