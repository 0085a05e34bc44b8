//! Document parsing pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use folio_config::Config;
use folio_markup::{MarkupParser, MarkupSerializer};
use folio_renderer::{
    HeadingExtractor, OutlineNode, PulldownRenderer, SourceRenderer, TreeBuilder,
    apply_class_markers,
};
use folio_transform::{ContentTransformer, VideoEmbedResolver, VideoRule};
use serde::Serialize;

use crate::error::DocumentError;
use crate::meta::{extract_meta, strip_comments};
use crate::text::TextExtractor;

/// Result of parsing a document.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    /// Comment directives, keyed by lowercase name.
    pub meta: BTreeMap<String, String>,
    /// Final markup.
    pub html: String,
    /// Heading outline.
    pub tree: Vec<OutlineNode>,
    /// Warnings generated during rendering (e.g., failed code block processors).
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Parses markdown documents into metadata, markup and outline.
///
/// Parsing never fails: when rendered markup cannot be read back into a tree
/// the transforms are skipped and the rendered markup is returned as is.
/// The parser holds no per-document state and can be shared across threads.
pub struct DocumentParser<R: SourceRenderer = PulldownRenderer> {
    renderer: R,
    headings: HeadingExtractor,
    transformer: Arc<ContentTransformer>,
    text: TextExtractor,
}

impl DocumentParser {
    /// Create a parser with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(PulldownRenderer::new())
    }

    /// Create a parser from configuration.
    ///
    /// Configured `[[video]]` rules replace the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if a video rule pattern or the text character ranges
    /// are not valid regexes.
    pub fn from_config(config: &Config) -> Result<Self, DocumentError> {
        let renderer = PulldownRenderer::new()
            .with_gfm(config.render.gfm)
            .with_math(config.render.math);

        let videos = if config.videos.is_empty() {
            VideoEmbedResolver::default()
        } else {
            let rules = config
                .videos
                .iter()
                .map(|v| VideoRule::new(&v.class, v.pattern.as_deref(), &v.template))
                .collect::<Result<Vec<_>, _>>()?;
            VideoEmbedResolver::new(rules)
        };

        Ok(Self::with_renderer(renderer)
            .with_max_level(config.render.toc_depth)
            .with_transformer(ContentTransformer::new(videos))
            .with_text_extractor(TextExtractor::new(&config.text.character_ranges())?))
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SourceRenderer> DocumentParser<R> {
    /// Create a parser on top of a custom renderer.
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            headings: HeadingExtractor::new(),
            transformer: Arc::new(ContentTransformer::default()),
            text: TextExtractor::default(),
        }
    }

    /// Deepest heading level kept in the outline.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u8) -> Self {
        self.headings = self.headings.with_max_level(max_level);
        self
    }

    /// Replace the content transformer.
    #[must_use]
    pub fn with_transformer(mut self, transformer: impl Into<Arc<ContentTransformer>>) -> Self {
        self.transformer = transformer.into();
        self
    }

    /// Replace the text extractor.
    #[must_use]
    pub fn with_text_extractor(mut self, text: TextExtractor) -> Self {
        self.text = text;
        self
    }

    /// Parse a document.
    pub fn parse(&self, source: &str) -> ParsedDocument {
        let meta = extract_meta(source);
        let source = strip_comments(source);

        let tree = self.outline(&source);
        let rendered = self.renderer.render(&source);
        let html = self.transform(rendered.html);

        tracing::debug!(
            meta = meta.len(),
            headings = tree.len(),
            bytes = html.len(),
            "Parsed document"
        );

        ParsedDocument {
            meta,
            html,
            tree,
            warnings: rendered.warnings,
        }
    }

    /// Build the heading outline of a document.
    pub fn outline(&self, source: &str) -> Vec<OutlineNode> {
        let records = self.headings.extract(self.renderer.events(source));
        TreeBuilder::build(&records)
    }

    /// Extract lowercase word tokens for search indexing.
    pub fn text(&self, source: &str) -> Vec<String> {
        let source = strip_comments(source);
        self.text.tokens(self.renderer.events(&source))
    }

    /// Apply class markers and content transforms to rendered markup.
    fn transform(&self, html: String) -> String {
        let mut root = match MarkupParser::new().parse(&html) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read rendered markup, skipping transforms");
                return html;
            }
        };

        apply_class_markers(&mut root);
        self.transformer.transform(&mut root);
        MarkupSerializer::new().serialize(&root)
    }
}
