//! Generic markdown renderer with pluggable backend.

use std::collections::HashMap;
use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use folio_markup::{escape_attr, escape_html};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::backend::RenderBackend;
use crate::code_block::{CodeBlockProcessor, ProcessResult, parse_fence_info};
use crate::state::{CodeBlockState, HeadingState, ImageState, TableState};
use crate::util::heading_level_to_num;

/// Result of rendering markdown.
#[derive(Clone, Debug, Default)]
pub struct RenderResult {
    /// Rendered markup.
    pub html: String,
    /// Warnings generated during rendering (e.g., failed code block processors).
    pub warnings: Vec<String>,
}

/// Generic markdown renderer with pluggable backend.
///
/// Uses the [`RenderBackend`] trait to delegate presentation-specific
/// elements while handling common elements (tables, lists, inline
/// formatting) itself.
///
/// # Code Block Processors
///
/// Custom code block processing can be added via
/// [`with_processor`](Self::with_processor). Processors are checked in order;
/// the first returning a non-`PassThrough` result wins.
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    processors: Vec<Arc<dyn CodeBlockProcessor>>,
    pending_attrs: HashMap<String, String>,
    warnings: Vec<String>,
    gfm: bool,
    math: bool,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer with GFM enabled and math disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::default(),
            processors: Vec::new(),
            pending_attrs: HashMap::new(),
            warnings: Vec::new(),
            gfm: true,
            math: false,
            _backend: PhantomData,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable `$inline$` and `$$display$$` math.
    #[must_use]
    pub fn with_math(mut self, enabled: bool) -> Self {
        self.math = enabled;
        self
    }

    /// Add a code block processor.
    #[must_use]
    pub fn with_processor(mut self, processor: Arc<dyn CodeBlockProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    /// Get parser options based on configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        parser_options(self.gfm, self.math)
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        self.render(self.create_parser(markdown))
    }

    /// Render markdown events and return the result.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::InlineMath(source) => self.math(&source, false),
            Event::DisplayMath(source) => self.math(&source, true),
            Event::Html(html) => self.output.push_str(&html),
            Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => {
                if self.heading.is_active() {
                    self.heading.push_text(" ");
                }
                let mut out = String::new();
                B::hard_break(&mut out);
                self.push_inline(&out);
            }
            Event::Rule => B::horizontal_rule(&mut self.output),
            Event::TaskListMarker(checked) => B::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known.
                self.heading.start_heading(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => B::blockquote_start(&mut self.output),
            Tag::CodeBlock(kind) => {
                let (lang, attrs) = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => {
                        let (lang, attrs) = parse_fence_info(info);
                        (if lang.is_empty() { None } else { Some(lang) }, attrs)
                    }
                    _ => (None, HashMap::new()),
                };
                self.pending_attrs = attrs;
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let link_tag = if title.is_empty() {
                    format!(r#"<a href="{}">"#, escape_attr(&dest_url))
                } else {
                    format!(
                        r#"<a href="{}" title="{}">"#,
                        escape_attr(&dest_url),
                        escape_attr(&title)
                    )
                };
                self.push_inline(&link_tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Alt text is collected until the matching end tag.
                self.image.start(dest_url.to_string(), title.to_string());
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.heading.complete_heading() {
                    B::heading(level, &id, &html, &mut self.output);
                }
            }
            TagEnd::BlockQuote(_) => B::blockquote_end(&mut self.output),
            TagEnd::CodeBlock => self.finish_code_block(),
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::Image => {
                if let Some((src, title, alt)) = self.image.end() {
                    let mut out = String::new();
                    B::image(&src, &alt, &title, &mut out);
                    self.push_inline(&out);
                }
            }
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
        }
    }

    fn finish_code_block(&mut self) {
        let (lang, content) = self.code.end();
        let attrs = std::mem::take(&mut self.pending_attrs);

        if let Some(lang) = lang.as_deref() {
            for processor in &self.processors {
                match processor.process(lang, &attrs, &content) {
                    ProcessResult::Inline(html) => {
                        self.output.push_str(&html);
                        return;
                    }
                    ProcessResult::PassThrough => {}
                    ProcessResult::Failed(reason) => {
                        tracing::warn!(language = lang, %reason, "Code block processor failed");
                        self.warnings
                            .push(format!("Failed to process {lang} code block: {reason}"));
                        break;
                    }
                }
            }
        }

        B::code_block(lang.as_deref(), &content, &mut self.output);
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
            return;
        }
        if self.heading.is_active() {
            self.heading.push_text(code);
        }
        let html = format!("<code>{}</code>", escape_html(code));
        self.push_inline(&html);
    }

    fn math(&mut self, source: &str, display: bool) {
        let mut out = String::new();
        if display {
            B::display_math(source, &mut out);
        } else {
            B::inline_math(source, &mut out);
        }
        self.push_inline(&out);
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.image.is_active() {
            self.image.push_str(" ");
        } else if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html("\n");
        } else {
            self.output.push('\n');
        }
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parser options for the given feature switches.
pub(crate) fn parser_options(gfm: bool, math: bool) -> Options {
    let mut options = Options::empty();
    if gfm {
        options |= Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
    }
    if math {
        options |= Options::ENABLE_MATH;
    }
    options
}
