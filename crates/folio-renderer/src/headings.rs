//! Heading extraction from a markdown event stream.

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::slug::SlugRegistry;
use crate::util::heading_level_to_num;

/// Deepest heading level kept by default.
pub const DEFAULT_MAX_LEVEL: u8 = 3;

/// Heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeadingRecord {
    /// Plain heading text.
    pub content: String,
    /// Unique slug, identical to the rendered heading id.
    pub anchor: String,
    /// Heading level (1-6).
    pub level: u8,
}

impl HeadingRecord {
    /// Create a heading record.
    #[must_use]
    pub fn new(content: impl Into<String>, anchor: impl Into<String>, level: u8) -> Self {
        Self {
            content: content.into(),
            anchor: anchor.into(),
            level,
        }
    }
}

/// Collects [`HeadingRecord`]s from pulldown-cmark events.
///
/// Only text and inline code count towards heading content; inline HTML,
/// math and image alt text are skipped, matching the ids produced by
/// [`MarkdownRenderer`](crate::MarkdownRenderer). Slugs are registered for
/// every heading before the depth filter so duplicate suffixes line up with
/// the rendered markup.
#[derive(Debug, Clone, Copy)]
pub struct HeadingExtractor {
    max_level: u8,
}

/// Capture state for the heading being read.
#[derive(Default)]
struct Capture {
    level: u8,
    text: String,
    /// Inline depth relative to the heading.
    depth: usize,
    image_depth: usize,
    /// Text of the link when the link is the heading's only content.
    link_text: Option<String>,
    link_open: bool,
    link_count: usize,
    /// Content outside a top-level link.
    outside_link: bool,
}

impl Capture {
    fn new(level: u8) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.image_depth > 0 {
            return;
        }
        self.text.push_str(text);
        if self.link_open {
            if let Some(link_text) = self.link_text.as_mut() {
                link_text.push_str(text);
            }
        } else if !text.trim().is_empty() {
            self.outside_link = true;
        }
    }

    fn start(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Image { .. } => self.image_depth += 1,
            Tag::Link { .. } if self.depth == 0 => {
                self.link_open = true;
                self.link_count += 1;
                self.link_text = Some(String::new());
            }
            _ if self.depth == 0 => self.outside_link = true,
            _ => {}
        }
        self.depth += 1;
    }

    fn end(&mut self, tag: TagEnd) {
        self.depth = self.depth.saturating_sub(1);
        match tag {
            TagEnd::Image => self.image_depth = self.image_depth.saturating_sub(1),
            TagEnd::Link if self.depth == 0 => self.link_open = false,
            _ => {}
        }
    }

    /// Text the anchor is derived from.
    fn anchor_text(&self) -> &str {
        match &self.link_text {
            Some(link_text) if self.link_count == 1 && !self.outside_link => link_text,
            _ => &self.text,
        }
    }
}

impl HeadingExtractor {
    /// Create an extractor keeping headings up to [`DEFAULT_MAX_LEVEL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }

    /// Keep headings up to `max_level` (clamped to 1..=6).
    #[must_use]
    pub fn with_max_level(mut self, max_level: u8) -> Self {
        self.max_level = max_level.clamp(1, 6);
        self
    }

    /// Deepest level kept.
    #[must_use]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Extract headings in source order.
    pub fn extract<'a, I>(&self, events: I) -> Vec<HeadingRecord>
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let mut slugs = SlugRegistry::new();
        let mut headings = Vec::new();
        let mut capture: Option<Capture> = None;

        for event in events {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    capture = Some(Capture::new(heading_level_to_num(level)));
                }
                Event::End(TagEnd::Heading(_)) => {
                    let Some(done) = capture.take() else {
                        continue;
                    };
                    let anchor = slugs.unique(done.anchor_text().trim());
                    if done.level <= self.max_level {
                        headings.push(HeadingRecord::new(
                            done.text.trim(),
                            anchor,
                            done.level,
                        ));
                    }
                }
                event => {
                    let Some(current) = capture.as_mut() else {
                        continue;
                    };
                    match event {
                        Event::Text(text) | Event::Code(text) => current.push_text(&text),
                        Event::SoftBreak | Event::HardBreak => current.push_text(" "),
                        Event::Start(tag) => current.start(&tag),
                        Event::End(tag) => current.end(tag),
                        _ => {}
                    }
                }
            }
        }

        headings
    }
}

impl Default for HeadingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
