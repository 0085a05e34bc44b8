//! Word tokens for search indexing.

use std::sync::LazyLock;

use folio_config::TextConfig;
use pulldown_cmark::{Event, Tag, TagEnd};
use regex::Regex;

/// Bare URLs left in text (autolinks, pasted links).
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?|ftp)://\S+|\bwww\.\S+").expect("invalid url regex")
});

/// `{.class}` presentation markers.
static CLASS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(?:\s*\.[\w-]+)+\s*\}").expect("invalid class marker regex")
});

static DEFAULT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&word_pattern(&TextConfig::default().character_ranges()))
        .expect("invalid default word regex")
});

fn word_pattern(extra_ranges: &str) -> String {
    format!("[a-z0-9{extra_ranges}]+")
}

/// Reduces a markdown event stream to lowercase word tokens.
///
/// Code spans, code blocks, raw HTML, math, URLs and `{.class}` markers are
/// dropped. A word is a run of `a-z`, `0-9` and the configured extra
/// character ranges.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    word: Regex,
}

impl TextExtractor {
    /// Create an extractor accepting `extra_ranges` (a regex character class
    /// body such as `\x{0400}-\x{04FF}`) as word characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranges do not form a valid character class.
    pub fn new(extra_ranges: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            word: Regex::new(&word_pattern(extra_ranges))?,
        })
    }

    /// Extract tokens in document order.
    pub fn tokens<'a, I>(&self, events: I) -> Vec<String>
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let text = collect_text(events);
        let text = CLASS_MARKER.replace_all(&text, " ");
        let text = URL.replace_all(&text, " ").to_lowercase();
        self.word
            .find_iter(&text)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.clone(),
        }
    }
}

/// Concatenate prose text, separating blocks with spaces.
fn collect_text<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut text = String::new();
    let mut in_code = false;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code = false;
                text.push(' ');
            }
            Event::Text(t) if !in_code => text.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableCell
                | TagEnd::BlockQuote(_)
                | TagEnd::DefinitionListTitle
                | TagEnd::DefinitionListDefinition,
            ) => text.push(' '),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    fn tokens(extractor: &TextExtractor, markdown: &str) -> Vec<String> {
        extractor.tokens(Parser::new_ext(markdown, Options::ENABLE_TABLES))
    }

    #[test]
    fn test_tokens_basic() {
        assert_eq!(
            tokens(&TextExtractor::default(), "# Hello World\n\nSome **bold** text."),
            vec!["hello", "world", "some", "bold", "text"]
        );
    }

    #[test]
    fn test_tokens_skip_code() {
        assert_eq!(
            tokens(
                &TextExtractor::default(),
                "Run `cargo build` now\n\n```rust\nfn main() {}\n```\n\nDone"
            ),
            vec!["run", "now", "done"]
        );
    }

    #[test]
    fn test_tokens_skip_urls_and_html() {
        assert_eq!(
            tokens(
                &TextExtractor::default(),
                "See <https://example.com/page> and [docs](https://x.dev) <b>here</b> www.site.org"
            ),
            vec!["see", "and", "docs", "here"]
        );
    }

    #[test]
    fn test_tokens_skip_class_markers() {
        assert_eq!(
            tokens(
                &TextExtractor::default(),
                "[Intro](https://youtu.be/x){.youtube} careful {.is-warning .wide}"
            ),
            vec!["intro", "careful"]
        );
    }

    #[test]
    fn test_tokens_blocks_do_not_merge() {
        assert_eq!(
            tokens(&TextExtractor::default(), "# Title\nBody\n\n- one\n- two"),
            vec!["title", "body", "one", "two"]
        );
    }

    #[test]
    fn test_tokens_inline_formatting_keeps_words_whole() {
        assert_eq!(
            tokens(&TextExtractor::default(), "un**believ**able"),
            vec!["unbelievable"]
        );
    }

    #[test]
    fn test_tokens_default_scripts() {
        assert_eq!(
            tokens(&TextExtractor::default(), "漢字 テスト and مرحبا"),
            vec!["漢字", "テスト", "and", "مرحبا"]
        );
    }

    #[test]
    fn test_tokens_without_extra_ranges() {
        let extractor = TextExtractor::new("").unwrap();
        assert_eq!(tokens(&extractor, "Привет world"), vec!["world"]);
    }

    #[test]
    fn test_tokens_custom_ranges() {
        let extractor = TextExtractor::new(r"\x{0400}-\x{04FF}").unwrap();
        assert_eq!(tokens(&extractor, "Привет World"), vec!["привет", "world"]);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(TextExtractor::new(r"\x{ZZZZ}").is_err());
    }
}
