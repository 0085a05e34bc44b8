//! Code block processor seam.
//!
//! Syntax highlighters and other fenced-block handlers plug in here without
//! the renderer knowing about them. Processors are checked in order when a
//! fenced code block with a language is encountered; the first result that is
//! not [`ProcessResult::PassThrough`] wins.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use folio_renderer::{CodeBlockProcessor, ProcessResult};
//!
//! struct Shout;
//!
//! impl CodeBlockProcessor for Shout {
//!     fn process(
//!         &self,
//!         language: &str,
//!         _attrs: &HashMap<String, String>,
//!         source: &str,
//!     ) -> ProcessResult {
//!         if language == "shout" {
//!             ProcessResult::Inline(format!("<p>{}</p>", source.to_uppercase()))
//!         } else {
//!             ProcessResult::PassThrough
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with this markup.
    ///
    /// The markup must be XHTML-compatible so it survives the tree pass.
    Inline(String),

    /// Not handled here; try the next processor or render a plain block.
    PassThrough,

    /// The processor handles this language but failed on this block.
    ///
    /// The renderer falls back to an escaped, unhighlighted block and
    /// records the reason as a warning.
    Failed(String),
}

/// Trait for processing fenced code blocks.
pub trait CodeBlockProcessor: Send + Sync {
    /// Process a code block and return the result.
    ///
    /// # Arguments
    ///
    /// * `language` - Language identifier from fence info string
    /// * `attrs` - Attributes parsed from fence (key=value pairs)
    /// * `source` - Raw content of the code block
    fn process(&self, language: &str, attrs: &HashMap<String, String>, source: &str)
    -> ProcessResult;
}

/// Parse fence info string into language and attributes.
///
/// Format: `language [key=value ...]`
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or("").to_owned();

    let mut attrs = HashMap::new();
    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            let value = value.trim_matches('"').trim_matches('\'');
            attrs.insert(key.to_owned(), value.to_owned());
        }
    }

    (language, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fence_info_language_only() {
        let (lang, attrs) = parse_fence_info("rust");
        assert_eq!(lang, "rust");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_parse_fence_info_with_attrs() {
        let (lang, attrs) = parse_fence_info("js linenums=true theme='dark'");
        assert_eq!(lang, "js");
        assert_eq!(attrs.get("linenums"), Some(&"true".to_owned()));
        assert_eq!(attrs.get("theme"), Some(&"dark".to_owned()));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        let (lang, attrs) = parse_fence_info("");
        assert_eq!(lang, "");
        assert!(attrs.is_empty());
    }
}
