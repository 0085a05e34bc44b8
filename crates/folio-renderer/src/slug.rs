//! Heading slugs.

use std::collections::{HashMap, HashSet};

/// Convert text to a lowercase, hyphen-separated slug.
///
/// Every run of characters that are not Unicode alphanumeric becomes a single
/// hyphen; leading and trailing hyphens are dropped. Non-Latin scripts are
/// kept, so `"Привет мир"` becomes `"привет-мир"`.
///
/// # Examples
///
/// ```
/// use folio_renderer::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("What's New?"), "what-s-new");
/// assert_eq!(slugify("snake_case"), "snake-case");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    result
}

/// Hands out unique slugs within one document.
///
/// The first occurrence keeps the plain slug, repeats get `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct SlugRegistry {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl SlugRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and make the result unique.
    pub fn unique(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_default();
        loop {
            let id = match *count {
                0 => base.clone(),
                n => format!("{base}-{n}"),
            };
            *count += 1;
            // A heading may literally read "faq-1".
            if self.used.insert(id.clone()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("Install `npm` (v2)"), "install-npm-v2");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Привет мир"), "привет-мир");
        assert_eq!(slugify("安装 指南"), "安装-指南");
        assert_eq!(slugify("Ärger"), "ärger");
    }

    #[test]
    fn test_slugify_only_punctuation() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_registry_suffixes_duplicates() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.unique("FAQ"), "faq");
        assert_eq!(registry.unique("FAQ"), "faq-1");
        assert_eq!(registry.unique("faq"), "faq-2");
        assert_eq!(registry.unique("Other"), "other");
    }

    #[test]
    fn test_registry_skips_taken_suffix() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.unique("Step 1"), "step-1");
        assert_eq!(registry.unique("Step"), "step");
        assert_eq!(registry.unique("Step"), "step-2");
    }
}
