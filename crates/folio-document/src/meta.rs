//! Comment directives.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// `<!-- key: value -->` directive.
static META_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s?([a-zA-Z]+):(.*?)-->").expect("invalid meta comment regex")
});

/// Any comment, possibly spanning lines.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid comment regex"));

/// Extract `<!-- key: value -->` directives from document source.
///
/// Keys are lowercased and values trimmed. Directives may appear anywhere in
/// the document; a later directive overrides an earlier one with the same
/// key.
///
/// # Examples
///
/// ```
/// use folio_document::extract_meta;
///
/// let meta = extract_meta("<!-- Title: Hello World -->\n<!-- subtitle:Intro -->\n# Hi");
/// assert_eq!(meta["title"], "Hello World");
/// assert_eq!(meta["subtitle"], "Intro");
/// ```
#[must_use]
pub fn extract_meta(source: &str) -> BTreeMap<String, String> {
    META_COMMENT
        .captures_iter(source)
        .map(|caps| (caps[1].to_lowercase(), caps[2].trim().to_owned()))
        .collect()
}

/// Remove all comments from document source.
#[must_use]
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    COMMENT.replace_all(source, "")
}
