//! Named HTML entities to Unicode.
//!
//! The XML reader only knows the five predefined entities and rejects a bare
//! `&`, both of which are fine in HTML. Named HTML entities are replaced with
//! their characters and stray ampersands are escaped before parsing.

use std::sync::LazyLock;

use regex::Regex;

/// An ampersand, with the reference it starts if any.
static AMPERSAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:([a-zA-Z][a-zA-Z0-9]*);|#[0-9]+;|#[xX][0-9a-fA-F]+;)?")
        .expect("invalid entity regex")
});

/// Replace named HTML entities with Unicode characters and escape bare `&`.
///
/// The XML entities (`amp`, `lt`, `gt`, `quot`, `apos`), numeric references
/// and unknown names are left untouched.
pub fn convert_html_entities(html: &str) -> String {
    AMPERSAND
        .replace_all(html, |caps: &regex::Captures| {
            let reference = &caps[0];
            if reference == "&" {
                return "&amp;".to_owned();
            }
            caps.get(1)
                .and_then(|name| entity_to_unicode(name.as_str()))
                .map_or_else(|| reference.to_owned(), str::to_owned)
        })
        .into_owned()
}

fn entity_to_unicode(name: &str) -> Option<&'static str> {
    Some(match name {
        "nbsp" => "\u{00a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "shy" => "\u{00ad}",
        "zwj" => "\u{200d}",
        "zwnj" => "\u{200c}",

        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "hellip" => "\u{2026}",
        "bull" => "\u{2022}",
        "middot" => "\u{00b7}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",

        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "uarr" => "\u{2191}",
        "darr" => "\u{2193}",
        "harr" => "\u{2194}",

        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",
        "plusmn" => "\u{00b1}",
        "le" => "\u{2264}",
        "ge" => "\u{2265}",
        "ne" => "\u{2260}",
        "deg" => "\u{00b0}",

        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "sect" => "\u{00a7}",
        "para" => "\u{00b6}",

        "euro" => "\u{20ac}",
        "pound" => "\u{00a3}",
        "yen" => "\u{00a5}",
        "cent" => "\u{00a2}",

        "frac12" => "\u{00bd}",
        "frac14" => "\u{00bc}",
        "frac34" => "\u{00be}",

        _ => return None,
    })
}
