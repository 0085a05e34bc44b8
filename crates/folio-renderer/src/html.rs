//! HTML backend for markdown rendering.
//!
//! Produces HTML5 markup written in XHTML syntax (void elements self-closed)
//! so that the output can be read back into a markup tree.

use std::fmt::Write;

use folio_markup::{escape_attr, escape_html};

use crate::backend::RenderBackend;

/// Class of the permalink anchor inserted at the start of every heading.
pub const PERMALINK_CLASS: &str = "toc-anchor";

/// Text of the permalink anchor.
const PERMALINK_SYMBOL: &str = "\u{00b6}";

/// HTML render backend.
///
/// Produces:
/// - `<pre><code>` for code blocks
/// - `<hN id>` headings led by a `toc-anchor` permalink
/// - self-closed `<img />` for images
/// - `math-inline` / `math-display` spans holding escaped TeX for a
///   client-side typesetter
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_attr(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        let id = escape_attr(id);
        write!(
            out,
            r##"<h{level} id="{id}"><a class="{PERMALINK_CLASS}" href="#{id}">{PERMALINK_SYMBOL}</a> {html}</h{level}>"##
        )
        .unwrap();
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_attr(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}" />"#,
            escape_attr(src),
            escape_attr(alt)
        )
        .unwrap();
    }

    fn inline_math(source: &str, out: &mut String) {
        write!(
            out,
            r#"<span class="math-inline">\({}\)</span>"#,
            escape_html(source)
        )
        .unwrap();
    }

    fn display_math(source: &str, out: &mut String) {
        write!(
            out,
            r#"<span class="math-display">\[{}\]</span>"#,
            escape_html(source)
        )
        .unwrap();
    }
}
