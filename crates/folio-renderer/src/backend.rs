//! Render backend trait for format-specific output.
//!
//! The generic [`MarkdownRenderer`](crate::MarkdownRenderer) handles document
//! structure (lists, tables, inline formatting) and delegates the elements
//! whose markup is a presentation choice to the backend.

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Render a code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "rust", "python")
    /// * `content` - The code content
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    /// Render a heading.
    ///
    /// `html` is the already-rendered inline content and `id` the unique
    /// slug for the heading.
    fn heading(level: u8, id: &str, html: &str, out: &mut String);

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL
    /// * `alt` - Alt text for the image
    /// * `title` - Optional title attribute
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render inline math source.
    fn inline_math(source: &str, out: &mut String);

    /// Render display math source.
    fn display_math(source: &str, out: &mut String);

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br />");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr />");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked="" disabled="" /> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled="" /> "#);
        }
    }
}
