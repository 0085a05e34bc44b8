//! Markdown rendering and document outline.
//!
//! This crate covers the renderer side of a document parse:
//!
//! - [`MarkdownRenderer`] turns pulldown-cmark events into XHTML-compatible
//!   markup through a [`RenderBackend`] ([`HtmlBackend`]). Headings get
//!   stable slug ids and a permalink anchor.
//! - [`SourceRenderer`] is the narrow capability the rest of the pipeline
//!   depends on; [`PulldownRenderer`] implements it.
//! - [`HeadingExtractor`] scans an event stream into flat [`HeadingRecord`]s
//!   and [`TreeBuilder`] nests them into an [`OutlineNode`] forest.
//! - [`apply_class_markers`] moves `{.class}` markers onto elements after the
//!   markup has been read into a tree.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{HeadingExtractor, PulldownRenderer, SourceRenderer, TreeBuilder};
//!
//! let renderer = PulldownRenderer::default();
//! let source = "# A\n\n## B\n\n### C\n\n## D\n";
//! let headings = HeadingExtractor::new().extract(renderer.events(source));
//! let outline = TreeBuilder::build(&headings);
//!
//! assert_eq!(outline.len(), 1);
//! assert_eq!(outline[0].children.len(), 2);
//! assert_eq!(outline[0].children[0].children[0].content, "C");
//! ```

mod backend;
mod code_block;
mod headings;
mod html;
mod markers;
mod outline;
mod renderer;
mod slug;
mod source;
mod state;
mod util;

pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, ProcessResult};
pub use headings::{DEFAULT_MAX_LEVEL, HeadingExtractor, HeadingRecord};
pub use html::{HtmlBackend, PERMALINK_CLASS};
pub use markers::apply_class_markers;
pub use outline::{OutlineNode, TreeBuilder};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use slug::{SlugRegistry, slugify};
pub use source::{PulldownRenderer, SourceRenderer};
