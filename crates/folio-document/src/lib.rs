//! Document parsing for Folio.
//!
//! [`DocumentParser`] turns markdown source into a [`ParsedDocument`]:
//!
//! - `meta`: `<!-- key: value -->` comment directives
//! - `html`: rendered markup after class markers and the content transforms
//! - `tree`: the heading outline
//!
//! It also extracts lowercase word tokens for search indexing
//! ([`DocumentParser::text`]).
//!
//! # Quick Start
//!
//! ```
//! use folio_document::DocumentParser;
//!
//! let parser = DocumentParser::new();
//! let doc = parser.parse("<!-- title: Guide -->\n# Guide\n\n## Install\n\nRun it.\n");
//!
//! assert_eq!(doc.meta["title"], "Guide");
//! assert_eq!(doc.tree[0].children[0].anchor, "install");
//! assert!(doc.html.contains(r#"<div class="indent-h2"><p>Run it.</p></div>"#));
//! ```

mod error;
mod meta;
mod parser;
mod text;

pub use error::DocumentError;
pub use meta::{extract_meta, strip_comments};
pub use parser::{DocumentParser, ParsedDocument};
pub use text::TextExtractor;

// Re-export outline types for convenience
pub use folio_renderer::{HeadingRecord, OutlineNode};
