//! Mutable markup tree for rendered documents.
//!
//! Rendered HTML is read into an [`Element`] tree with [`MarkupParser`],
//! restructured in place (wrap, unwrap, replace, remove), and written back
//! with [`MarkupSerializer`].
//!
//! The tree owns its children directly, so every node has exactly one parent
//! and cycles cannot be expressed.
//!
//! # Example
//!
//! ```
//! use folio_markup::{MarkupParser, MarkupSerializer};
//!
//! let mut root = MarkupParser::new().parse("<p>Hello <em>world</em></p>").unwrap();
//! root.walk_mut(&mut |el| {
//!     if el.is("em") {
//!         el.tag = "strong".to_owned();
//!     }
//! });
//! let html = MarkupSerializer::new().serialize(&root);
//! assert_eq!(html, "<p>Hello <strong>world</strong></p>");
//! ```

mod entities;
mod error;
mod parser;
mod serializer;
mod tree;

pub use entities::convert_html_entities;
pub use error::MarkupError;
pub use parser::MarkupParser;
pub use serializer::{MarkupSerializer, escape_attr, escape_html};
pub use tree::{Element, Node, ROOT_TAG, is_raw_text_element, is_void_element};
