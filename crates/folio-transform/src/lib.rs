//! Content transforms for rendered documents.
//!
//! [`ContentTransformer`] runs a fixed, ordered pipeline of [`Rule`]s over a
//! markup tree:
//!
//! 1. leading empty paragraph removal (an image-only first paragraph is
//!    marked `is-gapless` instead)
//! 2. link stripping inside H1-H3, keeping the permalink anchor
//! 3. blockquote class hoisting from the last child
//! 4. section enclosure under H2 (`div.indent-h2`) and H3 (`div.indent-h3`)
//! 5. video link embedding ([`VideoEmbedResolver`])
//! 6. `align-center` promotion from images to their parent
//!
//! Rules never fail: a rule with nothing to match is a no-op, and running the
//! pipeline twice leaves the tree unchanged.
//!
//! # Example
//!
//! ```
//! use folio_markup::{MarkupParser, MarkupSerializer};
//! use folio_transform::ContentTransformer;
//!
//! let mut root = MarkupParser::new()
//!     .parse(r#"<h2 id="a">A</h2><p>one</p><h2 id="b">B</h2>"#)
//!     .unwrap();
//! ContentTransformer::default().transform(&mut root);
//!
//! assert_eq!(
//!     MarkupSerializer::new().serialize(&root),
//!     r#"<h2 id="a">A</h2><div class="indent-h2"><p>one</p></div><h2 id="b">B</h2><div class="indent-h2"></div>"#
//! );
//! ```

mod error;
mod rule;
mod rules;
mod transformer;
mod video;

pub use error::VideoRuleError;
pub use rule::Rule;
pub use rules::{
    ALIGN_CENTER_CLASS, BlockquoteClassRule, GAPLESS_CLASS, H2_SECTION_CLASS, H3_SECTION_CLASS,
    HeadingLinkRule, ImageAlignRule, LeadingParagraphRule, SectionRule,
};
pub use transformer::ContentTransformer;
pub use video::{VideoEmbedResolver, VideoRule};
