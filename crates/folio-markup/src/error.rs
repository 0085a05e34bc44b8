//! Error types for markup parsing.

use std::str::Utf8Error;

/// Error raised while reading markup into a tree.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error")]
    Utf8(#[from] Utf8Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}
