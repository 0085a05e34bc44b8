//! Error types for document parser construction.

use folio_transform::VideoRuleError;

/// Error building a [`DocumentParser`](crate::DocumentParser) from
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A configured video rule is invalid.
    #[error("Invalid video rule: {0}")]
    Video(#[from] VideoRuleError),
    /// The configured word character ranges do not form a valid regex.
    #[error("Invalid text character ranges: {0}")]
    WordPattern(#[from] regex::Error),
}
