//! Error types for video rule configuration.

/// Invalid [`VideoRule`](crate::VideoRule) definition.
#[derive(Debug, thiserror::Error)]
pub enum VideoRuleError {
    /// The rule has no link class to match.
    #[error("video rule has an empty class")]
    EmptyClass,
    /// The embed template has no `{0}` placeholder.
    #[error("video rule `{class}` template has no {{0}} placeholder")]
    MissingPlaceholder {
        /// Rule class.
        class: String,
    },
    /// The link pattern does not compile.
    #[error("video rule `{class}` has an invalid pattern: {source}")]
    InvalidPattern {
        /// Rule class.
        class: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
}
