//! Error types for the replacement engine.

use thiserror::Error;

/// Errors the resolver can return. All are detected before any text is
/// produced; a failed call never yields a partially modified result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// The request is malformed on its face; retrying is pointless.
    #[error("invalid replacement: {0}")]
    Validation(String),

    /// No replacer produced a candidate present in the content.
    #[error("could not find '{search}' in content (tried replacers: {})", tried.join(", "))]
    NotFound {
        /// The search text, truncated for display.
        search: String,
        /// Names of every replacer consulted, in order.
        tried: Vec<&'static str>,
    },

    /// Matching text exists, but every candidate occurred more than
    /// once. Add surrounding context to pin down one occurrence, or
    /// enable replace-all.
    #[error(
        "found '{search}' in multiple places; provide more surrounding context \
         to make the match unique, or enable replace_all"
    )]
    AmbiguousMatch {
        /// The search text, truncated for display.
        search: String,
    },
}
