//! Cross-cutting error types for quizlint.
//!
//! Only document *shape* problems are errors. Content problems (duplicate IDs,
//! missing results, ...) are never errors: they are reported as invalid
//! [`ValidationResult`](crate::ValidationResult) records by the engine.

use thiserror::Error;

/// Errors raised while turning raw JSON into a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The top-level JSON value is not an object.
    #[error("document is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    /// A sheet exists but its `data` member is not an array. Documents skip
    /// such sheets with a warning.
    #[error("sheet '{sheet}' is malformed: {reason}")]
    MalformedSheet { sheet: String, reason: String },

    /// A sheet the caller requires is not present in the document.
    #[error("{document} has no '{sheet}' sheet")]
    MissingSheet { document: String, sheet: String },

    /// Raw text was not valid JSON.
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}
