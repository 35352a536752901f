//! Unified error type exposed by **`textforge-core`**.
//!
//! The builder API is deliberately infallible: extractors and formatters
//! degrade gracefully when a search target is missing, because callers are
//! usually composing output rather than validating input.  The one failure
//! mode left is feeding the builder a dynamic value it cannot coerce into
//! text, and that single case is surfaced here.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TextError>;

#[derive(Debug, Error)]
pub enum TextError {
    /// A dynamic value (typically a JSON payload) could not be coerced into
    /// a text fragment.  Only strings, numbers and nested builders are
    /// accepted; everything else is rejected at coercion time, before it can
    /// reach the fragment sequence.
    #[error("cannot coerce `{found}` into a fragment, expected a string, a number or a nested builder")]
    InvalidInput { found: &'static str },
}
