//! Error types for fallible configuration and document loading.
//!
//! Rendering itself never fails. Errors only surface when callers validate input up front
//! (attribute names, token parsing) or load configuration and documents from text.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while validating or loading component input.
pub enum UiError {
    /// The attribute name cannot appear in HTML markup.
    #[error("invalid attribute name `{0}`")]
    InvalidAttributeName(String),
    /// A modifier token did not match any known variant.
    #[error("unknown {kind} `{value}`")]
    UnknownToken {
        /// Token family, for example `size` or `color`.
        kind: &'static str,
        /// Rejected input.
        value: String,
    },
    /// The configured class prefix cannot be used inside a class attribute.
    #[error("invalid class prefix `{0}`")]
    InvalidClassPrefix(String),
    /// Render configuration could not be parsed.
    #[error("failed to parse render config: {0}")]
    Config(String),
    /// A component document could not be parsed.
    #[error("failed to parse component document: {0}")]
    Document(String),
}

/// Convenience result type for this crate.
pub type UiResult<T> = Result<T, UiError>;
