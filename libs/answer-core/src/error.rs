//! Error types for answer-core.

use thiserror::Error;

/// Result type alias using FieldError.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised while validating card fields into a card context.
///
/// Grading and advising never fail; these only surface when the caller
/// hands over fields that cannot describe a card at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown card type: {value}")]
    UnknownCardType { value: String },

    #[error("unknown card mode: {value}")]
    UnknownCardMode { value: String },
}
