//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = SimilarityError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// An argument is out of its valid range, e.g., a zero window size.
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// A text to be compared is absent.
    #[error("NullInput: {0}")]
    NullInput(String),

    /// A request carries no text list at all.
    #[error("Request has no 'texts' field!")]
    MissingTexts,
}

impl SimilarityError {
    pub(crate) fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn null_input<S: Into<String>>(msg: S) -> Self {
        Self::NullInput(msg.into())
    }
}
