//! Validation errors for the fundamental types.

use thiserror::Error;

/// Errors raised when constructing or mutating fundamental types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("rating {0} is outside the allowed range 1-5")]
    RatingOutOfRange(u8),

    #[error("unknown badge label: {0}")]
    UnknownBadgeLabel(String),

    #[error("pseudonym is already set and cannot be changed")]
    PseudonymAlreadySet,
}
