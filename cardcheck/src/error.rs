// cardcheck/src/error.rs
//! Crate error type

use thiserror::Error;

/// 共通エラー型
///
/// Structural problems with a record are reported as
/// [`Violation`](crate::Violation)s, not through this type. `Error` is kept
/// for checks that cannot be evaluated at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input makes the requested check undefined (e.g. a brand-prefix
    /// check on a record without a card type).
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// The error raised when a card type is missing or not one of the four
    /// known brands.
    pub fn unknown_card_type() -> Self {
        Error::InvalidArgument(crate::constants::CARD_TYPE_REQUIRED_MESSAGE.to_string())
    }
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
