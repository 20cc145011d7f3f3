//! Error and result types for IRI parsing and construction.

use thiserror::Error;

/// Type alias for `Result` with default error [`IriError`].
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = IriError> = std::result::Result<T, E>;

/// The error type raised by the parsers and constructors of this crate.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IriError {
    /// The input does not match the attempted grammar production.
    #[error("expected {expected} at offset {offset}")]
    Parse {
        /// The grammar production that failed.
        expected: &'static str,
        /// Byte offset in the input where the failure occurred.
        offset: usize,
    },
    /// A `%` escape is not followed by two hexadecimal digits,
    /// or the decoded byte sequence is not valid UTF-8.
    #[error("invalid percent-encoding in {0:?}")]
    InvalidPercentEncoding(String),
    /// A component value is outside its domain,
    /// e.g. a port number greater than 65535.
    #[error("{0}")]
    Domain(String),
    /// Reserved for future use.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl IriError {
    /// Of two alternative failures, keep the one that got further into the input.
    pub(crate) fn furthest(self, other: IriError) -> IriError {
        match (&self, &other) {
            (IriError::Parse { offset: o1, .. }, IriError::Parse { offset: o2, .. })
                if o2 > o1 =>
            {
                other
            }
            _ => self,
        }
    }
}
