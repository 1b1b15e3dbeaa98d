use thiserror::Error;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when a caller violates a documented precondition.
///
/// Algorithms in this crate are total wherever the problem allows it; the
/// ones that are not (positive denominations, in-range vertices, and so on)
/// reject bad input here rather than producing an undefined answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Builds an [`Error::InvalidInput`] from anything string-like.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
