//! Error type shared by the sort engine and the attribute adapter.

use thiserror::Error;

/// Recoverable failures reported by the sorting entry points.
///
/// Out-of-range indices passed to the engine are programming errors and
/// panic instead of being reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The field selector is not recognized for the requested operation.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The algorithm selector is not recognized.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The input cannot be sorted by the requested algorithm.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type SortResult<T> = Result<T, SortError>;
