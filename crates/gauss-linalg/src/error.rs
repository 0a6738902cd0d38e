//! Error types for gauss-linalg.

use gauss_scalar::{ParseError, ScalarError};
use thiserror::Error;

/// Result type alias using [`LinalgError`].
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors that can occur while building or reducing a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The rows do not form an augmented matrix.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// An entry could not be parsed.
    #[error("bad entry at row {row}, column {col}")]
    Parse {
        /// 1-based row of the entry.
        row: usize,
        /// 1-based column of the entry.
        col: usize,
        /// Why the text was rejected.
        #[source]
        source: ParseError,
    },

    /// Scalar arithmetic failed; only reachable if an internal invariant breaks.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
}
