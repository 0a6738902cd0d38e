//! Error types for scalar parsing and arithmetic.

use gauss_rational::ParseRationalError;
use thiserror::Error;

/// Errors raised while reading a scalar from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("empty input")]
    Empty,

    /// The input is not a number in the accepted syntax.
    #[error("malformed number `{0}`")]
    Malformed(String),

    /// A fraction with a zero denominator.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),

    /// `p/q` syntax given to a floating-point scalar.
    #[error("fraction `{0}` is only accepted in exact mode")]
    FractionInFloatMode(String),

    /// A float that parsed to infinity or NaN.
    #[error("`{0}` is not a finite number")]
    NonFinite(String),
}

impl From<ParseRationalError> for ParseError {
    fn from(err: ParseRationalError) -> Self {
        match err {
            ParseRationalError::Empty => ParseError::Empty,
            ParseRationalError::Malformed(text) => ParseError::Malformed(text),
            ParseRationalError::ZeroDenominator(text) => ParseError::ZeroDenominator(text),
        }
    }
}

/// Errors raised by scalar arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Division by a value the zero predicate accepts.
    #[error("division by zero")]
    DivisionByZero,
}
