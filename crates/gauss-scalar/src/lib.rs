//! # gauss-scalar
//!
//! The arithmetic contract behind the Gauss-Jordan solver.
//!
//! This crate provides:
//! - Traits: [`Ring`], [`Field`], [`Scalar`]
//! - Two implementations: exact [`Rational`] and tolerant float [`Real`]
//! - [`parse_scalar`] for reading matrix entries from text
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//!       └── Scalar ── Rational (Mode::Exact)
//!                  └─ Real     (Mode::Float)
//! ```
//!
//! Code generic over one `S: Scalar` cannot mix representations, so every
//! value in a single elimination run shares a mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
mod exact;
pub mod real;
pub mod traits;

pub use error::{ParseError, ScalarError};
pub use gauss_rational::Rational;
pub use real::{Real, ZERO_TOLERANCE};
pub use traits::{Field, Mode, Ring, Scalar};

/// Reads a scalar of the representation chosen by `S`.
///
/// Integers and decimals are accepted in both modes; `p/q` fractions only in
/// exact mode.
///
/// # Errors
///
/// Returns a [`ParseError`] on empty or malformed input.
///
/// # Examples
///
/// ```
/// use gauss_scalar::{parse_scalar, Rational, Real};
///
/// let exact: Rational = parse_scalar("-3/6").unwrap();
/// assert_eq!(exact.to_string(), "-1/2");
///
/// let float: Real = parse_scalar("0.5").unwrap();
/// assert_eq!(float.to_string(), "0.5");
/// assert!(parse_scalar::<Real>("1/2").is_err());
/// ```
pub fn parse_scalar<S: Scalar>(text: &str) -> Result<S, ParseError> {
    S::parse(text)
}

#[cfg(test)]
mod proptests;
