//! Arithmetic traits.
//!
//! The elimination engine is written once against [`Scalar`]; exact
//! rationals and tolerant floats both implement it.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ParseError, ScalarError};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating-point implementations satisfy these only up to rounding.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer.
    fn from_i64(n: i64) -> Self;
}

/// A ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if `other` is zero.
    fn checked_div(&self, other: &Self) -> Result<Self, ScalarError> {
        other
            .inv()
            .map(|inv| self.clone() * inv)
            .ok_or(ScalarError::DivisionByZero)
    }
}

/// The representation a [`Scalar`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Exact rational arithmetic.
    Exact,
    /// `f64` arithmetic with a fixed zero tolerance.
    Float,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Exact => write!(f, "exact arithmetic"),
            Mode::Float => write!(f, "floating-point arithmetic"),
        }
    }
}

/// A matrix entry: a field element with the extra operations Gauss-Jordan
/// elimination and its output need.
///
/// `Display` renders the value for humans: exact integers bare, exact
/// fractions as `p/q`, floats fixed-point.
pub trait Scalar: Field {
    /// The representation implemented by this type.
    const MODE: Mode;

    /// Compares absolute values.
    fn cmp_magnitude(&self, other: &Self) -> Ordering;

    /// Returns true if strictly below zero (zero predicate applied first).
    fn is_negative(&self) -> bool;

    /// Returns true if the value is a whole number.
    fn is_integer(&self) -> bool;

    /// Largest whole number not greater than the value.
    #[must_use]
    fn floor(&self) -> Self;

    /// Returns the absolute value.
    #[must_use]
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Factor that turns every entry of `row` into an integer.
    ///
    /// Only exact representations can clear fractions; the default returns
    /// `None`.
    fn clearing_factor(_row: &[Self]) -> Option<Self> {
        None
    }

    /// Reads a value from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty or malformed text.
    fn parse(text: &str) -> Result<Self, ParseError>;
}
