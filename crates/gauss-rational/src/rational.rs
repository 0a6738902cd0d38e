//! Exact rational numbers.
//!
//! A [`Rational`] is always kept in lowest terms with a strictly positive
//! denominator, so structural equality is numeric equality.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, Gcd, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use thiserror::Error;

/// Why a piece of text could not be read as a [`Rational`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// Nothing but whitespace.
    #[error("empty input")]
    Empty,

    /// Not an integer, decimal or `p/q` fraction.
    #[error("malformed rational `{0}`")]
    Malformed(String),

    /// A `p/q` fraction with `q = 0`.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// An exact rational number backed by `dashu`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates `numerator / denominator`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut numerator = IBig::from(numerator);
        if denominator < 0 {
            numerator = -numerator;
        }
        Self(RBig::from_parts(numerator, UBig::from(denominator.unsigned_abs())))
    }

    /// Creates an integer-valued rational.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Creates `numerator / denominator` from big integers.
    ///
    /// Returns `None` when the denominator is zero.
    #[must_use]
    pub fn from_parts(numerator: IBig, denominator: IBig) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        let numerator = if DashuSigned::is_negative(&denominator) {
            -numerator
        } else {
            numerator
        };
        Some(Self(RBig::from_parts(numerator, denominator.unsigned_abs())))
    }

    /// The numerator; carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// The denominator; always positive.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns true if strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns `1 / self`, or `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    /// Largest integer not greater than `self`.
    #[must_use]
    pub fn floor(&self) -> Self {
        let den = IBig::from(self.denominator().clone());
        let num = self.numerator().clone();
        // Only divide non-negative operands so the rounding mode of `/` is irrelevant.
        let floor = if self.is_negative() {
            let magnitude = -num;
            -((magnitude + &den - IBig::ONE) / den)
        } else {
            num / den
        };
        Self(RBig::from(floor))
    }

    /// Compares absolute values.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.abs().cmp(&other.abs())
    }

    /// Least common multiple of the denominators of `values`.
    ///
    /// Multiplying every value by the result leaves only integers. An empty
    /// slice yields 1.
    #[must_use]
    pub fn denominator_lcm<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a Rational>,
    {
        let lcm = values.into_iter().fold(UBig::ONE, |acc, value| {
            let den = value.denominator();
            if den.is_one() {
                return acc;
            }
            let gcd = acc.clone().gcd(den.clone());
            acc / gcd * den
        });
        Self(RBig::from(IBig::from(lcm)))
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/// Reads an optionally signed run of ASCII digits.
fn parse_signed_digits(text: &str) -> Option<IBig> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = IBig::from_str_radix(digits, 10).ok()?;
    Some(if negative { -value } else { value })
}

/// Largest decimal exponent accepted in scientific notation.
const MAX_EXPONENT: u64 = 4096;

/// Reads `[+-]digits[.digits][e[+-]digits]`, where either digit run around
/// the point may be empty but not both.
fn parse_decimal(text: &str) -> Option<Rational> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], text[at + 1..].parse::<i32>().ok()?),
        None => (text, 0),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first()? {
        b'-' => (true, &mantissa[1..]),
        b'+' => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let mut numerator = IBig::from_str_radix(&digits, 10).ok()?;
    if negative {
        numerator = -numerator;
    }

    let scale = i64::from(exponent) - i64::try_from(fraction.len()).ok()?;
    if scale.unsigned_abs() > MAX_EXPONENT {
        return None;
    }
    let power = IBig::from(10u8).pow(usize::try_from(scale.unsigned_abs()).ok()?);
    if scale >= 0 {
        Rational::from_parts(numerator * power, IBig::ONE)
    } else {
        Rational::from_parts(numerator, power)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts integers (`-3`), decimals (`0.25`, `1e-3`) and fractions (`-7/4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseRationalError::Empty);
        }

        if let Some((num, den)) = text.split_once('/') {
            let malformed = || ParseRationalError::Malformed(text.to_string());
            let num = parse_signed_digits(num.trim()).ok_or_else(malformed)?;
            let den = parse_signed_digits(den.trim()).ok_or_else(malformed)?;
            return Self::from_parts(num, den)
                .ok_or_else(|| ParseRationalError::ZeroDenominator(text.to_string()));
        }

        parse_decimal(text).ok_or_else(|| ParseRationalError::Malformed(text.to_string()))
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational(self.0.$method(&rhs.0))
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self(RBig::from(n))
    }
}
