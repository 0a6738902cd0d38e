//! Float mode: `f64` with a fixed zero tolerance.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::ParseError;
use crate::traits::{Field, Mode, Ring, Scalar};

/// Magnitudes below this are treated as zero in float mode.
///
/// Fixed; it does not adapt to the scale or conditioning of the matrix.
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// Significant digits shown when a [`Real`] is displayed.
const SIGNIFICANT_DIGITS: i32 = 6;

/// A finite `f64` compared against zero with [`ZERO_TOLERANCE`].
///
/// `PartialEq` is bitwise-exact; use [`Ring::is_zero`] on a difference for
/// tolerant comparison.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Real(f64);

impl Real {
    /// Wraps a float.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying float.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Real {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Real {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Real {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Ring for Real {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < ZERO_TOLERANCE
    }

    fn is_one(&self) -> bool {
        (self.0 - 1.0).abs() < ZERO_TOLERANCE
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        Self(n as f64)
    }
}

impl Field for Real {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(1.0 / self.0))
        }
    }
}

impl Scalar for Real {
    const MODE: Mode = Mode::Float;

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.0.abs().total_cmp(&other.0.abs())
    }

    fn is_negative(&self) -> bool {
        self.0 <= -ZERO_TOLERANCE
    }

    fn is_integer(&self) -> bool {
        (self.0 - self.0.round()).abs() < ZERO_TOLERANCE
    }

    fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        if text.contains('/') {
            return Err(ParseError::FractionInFloatMode(text.to_string()));
        }
        let value: f64 = text
            .parse()
            .map_err(|_| ParseError::Malformed(text.to_string()))?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite(text.to_string()));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Real {
    /// Fixed-point with six significant digits and trailing zeros trimmed;
    /// values inside the zero tolerance print as `0`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad("0");
        }
        let magnitude = self.0.abs().log10().floor() as i32;
        let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).clamp(0, 17) as usize;
        let fixed = format!("{:.*}", decimals, self.0);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        f.pad(trimmed)
    }
}
