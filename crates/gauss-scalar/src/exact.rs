//! Exact mode: [`Rational`] as a [`Scalar`].

use std::cmp::Ordering;

use gauss_rational::Rational;
use num_traits::{One, Zero};

use crate::error::ParseError;
use crate::traits::{Field, Mode, Ring, Scalar};

impl Ring for Rational {
    fn zero() -> Self {
        <Rational as Zero>::zero()
    }

    fn one() -> Self {
        <Rational as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_i64(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        self.recip()
    }
}

impl Scalar for Rational {
    const MODE: Mode = Mode::Exact;

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        Rational::cmp_magnitude(self, other)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }

    fn is_integer(&self) -> bool {
        Rational::is_integer(self)
    }

    fn floor(&self) -> Self {
        Rational::floor(self)
    }

    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn clearing_factor(row: &[Self]) -> Option<Self> {
        if row.is_empty() {
            None
        } else {
            Some(Rational::denominator_lcm(row))
        }
    }

    fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(text.parse::<Rational>()?)
    }
}
