//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small rationals
    fn small_rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000i64, 1i64..200i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    // Strategy for generating non-zero rationals
    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        small_rational().prop_filter("rational must be non-zero", |r| !r.is_zero())
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_sub_is_add_neg(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn rational_mul_recip_is_one(a in non_zero_rational()) {
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_lowest_terms(n in -1000i64..1000i64, d in 1i64..200i64, k in 1i64..50i64) {
            prop_assert_eq!(Rational::new(n * k, d * k), Rational::new(n, d));
            prop_assert_eq!(Rational::new(-n, -d), Rational::new(n, d));
        }

        #[test]
        fn rational_display_parse_roundtrip(a in small_rational()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn rational_floor_brackets_value(a in small_rational()) {
            let floor = a.floor();
            prop_assert!(floor.is_integer());
            prop_assert!(floor <= a);
            prop_assert!(a < floor + Rational::one());
        }

        #[test]
        fn rational_lcm_clears_denominators(values in proptest::collection::vec(small_rational(), 1..6)) {
            let lcm = Rational::denominator_lcm(&values);
            for value in &values {
                prop_assert!((value * &lcm).is_integer());
            }
        }
    }
}
