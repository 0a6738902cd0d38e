//! Property-based tests for scalar formatting and parsing.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{parse_scalar, Rational, Real, Ring, Scalar};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-10_000i64..10_000i64, 1i64..500i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        #[test]
        fn exact_format_parse_roundtrip(a in small_rational()) {
            let text = a.to_string();
            prop_assert_eq!(parse_scalar::<Rational>(&text).unwrap(), a);
        }

        #[test]
        fn float_format_parse_is_close(v in -1.0e5f64..1.0e5f64) {
            let value = Real::new(v);
            let back: Real = parse_scalar(&value.to_string()).unwrap();
            // six significant digits
            let allowed = v.abs().max(1e-3) * 1e-5;
            prop_assert!((back.value() - v).abs() <= allowed);
        }

        #[test]
        fn magnitude_ordering_ignores_sign(a in small_rational()) {
            let neg = -a.clone();
            prop_assert_eq!(a.cmp_magnitude(&neg), std::cmp::Ordering::Equal);
            prop_assert!(!Scalar::abs(&a).is_negative());
        }

        #[test]
        fn exact_division_inverts_multiplication(a in small_rational(), b in small_rational()) {
            prop_assume!(!Ring::is_zero(&b));
            let product = a.clone() * b.clone();
            prop_assert_eq!(crate::Field::checked_div(&product, &b).unwrap(), a);
        }
    }
}
