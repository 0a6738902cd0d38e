//! Property-based tests for elimination.
//!
//! Nonsingular systems are built as `A = L·U` with `L` unit lower triangular
//! and `U` upper triangular with a nonzero diagonal, so `det A ≠ 0` without
//! having to check it.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{verify, verify_solution, EliminationEngine, Matrix, RowOp, SolutionResult};
    use gauss_rational::Rational;
    use gauss_scalar::Real;

    /// `(A, x)` with `A` an `n × n` nonsingular integer matrix.
    fn nonsingular() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<(i64, i64)>)> {
        (2usize..=4)
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec(-3i64..=3, n * n),
                    prop::collection::vec(-3i64..=3, n * n),
                    prop::collection::vec(prop_oneof![-3i64..=-1, 1i64..=3], n),
                    prop::collection::vec((-20i64..=20, 1i64..=6), n),
                )
            })
            .prop_map(|(n, lower, upper, diagonal, x)| {
                let l = |i: usize, j: usize| match i.cmp(&j) {
                    std::cmp::Ordering::Equal => 1,
                    std::cmp::Ordering::Greater => lower[i * n + j],
                    std::cmp::Ordering::Less => 0,
                };
                let u = |i: usize, j: usize| match i.cmp(&j) {
                    std::cmp::Ordering::Equal => diagonal[i],
                    std::cmp::Ordering::Less => upper[i * n + j],
                    std::cmp::Ordering::Greater => 0,
                };
                let a: Vec<Vec<i64>> = (0..n)
                    .map(|i| {
                        (0..n)
                            .map(|j| (0..n).map(|k| l(i, k) * u(k, j)).sum::<i64>())
                            .collect()
                    })
                    .collect();
                (a, x)
            })
    }

    fn exact_system(a: &[Vec<i64>], x: &[Rational]) -> Vec<Vec<Rational>> {
        a.iter()
            .map(|row| {
                let mut entries: Vec<Rational> =
                    row.iter().map(|&v| Rational::from_integer(v)).collect();
                let b = entries
                    .iter()
                    .zip(x)
                    .fold(Rational::from_integer(0), |acc, (c, v)| acc + c * v);
                entries.push(b);
                entries
            })
            .collect()
    }

    fn solution(x: &[(i64, i64)]) -> Vec<Rational> {
        x.iter().map(|&(p, q)| Rational::new(p, q)).collect()
    }

    /// Replaces the last row with the sum of two earlier rows, optionally
    /// nudging its constant.
    fn make_dependent(rows: &mut [Vec<Rational>], nudge: i64) {
        let n = rows.len();
        let combined: Vec<Rational> = rows[0]
            .iter()
            .zip(&rows[n - 2])
            .map(|(a, b)| a + b)
            .collect();
        rows[n - 1] = combined;
        let last = rows[n - 1].len() - 1;
        let constant = &rows[n - 1][last] + &Rational::from_integer(nudge);
        rows[n - 1][last] = constant;
    }

    proptest! {
        #[test]
        fn unique_solution_is_recovered((a, x) in nonsingular()) {
            let x = solution(&x);
            let m = Matrix::from_rows(exact_system(&a, &x)).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();

            prop_assert_eq!(&reduction.classification, &SolutionResult::Unique(x.clone()));
            prop_assert!(verify(&m, &x));
            prop_assert_eq!(reduction.pivots.rank(), a.len());
        }

        #[test]
        fn dependent_row_gives_infinite_family((a, x) in nonsingular()) {
            let x = solution(&x);
            let mut rows = exact_system(&a, &x);
            make_dependent(&mut rows, 0);
            let m = Matrix::from_rows(rows).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();

            prop_assert!(reduction.classification.is_infinite());
            prop_assert_eq!(reduction.classification.num_parameters(), 1);
            prop_assert!(verify_solution(&m, &reduction.classification));
        }

        #[test]
        fn contradictory_row_is_inconsistent((a, x) in nonsingular()) {
            let x = solution(&x);
            let mut rows = exact_system(&a, &x);
            make_dependent(&mut rows, 1);
            let m = Matrix::from_rows(rows).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();

            prop_assert_eq!(
                &reduction.classification,
                &SolutionResult::Inconsistent { row: a.len() - 1 }
            );
        }

        #[test]
        fn float_mode_is_close_to_exact((a, x) in nonsingular()) {
            let x: Vec<i64> = x.iter().map(|&(p, _)| p).collect();
            let rows: Vec<Vec<Real>> = a
                .iter()
                .map(|row| {
                    let b: i64 = row.iter().zip(&x).map(|(c, v)| c * v).sum();
                    row.iter().chain(std::iter::once(&b)).map(|&v| Real::new(v as f64)).collect()
                })
                .collect();
            let m = Matrix::from_rows(rows).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();

            let SolutionResult::Unique(values) = &reduction.classification else {
                return Err(TestCaseError::fail("expected a unique solution"));
            };
            for (value, want) in values.iter().zip(&x) {
                prop_assert!((value.value() - *want as f64).abs() < 1e-6);
            }
            prop_assert!(verify(&m, values));
        }

        #[test]
        fn trace_starts_with_input_and_keeps_shape((a, x) in nonsingular()) {
            let x = solution(&x);
            let m = Matrix::from_rows(exact_system(&a, &x)).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();

            prop_assert_eq!(reduction.steps[0].op(), &RowOp::Initial);
            prop_assert_eq!(reduction.steps[0].matrix(), &m);
            for step in &reduction.steps {
                prop_assert_eq!(step.matrix().num_rows(), m.num_rows());
                prop_assert_eq!(step.matrix().num_cols(), m.num_cols());
            }
        }

        #[test]
        fn scaling_an_equation_keeps_the_solution(
            (a, x) in nonsingular(),
            factor in prop_oneof![-5i64..=-1, 1i64..=5],
        ) {
            let x = solution(&x);
            let mut rows = exact_system(&a, &x);
            let factor = Rational::from_integer(factor);
            for entry in &mut rows[0] {
                *entry = &*entry * &factor;
            }
            let m = Matrix::from_rows(rows).unwrap();
            let reduction = EliminationEngine::reduce(&m).unwrap();
            prop_assert_eq!(reduction.classification, SolutionResult::Unique(x));
        }
    }
}
