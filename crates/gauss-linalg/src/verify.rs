//! Re-substitution checks.
//!
//! A candidate solution is plugged back into the original system; a row
//! passes when `Σ a_ij·x_j - b_i` satisfies the zero predicate. Failure is
//! reported as `false`, never as an error.

use log::debug;

use gauss_scalar::Scalar;

use crate::matrix::Matrix;
use crate::solution::SolutionResult;

/// `Σ a_ij·x_j - b_i` for every row, or `None` if `solution` has the wrong
/// length.
#[must_use]
pub fn residuals<S: Scalar>(matrix: &Matrix<S>, solution: &[S]) -> Option<Vec<S>> {
    if solution.len() != matrix.num_vars() {
        return None;
    }
    let residuals = (0..matrix.num_rows())
        .map(|row| {
            let lhs = matrix
                .coefficients(row)
                .iter()
                .zip(solution)
                .fold(S::zero(), |acc, (a, x)| acc + a.clone() * x.clone());
            lhs - matrix.constant(row).clone()
        })
        .collect();
    Some(residuals)
}

/// Checks that `solution` satisfies every equation of `matrix`.
#[must_use]
pub fn verify<S: Scalar>(matrix: &Matrix<S>, solution: &[S]) -> bool {
    let Some(residuals) = residuals(matrix, solution) else {
        debug!(
            "solution has {} values for {} unknowns",
            solution.len(),
            matrix.num_vars()
        );
        return false;
    };
    match residuals.iter().position(|r| !r.is_zero()) {
        Some(row) => {
            debug!("row {} is off by {}", row + 1, residuals[row]);
            false
        }
        None => true,
    }
}

/// Verifies a classified solution against the original system.
///
/// Infinite families are checked through their particular solution; an
/// inconsistent system has nothing to verify and yields `false`.
#[must_use]
pub fn verify_solution<S: Scalar>(matrix: &Matrix<S>, solution: &SolutionResult<S>) -> bool {
    solution
        .values()
        .is_some_and(|values| verify(matrix, values))
}
