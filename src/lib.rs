//! # gauss
//!
//! Step-by-step Gauss-Jordan elimination over exact rationals or floats.
//!
//! ## Features
//!
//! - **Two arithmetic modes**: exact [`Rational`](prelude::Rational) values
//!   backed by `dashu`, or `f64` with a fixed `1e-9` zero tolerance
//! - **Partial pivoting**: largest magnitude wins, lowest row on ties
//! - **Full trace**: every narrated row operation with its own matrix copy
//! - **Classification**: unique, inconsistent, or a parametrized family
//! - **Verification**: re-substitution into the untouched input
//!
//! ## Quick Start
//!
//! ```
//! use gauss::prelude::*;
//!
//! let system = parse_matrix::<Rational, _>(&["2, 1, 5", "1, -1, 1"]).unwrap();
//! let outcome = solve(&system).unwrap();
//! assert!(outcome.verified);
//! assert!(outcome.render().contains("x1 = 2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gauss_format as format;
pub use gauss_linalg as linalg;
pub use gauss_rational as rational;
pub use gauss_scalar as scalar;

use gauss_format::FormatConfig;
use gauss_linalg::{verify_solution, EliminationEngine, Matrix, Reduction, Result};
use gauss_scalar::Scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{parse_matrix, sample_system, solve, Outcome};
    pub use gauss_format::{render, render_with, FormatConfig};
    pub use gauss_linalg::{
        verify, verify_solution, EliminationEngine, LinalgError, LinearExpr, Matrix, RowOp,
        SolutionResult, Step,
    };
    pub use gauss_scalar::{parse_scalar, Mode, Rational, Real, Scalar};
}

/// The built-in 4×5 demonstration system.
///
/// Its coefficient matrix has rank 3, so it reduces to a one-parameter
/// family with particular solution `(1, 2, -3, 0)`.
pub const SAMPLE_SYSTEM: [[i64; 5]; 4] = [
    [4, 3, 2, -1, 4],
    [5, 4, 3, -1, 4],
    [-2, -2, -1, 2, -3],
    [11, 6, 4, 1, 11],
];

/// [`SAMPLE_SYSTEM`] in the representation chosen by `S`.
///
/// # Errors
///
/// Never fails for the fixed sample; the `Result` mirrors
/// [`Matrix::from_integers`].
pub fn sample_system<S: Scalar>() -> Result<Matrix<S>> {
    Matrix::from_integers(&SAMPLE_SYSTEM)
}

/// Parses one text row per equation.
///
/// # Errors
///
/// Returns a parse error naming the row and column of the first bad entry,
/// or an invalid-matrix error for empty or jagged input.
pub fn parse_matrix<S: Scalar, T: AsRef<str>>(rows: &[T]) -> Result<Matrix<S>> {
    Matrix::parse_rows(rows)
}

/// A reduction together with its verification outcome.
#[derive(Clone, Debug)]
pub struct Outcome<S> {
    /// Steps, classification and reduced matrix.
    pub reduction: Reduction<S>,
    /// Whether the solution satisfies the original system. Always `false`
    /// for an inconsistent system.
    pub verified: bool,
}

impl<S: Scalar> Outcome<S> {
    /// Renders the outcome with the default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&FormatConfig::default())
    }

    /// Renders the outcome with explicit options. The verification line is
    /// omitted for inconsistent systems.
    #[must_use]
    pub fn render_with(&self, config: &FormatConfig) -> String {
        let classification = &self.reduction.classification;
        let verified = (!classification.is_inconsistent()).then_some(self.verified);
        gauss_format::render_with(config, &self.reduction.steps, classification, verified)
    }
}

/// Reduces `matrix` and verifies the result against it.
///
/// # Errors
///
/// Propagates [`EliminationEngine::reduce`] errors.
pub fn solve<S: Scalar>(matrix: &Matrix<S>) -> Result<Outcome<S>> {
    let reduction = EliminationEngine::reduce(matrix)?;
    let verified = verify_solution(matrix, &reduction.classification);
    log::info!(
        "{} steps, verification {}",
        reduction.steps.len(),
        if verified { "passed" } else { "failed" }
    );
    Ok(Outcome {
        reduction,
        verified,
    })
}
