//! Gauss-Jordan elimination with partial pivoting.
//!
//! The engine brings an augmented matrix to reduced row-echelon form,
//! recording a [`Step`] for every row operation worth narrating, and then
//! reads the solution off the reduced matrix.
//!
//! # Algorithm
//!
//! Columns are scanned left to right while unpivoted rows remain. For each
//! column the remaining row with the largest-magnitude entry becomes the
//! pivot row (lowest index on ties). A column whose best entry is zero has
//! no pivot and its variable is free. Otherwise the pivot row is swapped
//! into place, cleared of fractions (exact mode), divided by the pivot, and
//! subtracted from every other row.

use std::cmp::Ordering;

use gauss_scalar::Scalar;
use log::{debug, trace};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::pivot::PivotMap;
use crate::solution::{LinearExpr, SolutionResult};
use crate::step::{RowOp, Step};

/// Everything a reduction produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Reduction<S> {
    /// Narrated row operations, starting with the initial matrix.
    pub steps: Vec<Step<S>>,
    /// The solution read off the reduced matrix.
    pub classification: SolutionResult<S>,
    /// Pivot column of each reduced row.
    pub pivots: PivotMap,
    /// The matrix in reduced row-echelon form.
    pub reduced: Matrix<S>,
}

/// Gauss-Jordan elimination over one augmented matrix.
///
/// Each call to [`EliminationEngine::reduce`] starts from scratch; nothing is
/// shared between runs.
pub struct EliminationEngine<S> {
    work: Matrix<S>,
    steps: Vec<Step<S>>,
    pivots: PivotMap,
}

impl<S: Scalar> EliminationEngine<S> {
    /// Reduces `matrix` and classifies its solution set.
    ///
    /// The input is cloned and left unchanged for later verification.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinalgError::Scalar`] only if division by a zero
    /// pivot is attempted, which the pivot search rules out.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauss_linalg::{EliminationEngine, Matrix, SolutionResult};
    /// use gauss_scalar::Rational;
    ///
    /// let system = Matrix::<Rational>::from_integers(&[[2, 1, 5], [1, -1, 1]]).unwrap();
    /// let reduction = EliminationEngine::reduce(&system).unwrap();
    /// assert_eq!(
    ///     reduction.classification,
    ///     SolutionResult::Unique(vec![Rational::from_integer(2), Rational::from_integer(1)])
    /// );
    /// ```
    pub fn reduce(matrix: &Matrix<S>) -> Result<Reduction<S>> {
        debug!(
            "reducing {}x{} system in {}",
            matrix.num_rows(),
            matrix.num_cols(),
            S::MODE
        );

        let mut engine = Self {
            work: matrix.clone(),
            steps: Vec::new(),
            pivots: PivotMap::new(matrix.num_rows()),
        };
        engine.record(RowOp::Initial);
        engine.eliminate_all()?;

        let classification = engine.classify();
        debug!(
            "rank {} of {} unknowns: {}",
            engine.pivots.rank(),
            matrix.num_vars(),
            match &classification {
                SolutionResult::Unique(_) => "unique solution",
                SolutionResult::Inconsistent { .. } => "inconsistent",
                SolutionResult::Infinite { .. } => "infinitely many solutions",
            }
        );

        Ok(Reduction {
            steps: engine.steps,
            classification,
            pivots: engine.pivots,
            reduced: engine.work,
        })
    }

    fn record(&mut self, op: RowOp<S>) {
        trace!("step {}: {op}", self.steps.len());
        self.steps.push(Step::new(op, self.work.clone()));
    }

    fn eliminate_all(&mut self) -> Result<()> {
        let num_rows = self.work.num_rows();
        let mut pivot_row = 0;

        for col in 0..self.work.num_vars() {
            if pivot_row == num_rows {
                break;
            }

            let candidate = self.select_pivot(pivot_row, col);
            if self.work[(candidate, col)].is_zero() {
                debug!("column {} has no pivot", col + 1);
                continue;
            }

            if candidate != pivot_row {
                self.work.swap_rows(pivot_row, candidate);
                self.record(RowOp::Swap {
                    row: pivot_row,
                    with: candidate,
                });
            }

            debug!("pivot for column {} in row {}", col + 1, pivot_row + 1);
            self.pivots.assign(pivot_row, col);

            self.clear_fractions(pivot_row);
            self.normalize(pivot_row, col)?;
            self.eliminate_column(pivot_row, col);

            pivot_row += 1;
        }

        Ok(())
    }

    /// Row in `pivot_row..` with the largest-magnitude entry in `col`; the
    /// first such row wins ties.
    fn select_pivot(&self, pivot_row: usize, col: usize) -> usize {
        (pivot_row + 1..self.work.num_rows()).fold(pivot_row, |best, row| {
            match self.work[(row, col)].cmp_magnitude(&self.work[(best, col)]) {
                Ordering::Greater => row,
                Ordering::Less | Ordering::Equal => best,
            }
        })
    }

    fn clear_fractions(&mut self, row: usize) {
        let Some(factor) = S::clearing_factor(self.work.row(row)) else {
            return;
        };
        if factor.is_one() {
            return;
        }
        self.work.scale_row(row, &factor);
        self.record(RowOp::ClearFractions { row, factor });
    }

    fn normalize(&mut self, row: usize, col: usize) -> Result<()> {
        let pivot = self.work[(row, col)].clone();
        if pivot.is_one() {
            return Ok(());
        }
        self.work.divide_row_from(row, col, &pivot)?;
        self.record(RowOp::Normalize { row, pivot });
        Ok(())
    }

    fn eliminate_column(&mut self, pivot_row: usize, col: usize) {
        for row in 0..self.work.num_rows() {
            if row == pivot_row {
                continue;
            }
            let factor = self.work[(row, col)].clone();
            if factor.is_zero() {
                continue;
            }

            self.work.sub_scaled_row_from(row, pivot_row, &factor, col);
            // A row wiped out from `col` on is not narrated.
            if !self.work.is_zero_from(row, col) {
                self.record(RowOp::Eliminate {
                    target: row,
                    source: pivot_row,
                    factor,
                });
            }
        }
    }

    fn classify(&self) -> SolutionResult<S> {
        let num_vars = self.work.num_vars();
        let rank = self.pivots.rank();

        if let Some(row) =
            (rank..self.work.num_rows()).find(|&row| !self.work.constant(row).is_zero())
        {
            return SolutionResult::Inconsistent { row };
        }

        if rank == num_vars {
            let mut values = vec![S::zero(); num_vars];
            for (row, col) in self.pivots.iter() {
                values[col] = self.work.constant(row).clone();
            }
            return SolutionResult::Unique(values);
        }

        let free_columns = self.pivots.free_columns(num_vars);
        let mut particular = vec![S::zero(); num_vars];
        let mut expressions: Vec<LinearExpr<S>> =
            (0..num_vars).map(|_| LinearExpr::from_constant(S::zero())).collect();

        for (k, &col) in free_columns.iter().enumerate() {
            expressions[col] = LinearExpr::parameter(k + 1);
        }

        for (row, col) in self.pivots.iter() {
            let constant = self.work.constant(row).clone();
            let mut expr = LinearExpr::from_constant(constant.clone());
            for (k, &free) in free_columns.iter().enumerate() {
                let coefficient = &self.work[(row, free)];
                if !coefficient.is_zero() {
                    // x_col + a·t_k = c  ⇒  x_col = c - a·t_k
                    expr.push_term(-coefficient.clone(), k + 1);
                }
            }
            particular[col] = constant;
            expressions[col] = expr;
        }

        SolutionResult::Infinite {
            particular,
            expressions,
            free_columns,
        }
    }
}
