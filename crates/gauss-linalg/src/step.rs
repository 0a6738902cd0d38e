//! Recorded row operations.

use std::fmt;

use gauss_scalar::Scalar;

use crate::matrix::Matrix;

/// One elementary row operation. Row indices are 0-based; `Display` shows
/// them 1-based as `R1, R2, …`.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOp<S> {
    /// The untouched input.
    Initial,
    /// Exchange two rows.
    Swap {
        /// Row receiving the pivot.
        row: usize,
        /// Row the pivot came from.
        with: usize,
    },
    /// Multiply a row by the LCM of its denominators (exact mode).
    ClearFractions {
        /// Row scaled.
        row: usize,
        /// Scale factor, always greater than one.
        factor: S,
    },
    /// Divide a row by its pivot so the pivot becomes 1.
    Normalize {
        /// Row divided.
        row: usize,
        /// Pivot value before division.
        pivot: S,
    },
    /// Subtract a multiple of the pivot row from another row.
    Eliminate {
        /// Row updated.
        target: usize,
        /// Pivot row.
        source: usize,
        /// Multiple of the pivot row subtracted.
        factor: S,
    },
}

/// Wraps a value in parentheses unless it is a non-negative integer.
struct Operand<'a, S>(&'a S);

impl<S: Scalar> fmt::Display for Operand<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() && !self.0.is_negative() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl<S: Scalar> fmt::Display for RowOp<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOp::Initial => write!(f, "initial matrix"),
            RowOp::Swap { row, with } => write!(f, "R{} ↔ R{}", row + 1, with + 1),
            RowOp::ClearFractions { row, factor } => {
                write!(f, "R{} × {}", row + 1, Operand(factor))
            }
            RowOp::Normalize { row, pivot } => write!(f, "R{} ÷ {}", row + 1, Operand(pivot)),
            RowOp::Eliminate {
                target,
                source,
                factor,
            } => write!(f, "R{} - ({}) × R{}", target + 1, factor, source + 1),
        }
    }
}

/// A row operation and the matrix right after it.
///
/// Each step owns its own copy of the matrix, so later reduction work never
/// shows through an earlier snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S> {
    op: RowOp<S>,
    matrix: Matrix<S>,
}

impl<S: Scalar> Step<S> {
    pub(crate) fn new(op: RowOp<S>, matrix: Matrix<S>) -> Self {
        Self { op, matrix }
    }

    /// The operation performed.
    #[must_use]
    pub fn op(&self) -> &RowOp<S> {
        &self.op
    }

    /// The matrix after the operation.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<S> {
        &self.matrix
    }

    /// Human-readable description of the operation.
    #[must_use]
    pub fn description(&self) -> String {
        self.op.to_string()
    }
}
