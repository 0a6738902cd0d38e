//! # gauss-linalg
//!
//! Gauss-Jordan elimination over augmented matrices.
//!
//! This crate provides:
//! - [`Matrix`]: an `m × (k + 1)` augmented matrix `[A | b]`
//! - [`EliminationEngine`]: reduction to reduced row-echelon form with
//!   partial pivoting, a full [`Step`] trace, and a [`SolutionResult`]
//! - [`verify`]: re-substitution of a solution into the original system
//!
//! Everything is generic over one [`gauss_scalar::Scalar`], so the same
//! engine runs in exact rational or floating-point arithmetic.
//!
//! ## Solution classes
//!
//! ```text
//! rank < rows and some 0 = c, c ≠ 0   →  Inconsistent
//! rank = unknowns                      →  Unique
//! otherwise                            →  Infinite (free parameters t1, t2, …)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod error;
pub mod matrix;
pub mod pivot;
pub mod solution;
pub mod step;
pub mod verify;

pub use elimination::{EliminationEngine, Reduction};
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use pivot::PivotMap;
pub use solution::{LinearExpr, SolutionResult, Term};
pub use step::{RowOp, Step};
pub use verify::{residuals, verify, verify_solution};

#[cfg(test)]
mod proptests;
