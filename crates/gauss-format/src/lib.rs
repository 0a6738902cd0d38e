//! # gauss-format
//!
//! Text rendering for Gauss-Jordan elimination results.
//!
//! This crate provides:
//! - [`format_matrix`]: bracketed, column-aligned augmented matrices
//! - [`format_expression`]: free-parameter expressions such as `2 - t1`
//! - [`render`] / [`render_with`]: the numbered step trace, the solution and
//!   the verification outcome as one report
//!
//! Rendering reads scalars through their `Display` impls and never changes
//! them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod expression;
pub mod matrix;
pub mod report;

pub use config::FormatConfig;
pub use expression::format_expression;
pub use matrix::format_matrix;
pub use report::{render, render_with};
