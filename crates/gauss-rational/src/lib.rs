//! # gauss-rational
//!
//! Exact rational arithmetic for the Gauss-Jordan solver.
//!
//! This crate wraps `dashu` to provide [`Rational`], a fraction that is
//! always sign-normalized and reduced to lowest terms, together with the
//! text syntax accepted for exact input (`3`, `-0.25`, `7/4`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational};
