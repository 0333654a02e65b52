//! # hailstorm-linalg
//!
//! Exact linear algebra for hailstorm.
//!
//! This crate provides:
//! - Dense matrices over any [`Field`](hailstorm_rings::Field), with
//!   fraction-exact Gaussian elimination, rank and determinant
//! - Named-unknown linear systems (`LinearSystem`) that solve to a
//!   `Solution` map or report why no unique solution exists
//!
//! Systems here are tiny (six unknowns for a trajectory), so everything is
//! dense and sequential. Exactness, not speed, is the point: coefficients are
//! products of 15-digit coordinates and a floating-point elimination would
//! silently round them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod system;

pub use dense_matrix::{DenseMatrix, Elimination};
pub use error::{LinalgError, Result};
pub use system::{Equation, LinearSystem, Solution};

#[cfg(test)]
mod tests;
