//! # hailstorm-trajectory
//!
//! Finds the single straight line (a "rock" thrown from some position with
//! some constant velocity) that meets every hailstone at a positive time.
//!
//! Each hailstone contributes an unknown collision time that multiplies the
//! unknown velocity, so the natural equations are quadratic. Their only
//! nonlinear part is the same for every hailstone, and subtracting one
//! hailstone's equations from another's cancels it. Three hailstones give six
//! linear equations in the six unknowns of the rock, which
//! `hailstorm-linalg` solves with exact rationals.
//!
//! ## Example
//!
//! ```
//! use hailstorm_trajectory::{Particle, RockSolver};
//!
//! let particles = [
//!     Particle::from_components([19, 13, 30], [-2, 1, -2]),
//!     Particle::from_components([18, 19, 22], [-1, -1, -2]),
//!     Particle::from_components([20, 25, 34], [-2, -2, -4]),
//! ];
//! let sum = RockSolver::default().position_sum(&particles).unwrap();
//! assert_eq!(sum.to_i64(), Some(47));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod config;
pub mod error;
pub mod line;
pub mod parallel;
pub mod particle;
pub mod solver;

pub use builder::{build_system, Unknown};
pub use config::{CrossValidation, SolverConfig, TripleStrategy};
pub use error::{Result, TrajectoryError};
pub use line::RockLine;
pub use particle::{Axis, Particle, Vec3};
pub use solver::{solve_triple, RockSolver};
