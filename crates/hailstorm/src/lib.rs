//! # Hailstorm
//!
//! Recovers, exactly, the straight line that passes through every particle of
//! a storm of particles moving at constant velocity.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary precision integers and rationals, so
//!   15-digit coordinates never lose a digit
//! - **Linearisation**: three particles give six linear equations
//! - **Rational Gaussian elimination**: singular systems are detected, not
//!   approximated
//! - **Verification**: the recovered line is checked against every particle
//!
//! ## Quick Start
//!
//! ```
//! use hailstorm::prelude::*;
//!
//! let particles = [
//!     Particle::from_components([19, 13, 30], [-2, 1, -2]),
//!     Particle::from_components([18, 19, 22], [-1, -1, -2]),
//!     Particle::from_components([20, 25, 34], [-2, -2, -4]),
//!     Particle::from_components([12, 31, 28], [-1, -2, -1]),
//!     Particle::from_components([20, 19, 15], [1, -5, -3]),
//! ];
//! let rock = RockSolver::default().solve(&particles).unwrap();
//! assert_eq!(rock.to_string(), "24, 13, 10 @ -3, 1, 2");
//! assert_eq!(rock.position_sum().unwrap(), Integer::new(47));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;

pub use hailstorm_integers as integers;
pub use hailstorm_linalg as linalg;
pub use hailstorm_rings as rings;
pub use hailstorm_trajectory as trajectory;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hailstorm_integers::{Integer, Rational};
    pub use hailstorm_linalg::{DenseMatrix, Equation, LinearSystem, Solution};
    pub use hailstorm_rings::{Field, Ring};
    pub use hailstorm_trajectory::{
        CrossValidation, Particle, RockLine, RockSolver, SolverConfig, TrajectoryError,
        TripleStrategy,
    };
}
