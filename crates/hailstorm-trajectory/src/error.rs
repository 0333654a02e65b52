//! Errors raised while recovering a rock line.

use hailstorm_integers::Rational;
use hailstorm_linalg::LinalgError;
use thiserror::Error;

use crate::builder::Unknown;

/// Errors that can occur while recovering a rock line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    /// Too few particles, a bad particle record, or bad triple indices.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The chosen triple does not determine a unique line.
    #[error("particles {triple:?} give a singular system (rank {rank} of 6)")]
    SingularSystem {
        /// Particle indices the system was built from.
        triple: [usize; 3],
        /// Rank reached by elimination.
        rank: usize,
    },

    /// The exact position sum has a denominator other than one.
    #[error("position sum {sum} is not an integer")]
    NonIntegerResult {
        /// The exact sum.
        sum: Rational,
    },

    /// The line never passes through the particle's trajectory.
    #[error("line never meets particle {index}")]
    NoIntersection {
        /// Index of the particle in the input.
        index: usize,
    },

    /// The line meets the particle, but not in the future.
    #[error("line meets particle {index} at non-positive time {time}")]
    NonPositiveTime {
        /// Index of the particle in the input.
        index: usize,
        /// The exact meeting time.
        time: Rational,
    },

    /// Two triples produced different lines.
    #[error("triples {first:?} and {second:?} give different lines")]
    Disagreement {
        /// Triple whose line was taken as reference.
        first: [usize; 3],
        /// Triple that disagreed with it.
        second: [usize; 3],
    },

    /// The solved system did not assign a value to an unknown.
    #[error("solution has no value for {0}")]
    Unsolved(Unknown),

    /// Error from the linear algebra layer.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

/// Result alias for trajectory recovery.
pub type Result<T> = std::result::Result<T, TrajectoryError>;
