//! Errors raised while building or solving linear systems.

use thiserror::Error;

/// Errors that can occur in exact linear algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The number of equations differs from the number of unknowns.
    #[error("system has {equations} equations for {unknowns} unknowns")]
    DimensionMismatch {
        /// Equations supplied.
        equations: usize,
        /// Unknowns declared.
        unknowns: usize,
    },

    /// A square matrix was required.
    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// A vector or row had the wrong number of entries.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// An equation mentions an unknown the system never declared.
    #[error("unknown {name} is not declared by the system")]
    UndeclaredUnknown {
        /// Debug rendering of the unknown.
        name: String,
    },

    /// The same unknown was declared twice.
    #[error("unknown {name} is declared more than once")]
    DuplicateUnknown {
        /// Debug rendering of the unknown.
        name: String,
    },

    /// Elimination ran out of pivots: the system has no unique solution.
    #[error("singular system: rank {rank} of {size}")]
    Singular {
        /// Number of pivots found.
        rank: usize,
        /// Number of unknowns.
        size: usize,
    },
}

/// Result alias for linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
