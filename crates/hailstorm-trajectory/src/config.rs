//! Solver configuration.

/// How the solver picks the three particles it builds equations from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TripleStrategy {
    /// Use particles 0, 1 and 2 and report a singular system as an error.
    #[default]
    FirstThree,
    /// Walk triples in lexicographic index order and use the first one that
    /// yields a unique line. Singular triples are skipped with a warning.
    Search {
        /// Upper bound on the number of triples tried.
        max_attempts: usize,
    },
}

/// Configuration for [`RockSolver`](crate::RockSolver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Triple selection.
    pub strategy: TripleStrategy,
    /// Check the recovered line against every particle, not only the three
    /// it was derived from.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: TripleStrategy::FirstThree,
            verify: true,
        }
    }
}

impl SolverConfig {
    /// Sets the triple selection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: TripleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables verification against all particles.
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Configuration for cross-validating several triples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossValidation {
    /// Number of consecutive-particle windows `[k, k+1, k+2]` to solve.
    pub triples: usize,
    /// Minimum number of windows before solving them on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for CrossValidation {
    fn default() -> Self {
        Self {
            triples: 3,
            parallel_threshold: 2,
        }
    }
}
