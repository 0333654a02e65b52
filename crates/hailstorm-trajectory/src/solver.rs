//! Recovering the rock line from a set of particles.

use tracing::{debug, instrument, warn};

use hailstorm_integers::Integer;
use hailstorm_linalg::LinalgError;

use crate::builder::build_system;
use crate::config::{SolverConfig, TripleStrategy};
use crate::error::{Result, TrajectoryError};
use crate::line::RockLine;
use crate::particle::Particle;

/// Solves for the rock line under a [`SolverConfig`].
#[derive(Clone, Debug, Default)]
pub struct RockSolver {
    config: SolverConfig,
}

impl RockSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Recovers the line that meets every particle.
    ///
    /// # Errors
    ///
    /// - [`TrajectoryError::MalformedInput`] for fewer than three particles
    /// - [`TrajectoryError::SingularSystem`] if no tried triple determines a
    ///   unique line
    /// - [`TrajectoryError::NoIntersection`] or
    ///   [`TrajectoryError::NonPositiveTime`] if verification is enabled and
    ///   some particle is not hit in the future
    #[instrument(level = "debug", skip_all, fields(particles = particles.len()))]
    pub fn solve(&self, particles: &[Particle]) -> Result<RockLine> {
        check_len(particles)?;

        let line = match self.config.strategy {
            TripleStrategy::FirstThree => solve_triple(particles, [0, 1, 2])?,
            TripleStrategy::Search { max_attempts } => search(particles, max_attempts)?,
        };
        debug!(%line, "rock line recovered");

        if self.config.verify {
            line.verify(particles)?;
        }
        Ok(line)
    }

    /// Recovers the line and returns the sum of its starting coordinates.
    ///
    /// # Errors
    ///
    /// Everything [`RockSolver::solve`] returns, plus
    /// [`TrajectoryError::NonIntegerResult`] if the sum is fractional.
    pub fn position_sum(&self, particles: &[Particle]) -> Result<Integer> {
        self.solve(particles)?.position_sum()
    }
}

/// Solves the six-equation system built from the particles at `triple`.
///
/// No verification against other particles is done.
///
/// # Errors
///
/// - [`TrajectoryError::MalformedInput`] if an index is out of range or the
///   indices are not distinct
/// - [`TrajectoryError::SingularSystem`] if the triple does not determine a
///   unique line
pub fn solve_triple(particles: &[Particle], triple: [usize; 3]) -> Result<RockLine> {
    let [i, j, k] = triple;
    if i == j || i == k || j == k {
        return Err(TrajectoryError::MalformedInput(format!(
            "triple {triple:?} repeats a particle"
        )));
    }
    let pick = |index: usize| {
        particles.get(index).ok_or_else(|| {
            TrajectoryError::MalformedInput(format!(
                "particle index {index} out of range for {} particles",
                particles.len()
            ))
        })
    };

    let system = build_system([pick(i)?, pick(j)?, pick(k)?]);
    let solution = system.solve().map_err(|err| match err {
        LinalgError::Singular { rank, .. } => TrajectoryError::SingularSystem { triple, rank },
        other => other.into(),
    })?;
    RockLine::from_solution(&solution)
}

pub(crate) fn check_len(particles: &[Particle]) -> Result<()> {
    if particles.len() < 3 {
        return Err(TrajectoryError::MalformedInput(format!(
            "need at least 3 particles, got {}",
            particles.len()
        )));
    }
    Ok(())
}

/// Tries triples in lexicographic order until one is non-singular.
fn search(particles: &[Particle], max_attempts: usize) -> Result<RockLine> {
    let mut last = None;

    for triple in triples(particles.len()).take(max_attempts) {
        match solve_triple(particles, triple) {
            Ok(line) => return Ok(line),
            Err(err @ TrajectoryError::SingularSystem { rank, .. }) => {
                warn!(?triple, rank, "singular triple, trying next");
                last = Some(err);
            }
            Err(other) => return Err(other),
        }
    }

    Err(last.unwrap_or_else(|| {
        TrajectoryError::MalformedInput(format!(
            "search allowed {max_attempts} attempts, no triple was tried"
        ))
    }))
}

/// All index triples `i < j < k` below `n`, in lexicographic order.
fn triples(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k]))
    })
}
