//! Cross-validating the rock line over several triples.
//!
//! Windows of consecutive particles `[k, k+1, k+2]` are solved independently,
//! on the rayon pool once there are enough of them, and must all agree.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::config::CrossValidation;
use crate::error::{Result, TrajectoryError};
use crate::line::RockLine;
use crate::particle::Particle;
use crate::solver::{check_len, solve_triple, RockSolver};

impl RockSolver {
    /// Solves several consecutive windows and checks they give the same line.
    ///
    /// The number of windows is capped by the number of particles. Singular
    /// windows are skipped; if every window fails the first error is
    /// returned. The agreed line is verified against all particles when the
    /// solver's configuration asks for it.
    ///
    /// # Errors
    ///
    /// - [`TrajectoryError::MalformedInput`] for fewer than three particles
    /// - [`TrajectoryError::Disagreement`] if two windows give different lines
    /// - the first [`TrajectoryError::SingularSystem`] if every window is singular
    /// - verification errors as in [`RockSolver::solve`]
    #[instrument(
        level = "debug",
        skip_all,
        fields(particles = particles.len(), triples = options.triples)
    )]
    pub fn cross_validate(
        &self,
        particles: &[Particle],
        options: &CrossValidation,
    ) -> Result<RockLine> {
        check_len(particles)?;

        let count = options.triples.max(1).min(particles.len() - 2);
        let windows: Vec<[usize; 3]> = (0..count).map(|k| [k, k + 1, k + 2]).collect();

        let results: Vec<([usize; 3], Result<RockLine>)> = if count >= options.parallel_threshold {
            windows
                .par_iter()
                .map(|&triple| (triple, solve_triple(particles, triple)))
                .collect()
        } else {
            windows
                .iter()
                .map(|&triple| (triple, solve_triple(particles, triple)))
                .collect()
        };

        let mut agreed: Option<([usize; 3], RockLine)> = None;
        let mut first_error = None;

        for (triple, result) in results {
            match result {
                Ok(line) => {
                    if let Some((first, reference)) = &agreed {
                        if *reference != line {
                            return Err(TrajectoryError::Disagreement {
                                first: *first,
                                second: triple,
                            });
                        }
                    } else {
                        agreed = Some((triple, line));
                    }
                }
                Err(err @ TrajectoryError::SingularSystem { .. }) => {
                    debug!(?triple, %err, "window skipped");
                    first_error.get_or_insert(err);
                }
                Err(other) => return Err(other),
            }
        }

        let Some((_, line)) = agreed else {
            return Err(first_error.unwrap_or_else(|| {
                TrajectoryError::MalformedInput("no window was solved".to_owned())
            }));
        };

        if self.config().verify {
            line.verify(particles)?;
        }
        Ok(line)
    }
}
