//! The recovered rock line.

use std::fmt;

use num_traits::{One, Zero};

use hailstorm_integers::{Integer, Rational};
use hailstorm_linalg::Solution;

use crate::builder::Unknown;
use crate::error::{Result, TrajectoryError};
use crate::particle::{Axis, Particle};

/// A line `position + t·velocity` with exact rational components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RockLine {
    position: [Rational; 3],
    velocity: [Rational; 3],
}

impl RockLine {
    /// Creates a line from its starting position and velocity.
    #[must_use]
    pub fn new(position: [Rational; 3], velocity: [Rational; 3]) -> Self {
        Self { position, velocity }
    }

    /// Reads the six unknowns out of a solved system.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::Unsolved`] if any unknown has no value.
    pub fn from_solution(solution: &Solution<Unknown>) -> Result<Self> {
        let value = |unknown: Unknown| {
            solution
                .get(&unknown)
                .cloned()
                .ok_or(TrajectoryError::Unsolved(unknown))
        };
        Ok(Self {
            position: [value(Unknown::Px)?, value(Unknown::Py)?, value(Unknown::Pz)?],
            velocity: [value(Unknown::Vx)?, value(Unknown::Vy)?, value(Unknown::Vz)?],
        })
    }

    /// Returns the starting position.
    #[must_use]
    pub fn position(&self) -> &[Rational; 3] {
        &self.position
    }

    /// Returns the velocity.
    #[must_use]
    pub fn velocity(&self) -> &[Rational; 3] {
        &self.velocity
    }

    /// Returns the exact position at time `t`.
    #[must_use]
    pub fn position_at(&self, t: &Rational) -> [Rational; 3] {
        Axis::ALL.map(|axis| &self.position[axis.index()] + &(&self.velocity[axis.index()] * t))
    }

    /// Returns `Px + Py + Pz` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::NonIntegerResult`] if the exact sum has a
    /// denominator other than one. It is never rounded.
    pub fn position_sum(&self) -> Result<Integer> {
        let sum = self
            .position
            .iter()
            .fold(Rational::zero(), |acc, c| acc + c);
        sum.to_integer()
            .ok_or(TrajectoryError::NonIntegerResult { sum })
    }

    /// Returns the time at which the line and `particle` are at the same
    /// point, or `None` if they never are.
    ///
    /// Solves `P + t·V = p + t·v` per axis. Axes where the velocities agree
    /// say nothing about `t` but require equal positions. If the particle
    /// travels along the line itself every `t` works and one is returned.
    #[must_use]
    pub fn intersection_time(&self, particle: &Particle) -> Option<Rational> {
        let mut time: Option<Rational> = None;

        for axis in Axis::ALL {
            let i = axis.index();
            let gap = Rational::from(particle.position.exact(axis)) - &self.position[i];
            let closing = &self.velocity[i] - &Rational::from(particle.velocity.exact(axis));

            match gap.checked_div(&closing) {
                Some(t) => {
                    if time.as_ref().is_some_and(|existing| *existing != t) {
                        return None;
                    }
                    time = Some(t);
                }
                None if gap.is_zero() => {}
                None => return None,
            }
        }

        Some(time.unwrap_or_else(Rational::one))
    }

    /// Checks that the line meets every particle at a strictly positive time.
    ///
    /// # Errors
    ///
    /// - [`TrajectoryError::NoIntersection`] for a particle the line misses
    /// - [`TrajectoryError::NonPositiveTime`] for a particle met at `t <= 0`
    pub fn verify(&self, particles: &[Particle]) -> Result<()> {
        for (index, particle) in particles.iter().enumerate() {
            match self.intersection_time(particle) {
                Some(time) if time.is_positive() => {}
                Some(time) => return Err(TrajectoryError::NonPositiveTime { index, time }),
                None => return Err(TrajectoryError::NoIntersection { index }),
            }
        }
        Ok(())
    }
}

impl fmt::Display for RockLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [px, py, pz] = &self.position;
        let [vx, vy, vz] = &self.velocity;
        write!(f, "{px}, {py}, {pz} @ {vx}, {vy}, {vz}")
    }
}
