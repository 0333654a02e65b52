//! Hailstones: integer positions moving at constant integer velocity.

use std::fmt;

use hailstorm_integers::{Integer, Rational};

use crate::error::TrajectoryError;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the array index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// An integer 3-vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vec3 {
    /// x component.
    pub x: i64,
    /// y component.
    pub y: i64,
    /// z component.
    pub z: i64,
}

impl Vec3 {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns the component along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns the component along `axis` as an arbitrary precision integer.
    #[must_use]
    pub fn exact(self, axis: Axis) -> Integer {
        Integer::new(self.get(axis))
    }
}

impl From<[i64; 3]> for Vec3 {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// A hailstone: at time `t` it is at `position + t * velocity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Particle {
    /// Position at time zero.
    pub position: Vec3,
    /// Displacement per unit time.
    pub velocity: Vec3,
}

impl Particle {
    /// Creates a particle.
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Creates a particle from position and velocity component arrays.
    #[must_use]
    pub fn from_components(position: [i64; 3], velocity: [i64; 3]) -> Self {
        Self::new(position.into(), velocity.into())
    }

    /// Returns `p.a * v.b - p.b * v.a`, one component of `position × velocity`.
    ///
    /// This is the constant each particle contributes to the linearised
    /// collision equation for the `(a, b)` plane.
    #[must_use]
    pub fn moment(&self, a: Axis, b: Axis) -> Integer {
        self.position.exact(a) * self.velocity.exact(b)
            - self.position.exact(b) * self.velocity.exact(a)
    }

    /// Returns the exact position at time `t`.
    #[must_use]
    pub fn position_at(&self, t: &Rational) -> [Rational; 3] {
        Axis::ALL.map(|axis| {
            Rational::from(self.position.exact(axis))
                + Rational::from(self.velocity.exact(axis)) * t
        })
    }
}

impl TryFrom<&[i64]> for Particle {
    type Error = TrajectoryError;

    /// Builds a particle from a flat `[px, py, pz, vx, vy, vz]` record.
    fn try_from(record: &[i64]) -> Result<Self, Self::Error> {
        match *record {
            [px, py, pz, vx, vy, vz] => Ok(Self::from_components([px, py, pz], [vx, vy, vz])),
            _ => Err(TrajectoryError::MalformedInput(format!(
                "particle record has {} components, expected 6",
                record.len()
            ))),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.position, self.velocity)
    }
}
