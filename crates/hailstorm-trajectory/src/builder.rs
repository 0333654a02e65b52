//! Linearisation of the collision constraints.
//!
//! For a particle `p + t·v` and the rock `P + t·V`, a collision at time `t`
//! means `p - P` is parallel to `V - v`. Written per plane `(a, b)`:
//!
//! ```text
//! (p.a - P.a)·(V.b - v.b) = (p.b - P.b)·(V.a - v.a)
//! ```
//!
//! Expanding leaves a single bilinear term, `P.b·V.a - P.a·V.b`, that does not
//! depend on the particle. Subtracting particle `j`'s equation from particle
//! `i`'s removes it:
//!
//! ```text
//!   (v_i.b - v_j.b)·P.a - (v_i.a - v_j.a)·P.b
//! - (p_i.b - p_j.b)·V.a + (p_i.a - p_j.a)·V.b
//! = (p_i.a·v_i.b - p_i.b·v_i.a) - (p_j.a·v_j.b - p_j.b·v_j.a)
//! ```
//!
//! Three planes for each of the pairs (0, 1) and (0, 2) give six equations.

use std::fmt;

use tracing::{debug, trace};

use hailstorm_linalg::{Equation, LinearSystem};

use crate::particle::{Axis, Particle};

/// The six unknowns of the rock line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unknown {
    /// Starting x.
    Px,
    /// Starting y.
    Py,
    /// Starting z.
    Pz,
    /// Velocity along x.
    Vx,
    /// Velocity along y.
    Vy,
    /// Velocity along z.
    Vz,
}

impl Unknown {
    /// All unknowns in column order.
    pub const ALL: [Unknown; 6] = [
        Unknown::Px,
        Unknown::Py,
        Unknown::Pz,
        Unknown::Vx,
        Unknown::Vy,
        Unknown::Vz,
    ];

    /// The starting-position unknown along `axis`.
    #[must_use]
    pub const fn position(axis: Axis) -> Self {
        match axis {
            Axis::X => Unknown::Px,
            Axis::Y => Unknown::Py,
            Axis::Z => Unknown::Pz,
        }
    }

    /// The velocity unknown along `axis`.
    #[must_use]
    pub const fn velocity(axis: Axis) -> Self {
        match axis {
            Axis::X => Unknown::Vx,
            Axis::Y => Unknown::Vy,
            Axis::Z => Unknown::Vz,
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unknown::Px => "Px",
            Unknown::Py => "Py",
            Unknown::Pz => "Pz",
            Unknown::Vx => "Vx",
            Unknown::Vy => "Vy",
            Unknown::Vz => "Vz",
        };
        f.write_str(name)
    }
}

const PLANES: [(Axis, Axis); 3] = [(Axis::X, Axis::Y), (Axis::X, Axis::Z), (Axis::Y, Axis::Z)];

/// Builds the six-equation linear system for a triple of particles.
///
/// The first particle is differenced against each of the other two. A
/// degenerate triple (for example two equal velocities) still yields six
/// equations; they are just not independent, which the solver reports.
#[must_use]
pub fn build_system(triple: [&Particle; 3]) -> LinearSystem<Unknown> {
    let [base, first, second] = triple;
    let mut system = LinearSystem::new(Unknown::ALL);

    for other in [first, second] {
        for (a, b) in PLANES {
            let equation = plane_equation(base, other, a, b);
            trace!(%a, %b, %equation, "equation built");
            system.push(equation);
        }
    }

    debug!(equations = system.len(), "linear system built");
    system
}

/// The differenced collision equation of particles `i` and `j` in plane `(a, b)`.
fn plane_equation(i: &Particle, j: &Particle, a: Axis, b: Axis) -> Equation<Unknown> {
    let dp = |axis: Axis| i.position.exact(axis) - j.position.exact(axis);
    let dv = |axis: Axis| i.velocity.exact(axis) - j.velocity.exact(axis);

    Equation::new(i.moment(a, b) - j.moment(a, b))
        .with_term(Unknown::position(a), dv(b))
        .with_term(Unknown::position(b), -dv(a))
        .with_term(Unknown::velocity(a), -dp(b))
        .with_term(Unknown::velocity(b), dp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hailstorm_integers::{Integer, Rational};
    use hailstorm_linalg::Solution;
    use num_traits::Zero;

    /// `(p.a - P.a)·(V.b - v.b) - (p.b - P.b)·(V.a - v.a)`: one plane of the
    /// collision condition before differencing.
    fn collision_residual(
        particle: &Particle,
        position: [i64; 3],
        velocity: [i64; 3],
        a: Axis,
        b: Axis,
    ) -> Integer {
        let rel_p =
            |axis: Axis| particle.position.exact(axis) - Integer::new(position[axis.index()]);
        let rel_v =
            |axis: Axis| Integer::new(velocity[axis.index()]) - particle.velocity.exact(axis);
        rel_p(a) * rel_v(b) - rel_p(b) * rel_v(a)
    }

    fn example() -> [Particle; 3] {
        [
            Particle::from_components([19, 13, 30], [-2, 1, -2]),
            Particle::from_components([18, 19, 22], [-1, -1, -2]),
            Particle::from_components([20, 25, 34], [-2, -2, -4]),
        ]
    }

    fn rock() -> Solution<Unknown> {
        Unknown::ALL
            .into_iter()
            .zip([24, 13, 10, -3, 1, 2])
            .map(|(u, v)| (u, Rational::from(v)))
            .collect()
    }

    #[test]
    fn test_six_equations_over_six_unknowns() {
        let [a, b, c] = example();
        let system = build_system([&a, &b, &c]);
        assert_eq!(system.len(), 6);
        assert_eq!(system.unknowns(), &Unknown::ALL);
    }

    #[test]
    fn test_known_rock_satisfies_every_equation() {
        let [a, b, c] = example();
        let system = build_system([&a, &b, &c]);
        let rock = rock();
        for equation in system.equations() {
            assert!(equation.residual(&rock).is_zero(), "{equation}");
        }
    }

    #[test]
    fn test_plane_equation_coefficients() {
        let [a, b, _] = example();
        let eq = plane_equation(&a, &b, Axis::X, Axis::Y);
        // dv = (-1, 2, 0), dp = (1, -6, 8)
        assert_eq!(eq.coefficient(&Unknown::Px), Rational::from(2));
        assert_eq!(eq.coefficient(&Unknown::Py), Rational::from(1));
        assert_eq!(eq.coefficient(&Unknown::Vx), Rational::from(6));
        assert_eq!(eq.coefficient(&Unknown::Vy), Rational::from(1));
        assert_eq!(eq.coefficient(&Unknown::Pz), Rational::zero());
        // (19*1 - 13*-2) - (18*-1 - 19*-1) = 45 - 1
        assert_eq!(eq.constant(), &Rational::from(44));
    }

    #[test]
    fn test_differencing_cancels_bilinear_term() {
        let [a, b, _] = example();
        for (x, y) in PLANES {
            let ra = collision_residual(&a, [24, 13, 10], [-3, 1, 2], x, y);
            let rb = collision_residual(&b, [24, 13, 10], [-3, 1, 2], x, y);
            assert!(ra.is_zero());
            assert!(rb.is_zero());
        }
        // Away from the rock the residuals differ by exactly the linear
        // equation's residual.
        let off_p = [1, 2, 3];
        let off_v = [4, -5, 6];
        let ra = collision_residual(&a, off_p, off_v, Axis::X, Axis::Y);
        let rb = collision_residual(&b, off_p, off_v, Axis::X, Axis::Y);
        let at: Solution<Unknown> = Unknown::ALL
            .into_iter()
            .zip(off_p.into_iter().chain(off_v))
            .map(|(u, v)| (u, Rational::from(v)))
            .collect();
        let linear = plane_equation(&a, &b, Axis::X, Axis::Y).residual(&at);
        assert!(!ra.is_zero());
        assert_eq!(Rational::from(ra - rb), linear);
    }
}
