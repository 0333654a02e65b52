//! Linear systems over named unknowns.
//!
//! An [`Equation`] maps unknowns to rational coefficients and carries a
//! constant: `Σ coeff_j · unknown_j = constant`. A [`LinearSystem`] fixes the
//! order of its unknowns, which becomes the column order of the dense matrix
//! handed to elimination.

use std::collections::BTreeMap;
use std::fmt;

use num_traits::Zero;
use tracing::{debug, instrument};

use hailstorm_integers::Rational;

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};

/// A single linear equation `Σ coeff · unknown = constant`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation<U: Ord> {
    coefficients: BTreeMap<U, Rational>,
    constant: Rational,
}

impl<U: Ord> Equation<U> {
    /// Creates an equation with no terms and the given constant.
    #[must_use]
    pub fn new(constant: impl Into<Rational>) -> Self {
        Self {
            coefficients: BTreeMap::new(),
            constant: constant.into(),
        }
    }

    /// Adds `coefficient · unknown` to the left-hand side.
    ///
    /// Coefficients for the same unknown accumulate; terms that cancel to
    /// zero are dropped.
    #[must_use]
    pub fn with_term(mut self, unknown: U, coefficient: impl Into<Rational>) -> Self {
        self.add_term(unknown, coefficient);
        self
    }

    /// Adds `coefficient · unknown` to the left-hand side in place.
    pub fn add_term(&mut self, unknown: U, coefficient: impl Into<Rational>) {
        let coefficient = coefficient.into();
        if coefficient.is_zero() {
            return;
        }
        let entry = self
            .coefficients
            .entry(unknown)
            .or_insert_with(Rational::zero);
        *entry = &*entry + &coefficient;
        if entry.is_zero() {
            self.coefficients.retain(|_, c| !c.is_zero());
        }
    }

    /// Returns the coefficient of `unknown` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, unknown: &U) -> Rational {
        self.coefficients
            .get(unknown)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant(&self) -> &Rational {
        &self.constant
    }

    /// Iterates over the non-zero terms in unknown order.
    pub fn terms(&self) -> impl Iterator<Item = (&U, &Rational)> {
        self.coefficients.iter()
    }

    /// Returns `lhs - constant` evaluated at `solution`, treating missing
    /// unknowns as zero. Zero means the equation holds exactly.
    #[must_use]
    pub fn residual(&self, solution: &Solution<U>) -> Rational {
        self.terms()
            .fold(-self.constant.clone(), |acc, (unknown, coefficient)| {
                match solution.get(unknown) {
                    Some(value) => acc + coefficient * value,
                    None => acc,
                }
            })
    }
}

impl<U: Ord + fmt::Display> fmt::Display for Equation<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (unknown, coefficient) in &self.coefficients {
            if first {
                write!(f, "{coefficient}·{unknown}")?;
                first = false;
            } else if coefficient.is_negative() {
                write!(f, " - {}·{unknown}", coefficient.abs())?;
            } else {
                write!(f, " + {coefficient}·{unknown}")?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        write!(f, " = {}", self.constant)
    }
}

/// An ordered set of linear equations over declared unknowns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSystem<U: Ord> {
    unknowns: Vec<U>,
    equations: Vec<Equation<U>>,
}

impl<U: Ord + Clone + fmt::Debug> LinearSystem<U> {
    /// Creates an empty system over the given unknowns, in column order.
    #[must_use]
    pub fn new(unknowns: impl IntoIterator<Item = U>) -> Self {
        Self {
            unknowns: unknowns.into_iter().collect(),
            equations: Vec::new(),
        }
    }

    /// Appends an equation.
    pub fn push(&mut self, equation: Equation<U>) {
        self.equations.push(equation);
    }

    /// Returns the declared unknowns in column order.
    #[must_use]
    pub fn unknowns(&self) -> &[U] {
        &self.unknowns
    }

    /// Returns the equations in row order.
    #[must_use]
    pub fn equations(&self) -> &[Equation<U>] {
        &self.equations
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns true if there are no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Lowers the system to a coefficient matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::DuplicateUnknown`] if an unknown is declared twice
    /// - [`LinalgError::UndeclaredUnknown`] if an equation uses an unknown
    ///   the system does not declare
    pub fn to_matrix(&self) -> Result<(DenseMatrix<Rational>, Vec<Rational>)> {
        let mut columns = BTreeMap::new();
        for (col, unknown) in self.unknowns.iter().enumerate() {
            if columns.insert(unknown, col).is_some() {
                return Err(LinalgError::DuplicateUnknown {
                    name: format!("{unknown:?}"),
                });
            }
        }

        let mut rows = Vec::with_capacity(self.equations.len());
        let mut rhs = Vec::with_capacity(self.equations.len());
        for equation in &self.equations {
            let mut row = vec![Rational::zero(); self.unknowns.len()];
            for (unknown, coefficient) in equation.terms() {
                let col = columns
                    .get(unknown)
                    .ok_or_else(|| LinalgError::UndeclaredUnknown {
                        name: format!("{unknown:?}"),
                    })?;
                row[*col] = coefficient.clone();
            }
            rows.push(row);
            rhs.push(equation.constant().clone());
        }

        if rows.is_empty() {
            return Ok((DenseMatrix::zeros(0, self.unknowns.len()), rhs));
        }
        Ok((DenseMatrix::from_rows(rows)?, rhs))
    }

    /// Solves the system exactly.
    ///
    /// The system must be square: one equation per declared unknown.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::DimensionMismatch`] if the equation count differs
    ///   from the unknown count (checked before any elimination)
    /// - any construction error from [`LinearSystem::to_matrix`]
    /// - [`LinalgError::Singular`] if the equations are not independent
    #[instrument(level = "debug", skip_all, fields(unknowns = self.unknowns.len()))]
    pub fn solve(&self) -> Result<Solution<U>> {
        if self.equations.len() != self.unknowns.len() {
            return Err(LinalgError::DimensionMismatch {
                equations: self.equations.len(),
                unknowns: self.unknowns.len(),
            });
        }

        let (matrix, rhs) = self.to_matrix()?;
        let values = matrix.solve(&rhs)?;
        debug!("system solved");

        Ok(Solution {
            values: self.unknowns.iter().cloned().zip(values).collect(),
        })
    }
}

/// Exact values for every unknown of a solved system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<U: Ord> {
    values: BTreeMap<U, Rational>,
}

impl<U: Ord> Solution<U> {
    /// Returns the value of `unknown`, if it was solved for.
    #[must_use]
    pub fn get(&self, unknown: &U) -> Option<&Rational> {
        self.values.get(unknown)
    }

    /// Iterates over `(unknown, value)` pairs in unknown order.
    pub fn iter(&self) -> impl Iterator<Item = (&U, &Rational)> {
        self.values.iter()
    }

    /// Returns the number of solved unknowns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was solved for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<U: Ord> FromIterator<(U, Rational)> for Solution<U> {
    fn from_iter<I: IntoIterator<Item = (U, Rational)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_accumulate_and_cancel() {
        let eq = Equation::new(5)
            .with_term("x", 2)
            .with_term("y", 3)
            .with_term("x", -2);
        assert_eq!(eq.coefficient(&"x"), Rational::zero());
        assert_eq!(eq.terms().count(), 1);
        assert_eq!(eq.to_string(), "3·y = 5");
    }

    #[test]
    fn test_display() {
        let eq = Equation::new(-1)
            .with_term("a", 1)
            .with_term("b", Rational::from_i64(-1, 2));
        assert_eq!(eq.to_string(), "1·a - 1/2·b = -1");
        assert_eq!(Equation::<&str>::new(0).to_string(), "0 = 0");
    }

    #[test]
    fn test_solve_named() {
        // x + y = 3, x - y = 1
        let mut system = LinearSystem::new(["x", "y"]);
        system.push(Equation::new(3).with_term("x", 1).with_term("y", 1));
        system.push(Equation::new(1).with_term("x", 1).with_term("y", -1));

        let solution = system.solve().unwrap();
        assert_eq!(solution.get(&"x"), Some(&Rational::from(2)));
        assert_eq!(solution.get(&"y"), Some(&Rational::from(1)));
        for eq in system.equations() {
            assert!(eq.residual(&solution).is_zero());
        }
    }

    #[test]
    fn test_count_mismatch_reported_before_solving() {
        let mut system = LinearSystem::new(["x", "y"]);
        system.push(Equation::new(3).with_term("x", 1));
        assert_eq!(
            system.solve(),
            Err(LinalgError::DimensionMismatch {
                equations: 1,
                unknowns: 2
            })
        );
    }

    #[test]
    fn test_undeclared_unknown() {
        let mut system = LinearSystem::new(["x"]);
        system.push(Equation::new(3).with_term("z", 1));
        assert_eq!(
            system.solve(),
            Err(LinalgError::UndeclaredUnknown {
                name: "\"z\"".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_unknown() {
        let mut system = LinearSystem::new(["x", "x"]);
        system.push(Equation::new(1).with_term("x", 1));
        system.push(Equation::new(2).with_term("x", 1));
        assert!(matches!(
            system.solve(),
            Err(LinalgError::DuplicateUnknown { .. })
        ));
    }

    #[test]
    fn test_solve_is_deterministic() {
        let mut system = LinearSystem::new([0u8, 1, 2]);
        system.push(Equation::new(7).with_term(0, 3).with_term(2, -1));
        system.push(Equation::new(2).with_term(1, 5).with_term(0, 1));
        system.push(Equation::new(9).with_term(2, 4).with_term(1, 2));

        assert_eq!(system.solve(), system.solve());
    }
}
