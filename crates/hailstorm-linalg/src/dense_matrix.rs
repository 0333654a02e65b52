//! Dense matrix implementation for small exact systems.
//!
//! Entries are stored row-major. Elimination never normalises by anything
//! but exact field division, so the echelon form is exact for any `Field`.

use std::ops::{Index, IndexMut};

use tracing::trace;

use hailstorm_rings::traits::{Field, Ring};

use crate::error::{LinalgError, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

/// Outcome of forward elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// Pivot column of each pivot row, in row order. Its length is the rank.
    pub pivot_cols: Vec<usize>,
    /// Number of row swaps performed.
    pub row_swaps: usize,
}

impl Elimination {
    /// Returns the rank found by elimination.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivot_cols.len()
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRow`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(LinalgError::RaggedRow {
                row,
                expected: num_cols,
                found,
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRow`] if `x` does not have one entry per
    /// column.
    pub fn mv(&self, x: &[R]) -> Result<Vec<R>> {
        if x.len() != self.num_cols {
            return Err(LinalgError::RaggedRow {
                row: 0,
                expected: self.num_cols,
                found: x.len(),
            });
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// Returns a copy with `column` appended on the right: `[A | b]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRow`] if `column` does not have one entry
    /// per row.
    pub fn augment(&self, column: &[R]) -> Result<Self> {
        if column.len() != self.num_rows {
            return Err(LinalgError::RaggedRow {
                row: self.num_rows,
                expected: self.num_rows,
                found: column.len(),
            });
        }
        let mut data = Vec::with_capacity(self.num_rows * (self.num_cols + 1));
        for (row, extra) in column.iter().enumerate() {
            data.extend_from_slice(self.row(row));
            data.push(extra.clone());
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols + 1,
        })
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Forward Gaussian elimination in place, pivoting only in the first
    /// `pivot_limit` columns.
    ///
    /// The pivot for each column is the first row at or below the current
    /// pivot row with a non-zero entry; arithmetic is exact so no magnitude
    /// search is needed. Columns without a pivot are skipped, which is how
    /// rank deficiency shows up in the result.
    pub fn eliminate(&mut self, pivot_limit: usize) -> Elimination {
        let pivot_limit = pivot_limit.min(self.num_cols);
        let mut pivot_cols = Vec::with_capacity(pivot_limit.min(self.num_rows));
        let mut row_swaps = 0;
        let mut pivot_row = 0;

        for col in 0..pivot_limit {
            if pivot_row == self.num_rows {
                break;
            }

            let Some(found) = (pivot_row..self.num_rows).find(|&row| !self[(row, col)].is_zero())
            else {
                trace!(col, "no pivot in column");
                continue;
            };

            if found != pivot_row {
                self.swap_rows(pivot_row, found);
                row_swaps += 1;
            }

            let Some(pivot_inv) = self[(pivot_row, col)].inv() else {
                continue;
            };
            trace!(row = pivot_row, col, "pivot selected");

            for row in pivot_row + 1..self.num_rows {
                if self[(row, col)].is_zero() {
                    continue;
                }
                let factor = -(self[(row, col)].clone() * pivot_inv.clone());
                self.add_scaled_row(row, pivot_row, &factor);
            }

            pivot_cols.push(col);
            pivot_row += 1;
        }

        Elimination {
            pivot_cols,
            row_swaps,
        }
    }

    /// Returns the row echelon form and the rank.
    #[must_use]
    pub fn row_echelon(&self) -> (Self, usize) {
        let mut m = self.clone();
        let rank = m.eliminate(self.num_cols).rank();
        (m, rank)
    }

    /// Computes the rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.row_echelon().1
    }

    /// Computes the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for non-square matrices.
    pub fn det(&self) -> Result<R> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }

        let mut m = self.clone();
        let elimination = m.eliminate(self.num_cols);
        if elimination.rank() < self.num_rows {
            return Ok(R::zero());
        }

        let det = (0..self.num_rows).fold(R::one(), |acc, i| acc * m[(i, i)].clone());
        if elimination.row_swaps % 2 == 1 {
            Ok(-det)
        } else {
            Ok(det)
        }
    }

    /// Solves the square system Ax = b exactly.
    ///
    /// Forward elimination on `[A | b]` followed by back substitution.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::NotSquare`] if `A` is not square
    /// - [`LinalgError::RaggedRow`] if `b` has the wrong length
    /// - [`LinalgError::Singular`] if `A` has rank below its size
    pub fn solve(&self, b: &[R]) -> Result<Vec<R>> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        let n = self.num_rows;
        let mut aug = self.augment(b)?;

        let elimination = aug.eliminate(n);
        if elimination.rank() < n {
            return Err(LinalgError::Singular {
                rank: elimination.rank(),
                size: n,
            });
        }

        // Full rank on a square matrix puts every pivot on the diagonal.
        let mut x = vec![R::zero(); n];
        for row in (0..n).rev() {
            let rhs = (row + 1..n).fold(aug[(row, n)].clone(), |acc, col| {
                acc - aug[(row, col)].clone() * x[col].clone()
            });
            x[row] = rhs
                .checked_field_div(&aug[(row, row)])
                .ok_or(LinalgError::Singular { rank: row, size: n })?;
        }

        Ok(x)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
