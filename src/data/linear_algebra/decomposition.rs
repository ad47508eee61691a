//! # LU decomposition
//!
//! Factorization `PB = LU` of a square basis matrix `B` using partial (row) pivoting. Both the
//! systems `Bx = r` and `B^T y = r` are solved using the same factorization, which is all the
//! simplex method needs: the first for the direction of a column and the values of the basic
//! variables, the second for the dual values.
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::Dense;
use crate::error::{Error, Result};

/// Decomposition of a square matrix into a lower and upper triangular part.
///
/// The lower triangular part has an implicit unit diagonal and is stored below the diagonal of
/// `factors`, the upper triangular part on and above it.
#[derive(Clone, Debug, PartialEq)]
pub struct LUDecomposition {
    /// Combined storage of `L` (strictly below the diagonal) and `U`.
    factors: Vec<Vec<f64>>,
    /// Row `i` of `PB` is row `row_permutation[i]` of `B`.
    row_permutation: Vec<usize>,
}

impl LUDecomposition {
    /// Compute the factorization.
    ///
    /// # Errors
    ///
    /// `DegenerateBasis` if the matrix is not square or is (numerically) singular.
    pub fn decompose(matrix: &Dense) -> Result<Self> {
        let m = matrix.nr_rows();
        if matrix.nr_columns() != m {
            return Err(Error::DegenerateBasis(format!(
                "basis matrix is {} x {}, not square", m, matrix.nr_columns(),
            )));
        }

        let scale = matrix.rows()
            .flat_map(|row| row.iter())
            .fold(1f64, |largest, value| largest.max(value.abs()));
        let threshold = EPSILON * scale;

        let mut factors = matrix.clone().data();
        let mut row_permutation = (0..m).collect::<Vec<_>>();
        for k in 0..m {
            // Largest absolute value in this column, among the rows not yet processed
            let (pivot_row, pivot_value) = (k..m)
                .map(|i| (i, factors[i][k]))
                .fold((k, 0f64), |(best_i, best), (i, value)| {
                    if value.abs() > best.abs() { (i, value) } else { (best_i, best) }
                });
            if pivot_value.abs() <= threshold {
                return Err(Error::DegenerateBasis(format!("basis matrix is singular in column {}", k)));
            }

            factors.swap(k, pivot_row);
            row_permutation.swap(k, pivot_row);

            let (upper, lower) = factors.split_at_mut(k + 1);
            let current_row = &upper[k];
            for row in lower {
                let ratio = row[k] / pivot_value;
                row[k] = ratio;
                if ratio != 0f64 {
                    for j in (k + 1)..m {
                        row[j] -= ratio * current_row[j];
                    }
                }
            }
        }

        Ok(Self { factors, row_permutation })
    }

    /// Solve `Bx = rhs`.
    #[must_use]
    pub fn solve(&self, rhs: &[f64]) -> Vec<f64> {
        let m = self.len();
        debug_assert_eq!(rhs.len(), m);

        // Forward substitution with L, on the permuted right hand side
        let mut x = self.row_permutation.iter().map(|&i| rhs[i]).collect::<Vec<_>>();
        for i in 0..m {
            for k in 0..i {
                x[i] -= self.factors[i][k] * x[k];
            }
        }

        // Backward substitution with U
        for i in (0..m).rev() {
            for k in (i + 1)..m {
                x[i] -= self.factors[i][k] * x[k];
            }
            x[i] /= self.factors[i][i];
        }

        x
    }

    /// Solve `B^T y = rhs`.
    #[must_use]
    pub fn solve_transposed(&self, rhs: &[f64]) -> Vec<f64> {
        let m = self.len();
        debug_assert_eq!(rhs.len(), m);

        // Forward substitution with U^T
        let mut v = rhs.to_vec();
        for i in 0..m {
            for k in 0..i {
                v[i] -= self.factors[k][i] * v[k];
            }
            v[i] /= self.factors[i][i];
        }

        // Backward substitution with L^T, unit diagonal
        for i in (0..m).rev() {
            for k in (i + 1)..m {
                v[i] -= self.factors[k][i] * v[k];
            }
        }

        // Undo the row permutation: P y = v
        let mut y = vec![0f64; m];
        for (i, &original) in self.row_permutation.iter().enumerate() {
            y[original] = v[i];
        }

        y
    }

    /// Size of the decomposed matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the decomposed matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
