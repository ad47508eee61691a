//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is never stored explicitly: columns and relative costs are computed when needed from
//! a decomposition of the current basis matrix.
use tracing::trace;

use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::data::linear_algebra::decomposition::LUDecomposition;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{Error, Result};

pub mod basis;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) problem it solves, but owns the data structures
/// that describe the current solution basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<'provider> {
    provider: &'provider StandardForm,
    basis: Basis,
    /// Value of every variable; zero for all nonbasic columns.
    x: Vec<f64>,
    /// Factorization of the matrix of basic columns, in the order of `basis.basic()`.
    decomposition: LUDecomposition,
    /// Dual values, recomputed after every basis change.
    y: Vec<f64>,
    iterations: usize,
}

impl<'provider> Tableau<'provider> {
    /// Create a tableau from a starting basis.
    ///
    /// # Errors
    ///
    /// * `InvalidBase` if the basis doesn't match the dimensions of the problem.
    /// * `DegenerateBasis` if the basis matrix is singular.
    /// * `Infeasible` if the basic solution has a negative value. Finding a feasible basis is the
    ///   responsibility of the caller.
    pub fn new(provider: &'provider StandardForm, basis: Basis) -> Result<Self> {
        if basis.nr_columns() != provider.nr_columns() || basis.basic().len() != provider.nr_rows() {
            return Err(Error::InvalidBase(format!(
                "basis with {} basic out of {} columns for a problem of {} rows and {} columns",
                basis.basic().len(), basis.nr_columns(), provider.nr_rows(), provider.nr_columns(),
            )));
        }

        let decomposition = LUDecomposition::decompose(&provider.basis_matrix(basis.basic()))?;
        let values = decomposition.solve(provider.b());
        if values.iter().any(|&value| value < -EPSILON) {
            return Err(Error::Infeasible);
        }

        let mut x = vec![0f64; provider.nr_columns()];
        for (&j, &value) in basis.basic().iter().zip(&values) {
            x[j] = value.max(0f64);
        }

        let y = Self::compute_duals(provider, &basis, &decomposition);

        Ok(Self { provider, basis, x, decomposition, y, iterations: 0 })
    }

    fn compute_duals(provider: &StandardForm, basis: &Basis, decomposition: &LUDecomposition) -> Vec<f64> {
        let basic_cost = basis.basic().iter().map(|&j| provider.cost()[j]).collect::<Vec<_>>();
        decomposition.solve_transposed(&basic_cost)
    }

    /// Brings a column into the basis.
    ///
    /// The entering variable takes the value of the ratio of the leaving variable, the other basic
    /// variables are updated along the column. The decomposition and the dual values are then
    /// recomputed for the new basis.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Nonbasic column to enter the basis.
    /// * `pivot_row_index`: Position in the basis of the column that leaves.
    /// * `column`: Column `pivot_column_index` with respect to the current basis, see
    ///   `generate_column`.
    ///
    /// # Errors
    ///
    /// `DegenerateBasis` if the new basis matrix is numerically singular.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
        column: &[f64],
    ) -> Result<()> {
        debug_assert!(!self.basis.is_basic(pivot_column_index));
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert_ne!(column[pivot_row_index], 0f64);

        let leaving_column = self.basis.basic()[pivot_row_index];
        let ratio = (self.x[leaving_column] / column[pivot_row_index]).max(0f64);

        for (&j, &w) in self.basis.basic().iter().zip(column) {
            let value = self.x[j] - ratio * w;
            self.x[j] = if value.abs() < EPSILON { 0f64 } else { value };
        }
        self.x[leaving_column] = 0f64;
        self.x[pivot_column_index] = ratio;

        self.basis.swap(pivot_column_index, leaving_column);
        self.decomposition = LUDecomposition::decompose(&self.provider.basis_matrix(self.basis.basic()))?;
        self.y = Self::compute_duals(self.provider, &self.basis, &self.decomposition);
        self.iterations += 1;

        trace!(
            entering = pivot_column_index,
            leaving = leaving_column,
            ratio,
            objective = self.objective_function_value(),
            "basis change"
        );

        Ok(())
    }

    /// Calculates the relative cost `c_j - A_j^T y` of a column.
    ///
    /// # Note
    ///
    /// That column will typically not be a basis column. Although the method could be valid for
    /// those inputs as well, this should never be calculated, as the relative cost always equals
    /// zero in that situation.
    #[must_use]
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.provider.cost()[j] - self.provider.constraints().column_inner_product(j, &self.y)
    }

    /// Column of original problem with respect to the current basis: the solution `w` of
    /// `A_B w = A_j`.
    #[must_use]
    pub fn generate_column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns());

        self.decomposition.solve(&self.provider.column(j))
    }

    /// Determine the row to pivot on, given a column.
    ///
    /// This is the ratio test. Only rows with a positive value in the column are considered; of
    /// the rows with the minimum ratio, the one whose basic column has the lowest index is chosen
    /// (Bland's anti cycling rule). Because the basic columns are sorted, that is the first one.
    ///
    /// # Return value
    ///
    /// Position in the basis of the leaving column, or `None` if the column has no positive value,
    /// meaning that the problem is unbounded in its direction.
    #[must_use]
    pub fn select_primal_pivot_row(&self, column: &[f64]) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, f64)> = None;
        for (row, (&j, &w)) in self.basis.basic().iter().zip(column).enumerate() {
            if w > EPSILON {
                let ratio = self.x[j] / w;
                match &mut min_values {
                    Some((min_index, min_ratio)) => {
                        // Equal ratios keep the earlier row, which has the lower column index
                        if ratio < *min_ratio - EPSILON * min_ratio.abs().max(1f64) {
                            *min_index = row;
                            *min_ratio = ratio;
                        }
                    },
                    None => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Whether the current values satisfy all constraints, used in debug assertions.
    #[must_use]
    pub fn is_in_basic_feasible_solution_state(&self) -> bool {
        let scale = self.provider.b().iter().fold(1f64, |largest, value| largest.max(value.abs()));

        self.x.iter().all(|&value| value >= -EPSILON * scale)
            && self.provider.constraint_violation(&self.x) < 1e-6 * scale
            && self.basis.nonbasic().iter().all(|&j| self.x[j] == 0f64)
    }

    /// Current value of the objective function, `c^T x`.
    #[must_use]
    pub fn objective_function_value(&self) -> f64 {
        self.provider.objective_value(&self.x)
    }

    /// Whether a column is in the basis.
    #[must_use]
    pub fn is_in_basis(&self, j: usize) -> bool {
        self.basis.is_basic(j)
    }

    /// The current partition of the columns.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Current primal values.
    #[must_use]
    pub fn current_bfs(&self) -> &[f64] {
        &self.x
    }

    /// Current dual values.
    #[must_use]
    pub fn duals(&self) -> &[f64] {
        &self.y
    }

    /// Number of basis changes since the tableau was created.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of rows `m`.
    #[must_use]
    pub fn nr_rows(&self) -> usize {
        self.provider.nr_rows()
    }

    /// Number of columns `n`.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.provider.nr_columns()
    }

    /// Read the solution described by the current basis.
    #[must_use]
    pub fn into_solution(self) -> Solution {
        Solution {
            objective: self.objective_function_value(),
            x: self.x,
            y: self.y,
            basis: self.basis,
            iterations: self.iterations,
        }
    }
}
