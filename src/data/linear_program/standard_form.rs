//! # Standard form
//!
//! A linear program `max c^T x` such that `Ax = b`, `x >= 0`. This is the form all algorithms
//! operate on. The rightmost columns form the slack basis: when the problem is constructed, the
//! last `m` columns are an identity matrix.
//!
//! Instances are never modified in place by the algorithms. Branching and the search for a
//! feasible basis create new instances, leaving the original untouched.
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{enum_map, EnumMap};
use itertools::repeat_n;

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::{BoundDirection, ColumnType};
use crate::error::{Error, Result};

/// Number of column groups, see `ColumnType`.
const NR_GROUPS: usize = 4;

/// A maximization problem with equality constraints and nonnegative variables.
///
/// The indexing of the columns is as follows:
///
/// /            || Structural | Slack | Branch slack | Artificial | ---
/// =============||============|=======|==============|============| | |
/// Constraints  ||     A      |   I   |      0       |     (I)    | |b|
/// -------------||------------|-------|--------------|------------| | |
/// Branch rows  ||  one +-1   |   0   |      I       |     (I)    | | |
/// ---------------------------------------------------------------- ---
///
/// Artificial columns only appear in the auxiliary problem of the first phase. The layout in the
/// table holds for problems created by `StandardForm::new` and the branching operations; the
/// slack columns of rows that were negated to find a feasible basis are `-I` instead.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    constraints: Dense,
    b: Vec<f64>,
    cost: Vec<f64>,
    column_group_end: EnumMap<ColumnType, usize>,
}

impl StandardForm {
    /// Create a new instance.
    ///
    /// The last `m` columns are taken to be the slack columns, all other columns are structural.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Matrix `A` of size `m x n` with `n >= m`.
    /// * `b`: Right hand side, one value for each row.
    /// * `cost`: Cost vector, one value for each column, to be maximized.
    ///
    /// # Errors
    ///
    /// A `Shape` error if the dimensions don't agree.
    pub fn new(constraints: Dense, b: Vec<f64>, cost: Vec<f64>) -> Result<Self> {
        let (m, n) = (constraints.nr_rows(), constraints.nr_columns());
        if m != b.len() {
            return Err(Error::Shape(format!("A has {} rows and b has {} rows", m, b.len())));
        }
        if n != cost.len() {
            return Err(Error::Shape(format!("A has {} columns and c has {} rows", n, cost.len())));
        }
        if m == 0 || n < m {
            return Err(Error::Shape(format!("A has {} rows and {} columns, needs 0 < m <= n", m, n)));
        }

        Ok(Self::with_group_sizes(constraints, b, cost, [n - m, m, 0, 0]))
    }

    fn with_group_sizes(
        constraints: Dense,
        b: Vec<f64>,
        cost: Vec<f64>,
        group_sizes: [usize; NR_GROUPS],
    ) -> Self {
        debug_assert_eq!(group_sizes.iter().sum::<usize>(), constraints.nr_columns());
        debug_assert_eq!(cost.len(), constraints.nr_columns());
        debug_assert_eq!(b.len(), constraints.nr_rows());

        let cumulative = cumsum_array_owned(group_sizes);
        let column_group_end = enum_map! {
            ColumnType::Structural => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Branch     => cumulative[2],
            ColumnType::Artificial => cumulative[3],
        };

        Self { constraints, b, cost, column_group_end }
    }

    fn group_sizes(&self) -> [usize; NR_GROUPS] {
        [
            self.group(ColumnType::Structural).len(),
            self.group(ColumnType::Slack).len(),
            self.group(ColumnType::Branch).len(),
            self.group(ColumnType::Artificial).len(),
        ]
    }

    /// Range of the column indices of a group.
    #[must_use]
    pub fn group(&self, column_type: ColumnType) -> Range<usize> {
        let start = match column_type {
            ColumnType::Structural => 0,
            ColumnType::Slack => self.column_group_end[ColumnType::Structural],
            ColumnType::Branch => self.column_group_end[ColumnType::Slack],
            ColumnType::Artificial => self.column_group_end[ColumnType::Branch],
        };

        start..self.column_group_end[column_type]
    }

    /// Classify a column by type using the column index.
    #[must_use]
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.nr_columns());

        [ColumnType::Structural, ColumnType::Slack, ColumnType::Branch, ColumnType::Artificial]
            .into_iter()
            .find(|&column_type| j < self.column_group_end[column_type])
            .unwrap_or(ColumnType::Artificial)
    }

    /// Indices of the trailing `m` columns, which form the slack basis of the problem.
    #[must_use]
    pub fn slack_basis(&self) -> Vec<usize> {
        (self.nr_columns() - self.nr_rows()..self.nr_columns()).collect()
    }

    /// Compute the value of the objective function.
    ///
    /// The cost vector is padded with zeros when `x` is longer, which is the case for solutions
    /// of problems derived from this one by branching.
    #[must_use]
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        let padding = x.len().saturating_sub(self.cost.len());

        self.cost.iter()
            .chain(repeat_n(&0f64, padding))
            .zip(x)
            .map(|(c, v)| c * v)
            .sum()
    }

    /// The same problem, with the cost vector negated.
    ///
    /// Maximizing the result minimizes the original objective function.
    #[must_use]
    pub fn with_negated_cost(&self) -> Self {
        let mut negated = self.clone();
        for value in &mut negated.cost {
            *value = -*value;
        }

        negated
    }

    /// Derive a problem with an additional bound on a single variable.
    ///
    /// One row and one (branch slack) column are added. An upper bound `x_j <= value` is
    /// represented as `x_j + s = value`, a lower bound `x_j >= value` as `-x_j + s = -value`.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the column to bound.
    /// * `direction`: Whether `value` is a lower or upper bound.
    /// * `value`: The bound value.
    #[must_use]
    pub fn with_bound(&self, variable: usize, direction: BoundDirection, value: f64) -> Self {
        debug_assert!(variable < self.nr_columns());
        debug_assert!(self.group(ColumnType::Artificial).is_empty());

        let sign = direction.into::<f64>();

        let mut constraints = self.constraints.clone();
        let mut row = vec![0f64; self.nr_columns()];
        row[variable] = sign;
        constraints.push_row(row);
        let mut slack = vec![0f64; self.nr_rows() + 1];
        slack[self.nr_rows()] = 1f64;
        constraints.push_column(&slack);

        let mut b = self.b.clone();
        b.push(sign * value);
        let mut cost = self.cost.clone();
        cost.push(0f64);

        let mut group_sizes = self.group_sizes();
        group_sizes[2] += 1;

        Self::with_group_sizes(constraints, b, cost, group_sizes)
    }

    /// A copy of this problem in which all rows with a negative right hand side are negated.
    ///
    /// The set of feasible solutions doesn't change.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        for i in 0..normalized.nr_rows() {
            if normalized.b[i] < 0f64 {
                normalized.b[i] = -normalized.b[i];
                normalized.constraints.multiply_row(i, -1f64);
            }
        }

        normalized
    }

    /// The auxiliary problem of the first phase of the two phase method.
    ///
    /// An identity matrix of artificial columns is appended. The original costs are replaced by
    /// zero, and the artificial variables get a cost of `-1`, such that maximizing the objective
    /// minimizes the sum of the artificial variables.
    #[must_use]
    pub fn with_artificial_basis(&self) -> Self {
        let m = self.nr_rows();
        let constraints = self.constraints.clone().hcat(&Dense::identity(m));
        let cost = repeat_n(0f64, self.nr_columns())
            .chain(repeat_n(-1f64, m))
            .collect();

        let mut group_sizes = self.group_sizes();
        group_sizes[3] += m;

        Self::with_group_sizes(constraints, self.b.clone(), cost, group_sizes)
    }

    /// Largest absolute violation of the equality constraints `Ax = b`.
    #[must_use]
    pub fn constraint_violation(&self, x: &[f64]) -> f64 {
        self.constraints.mul_vector(x).iter()
            .zip(&self.b)
            .map(|(ax, b)| (ax - b).abs())
            .fold(0f64, f64::max)
    }

    /// Column `j` of the constraint matrix.
    #[must_use]
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.constraints.column(j)
    }

    /// The square matrix of the given columns, in the order given.
    #[must_use]
    pub fn basis_matrix(&self, basis: &[usize]) -> Dense {
        self.constraints.select_columns(basis)
    }

    /// Constraint matrix `A`.
    #[must_use]
    pub fn constraints(&self) -> &Dense {
        &self.constraints
    }

    /// Right hand side `b`.
    #[must_use]
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Cost vector `c`.
    #[must_use]
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Number of constraints `m`.
    #[must_use]
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables `n`.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }
}
