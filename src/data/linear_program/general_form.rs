//! # Problems as given by the user
//!
//! A problem in general form is a system of inequalities `Ax <= b` in nonnegative variables,
//! together with a cost vector and the kind of the problem. Constraints of the form `<a, x> >= b`
//! are given as `<-a, x> <= -b`.
use std::borrow::Cow;
use std::fmt;

use itertools::repeat_n;
use tracing::debug;

use crate::algorithm::branch_and_bound::branch_and_bound;
use crate::algorithm::{SolveRelaxation, SolverConfig};
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::{Direction, ProblemKind, VariableType};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{Error, Result};

/// A linear or integer program `max (or min) c^T x` such that `Ax <= b`, `x >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    kind: ProblemKind,
    /// The problem with a slack column for each row
    standard_form: StandardForm,
    nr_variables: usize,
}

impl Problem {
    /// Create a new problem.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Rows of the matrix `A`.
    /// * `b`: Right hand side, one value for each row.
    /// * `c`: Cost vector, one value for each column.
    /// * `kind`: Direction of optimization and type of the variables.
    ///
    /// # Errors
    ///
    /// A `Shape` error if the dimensions of `A`, `b` and `c` don't agree or the problem is empty.
    pub fn new(constraints: Vec<Vec<f64>>, b: Vec<f64>, c: Vec<f64>, kind: ProblemKind) -> Result<Self> {
        let nr_constraints = constraints.len();
        let nr_variables = c.len();

        if nr_constraints != b.len() {
            return Err(Error::Shape(format!("A has {} and b has {} rows", nr_constraints, b.len())));
        }
        if let Some(row) = constraints.iter().find(|row| row.len() != nr_variables) {
            return Err(Error::Shape(format!("A has {} columns and c has {} rows", row.len(), nr_variables)));
        }
        if nr_constraints == 0 || nr_variables == 0 {
            return Err(Error::Shape(format!(
                "A has {} rows and {} columns, needs at least one of each", nr_constraints, nr_variables,
            )));
        }

        let with_slacks = Dense::from_data(constraints).hcat(&Dense::identity(nr_constraints));
        let cost = c.into_iter().chain(repeat_n(0f64, nr_constraints)).collect();
        let standard_form = StandardForm::new(with_slacks, b, cost)?;

        Ok(Self { kind, standard_form, nr_variables })
    }

    /// Solve the problem.
    ///
    /// Minimization problems are solved by maximizing the negated objective function. The
    /// relaxation is solved first, and for integer problems, a branch and bound search is started
    /// from it.
    ///
    /// # Return value
    ///
    /// A solution with a value for each variable followed by one for each slack, and a dual value
    /// for each row. The objective value and the dual values are those of the problem as given.
    ///
    /// # Errors
    ///
    /// `Infeasible` or `Unbounded` if there is no optimal solution, see `Error` for the others.
    pub fn solve(&self, config: &SolverConfig) -> Result<Solution> {
        debug!(
            kind = %self.kind,
            rows = self.nr_constraints(),
            variables = self.nr_variables,
            "solving"
        );

        let maximization = match self.kind.direction() {
            Direction::Maximize => Cow::Borrowed(&self.standard_form),
            Direction::Minimize => Cow::Owned(self.standard_form.with_negated_cost()),
        };

        let relaxation = maximization.solve_relaxation()?;
        debug!(objective = relaxation.objective, iterations = relaxation.iterations, "relaxation solved");
        let solution = match self.kind.variable_type() {
            VariableType::Continuous => relaxation,
            VariableType::Integer => branch_and_bound(&maximization, relaxation, config)?,
        };

        let mut solution = solution.truncated(self.nr_constraints(), self.standard_form.nr_columns());
        if self.kind.direction() == Direction::Minimize {
            solution.objective = -solution.objective;
            for value in &mut solution.y {
                *value = -*value;
            }
        }

        Ok(solution)
    }

    /// The kind of this problem.
    #[must_use]
    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    /// The problem with slack columns, in maximization orientation only if the kind is.
    #[must_use]
    pub fn standard_form(&self) -> &StandardForm {
        &self.standard_form
    }

    /// Number of variables, excluding slacks.
    #[must_use]
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints.
    #[must_use]
    pub fn nr_constraints(&self) -> usize {
        self.standard_form.nr_rows()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        writeln!(f, "c: {:?}", self.standard_form.cost())?;
        writeln!(f, "A: ")?;
        write!(f, "{}", self.standard_form.constraints())?;
        writeln!(f, "b: {:?}", self.standard_form.b())
    }
}
