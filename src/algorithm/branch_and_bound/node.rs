//! # Nodes of the search tree
//!
//! Every node owns the problem it was solved for: the problem of its parent with one additional
//! bound.
use tracing::debug;

use crate::algorithm::branch_and_bound::select_branch_variable;
use crate::algorithm::SolveRelaxation;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::Result;

/// A subproblem together with the optimal solution of its relaxation.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    problem: StandardForm,
    solution: Solution,
    depth: usize,
}

impl Node {
    /// The root of the tree, the problem as given by the user.
    #[must_use]
    pub fn root(problem: StandardForm, solution: Solution) -> Self {
        debug_assert_eq!(problem.nr_columns(), solution.x.len());

        Self { problem, solution, depth: 0 }
    }

    /// Solve both children for a fractional variable.
    ///
    /// The floor child bounds the variable from above by the value rounded down, the ceil child
    /// bounds it from below by the value rounded up. A child is `None` when its relaxation is
    /// infeasible or unbounded.
    ///
    /// # Errors
    ///
    /// Any error other than `Infeasible` or `Unbounded` from solving a child.
    pub fn children(&self, variable: usize) -> Result<(Option<Node>, Option<Node>)> {
        let value = self.solution.x[variable];
        debug!(variable, value, depth = self.depth, "branching");

        let floor = self.child(variable, BoundDirection::Upper, value.floor())?;
        let ceil = self.child(variable, BoundDirection::Lower, value.ceil())?;

        Ok((floor, ceil))
    }

    fn child(&self, variable: usize, direction: BoundDirection, bound: f64) -> Result<Option<Node>> {
        let problem = self.problem.with_bound(variable, direction, bound);
        match problem.solve_relaxation() {
            Ok(solution) => Ok(Some(Self { problem, solution, depth: self.depth + 1 })),
            Err(error) if error.is_prunable() => {
                debug!(variable, ?direction, bound, %error, "pruned");
                Ok(None)
            },
            Err(error) => Err(error),
        }
    }

    /// Variable to branch on, if the solution isn't integer already.
    #[must_use]
    pub fn branch_variable(&self) -> Option<usize> {
        select_branch_variable(&self.solution.x)
    }

    /// Objective value of the relaxation.
    #[must_use]
    pub fn objective(&self) -> f64 {
        self.solution.objective
    }

    /// Number of bounds added since the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The problem of this node.
    #[must_use]
    pub fn problem(&self) -> &StandardForm {
        &self.problem
    }

    /// Take the solution of the relaxation.
    #[must_use]
    pub fn into_solution(self) -> Solution {
        self.solution
    }
}
