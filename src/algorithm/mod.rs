//! # Algorithms
use serde::Deserialize;

use crate::data::linear_program::solution::Solution;
use crate::error::Result;

pub mod branch_and_bound;
pub mod two_phase;

/// A problem formulation of which a relaxation can be solved.
pub trait SolveRelaxation {
    /// Solve the relaxed version of this problem.
    ///
    /// In the case of linear programming, that means that integer constraints are ignored.
    ///
    /// # Return value
    ///
    /// An optimal solution, or an error describing why there is none.
    fn solve_relaxation(&self) -> Result<Solution>;
}

/// How the branch and bound tree is explored.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Follow a single path, always taking the child with the better relaxation.
    ///
    /// Fast, but the integer solution found is not necessarily optimal.
    #[default]
    Greedy,
    /// Explore the tree depth first, keeping the best integer solution found so far and pruning
    /// nodes that can't improve upon it.
    DepthFirst,
}

/// Settings of the solver.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search strategy for integer problems.
    pub strategy: SearchStrategy,
    /// Maximum number of branching steps along a single path.
    pub max_depth: usize,
    /// Maximum number of subproblems solved by the depth first search.
    pub max_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            max_depth: 1_000,
            max_nodes: 10_000,
        }
    }
}
