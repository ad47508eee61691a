//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
use tracing::debug;

use crate::algorithm::SolveRelaxation;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::Result;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;
pub mod validate;

/// Skipping the entire first phase if the slack basis is feasible already.
impl SolveRelaxation for StandardForm {
    fn solve_relaxation(&self) -> Result<Solution> {
        if validate::is_slack_basis_feasible(self)? {
            phase_two::primal_simplex(self, None)
        } else {
            debug!(rows = self.nr_rows(), "slack basis is infeasible");
            phase_one::bootstrap(self)
        }
    }
}
