//! # Phase two: improving a basic feasible solution
use tracing::debug;

use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{Error, Result};

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c <= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Errors
///
/// * `Unbounded` if an improving column without a positive value is found.
/// * `DegenerateBasis` if a basis change leads to a numerically singular basis matrix.
pub fn primal<PR: PivotRule>(tableau: &mut Tableau) -> Result<()> {
    let mut rule = PR::new();
    loop {
        debug_assert!(tableau.is_in_basic_feasible_solution_state());

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, _cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column) {
                    Some(row_index) => tableau.bring_into_basis(column_index, row_index, &column)?,
                    None => {
                        debug!(column = column_index, "no leaving column, problem is unbounded");
                        break Err(Error::Unbounded);
                    },
                }
            },
            None => break Ok(()),
        }
    }
}

/// Solve a problem with the primal simplex method, given a feasible starting basis.
///
/// # Arguments
///
/// * `problem`: Problem to solve, it is not modified.
/// * `basis`: Starting basis. If `None`, the slack basis (the trailing `m` columns) is used.
///
/// # Errors
///
/// * `InvalidBase` if the basis doesn't match the dimensions of the problem.
/// * `DegenerateBasis` if the starting basis matrix is singular.
/// * `Infeasible` if the basis isn't primal feasible.
/// * `Unbounded` if the objective can be increased without limit.
pub fn primal_simplex(problem: &StandardForm, basis: Option<Basis>) -> Result<Solution> {
    let basis = basis.unwrap_or_else(|| Basis::slack(problem.nr_rows(), problem.nr_columns()));
    let mut tableau = Tableau::new(problem, basis)?;
    primal::<FirstProfitable>(&mut tableau)?;

    debug!(
        objective = tableau.objective_function_value(),
        iterations = tableau.iterations(),
        "primal simplex finished"
    );
    Ok(tableau.into_solution())
}
