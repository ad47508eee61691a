//! # Phase one: finding a basic feasible solution
//!
//! When the slack basis of a problem is not feasible, an auxiliary problem is solved that has a
//! trivially feasible basis of artificial variables. Its optimum is zero exactly when the original
//! problem is feasible, and the basis it ends in (after removing any artificial variables left at
//! zero level) is a feasible starting basis for the original problem.
use std::ops::Range;

use tracing::debug;

use crate::algorithm::two_phase::phase_two::{primal, primal_simplex};
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::elements::ColumnType;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{Error, Result};

/// Solve a problem that doesn't have a feasible slack basis.
///
/// The problem is not modified: rows with a negative right hand side are negated on a copy, after
/// which artificial columns are appended to that copy. The basis found this way is then used as a
/// starting point for the primal simplex method on the problem as given.
///
/// # Errors
///
/// * `Infeasible` if the auxiliary problem has a nonzero optimum.
/// * `Unbounded` if the original problem is unbounded.
/// * `DegenerateBasis` if an artificial variable can't be removed from the basis, which means that
///   the rows of the problem are linearly dependent.
pub fn bootstrap(problem: &StandardForm) -> Result<Solution> {
    let normalized = problem.normalized();
    let auxiliary = normalized.with_artificial_basis();
    debug!(
        rows = auxiliary.nr_rows(),
        artificial = auxiliary.group(ColumnType::Artificial).len(),
        "searching for a feasible basis"
    );

    let basis = Basis::slack(auxiliary.nr_rows(), auxiliary.nr_columns());
    let mut tableau = Tableau::new(&auxiliary, basis).map_err(flip)?;
    primal::<FirstProfitable>(&mut tableau).map_err(flip)?;

    let artificial_cost = tableau.objective_function_value();
    let tolerance = EPSILON * normalized.b().iter().map(|value| value.abs()).sum::<f64>().max(1f64);
    if artificial_cost.abs() > tolerance {
        debug!(artificial_cost, "auxiliary problem has a nonzero optimum");
        return Err(Error::Infeasible);
    }

    remove_artificial_basis_variables(&mut tableau, auxiliary.group(ColumnType::Artificial))?;
    debug!(iterations = tableau.iterations(), "found a feasible basis");

    let (_, basic) = tableau.basis().clone().into_parts();
    let basis = Basis::from_basic(basic, problem.nr_columns())?;
    primal_simplex(problem, Some(basis))
}

/// The outcomes of the auxiliary problem mean the opposite for the original problem.
///
/// The auxiliary objective is bounded by zero, so an unbounded auxiliary problem can only be the
/// result of an inconsistent problem. The artificial basis is feasible by construction, so the
/// reverse holds for infeasibility.
fn flip(error: Error) -> Error {
    match error {
        Error::Unbounded => Error::Infeasible,
        Error::Infeasible => Error::Unbounded,
        other => other,
    }
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau of the auxiliary problem at its optimum, with an objective value of zero.
/// * `artificial`: Range of the artificial columns; all other columns come before it.
///
/// # Errors
///
/// `DegenerateBasis` if no original column can replace one of the artificial variables, that is,
/// the row of that artificial variable is redundant.
fn remove_artificial_basis_variables(tableau: &mut Tableau, artificial: Range<usize>) -> Result<()> {
    let artificial_basis_columns = tableau.basis().basic().iter()
        .copied()
        .filter(|j| artificial.contains(j))
        .collect::<Vec<_>>();

    for artificial_column in artificial_basis_columns {
        let Some(pivot_row) = tableau.basis().position(artificial_column) else { continue };

        let entering = (0..artificial.start)
            .filter(|&j| !tableau.is_in_basis(j))
            .map(|j| (j, tableau.generate_column(j)))
            .find(|(_, column)| column[pivot_row].abs() > EPSILON);

        match entering {
            Some((pivot_column, column)) => tableau.bring_into_basis(pivot_column, pivot_row, &column)?,
            None => return Err(Error::DegenerateBasis(format!(
                "artificial column {} can't leave the basis, the rows are linearly dependent",
                artificial_column,
            ))),
        }
    }

    Ok(())
}
