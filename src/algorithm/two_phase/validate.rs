//! # Basis validation
//!
//! Deciding whether a set of basic columns describes a feasible starting point, which determines
//! whether the first phase of the two phase method can be skipped.
use crate::data::linear_algebra::decomposition::LUDecomposition;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::Result;

/// Values of the basic variables, the solution `x_B` of `A_B x_B = b`.
///
/// # Errors
///
/// `DegenerateBasis` if the basis matrix is singular.
pub fn basic_solution(basis_matrix: &Dense, b: &[f64]) -> Result<Vec<f64>> {
    debug_assert_eq!(basis_matrix.nr_rows(), b.len());

    Ok(LUDecomposition::decompose(basis_matrix)?.solve(b))
}

/// Whether the basic solution of a basis matrix is nonnegative.
///
/// Values that are negative by no more than `EPSILON` count as zero.
///
/// # Errors
///
/// `DegenerateBasis` if the basis matrix is singular.
pub fn is_feasible(basis_matrix: &Dense, b: &[f64]) -> Result<bool> {
    Ok(basic_solution(basis_matrix, b)?.iter().all(|&value| value >= -EPSILON))
}

/// Whether the trailing `m` columns of a problem form a feasible basis.
///
/// # Errors
///
/// `DegenerateBasis` if those columns are linearly dependent.
pub fn is_slack_basis_feasible(problem: &StandardForm) -> Result<bool> {
    is_feasible(&problem.basis_matrix(&problem.slack_basis()), problem.b())
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::validate::{basic_solution, is_feasible, is_slack_basis_feasible};
    use crate::data::linear_algebra::matrix::Dense;
    use crate::data::linear_program::elements::BoundDirection;
    use crate::error::Error;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn identity() {
        assert!(is_feasible(&Dense::identity(2), &[1f64, 0f64]).unwrap());
        assert!(!is_feasible(&Dense::identity(2), &[1f64, -1f64]).unwrap());
        assert!(is_feasible(&Dense::identity(2), &[1f64, -1e-12]).unwrap());
    }

    #[test]
    fn non_symmetric() {
        let matrix = Dense::from_data(vec![vec![1f64, 1f64], vec![0f64, 1f64]]);
        let values = basic_solution(&matrix, &[2f64, 1f64]).unwrap();
        assert!((values[0] - 1f64).abs() < 1e-12);
        assert!((values[1] - 1f64).abs() < 1e-12);
        assert!(is_feasible(&matrix, &[2f64, 1f64]).unwrap());
        // x_B = (-1, 2)
        assert!(!is_feasible(&matrix, &[1f64, 2f64]).unwrap());
    }

    #[test]
    fn singular() {
        let matrix = Dense::from_data(vec![vec![1f64, 1f64], vec![1f64, 1f64]]);
        assert!(matches!(is_feasible(&matrix, &[1f64, 1f64]), Err(Error::DegenerateBasis(_))));
    }

    #[test]
    fn slack_basis() {
        assert!(is_slack_basis_feasible(&problem_1::standard_form()).unwrap());
        assert!(!is_slack_basis_feasible(&problem_2::standard_form()).unwrap());

        // Lower bound rows have a negative right hand side
        let bounded = problem_1::standard_form().with_bound(0, BoundDirection::Lower, 40f64);
        assert!(!is_slack_basis_feasible(&bounded).unwrap());
        let bounded = problem_1::standard_form().with_bound(0, BoundDirection::Upper, 39f64);
        assert!(is_slack_basis_feasible(&bounded).unwrap());
    }
}
