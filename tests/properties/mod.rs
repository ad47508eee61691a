//! Properties of solutions of randomly generated problems.
//!
//! All generated problems have a nonnegative constraint matrix with a positive entry in every
//! column and a positive right hand side, such that they are feasible and bounded.
use proptest::prelude::*;

use lpsolver::algorithm::{SearchStrategy, SolverConfig};
use lpsolver::algorithm::two_phase::phase_two::primal_simplex;
use lpsolver::data::linear_program::elements::ProblemKind;
use lpsolver::data::linear_program::general_form::Problem;
use lpsolver::data::linear_program::solution::Solution;
use lpsolver::Error;

const TOLERANCE: f64 = 1e-6;

/// Constraint matrix, right hand side and cost vector.
type Instance = (Vec<Vec<f64>>, Vec<f64>, Vec<f64>);

fn instance() -> impl Strategy<Value = Instance> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(m, n)| {
        (
            prop::collection::vec(prop::collection::vec(0u8..=9, n), m),
            prop::collection::vec(1u8..=50, m),
            prop::collection::vec(-5i8..=9, n),
        )
    }).prop_map(|(mut constraints, b, c)| {
        // Every variable is bounded by the first row
        for value in &mut constraints[0] {
            *value = (*value).max(1);
        }
        (
            constraints.into_iter().map(|row| row.into_iter().map(f64::from).collect()).collect(),
            b.into_iter().map(f64::from).collect(),
            c.into_iter().map(f64::from).collect(),
        )
    })
}

fn assert_feasible(constraints: &[Vec<f64>], b: &[f64], solution: &Solution) {
    let n = constraints[0].len();
    for (i, (row, rhs)) in constraints.iter().zip(b).enumerate() {
        let lhs = row.iter().zip(&solution.x).map(|(a, x)| a * x).sum::<f64>();
        // Equality with the slack
        assert!((lhs + solution.x[n + i] - rhs).abs() < TOLERANCE * rhs.abs().max(1f64));
    }
    assert!(solution.x.iter().all(|&value| value >= -TOLERANCE));
}

proptest! {
    #[test]
    fn optimal_solution((constraints, b, c) in instance()) {
        let problem = Problem::new(constraints.clone(), b.clone(), c.clone(), ProblemKind::MaxLP).unwrap();
        let solution = problem.solve(&SolverConfig::default()).unwrap();

        assert_feasible(&constraints, &b, &solution);
        let objective = c.iter().zip(&solution.x).map(|(c, x)| c * x).sum::<f64>();
        prop_assert!((objective - solution.objective).abs() < TOLERANCE * objective.abs().max(1f64));

        // No column has a positive relative cost
        let standard_form = problem.standard_form();
        for j in 0..standard_form.nr_columns() {
            let relative_cost = standard_form.cost()[j]
                - standard_form.constraints().column_inner_product(j, &solution.y);
            prop_assert!(relative_cost <= TOLERANCE);
        }
    }

    #[test]
    fn restart_from_optimum((constraints, b, c) in instance()) {
        let problem = Problem::new(constraints, b, c, ProblemKind::MaxLP).unwrap();
        let solution = problem.solve(&SolverConfig::default()).unwrap();

        let restarted = primal_simplex(problem.standard_form(), Some(solution.basis.clone())).unwrap();
        prop_assert_eq!(restarted.iterations, 0);
        prop_assert!((restarted.objective - solution.objective).abs() < TOLERANCE * solution.objective.abs().max(1f64));
    }

    #[test]
    fn sign_flip((constraints, b, c) in instance()) {
        let negated = c.iter().map(|value| -value).collect();
        let minimum = Problem::new(constraints.clone(), b.clone(), c, ProblemKind::MinLP).unwrap()
            .solve(&SolverConfig::default()).unwrap();
        let maximum = Problem::new(constraints, b, negated, ProblemKind::MaxLP).unwrap()
            .solve(&SolverConfig::default()).unwrap();

        prop_assert!((minimum.objective + maximum.objective).abs() < TOLERANCE * maximum.objective.abs().max(1f64));
    }

    #[test]
    fn lower_bounds((constraints, b, c) in instance(), fraction in 0.0f64..1.0) {
        // An additional row `<a, x> >= fraction * b` on the first row, which the origin violates
        let mut with_lower_bound = constraints.clone();
        with_lower_bound.push(constraints[0].iter().map(|value| -value).collect());
        let mut extended_b = b.clone();
        extended_b.push(-fraction * b[0]);

        let problem = Problem::new(with_lower_bound.clone(), extended_b.clone(), c, ProblemKind::MaxLP).unwrap();
        match problem.solve(&SolverConfig::default()) {
            Ok(solution) => assert_feasible(&with_lower_bound, &extended_b, &solution),
            // The other rows might not allow the first row to be that large
            Err(error) => prop_assert_eq!(error, Error::Infeasible),
        }
    }

    #[test]
    fn integer_solutions((constraints, b, c) in instance()) {
        let greedy = Problem::new(constraints.clone(), b.clone(), c.clone(), ProblemKind::MaxIP).unwrap()
            .solve(&SolverConfig::default());
        let config = SolverConfig { strategy: SearchStrategy::DepthFirst, ..SolverConfig::default() };
        let complete = Problem::new(constraints.clone(), b.clone(), c, ProblemKind::MaxIP).unwrap()
            .solve(&config)
            .unwrap();

        assert_feasible(&constraints, &b, &complete);
        prop_assert!(complete.x.iter().all(|value| (value - value.round()).abs() <= 1e-4));

        match greedy {
            Ok(greedy) => {
                assert_feasible(&constraints, &b, &greedy);
                prop_assert!(greedy.objective <= complete.objective + TOLERANCE * complete.objective.abs().max(1f64));
            },
            Err(error) => prop_assert_eq!(error, Error::Infeasible),
        }
    }
}
