//! Small problems with known solutions, solved through the public interface.
use lpsolver::algorithm::{SearchStrategy, SolveRelaxation, SolverConfig};
use lpsolver::algorithm::two_phase::phase_two::primal_simplex;
use lpsolver::data::linear_program::elements::ProblemKind;
use lpsolver::data::linear_program::general_form::Problem;
use lpsolver::Error;

use crate::assert_close;

fn solve(
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,
    c: Vec<f64>,
    kind: ProblemKind,
) -> Result<lpsolver::data::linear_program::solution::Solution, Error> {
    Problem::new(constraints, b, c, kind)?.solve(&SolverConfig::default())
}

fn depth_first() -> SolverConfig {
    SolverConfig { strategy: SearchStrategy::DepthFirst, ..SolverConfig::default() }
}

#[test]
fn scenario_1() {
    let solution = solve(
        vec![vec![2f64, 3f64], vec![4f64, 1f64], vec![1f64, 1f64]],
        vec![120f64, 160f64, 43f64],
        vec![5f64, 4f64],
        ProblemKind::MaxLP,
    ).unwrap();
    assert_close(solution.objective, 211f64);
}

#[test]
fn scenario_2() {
    let solution = solve(
        vec![vec![2f64, -2f64], vec![0f64, 1f64]],
        vec![3f64, 3f64],
        vec![4f64, -1f64],
        ProblemKind::MaxLP,
    ).unwrap();
    assert_close(solution.objective, 15f64);
    assert_close(solution.x[0], 4.5);
}

#[test]
fn scenario_3() {
    let constraints = vec![vec![2f64, 3f64], vec![-4f64, 1f64], vec![1f64, 1f64]];
    let b = vec![120f64, -160f64, 43f64];
    let solution = solve(constraints.clone(), b.clone(), vec![5f64, 4f64], ProblemKind::MaxLP).unwrap();

    assert_close(solution.objective, 215f64);
    assert_close(solution.x[0], 43f64);
    assert_close(solution.x[1], 0f64);
    for (row, rhs) in constraints.iter().zip(&b) {
        let lhs = row[0] * solution.x[0] + row[1] * solution.x[1];
        assert!(lhs <= rhs + 1e-9);
    }
}

#[test]
fn scenario_4() {
    let problem = Problem::new(
        vec![vec![2f64, 3f64], vec![-4f64, 1f64], vec![1f64, 1f64]],
        vec![120f64, -160f64, 43f64],
        vec![5f64, 4f64],
        ProblemKind::MaxLP,
    ).unwrap();
    assert_eq!(primal_simplex(problem.standard_form(), None), Err(Error::Infeasible));
}

#[test]
fn scenario_5() {
    let result = Problem::new(
        vec![vec![2f64, 3f64], vec![4f64, 1f64]],
        vec![120f64, 160f64, 43f64],
        vec![5f64, 4f64],
        ProblemKind::MaxLP,
    );
    assert!(matches!(result, Err(Error::Shape(_))));
}

#[test]
fn minimize() {
    let solution = solve(
        vec![vec![1f64, 0f64], vec![0f64, 1f64], vec![-1f64, -1f64]],
        vec![20f64, 20f64, -10f64],
        vec![1f64, 1f64],
        ProblemKind::MinLP,
    ).unwrap();
    assert_close(solution.objective, 10f64);
    assert_close(solution.x[0] + solution.x[1], 10f64);

    let solution = solve(
        vec![vec![1f64, 0f64], vec![0f64, 1f64], vec![-1f64, 0f64], vec![0f64, -1f64]],
        vec![10f64, 10f64, -5f64, -5f64],
        vec![1f64, 1f64],
        ProblemKind::MinLP,
    ).unwrap();
    assert_close(solution.objective, 10f64);
    assert_close(solution.x[0], 5f64);
    assert_close(solution.x[1], 5f64);

    let solution = solve(
        vec![vec![2f64, 3f64], vec![4f64, 1f64], vec![1f64, 1f64]],
        vec![120f64, 160f64, 43f64],
        vec![5f64, 4f64],
        ProblemKind::MinLP,
    ).unwrap();
    assert_close(solution.objective, 0f64);
}

#[test]
fn sign_flip() {
    let constraints = vec![vec![2f64, 3f64], vec![-4f64, 1f64], vec![1f64, 1f64]];
    let b = vec![120f64, -160f64, 43f64];

    let minimum = solve(constraints.clone(), b.clone(), vec![5f64, 4f64], ProblemKind::MinLP).unwrap();
    let maximum = solve(constraints, b, vec![-5f64, -4f64], ProblemKind::MaxLP).unwrap();
    assert_close(minimum.objective, -maximum.objective);
}

#[test]
fn input_is_not_modified() {
    let problem = Problem::new(
        vec![vec![2f64, 3f64], vec![-4f64, 1f64], vec![1f64, 1f64]],
        vec![120f64, -160f64, 43f64],
        vec![5f64, 4f64],
        ProblemKind::MaxIP,
    ).unwrap();
    let copy = problem.clone();

    problem.standard_form().solve_relaxation().unwrap();
    problem.solve(&SolverConfig::default()).unwrap();
    assert_eq!(problem, copy);
}

#[test]
fn infeasible() {
    // x0 >= 5 and x0 <= 3
    let result = solve(
        vec![vec![-1f64], vec![1f64]],
        vec![-5f64, 3f64],
        vec![1f64],
        ProblemKind::MaxLP,
    );
    assert_eq!(result, Err(Error::Infeasible));
}

#[test]
fn unbounded() {
    let result = solve(vec![vec![1f64, -1f64]], vec![1f64], vec![1f64, 1f64], ProblemKind::MaxLP);
    assert_eq!(result, Err(Error::Unbounded));
    let result = solve(vec![vec![-1f64]], vec![-1f64], vec![1f64], ProblemKind::MaxIP);
    assert_eq!(result, Err(Error::Unbounded));
}

#[test]
fn integer() {
    let problem = Problem::new(
        vec![vec![2f64, -2f64], vec![0f64, 1f64]],
        vec![3f64, 3f64],
        vec![4f64, -1f64],
        ProblemKind::MaxIP,
    ).unwrap();

    let greedy = problem.solve(&SolverConfig::default()).unwrap();
    assert_close(greedy.objective, 13f64);
    assert_close(greedy.x[0], 4f64);
    assert_close(greedy.x[1], 3f64);

    let complete = problem.solve(&depth_first()).unwrap();
    assert_close(complete.objective, 13f64);
}

#[test]
fn integer_minimize() {
    let solution = solve(
        vec![vec![2f64, -2f64], vec![0f64, 1f64]],
        vec![3f64, 3f64],
        vec![4f64, -1f64],
        ProblemKind::MinIP,
    ).unwrap();
    assert_close(solution.objective, -3f64);
}

#[test]
fn greedy_is_not_complete() {
    let problem = Problem::new(
        vec![vec![5f64, 4f64, 3f64]],
        vec![10f64],
        vec![6f64, 5f64, 4f64],
        ProblemKind::MaxIP,
    ).unwrap();

    let complete = problem.solve(&depth_first()).unwrap();
    assert_close(complete.objective, 13f64);
    assert_close(complete.x[0], 0f64);
    assert_close(complete.x[1], 1f64);
    assert_close(complete.x[2], 2f64);

    let greedy = problem.solve(&SolverConfig::default()).unwrap();
    assert!(greedy.objective <= complete.objective + 1e-6);
    assert!(greedy.x.iter().all(|value| (value - value.round()).abs() < 1e-4));
    assert!(5f64 * greedy.x[0] + 4f64 * greedy.x[1] + 3f64 * greedy.x[2] <= 10f64 + 1e-6);
}

#[test]
fn integer_infeasible() {
    // 2 x0 = 1
    let result = solve(
        vec![vec![2f64, 0f64], vec![-2f64, 0f64]],
        vec![1f64, -1f64],
        vec![1f64, 0f64],
        ProblemKind::MaxIP,
    );
    assert_eq!(result, Err(Error::Infeasible));

    // Only the greedy search runs into a dead end
    let problem = Problem::new(
        vec![vec![2f64, 2f64], vec![-2f64, 2f64]],
        vec![3f64, 1f64],
        vec![1f64, 1f64],
        ProblemKind::MaxIP,
    ).unwrap();
    assert_eq!(problem.solve(&SolverConfig::default()), Err(Error::Infeasible));
    let complete = problem.solve(&depth_first()).unwrap();
    assert_close(complete.objective, 1f64);
    assert_close(complete.x[0], 1f64);
    assert_close(complete.x[1], 0f64);
}

#[test]
fn fractional_right_hand_side() {
    // x0 + x1 >= 2.5 has a fractional slack at every integer point
    let problem = Problem::new(
        vec![vec![-1f64, -1f64], vec![1f64, 0f64], vec![0f64, 1f64]],
        vec![-2.5, 3.7, 2.2],
        vec![1f64, 1f64],
        ProblemKind::MinIP,
    ).unwrap();
    assert_eq!(problem.solve(&SolverConfig::default()), Err(Error::Infeasible));
    assert_eq!(problem.solve(&depth_first()), Err(Error::Infeasible));
}

#[test]
fn search_limits() {
    let problem = Problem::new(
        vec![vec![5f64, 4f64, 3f64]],
        vec![10f64],
        vec![6f64, 5f64, 4f64],
        ProblemKind::MaxIP,
    ).unwrap();

    let config = SolverConfig { max_depth: 0, ..SolverConfig::default() };
    assert_eq!(problem.solve(&config), Err(Error::SearchExhausted(0)));
    let config = SolverConfig { max_nodes: 1, ..depth_first() };
    assert_eq!(problem.solve(&config), Err(Error::SearchExhausted(1)));
}
