//! # Branch and bound
//!
//! Finding integer solutions by repeatedly bounding a fractional variable of a relaxation from
//! both sides. All problems are in maximization orientation.
use tracing::debug;

use crate::algorithm::branch_and_bound::node::Node;
use crate::algorithm::{SearchStrategy, SolverConfig};
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::INTEGRALITY_TOLERANCE;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{Error, Result};

pub mod node;

/// Whether a value is within `INTEGRALITY_TOLERANCE` of an integer.
#[must_use]
pub fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() <= INTEGRALITY_TOLERANCE
}

/// Choose the variable to branch on: the largest value among the fractional values.
///
/// All columns are considered, slack columns included. A row with a fractional right hand side
/// whose slack can't take an integer value therefore has no integer solution, even if the
/// structural variables can be integer.
///
/// Of equal values, the one with the lowest index is chosen.
///
/// # Return value
///
/// `None` if all values are integer.
#[must_use]
pub fn select_branch_variable(x: &[f64]) -> Option<usize> {
    x.iter()
        .enumerate()
        .filter(|&(_, &value)| !is_integer(value))
        .fold(None, |best: Option<(usize, f64)>, (j, &value)| match best {
            Some((_, largest)) if value <= largest => best,
            _ => Some((j, value)),
        })
        .map(|(j, _)| j)
}

/// Search for an integer solution, starting from the solution of the relaxation of the problem.
///
/// # Arguments
///
/// * `problem`: Problem to maximize, it is not modified.
/// * `relaxation`: Optimal solution of the relaxation of `problem`.
/// * `config`: Search strategy and limits.
///
/// # Return value
///
/// An integer solution with values for the columns of `problem`, followed by values for the
/// columns that were added by branching.
///
/// Every column of `problem` must be integer in the solution, slack columns included.
///
/// # Errors
///
/// * `Infeasible` if no integer solution was found.
/// * `SearchExhausted` if a limit of `config` was reached.
/// * Any other error raised while solving a subproblem.
pub fn branch_and_bound(problem: &StandardForm, relaxation: Solution, config: &SolverConfig) -> Result<Solution> {
    let root = Node::root(problem.clone(), relaxation);

    let leaf = match config.strategy {
        SearchStrategy::Greedy => greedy(root, config.max_depth)?,
        SearchStrategy::DepthFirst => depth_first(root, config.max_nodes)?,
    };

    let mut solution = leaf.into_solution();
    solution.objective = problem.objective_value(&solution.x);
    Ok(solution)
}

/// Follow a single path down the tree, always into the child with the best relaxation.
///
/// Floor children are preferred over ceil children of equal objective value.
fn greedy(mut node: Node, max_depth: usize) -> Result<Node> {
    while let Some(variable) = node.branch_variable() {
        if node.depth() >= max_depth {
            return Err(Error::SearchExhausted(node.depth()));
        }

        node = match node.children(variable)? {
            (Some(floor), Some(ceil)) => {
                let tolerance = EPSILON * floor.objective().abs().max(1f64);
                if ceil.objective() > floor.objective() + tolerance { ceil } else { floor }
            },
            (Some(child), None) | (None, Some(child)) => child,
            (None, None) => {
                debug!(depth = node.depth(), "both children are infeasible");
                return Err(Error::Infeasible);
            },
        };
    }

    debug!(depth = node.depth(), objective = node.objective(), "found integer solution");
    Ok(node)
}

/// Explore the tree depth first, pruning nodes that can't improve upon the best integer solution
/// found so far.
fn depth_first(root: Node, max_nodes: usize) -> Result<Node> {
    let mut nodes_solved = 1;
    let mut incumbent: Option<Node> = None;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Some(best) = &incumbent {
            if node.objective() <= best.objective() + INTEGRALITY_TOLERANCE {
                debug!(depth = node.depth(), objective = node.objective(), "bounded");
                continue;
            }
        }

        let Some(variable) = node.branch_variable() else {
            debug!(depth = node.depth(), objective = node.objective(), "new incumbent");
            incumbent = Some(node);
            continue;
        };

        if nodes_solved + 2 > max_nodes {
            return Err(Error::SearchExhausted(nodes_solved));
        }
        let (floor, ceil) = node.children(variable)?;
        nodes_solved += 2;

        // The child pushed last is explored first
        match (floor, ceil) {
            (Some(floor), Some(ceil)) => if ceil.objective() > floor.objective() {
                stack.push(floor);
                stack.push(ceil);
            } else {
                stack.push(ceil);
                stack.push(floor);
            },
            (floor, ceil) => stack.extend(floor.into_iter().chain(ceil)),
        }
    }

    debug!(nodes_solved, "search finished");
    incumbent.ok_or(Error::Infeasible)
}
