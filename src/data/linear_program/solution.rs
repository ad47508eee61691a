//! # Representation of optimal solutions
//!
//! Once a program is solved, the objective value, the values of the primal variables and the
//! values of the dual variables are reported together.
use std::fmt;

use crate::algorithm::two_phase::tableau::basis::Basis;

/// An optimal (or, for the greedy integer search, integer feasible) solution.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function, in the direction of the problem that was solved.
    pub objective: f64,
    /// A value for each column of the problem.
    pub x: Vec<f64>,
    /// A value for each row of the problem.
    pub y: Vec<f64>,
    /// The basis that the solution was read from.
    pub basis: Basis,
    /// Number of basis changes used to find this solution, from the starting basis.
    pub iterations: usize,
}

impl Solution {
    /// Keep only the first `nr_columns` primal and `nr_rows` dual values.
    ///
    /// Used to hide the rows and columns added by branching from the user. The basis is left
    /// as is; it describes the problem that was solved last.
    #[must_use]
    pub fn truncated(mut self, nr_rows: usize, nr_columns: usize) -> Self {
        self.x.truncate(nr_columns);
        self.y.truncate(nr_rows);
        self
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "objective value: {}", self.objective)?;
        writeln!(f, "x: {:?}", self.x)?;
        write!(f, "y: {:?}", self.y)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::basis::Basis;
    use crate::data::linear_program::solution::Solution;

    fn solution() -> Solution {
        Solution {
            objective: 13f64,
            x: vec![4f64, 3f64, 1f64, 0f64, 0f64, 0f64],
            y: vec![0f64, 3f64, 4f64, 1f64],
            basis: Basis::from_basic(vec![0, 1, 2, 5], 6).unwrap(),
            iterations: 2,
        }
    }

    #[test]
    fn truncate() {
        let truncated = solution().truncated(2, 4);
        assert_eq!(truncated.x, vec![4f64, 3f64, 1f64, 0f64]);
        assert_eq!(truncated.y, vec![0f64, 3f64]);
        assert_eq!(truncated.basis, solution().basis);
    }

    #[test]
    fn display() {
        let expected = "objective value: 13\nx: [4.0, 3.0]\ny: [0.0]";
        assert_eq!(solution().truncated(1, 2).to_string(), expected);
    }
}
