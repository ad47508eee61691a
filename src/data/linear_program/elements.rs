//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Neg;

use enum_map::Enum;
use num_traits::One;
use serde::Deserialize;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

/// A variable is either continuous or integer.
///
/// The variables of a problem all share the same type.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableType {
    Continuous,
    Integer,
}

/// The four kinds of problems that can be solved, fixed when a problem is constructed.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
pub enum ProblemKind {
    MaxLP,
    MinLP,
    MaxIP,
    MinIP,
}

impl ProblemKind {
    /// Combine a direction with a variable type.
    #[must_use]
    pub fn new(direction: Direction, variable_type: VariableType) -> Self {
        match (direction, variable_type) {
            (Direction::Maximize, VariableType::Continuous) => ProblemKind::MaxLP,
            (Direction::Minimize, VariableType::Continuous) => ProblemKind::MinLP,
            (Direction::Maximize, VariableType::Integer) => ProblemKind::MaxIP,
            (Direction::Minimize, VariableType::Integer) => ProblemKind::MinIP,
        }
    }

    /// Whether the objective should be maximized or minimized.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            ProblemKind::MaxLP | ProblemKind::MaxIP => Direction::Maximize,
            ProblemKind::MinLP | ProblemKind::MinIP => Direction::Minimize,
        }
    }

    /// Whether the variables should take integer values.
    #[must_use]
    pub fn variable_type(self) -> VariableType {
        match self {
            ProblemKind::MaxLP | ProblemKind::MinLP => VariableType::Continuous,
            ProblemKind::MaxIP | ProblemKind::MinIP => VariableType::Integer,
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProblemKind::MaxLP => "Max Linear Problem",
            ProblemKind::MinLP => "Min Linear Problem",
            ProblemKind::MaxIP => "Max Integer Problem",
            ProblemKind::MinIP => "Min Integer Problem",
        })
    }
}

/// Direction of a bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b >= 0 (variables are nonnegative and branching might only
    /// bring that bound higher).
    Lower,
    /// In the case of a variable, 0 <= x <= b.
    Upper,
}

impl BoundDirection {
    /// Convert a bound direction into a positive or negative one.
    ///
    /// Rows of upper bounds are stored as is, rows of lower bounds are stored negated so that the
    /// slack of both has a positive coefficient.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            BoundDirection::Lower => -F::one(),
            BoundDirection::Upper => F::one(),
        }
    }
}

/// Origin of a column in a standard form problem.
///
/// Columns are grouped, in this order.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which the user wants a solution.
    Structural,
    /// Slacks `s` for an inequality `<a, x> + s = b`, added when the problem was constructed.
    Slack,
    /// Slacks of the rows added by branching.
    Branch,
    /// Artificial variables of the auxiliary problem used to find a feasible basis.
    Artificial,
}
