//! # Error reporting
//!
//! All the ways in which constructing or solving a program can fail. The core algorithms only
//! create the `Infeasible`, `Unbounded`, `InvalidBase`, `DegenerateBasis` and `SearchExhausted`
//! variants; `Shape` errors are detected while a problem is being constructed.
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` is returned when a program can't be constructed or has no finite optimum.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Dimensions of the constraint matrix, right hand side and cost vector don't agree.
    ///
    /// The contained `String` is a message for the end user.
    #[error("ShapeError: {0}")]
    Shape(String),
    /// A basis partition supplied by the caller is malformed.
    ///
    /// The partition has the wrong sizes, contains an index out of range, repeats an index, or
    /// lists an index as both basic and nonbasic.
    #[error("InvalidBaseError: {0}")]
    InvalidBase(String),
    /// The matrix of the basis columns is singular, or the constraint rows are linearly dependent.
    #[error("DegenerateBasisError: {0}")]
    DegenerateBasis(String),
    /// There is no point satisfying all constraints.
    #[error("LP is infeasible")]
    Infeasible,
    /// The objective function can be increased without limit.
    #[error("LP is unbounded")]
    Unbounded,
    /// Branch and bound reached its depth or node limit before finding an integer solution.
    #[error("search exhausted after {0} steps")]
    SearchExhausted(usize),
}

impl Error {
    /// Whether a branch and bound child with this error can be pruned.
    ///
    /// Only a subproblem that is infeasible or unbounded is discarded, all other errors are
    /// propagated.
    #[must_use]
    pub fn is_prunable(&self) -> bool {
        matches!(self, Error::Infeasible | Error::Unbounded)
    }
}
