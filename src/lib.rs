//! # A dense linear and integer program solver
//!
//! Linear programs in standard form are solved using the revised simplex method with Bland's
//! anti-cycling rule. When the slack basis is not feasible, a basic feasible solution is found by
//! first solving an auxiliary problem with one artificial variable per row. Integer programs are
//! solved by branching on fractional values of relaxation solutions.
//!
//! The entry point for most users is [`Problem`](data::linear_program::general_form::Problem).
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

pub use crate::error::{Error, Result};

#[cfg(test)]
mod tests;
