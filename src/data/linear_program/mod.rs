//! # Representing linear programs
//!
//! A problem is given by the user in general form, a system of inequalities. The algorithms work
//! with the standard form, a system of equalities in nonnegative variables.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;

/// Values within this distance of an integer are considered integer.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-4;
