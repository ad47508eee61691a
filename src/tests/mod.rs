//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem(kind)`: the problem as a user would give it
//! * `fn standard_form()`: the same problem in maximization orientation, with slack columns

/// Compare two values up to a tolerance that suits the solver output.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-6 * expected.abs().max(1f64),
        "{} is not close to {}", actual, expected,
    );
}
