//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod properties;
mod scenarios;

/// Compare two values up to a tolerance that suits the solver output.
#[track_caller]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-6 * expected.abs().max(1f64),
        "{} is not close to {}", actual, expected,
    );
}
