//! # Linear algebra primitives
//!
//! Dense matrices and the decomposition used to solve systems with a basis matrix.
use std::ops::{AddAssign, Mul};

use num_traits::Zero;

pub mod decomposition;
pub mod matrix;

/// Values with an absolute value below this constant are treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Inner product of two equally long slices.
pub fn inner_product<F>(left: &[F], right: &[F]) -> F
where
    F: Zero + Copy + Mul<Output = F> + AddAssign,
{
    debug_assert_eq!(left.len(), right.len());

    let mut total = F::zero();
    for (&l, &r) in left.iter().zip(right) {
        total += l * r;
    }

    total
}
