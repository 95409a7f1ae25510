//! Binomial coefficients and Taylor shifts of coefficient sequences.
//!
//! ## Purpose
//!
//! This module re-expands polynomial coefficients about a different origin.
//! A polynomial `sum a_k (x - o)^k` becomes `sum b_j (x - o')^j` with
//!
//! ```text
//! b_j = sum_{k >= j} a_k * C(k, j) * (o' - o)^(k - j)
//! ```
//!
//! ## Invariants
//!
//! * Shifting by zero returns the input coefficients unchanged.
//! * The number of coefficients never changes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix2D;

// ============================================================================
// Binomial Coefficients
// ============================================================================

/// Number of ways to choose `k` items out of `n`.
///
/// Returns `0` when `k > n` and saturates at `u64::MAX` on overflow.
pub fn n_choose_k(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);

    // Each partial product is itself a binomial coefficient, so the
    // division is exact.
    let mut result: u128 = 1;
    for i in 0..k {
        result = match result.checked_mul(u128::from(n - i)) {
            Some(v) => v / u128::from(i + 1),
            None => return u64::MAX,
        };
        if result > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    result as u64
}

#[inline]
fn binomial_as<T: Float>(n: usize, k: usize) -> T {
    T::from(n_choose_k(n as u64, k as u64)).unwrap_or_else(T::infinity)
}

// ============================================================================
// Taylor Shift
// ============================================================================

/// Re-expand `coeffs` (about some origin `o`) about `o + delta`.
pub fn shift_origin<T: Float>(coeffs: &[T], delta: T) -> Vec<T> {
    if delta == T::zero() {
        return coeffs.to_vec();
    }

    let n = coeffs.len();
    let mut shifted = vec![T::zero(); n];
    for (j, out) in shifted.iter_mut().enumerate() {
        let mut acc = T::zero();
        let mut power = T::one();
        for (k, &a) in coeffs.iter().enumerate().skip(j) {
            acc = acc + a * binomial_as::<T>(k, j) * power;
            power = power * delta;
        }
        *out = acc;
    }
    shifted
}

/// Re-expand a 2D coefficient table (rows: powers of x, columns: powers of y)
/// about an origin moved by `(delta_x, delta_y)`.
pub fn shift_origin_2d<T: Float>(coeffs: &Matrix2D<T>, delta_x: T, delta_y: T) -> Matrix2D<T> {
    let (rows, cols) = coeffs.shape();
    let mut out = coeffs.clone();

    if delta_y != T::zero() {
        for i in 0..rows {
            let shifted = shift_origin(coeffs.row(i), delta_y);
            for (j, v) in shifted.into_iter().enumerate() {
                out[(i, j)] = v;
            }
        }
    }

    if delta_x != T::zero() {
        let mut column = Vec::with_capacity(rows);
        for j in 0..cols {
            column.clear();
            column.extend((0..rows).map(|i| out[(i, j)]));
            let shifted = shift_origin(&column, delta_x);
            for (i, v) in shifted.into_iter().enumerate() {
                out[(i, j)] = v;
            }
        }
    }

    out
}
