//! Polynomial Types
//!
//! ## Purpose
//!
//! This module provides the polynomial values returned by the fit drivers:
//! `OneD` (dynamic degree), `Fixed1D` (degree known at compile time) and
//! `TwoD` (tensor-product polynomial in `x` and `y`).
//!
//! ## Design notes
//!
//! * **Expansion origin**: Every polynomial stores the point it is expanded
//!   about. `c[k]` multiplies `(x - origin)^k`. Directly constructed
//!   polynomials use origin `0`, i.e. plain monomial coefficients.
//! * **Shared capability**: `Univariate` is implemented by `OneD`, `Fixed1D`
//!   and coefficient slices, giving them common evaluation and comparison.
//! * **Exact equality**: `==` compares coefficient values exactly; a missing
//!   trailing coefficient counts as zero. Use `approx_eq` for tolerances.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::binomial::shift_origin;

/// Dynamic-degree univariate polynomial.
pub mod one_d;

/// Fixed-degree univariate polynomial.
pub mod fixed;

/// Bivariate tensor-product polynomial.
pub mod two_d;

// ============================================================================
// Univariate Trait
// ============================================================================

/// Common capability of univariate polynomials.
pub trait Univariate<T: Float> {
    /// Highest power represented (number of coefficients minus one).
    fn order(&self) -> usize;

    /// Coefficient of `(x - origin)^k`; zero past the highest power.
    fn coefficient(&self, k: usize) -> T;

    /// Point the coefficients are expanded about.
    fn origin(&self) -> T;

    /// Evaluate the polynomial at `x` with Horner's rule.
    fn evaluate(&self, x: T) -> T {
        let t = x - self.origin();
        let mut acc = T::zero();
        for k in (0..=self.order()).rev() {
            acc = acc * t + self.coefficient(k);
        }
        acc
    }

    /// Exact comparison: equal origins and equal coefficients (zero padded).
    fn same_polynomial<P: Univariate<T> + ?Sized>(&self, other: &P) -> bool {
        if self.origin() != other.origin() {
            return false;
        }
        let order = self.order().max(other.order());
        (0..=order).all(|k| self.coefficient(k) == other.coefficient(k))
    }

    /// Compare with a tolerance after re-expanding `other` about this
    /// polynomial's origin.
    fn approx_eq<P: Univariate<T> + ?Sized>(&self, other: &P, tol: T) -> bool {
        let theirs: Vec<T> = (0..=other.order()).map(|k| other.coefficient(k)).collect();
        let theirs = shift_origin(&theirs, self.origin() - other.origin());

        let order = self.order().max(other.order());
        (0..=order).all(|k| {
            let b = theirs.get(k).copied().unwrap_or_else(T::zero);
            (self.coefficient(k) - b).abs() <= tol
        })
    }
}

impl<T: Float> Univariate<T> for [T] {
    #[inline]
    fn order(&self) -> usize {
        self.len().saturating_sub(1)
    }

    #[inline]
    fn coefficient(&self, k: usize) -> T {
        self.get(k).copied().unwrap_or_else(T::zero)
    }

    #[inline]
    fn origin(&self) -> T {
        T::zero()
    }
}

/// Zero-padded exact comparison of two coefficient sequences.
pub(crate) fn padded_eq<T: Float>(a: &[T], b: &[T]) -> bool {
    let n = a.len().max(b.len());
    (0..n).all(|k| a.coefficient(k) == b.coefficient(k))
}
