//! Fixed-degree univariate polynomial.
//!
//! ## Purpose
//!
//! `Fixed1D<N, T>` holds exactly `N + 1` coefficients inline, for fits whose
//! degree is known at compile time. It evaluates without touching the heap
//! and compares equal to a `OneD` holding the same coefficients.
//!
//! ## Design notes
//!
//! * The coefficients are split into the `N` lower powers and the leading
//!   one, which keeps the array length a plain const parameter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use super::Univariate;
use super::one_d::{OneD, write_terms};
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Fixed1D
// ============================================================================

/// Univariate polynomial of degree `N` with inline storage.
#[derive(Debug, Clone, Copy)]
pub struct Fixed1D<const N: usize, T = f64> {
    lower: [T; N],
    leading: T,
    origin: T,
}

impl<const N: usize, T: Float> Fixed1D<N, T> {
    /// Degree of every polynomial of this type.
    pub const DEGREE: usize = N;

    /// The zero polynomial of degree `N`.
    pub fn zero() -> Self {
        Self {
            lower: [T::zero(); N],
            leading: T::zero(),
            origin: T::zero(),
        }
    }

    /// Construct from at most `N + 1` monomial coefficients, zero padded.
    pub fn from_coefficients(coefficients: &[T]) -> Result<Self, PolyfitError> {
        if coefficients.len() > N + 1 {
            return Err(PolyfitError::InvalidInput(format!(
                "{} coefficients do not fit a polynomial of degree {}",
                coefficients.len(),
                N
            )));
        }
        let mut p = Self::zero();
        for (k, &c) in coefficients.iter().enumerate() {
            p.set(k, c);
        }
        Ok(p)
    }

    /// Return the same coefficients expanded about `origin`.
    pub fn with_origin(mut self, origin: T) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    fn set(&mut self, k: usize, value: T) {
        if k < N {
            self.lower[k] = value;
        } else {
            self.leading = value;
        }
    }

    /// Degree `N`.
    #[inline]
    pub const fn order(&self) -> usize {
        N
    }

    /// Iterate over the `N + 1` coefficients, lowest power first.
    pub fn coefficients(&self) -> impl Iterator<Item = T> + '_ {
        self.lower
            .iter()
            .copied()
            .chain(core::iter::once(self.leading))
    }

    /// Coefficient of `(x - origin)^k`; zero past degree `N`.
    #[inline]
    pub fn coefficient(&self, k: usize) -> T {
        match k {
            k if k < N => self.lower[k],
            k if k == N => self.leading,
            _ => T::zero(),
        }
    }

    /// Point the coefficients are expanded about.
    #[inline]
    pub fn origin(&self) -> T {
        self.origin
    }

    /// Evaluate at `x` with Horner's rule.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        let t = x - self.origin;
        self.lower
            .iter()
            .rev()
            .fold(self.leading, |acc, &c| acc * t + c)
    }
}

impl<const N: usize, T: Float> Univariate<T> for Fixed1D<N, T> {
    #[inline]
    fn order(&self) -> usize {
        N
    }

    #[inline]
    fn coefficient(&self, k: usize) -> T {
        Fixed1D::coefficient(self, k)
    }

    #[inline]
    fn origin(&self) -> T {
        self.origin
    }

    #[inline]
    fn evaluate(&self, x: T) -> T {
        Fixed1D::evaluate(self, x)
    }
}

impl<const N: usize, T: Float> Default for Fixed1D<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T> Index<usize> for Fixed1D<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        if k < N {
            &self.lower[k]
        } else if k == N {
            &self.leading
        } else {
            panic!("coefficient index {k} out of range for degree {N}")
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<const N: usize, T: Float> TryFrom<OneD<T>> for Fixed1D<N, T> {
    type Error = PolyfitError;

    /// Fails when a nonzero coefficient lies above degree `N`.
    fn try_from(p: OneD<T>) -> Result<Self, PolyfitError> {
        let trimmed = p.truncate_to_non_zeros();
        if trimmed.order() > N {
            return Err(PolyfitError::InvalidInput(format!(
                "polynomial of degree {} does not fit degree {}",
                trimmed.order(),
                N
            )));
        }
        Ok(Self::from_coefficients(trimmed.coefficients())?.with_origin(p.origin()))
    }
}

impl<const N: usize, T: Float> From<Fixed1D<N, T>> for OneD<T> {
    fn from(p: Fixed1D<N, T>) -> Self {
        OneD::with_origin(p.coefficients().collect::<Vec<T>>(), p.origin)
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<const N: usize, const M: usize, T: Float> PartialEq<Fixed1D<M, T>> for Fixed1D<N, T> {
    fn eq(&self, other: &Fixed1D<M, T>) -> bool {
        self.same_polynomial(other)
    }
}

impl<const N: usize, T: Float> PartialEq<OneD<T>> for Fixed1D<N, T> {
    fn eq(&self, other: &OneD<T>) -> bool {
        self.same_polynomial(other)
    }
}

impl<const N: usize, T: Float> PartialEq<[T]> for Fixed1D<N, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.same_polynomial(other)
    }
}

impl<const N: usize, T: Float> PartialEq<Vec<T>> for Fixed1D<N, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.same_polynomial(other.as_slice())
    }
}

impl<const N: usize, const M: usize, T: Float> PartialEq<[T; M]> for Fixed1D<N, T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.same_polynomial(other.as_slice())
    }
}

// ============================================================================
// Display
// ============================================================================

impl<const N: usize, T: Float + Display> Display for Fixed1D<N, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_terms(f, self.coefficients(), self.origin)
    }
}
