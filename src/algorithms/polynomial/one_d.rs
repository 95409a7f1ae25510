//! Dynamic-degree univariate polynomial.
//!
//! ## Purpose
//!
//! `OneD` is the result type of a 1D fit and the general-purpose polynomial
//! value of the crate. It supports evaluation, calculus, re-expansion about a
//! new origin, and ring arithmetic.
//!
//! ## Invariants
//!
//! * At least one coefficient is stored (the zero polynomial is `[0]`).
//! * Values are immutable; every operation returns a new polynomial.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use super::fixed::Fixed1D;
use super::{Univariate, padded_eq};
use crate::math::binomial::shift_origin;

// ============================================================================
// OneD
// ============================================================================

/// Univariate polynomial `sum c[k] * (x - origin)^k` of dynamic degree.
#[derive(Debug, Clone)]
pub struct OneD<T> {
    coeffs: Vec<T>,
    origin: T,
}

impl<T: Float> OneD<T> {
    /// Construct from monomial coefficients (`c[k]` multiplies `x^k`).
    pub fn new(coefficients: Vec<T>) -> Self {
        Self::with_origin(coefficients, T::zero())
    }

    /// Construct from coefficients expanded about `origin`.
    pub fn with_origin(mut coefficients: Vec<T>, origin: T) -> Self {
        if coefficients.is_empty() {
            coefficients.push(T::zero());
        }
        Self {
            coeffs: coefficients,
            origin,
        }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::new(vec![T::zero()])
    }

    /// Copy the coefficients of any univariate polynomial.
    pub fn from_univariate<P: Univariate<T> + ?Sized>(p: &P) -> Self {
        let coeffs = (0..=p.order()).map(|k| p.coefficient(k)).collect();
        Self::with_origin(coeffs, p.origin())
    }

    /// Highest power represented.
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Coefficient of `(x - origin)^k`; zero past the highest power.
    #[inline]
    pub fn coefficient(&self, k: usize) -> T {
        self.coeffs.get(k).copied().unwrap_or_else(T::zero)
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
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * t + c)
    }

    /// First derivative.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::with_origin(vec![T::zero()], self.origin);
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| c * from_usize::<T>(k))
            .collect();
        Self::with_origin(coeffs, self.origin)
    }

    /// Antiderivative whose value at the origin is zero.
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(T::zero());
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(k, &c)| c / from_usize::<T>(k + 1)),
        );
        Self::with_origin(coeffs, self.origin)
    }

    /// Definite integral over `[a, b]`.
    pub fn integrate(&self, a: T, b: T) -> T {
        let anti = self.antiderivative();
        anti.evaluate(b) - anti.evaluate(a)
    }

    /// Re-expand about a new origin. The polynomial function is unchanged.
    pub fn recenter(&self, origin: T) -> Self {
        Self::with_origin(shift_origin(&self.coeffs, origin - self.origin), origin)
    }

    /// Re-expand about zero, yielding plain monomial coefficients.
    pub fn to_monomial(&self) -> Self {
        self.recenter(T::zero())
    }

    /// Drop trailing coefficients that are exactly zero (keeps at least one).
    pub fn truncate_to_non_zeros(&self) -> Self {
        let keep = self
            .coeffs
            .iter()
            .rposition(|&c| c != T::zero())
            .map_or(1, |k| k + 1);
        Self::with_origin(self.coeffs[..keep].to_vec(), self.origin)
    }

    /// Compare with a tolerance after re-expanding `other` about this origin.
    pub fn approx_eq<P: Univariate<T> + ?Sized>(&self, other: &P, tol: T) -> bool {
        Univariate::approx_eq(self, other, tol)
    }

    /// Coefficients of `other` expanded about `self.origin`.
    fn aligned(&self, other: &Self) -> Vec<T> {
        if other.origin == self.origin {
            other.coeffs.clone()
        } else {
            shift_origin(&other.coeffs, self.origin - other.origin)
        }
    }
}

#[inline]
fn from_usize<T: Float>(k: usize) -> T {
    T::from(k).unwrap_or_else(T::max_value)
}

impl<T: Float> Univariate<T> for OneD<T> {
    #[inline]
    fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[inline]
    fn coefficient(&self, k: usize) -> T {
        OneD::coefficient(self, k)
    }

    #[inline]
    fn origin(&self) -> T {
        self.origin
    }

    #[inline]
    fn evaluate(&self, x: T) -> T {
        OneD::evaluate(self, x)
    }
}

impl<T: Float> Default for OneD<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Float> From<Vec<T>> for OneD<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: Float> From<&[T]> for OneD<T> {
    fn from(coefficients: &[T]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl<T: Float, const M: usize> From<[T; M]> for OneD<T> {
    fn from(coefficients: [T; M]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<T: Float> PartialEq for OneD<T> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && padded_eq(&self.coeffs, &other.coeffs)
    }
}

impl<T: Float> PartialEq<[T]> for OneD<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.origin == T::zero() && padded_eq(&self.coeffs, other)
    }
}

impl<T: Float> PartialEq<&[T]> for OneD<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: Float> PartialEq<Vec<T>> for OneD<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == **other
    }
}

impl<T: Float, const M: usize> PartialEq<[T; M]> for OneD<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        *self == other[..]
    }
}

impl<T: Float> PartialEq<OneD<T>> for Vec<T> {
    fn eq(&self, other: &OneD<T>) -> bool {
        *other == **self
    }
}

impl<T: Float, const N: usize> PartialEq<Fixed1D<N, T>> for OneD<T> {
    fn eq(&self, other: &Fixed1D<N, T>) -> bool {
        self.same_polynomial(other)
    }
}

// ============================================================================
// Indexing & Arithmetic
// ============================================================================

impl<T> Index<usize> for OneD<T> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.coeffs[k]
    }
}

impl<T: Float> Add<&OneD<T>> for &OneD<T> {
    type Output = OneD<T>;

    fn add(self, rhs: &OneD<T>) -> OneD<T> {
        let theirs = self.aligned(rhs);
        let n = self.coeffs.len().max(theirs.len());
        let coeffs = (0..n)
            .map(|k| self.coeffs.coefficient(k) + theirs.coefficient(k))
            .collect();
        OneD::with_origin(coeffs, self.origin)
    }
}

impl<T: Float> Sub<&OneD<T>> for &OneD<T> {
    type Output = OneD<T>;

    fn sub(self, rhs: &OneD<T>) -> OneD<T> {
        self + &(-rhs)
    }
}

impl<T: Float> Mul<&OneD<T>> for &OneD<T> {
    type Output = OneD<T>;

    fn mul(self, rhs: &OneD<T>) -> OneD<T> {
        let theirs = self.aligned(rhs);
        let mut coeffs = vec![T::zero(); self.coeffs.len() + theirs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in theirs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        OneD::with_origin(coeffs, self.origin)
    }
}

impl<T: Float> Neg for &OneD<T> {
    type Output = OneD<T>;

    fn neg(self) -> OneD<T> {
        OneD::with_origin(self.coeffs.iter().map(|&c| -c).collect(), self.origin)
    }
}

impl<T: Float> Mul<T> for &OneD<T> {
    type Output = OneD<T>;

    fn mul(self, scalar: T) -> OneD<T> {
        OneD::with_origin(
            self.coeffs.iter().map(|&c| c * scalar).collect(),
            self.origin,
        )
    }
}

impl<T: Float> Div<T> for &OneD<T> {
    type Output = OneD<T>;

    fn div(self, scalar: T) -> OneD<T> {
        OneD::with_origin(
            self.coeffs.iter().map(|&c| c / scalar).collect(),
            self.origin,
        )
    }
}

macro_rules! forward_owned_binop {
    ($($imp:ident, $method:ident);*) => {$(
        impl<T: Float> $imp for OneD<T> {
            type Output = OneD<T>;

            #[inline]
            fn $method(self, rhs: OneD<T>) -> OneD<T> {
                (&self).$method(&rhs)
            }
        }
    )*};
}

forward_owned_binop!(Add, add; Sub, sub; Mul, mul);

impl<T: Float> Neg for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn neg(self) -> OneD<T> {
        -&self
    }
}

impl<T: Float> Mul<T> for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn mul(self, scalar: T) -> OneD<T> {
        &self * scalar
    }
}

impl<T: Float> Div<T> for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn div(self, scalar: T) -> OneD<T> {
        &self / scalar
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + Display> Display for OneD<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_terms(f, self.coeffs.iter().copied(), self.origin)
    }
}

/// Write `c0 + c1*x^1 + ...`, using `(x - origin)` when the origin is nonzero.
pub(crate) fn write_terms<T, I>(f: &mut Formatter<'_>, coeffs: I, origin: T) -> FmtResult
where
    T: Float + Display,
    I: IntoIterator<Item = T>,
{
    for (k, c) in coeffs.into_iter().enumerate() {
        if k == 0 {
            write!(f, "{}", c)?;
        } else if origin == T::zero() {
            write!(f, " + {}*x^{}", c, k)?;
        } else {
            write!(f, " + {}*(x - {})^{}", c, origin, k)?;
        }
    }
    Ok(())
}
