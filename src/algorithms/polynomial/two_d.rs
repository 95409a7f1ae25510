//! Bivariate tensor-product polynomial.
//!
//! ## Purpose
//!
//! `TwoD` is the result type of a 2D fit:
//!
//! ```text
//! p(x, y) = sum_{i <= order_x} sum_{j <= order_y} c[i][j] * tx^i * ty^j
//! tx = x - origin.0,  ty = y - origin.1
//! ```
//!
//! ## Design notes
//!
//! * Coefficients live in a `Matrix2D` with `order_x + 1` rows (powers of x)
//!   and `order_y + 1` columns (powers of y).
//! * Evaluation is nested Horner: the inner pass runs over a row in `ty`,
//!   the outer pass over rows in `tx`.
//!
//! ## Invariants
//!
//! * The coefficient table is never empty.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use super::one_d::OneD;
use crate::math::binomial::shift_origin_2d;
use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix2D;

// ============================================================================
// TwoD
// ============================================================================

/// Bivariate polynomial with coefficient table indexed `(x power, y power)`.
#[derive(Debug, Clone)]
pub struct TwoD<T> {
    coeffs: Matrix2D<T>,
    origin: (T, T),
}

impl<T: Float> TwoD<T> {
    /// Construct from a monomial coefficient table (`c[(i, j)]` multiplies `x^i y^j`).
    pub fn new(coefficients: Matrix2D<T>) -> Self {
        Self::with_origin(coefficients, (T::zero(), T::zero()))
    }

    /// Construct from a coefficient table expanded about `origin`.
    pub fn with_origin(coefficients: Matrix2D<T>, origin: (T, T)) -> Self {
        let coeffs = if coefficients.is_empty() {
            Matrix2D::new(1, 1)
        } else {
            coefficients
        };
        Self { coeffs, origin }
    }

    /// Construct from `(order_x + 1) * (order_y + 1)` row-major monomial coefficients.
    pub fn from_row_major(
        order_x: usize,
        order_y: usize,
        coefficients: &[T],
    ) -> Result<Self, PolyfitError> {
        let table = Matrix2D::from_row_major(order_x + 1, order_y + 1, coefficients.to_vec())?;
        Ok(Self::new(table))
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::new(Matrix2D::new(1, 1))
    }

    /// Highest power of x.
    #[inline]
    pub fn order_x(&self) -> usize {
        self.coeffs.rows() - 1
    }

    /// Highest power of y.
    #[inline]
    pub fn order_y(&self) -> usize {
        self.coeffs.cols() - 1
    }

    /// Coefficient table.
    #[inline]
    pub fn coefficients(&self) -> &Matrix2D<T> {
        &self.coeffs
    }

    /// Coefficient of `tx^i ty^j`; zero outside the table.
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> T {
        self.coeffs.get(i, j).copied().unwrap_or_else(T::zero)
    }

    /// Point the coefficients are expanded about, as `(x, y)`.
    #[inline]
    pub fn origin(&self) -> (T, T) {
        self.origin
    }

    /// Evaluate at `(x, y)`.
    pub fn evaluate(&self, x: T, y: T) -> T {
        let tx = x - self.origin.0;
        let ty = y - self.origin.1;
        (0..self.coeffs.rows()).rev().fold(T::zero(), |acc, i| {
            acc * tx + horner(self.coeffs.row(i), ty)
        })
    }

    /// Fix `y`, leaving a polynomial in `x`.
    pub fn at_y(&self, y: T) -> OneD<T> {
        let ty = y - self.origin.1;
        let coeffs = (0..self.coeffs.rows())
            .map(|i| horner(self.coeffs.row(i), ty))
            .collect();
        OneD::with_origin(coeffs, self.origin.0)
    }

    /// Fix `x`, leaving a polynomial in `y`.
    pub fn at_x(&self, x: T) -> OneD<T> {
        let tx = x - self.origin.0;
        let coeffs = (0..self.coeffs.cols())
            .map(|j| {
                (0..self.coeffs.rows())
                    .rev()
                    .fold(T::zero(), |acc, i| acc * tx + self.coeffs[(i, j)])
            })
            .collect();
        OneD::with_origin(coeffs, self.origin.1)
    }

    /// Partial derivative with respect to x.
    pub fn derivative_x(&self) -> Self {
        let (rows, cols) = self.coeffs.shape();
        if rows == 1 {
            return Self::with_origin(Matrix2D::new(1, cols), self.origin);
        }
        let table = Matrix2D::from_fn(rows - 1, cols, |i, j| {
            self.coeffs[(i + 1, j)] * from_usize::<T>(i + 1)
        });
        Self::with_origin(table, self.origin)
    }

    /// Partial derivative with respect to y.
    pub fn derivative_y(&self) -> Self {
        let (rows, cols) = self.coeffs.shape();
        if cols == 1 {
            return Self::with_origin(Matrix2D::new(rows, 1), self.origin);
        }
        let table = Matrix2D::from_fn(rows, cols - 1, |i, j| {
            self.coeffs[(i, j + 1)] * from_usize::<T>(j + 1)
        });
        Self::with_origin(table, self.origin)
    }

    /// Swap the roles of x and y.
    pub fn flip_xy(&self) -> Self {
        Self::with_origin(self.coeffs.transpose(), (self.origin.1, self.origin.0))
    }

    /// Re-expand about a new origin. The polynomial function is unchanged.
    pub fn recenter(&self, origin: (T, T)) -> Self {
        let table = shift_origin_2d(
            &self.coeffs,
            origin.0 - self.origin.0,
            origin.1 - self.origin.1,
        );
        Self::with_origin(table, origin)
    }

    /// Re-expand about `(0, 0)`, yielding plain monomial coefficients.
    pub fn to_monomial(&self) -> Self {
        self.recenter((T::zero(), T::zero()))
    }

    /// Compare with a tolerance after re-expanding `other` about this origin.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        let theirs = other.recenter(self.origin);
        let rows = self.coeffs.rows().max(theirs.coeffs.rows());
        let cols = self.coeffs.cols().max(theirs.coeffs.cols());
        (0..rows).all(|i| {
            (0..cols).all(|j| (self.coefficient(i, j) - theirs.coefficient(i, j)).abs() <= tol)
        })
    }
}

#[inline]
fn horner<T: Float>(coeffs: &[T], t: T) -> T {
    coeffs.iter().rev().fold(T::zero(), |acc, &c| acc * t + c)
}

#[inline]
fn from_usize<T: Float>(k: usize) -> T {
    T::from(k).unwrap_or_else(T::max_value)
}

impl<T: Float> Default for TwoD<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> PartialEq for TwoD<T> {
    /// Exact comparison with equal origins; missing coefficients count as zero.
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && padded_eq(&self.coeffs, &other.coeffs)
    }
}

impl<T: Float> PartialEq<Matrix2D<T>> for TwoD<T> {
    /// A raw coefficient table is a polynomial about `(0, 0)`.
    fn eq(&self, other: &Matrix2D<T>) -> bool {
        self.origin == (T::zero(), T::zero()) && padded_eq(&self.coeffs, other)
    }
}

impl<T: Float> PartialEq<TwoD<T>> for Matrix2D<T> {
    fn eq(&self, other: &TwoD<T>) -> bool {
        other == self
    }
}

fn padded_eq<T: Float>(a: &Matrix2D<T>, b: &Matrix2D<T>) -> bool {
    let at = |m: &Matrix2D<T>, i, j| m.get(i, j).copied().unwrap_or_else(T::zero);
    let rows = a.rows().max(b.rows());
    let cols = a.cols().max(b.cols());
    (0..rows).all(|i| (0..cols).all(|j| at(a, i, j) == at(b, i, j)))
}

impl<T> Index<(usize, usize)> for TwoD<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.coeffs[idx]
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + Display> Display for TwoD<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for i in 0..self.coeffs.rows() {
            for j in 0..self.coeffs.cols() {
                if i + j > 0 {
                    write!(f, " + ")?;
                }
                write!(f, "{}", self.coeffs[(i, j)])?;
                write_power(f, "x", self.origin.0, i)?;
                write_power(f, "y", self.origin.1, j)?;
            }
        }
        Ok(())
    }
}

fn write_power<T: Float + Display>(
    f: &mut Formatter<'_>,
    var: &str,
    origin: T,
    power: usize,
) -> FmtResult {
    match power {
        0 => Ok(()),
        _ if origin == T::zero() => write!(f, "*{}^{}", var, power),
        _ => write!(f, "*({} - {})^{}", var, origin, power),
    }
}
