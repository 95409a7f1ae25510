//! Linear algebra backend abstraction for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the linear algebra
//! operations the fit drivers need, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Normal equations are solved by Cholesky and report a cheap condition
//!   estimate so callers can decide whether to trust the result.
//! * QR (Householder reflections) works on the design matrix itself and
//!   rejects numerically rank-deficient `R` factors.
//! * SVD is the last resort and also refuses rank-deficient systems instead
//!   of returning a minimum-norm solution.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * `f64` accumulates the normal equations two rows at a time with `wide`.
//! * Residuals for iterative refinement use error-free transformations so a
//!   correction step can recover the last bits a factorization loses.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, LowerExp};
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Output of a Cholesky solve of the normal equations.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskySolve<T> {
    /// Solution vector.
    pub solution: Vec<T>,
    /// Condition estimate `(max L_ii / min L_ii)^2` of the normal matrix.
    pub condition: T,
}

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Display + LowerExp + Send + Sync + 'static {
    /// Accumulate the normal equations A'A and A'b from a row-major design matrix.
    ///
    /// `gram` (`cols * cols`) and `atb` (`cols`) are added to, not overwritten.
    fn accumulate_normal_equations(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        gram: &mut [Self],
        atb: &mut [Self],
    );

    /// Solve the symmetric positive definite system `gram * c = atb` by Cholesky.
    fn solve_cholesky(gram: &[Self], atb: &[Self], n: usize) -> Option<CholeskySolve<Self>>;

    /// Solve `min ||A c - b||` by Householder QR of the row-major design matrix.
    fn solve_qr(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;

    /// Solve `min ||A c - b||` by SVD of the row-major design matrix.
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;
}

/// Relative tolerance below which a pivot or singular value counts as zero.
#[inline]
pub fn rank_tolerance<T: Float>(rows: usize, cols: usize) -> T {
    let size = T::from(rows.max(cols)).unwrap_or_else(T::max_value);
    T::epsilon() * size
}

impl FloatLinalg for f64 {
    #[inline]
    fn accumulate_normal_equations(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        gram: &mut [Self],
        atb: &mut [Self],
    ) {
        accumulate_normal_equations_simd(design, rhs, rows, cols, gram, atb);
    }
    #[inline]
    fn solve_cholesky(gram: &[Self], atb: &[Self], n: usize) -> Option<CholeskySolve<Self>> {
        nalgebra_backend::solve_cholesky(gram, atb, n)
    }
    #[inline]
    fn solve_qr(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_qr(design, rhs, rows, cols, rank_tolerance(rows, cols))
    }
    #[inline]
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_svd(design, rhs, rows, cols, rank_tolerance(rows, cols))
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn accumulate_normal_equations(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        gram: &mut [Self],
        atb: &mut [Self],
    ) {
        accumulate_normal_equations_scalar(design, rhs, rows, cols, gram, atb);
    }
    #[inline]
    fn solve_cholesky(gram: &[Self], atb: &[Self], n: usize) -> Option<CholeskySolve<Self>> {
        nalgebra_backend::solve_cholesky(gram, atb, n)
    }
    #[inline]
    fn solve_qr(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_qr(design, rhs, rows, cols, rank_tolerance(rows, cols))
    }
    #[inline]
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_svd(design, rhs, rows, cols, rank_tolerance(rows, cols))
    }
}

// ============================================================================
// Normal Equation Accumulation
// ============================================================================

/// Accumulate A'A and A'b one design row at a time.
pub fn accumulate_normal_equations_scalar<T: Float>(
    design: &[T],
    rhs: &[T],
    rows: usize,
    cols: usize,
    gram: &mut [T],
    atb: &mut [T],
) {
    for r in 0..rows {
        let row = &design[r * cols..(r + 1) * cols];
        let b = rhs[r];
        for j in 0..cols {
            let a_j = row[j];
            for k in j..cols {
                gram[j * cols + k] = gram[j * cols + k] + a_j * row[k];
            }
            atb[j] = atb[j] + a_j * b;
        }
    }

    mirror_upper(gram, cols);
}

/// Accumulate A'A and A'b two design rows per lane pair using SIMD.
pub fn accumulate_normal_equations_simd(
    design: &[f64],
    rhs: &[f64],
    rows: usize,
    cols: usize,
    gram: &mut [f64],
    atb: &mut [f64],
) {
    let mut s_gram = vec![f64x2::splat(0.0); cols * cols];
    let mut s_atb = vec![f64x2::splat(0.0); cols];

    let mut r = 0;
    while r + 2 <= rows {
        let row0 = &design[r * cols..(r + 1) * cols];
        let row1 = &design[(r + 1) * cols..(r + 2) * cols];
        let b = f64x2::new([rhs[r], rhs[r + 1]]);

        for j in 0..cols {
            let a_j = f64x2::new([row0[j], row1[j]]);
            for k in j..cols {
                s_gram[j * cols + k] += a_j * f64x2::new([row0[k], row1[k]]);
            }
            s_atb[j] += a_j * b;
        }
        r += 2;
    }

    for j in 0..cols {
        for k in j..cols {
            gram[j * cols + k] += s_gram[j * cols + k].reduce_add();
        }
        atb[j] += s_atb[j].reduce_add();
    }

    // Tail
    if r < rows {
        let row = &design[r * cols..(r + 1) * cols];
        let b = rhs[r];
        for j in 0..cols {
            for k in j..cols {
                gram[j * cols + k] += row[j] * row[k];
            }
            atb[j] += row[j] * b;
        }
    }

    mirror_upper(gram, cols);
}

/// Copy the upper triangle of a square row-major matrix into its lower triangle.
#[inline]
fn mirror_upper<T: Copy>(matrix: &mut [T], n: usize) {
    for j in 0..n {
        for k in 0..j {
            matrix[j * n + k] = matrix[k * n + j];
        }
    }
}

// ============================================================================
// Residuals
// ============================================================================

/// Compute `b - A c` for a row-major design matrix with compensated dot
/// products.
///
/// Each product and partial sum carries its rounding error (FMA two-product
/// and two-sum), so every entry is as accurate as if it were accumulated in
/// twice the working precision and then rounded once.
pub fn compensated_residuals<T: Float>(
    design: &[T],
    rhs: &[T],
    coefficients: &[T],
    cols: usize,
    residuals: &mut [T],
) {
    for ((r, row), &b) in residuals
        .iter_mut()
        .zip(design.chunks_exact(cols))
        .zip(rhs)
    {
        let mut sum = b;
        let mut error = T::zero();
        for (&a, &c) in row.iter().zip(coefficients) {
            let product = -a * c;
            let product_error = (-a).mul_add(c, -product);

            let next = sum + product;
            let z = next - sum;
            let sum_error = (sum - (next - z)) + (product - z);

            sum = next;
            error = error + product_error + sum_error;
        }
        *r = sum + error;
    }
}

/// Overwrite `out` with `A' v` for a row-major `rows x cols` matrix.
pub fn transpose_product<T: Float>(design: &[T], v: &[T], cols: usize, out: &mut [T]) {
    out.iter_mut().for_each(|o| *o = T::zero());
    for (row, &vr) in design.chunks_exact(cols).zip(v) {
        for (o, &a) in out.iter_mut().zip(row) {
            *o = *o + a * vr;
        }
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;
    #[cfg(feature = "std")]
    use std::vec::Vec;

    use super::CholeskySolve;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Solve the normal equations by Cholesky factorization.
    pub fn solve_cholesky<T: RealField + Copy>(
        gram: &[T],
        atb: &[T],
        n: usize,
    ) -> Option<CholeskySolve<T>> {
        let matrix = DMatrix::from_row_slice(n, n, gram);
        let rhs = DVector::from_column_slice(atb);

        let chol = matrix.cholesky()?;

        let l = chol.l_dirty();
        let mut max_diag = l[(0, 0)].abs();
        let mut min_diag = max_diag;
        for i in 1..n {
            let d = l[(i, i)].abs();
            if d > max_diag {
                max_diag = d;
            }
            if d < min_diag {
                min_diag = d;
            }
        }
        if min_diag <= T::zero() {
            return None;
        }
        let ratio = max_diag / min_diag;

        let solution = chol.solve(&rhs);
        Some(CholeskySolve {
            solution: solution.as_slice().to_vec(),
            condition: ratio * ratio,
        })
    }

    /// Solve the least-squares problem by Householder QR of the design matrix.
    pub fn solve_qr<T: RealField + Copy>(
        design: &[T],
        rhs: &[T],
        rows: usize,
        cols: usize,
        rank_tol: T,
    ) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let (q, r) = matrix.qr().unpack();

        let diag: Vec<T> = r.diagonal().iter().copied().map(|d| d.abs()).collect();
        let max_diag = diag
            .iter()
            .copied()
            .fold(T::zero(), |m, d| if d > m { d } else { m });
        if max_diag <= T::zero() || diag.iter().any(|&d| d <= max_diag * rank_tol) {
            return None;
        }

        let qtb = q.transpose() * b;
        r.solve_upper_triangular(&qtb)
            .map(|s| s.as_slice().to_vec())
    }

    /// Solve the least-squares problem by SVD, refusing rank-deficient systems.
    pub fn solve_svd<T: RealField + Copy>(
        design: &[T],
        rhs: &[T],
        rows: usize,
        cols: usize,
        rank_tol: T,
    ) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let max_sv = svd
            .singular_values
            .iter()
            .copied()
            .fold(T::zero(), |m, s| if s > m { s } else { m });
        let threshold = max_sv * rank_tol;
        if max_sv <= T::zero() || svd.rank(threshold) < cols {
            return None;
        }

        svd.solve(&b, threshold)
            .ok()
            .map(|s: DVector<T>| s.as_slice().to_vec())
    }
}
