//! Design Matrix Assembly
//!
//! ## Purpose
//!
//! This module builds the least-squares design matrix from normalized sample
//! coordinates, one row per sample and one column per monomial term.
//!
//! ## Design notes
//!
//! * Term generation is a strategy trait so the same assembly loop serves
//!   1D Vandermonde rows and 2D tensor-product rows.
//! * Powers are built by repeated multiplication; inputs are normalized to
//!   `[-1, 1]` so no column overflows.
//!
//! ## Key concepts
//!
//! * **MonomialTerms**: `1, u, u^2, ..., u^d`.
//! * **TensorTerms**: `u^i v^j` for `0 <= i <= dx`, `0 <= j <= dy`, column
//!   `i * (dy + 1) + j`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Term Generators (Strategy Pattern)
// ============================================================================

/// Trait for generating polynomial terms for a given point.
/// This abstracts the dimensionality and degree logic from the assembly loop.
pub trait TermGenerator<T: Float> {
    /// Number of coordinates per point.
    fn dimensions(&self) -> usize;

    /// Returns the number of coefficients (terms) generated.
    fn n_coeffs(&self) -> usize;

    /// Generates terms for a single point.
    /// Writes terms into `out`, which must have length >= `n_coeffs()`.
    fn generate(&self, point: &[T], out: &mut [T]);
}

/// Generator for univariate Vandermonde rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonomialTerms {
    /// Highest power.
    pub degree: usize,
}

impl<T: Float> TermGenerator<T> for MonomialTerms {
    #[inline(always)]
    fn dimensions(&self) -> usize {
        1
    }

    #[inline(always)]
    fn n_coeffs(&self) -> usize {
        self.degree + 1
    }

    #[inline(always)]
    fn generate(&self, point: &[T], out: &mut [T]) {
        let u = point[0];
        let mut power = T::one();
        for term in out.iter_mut().take(self.degree + 1) {
            *term = power;
            power = power * u;
        }
    }
}

/// Generator for bivariate tensor-product rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorTerms {
    /// Highest power of the first coordinate.
    pub degree_x: usize,
    /// Highest power of the second coordinate.
    pub degree_y: usize,
}

impl<T: Float> TermGenerator<T> for TensorTerms {
    #[inline(always)]
    fn dimensions(&self) -> usize {
        2
    }

    #[inline(always)]
    fn n_coeffs(&self) -> usize {
        (self.degree_x + 1) * (self.degree_y + 1)
    }

    #[inline(always)]
    fn generate(&self, point: &[T], out: &mut [T]) {
        let (u, v) = (point[0], point[1]);
        let stride = self.degree_y + 1;

        let mut px = T::one();
        for i in 0..=self.degree_x {
            let row = &mut out[i * stride..(i + 1) * stride];
            let mut term = px;
            for slot in row.iter_mut() {
                *slot = term;
                term = term * v;
            }
            px = px * u;
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Fill a row-major design matrix from interleaved points.
///
/// `points` holds `dimensions()` coordinates per sample and `design` must hold
/// `n_samples * n_coeffs()` values.
pub fn assemble_design<T: Float, G: TermGenerator<T>>(points: &[T], generator: &G, design: &mut [T]) {
    let dims = generator.dimensions();
    let n_coeffs = generator.n_coeffs();

    for (point, row) in points
        .chunks_exact(dims)
        .zip(design.chunks_exact_mut(n_coeffs))
    {
        generator.generate(point, row);
    }
}
