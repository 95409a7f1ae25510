//! Least-Squares Solver Pipeline
//!
//! ## Purpose
//!
//! This module solves `min ||A c - b||` for an assembled design matrix and
//! reports which factorization produced the answer.
//!
//! ## Design notes
//!
//! * **Adaptive**: Normal equations + Cholesky first (fast, SIMD-accumulated
//!   for `f64`). The result is accepted when the condition estimate stays
//!   below `1 / sqrt(eps)`; beyond that the normal equations have lost half
//!   the available digits and the design matrix is factored directly.
//! * **Fallback order**: Cholesky, then Householder QR, then SVD. A system
//!   that every path rejects is reported as singular, never approximated.
//! * **Explicit methods**: `Cholesky`, `QR` and `SVD` run only their own path.
//! * **Refinement**: Every solution gets up to three sweeps of iterative
//!   refinement against compensated residuals, reusing the path that solved
//!   it. An exactly representable solution is usually recovered bit for bit.
//!
//! ## Invariants
//!
//! * A returned solution has exactly `cols` finite coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{FloatLinalg, compensated_residuals, transpose_product};
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Solver Method
// ============================================================================

/// Factorization used to solve the least-squares system.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolverMethod {
    /// Cholesky on the normal equations, falling back to QR and then SVD
    /// when the system is ill-conditioned (default).
    #[default]
    Adaptive,

    /// Cholesky factorization of the normal equations only.
    Cholesky,

    /// Householder QR of the design matrix only.
    QR,

    /// Singular value decomposition of the design matrix only.
    SVD,
}

impl SolverMethod {
    /// Short name used in logs and summaries.
    pub const fn name(&self) -> &'static str {
        match self {
            SolverMethod::Adaptive => "Adaptive",
            SolverMethod::Cholesky => "Cholesky",
            SolverMethod::QR => "QR",
            SolverMethod::SVD => "SVD",
        }
    }
}

// ============================================================================
// Solution
// ============================================================================

/// Coefficients produced by a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Solution vector, one entry per design column.
    pub coefficients: Vec<T>,

    /// Path that produced the solution (never `Adaptive`).
    pub method: SolverMethod,

    /// Condition estimate of the normal matrix, when the Cholesky path ran.
    pub condition_estimate: Option<T>,
}

// ============================================================================
// Solve
// ============================================================================

impl SolverMethod {
    /// Solve the system held in `buffer.design` (`rows x cols`) and `buffer.rhs`.
    ///
    /// The normal-equation slots of `buffer` must be zeroed beforehand. The
    /// factorization's answer is iteratively refined before it is returned.
    pub fn solve<T: FloatLinalg>(
        &self,
        buffer: &mut FitBuffer<T>,
        rows: usize,
        cols: usize,
    ) -> Result<Solution<T>, PolyfitError> {
        let mut solution = self.factor_and_solve(buffer, rows, cols)?;
        refine(buffer, rows, cols, &mut solution);
        Ok(solution)
    }

    fn factor_and_solve<T: FloatLinalg>(
        &self,
        buffer: &mut FitBuffer<T>,
        rows: usize,
        cols: usize,
    ) -> Result<Solution<T>, PolyfitError> {
        match self {
            SolverMethod::Adaptive => solve_adaptive(buffer, rows, cols),
            SolverMethod::Cholesky => {
                let (solution, condition) =
                    cholesky(buffer, rows, cols).ok_or(PolyfitError::SingularSystem)?;
                Ok(Solution {
                    coefficients: solution,
                    method: SolverMethod::Cholesky,
                    condition_estimate: Some(condition),
                })
            }
            SolverMethod::QR => qr(buffer, rows, cols)
                .map(|c| direct(c, SolverMethod::QR))
                .ok_or(PolyfitError::SingularSystem),
            SolverMethod::SVD => svd(buffer, rows, cols)
                .map(|c| direct(c, SolverMethod::SVD))
                .ok_or(PolyfitError::SingularSystem),
        }
    }
}

fn solve_adaptive<T: FloatLinalg>(
    buffer: &mut FitBuffer<T>,
    rows: usize,
    cols: usize,
) -> Result<Solution<T>, PolyfitError> {
    let threshold = T::one() / T::epsilon().sqrt();

    let mut condition_estimate = None;
    match cholesky(buffer, rows, cols) {
        Some((solution, condition)) if condition <= threshold => {
            return Ok(Solution {
                coefficients: solution,
                method: SolverMethod::Cholesky,
                condition_estimate: Some(condition),
            });
        }
        Some((_, condition)) => {
            log::debug!(
                "normal equations ill-conditioned (estimate {}), retrying with QR",
                condition
            );
            condition_estimate = Some(condition);
        }
        None => log::debug!("Cholesky factorization failed, retrying with QR"),
    }

    if let Some(solution) = qr(buffer, rows, cols) {
        return Ok(Solution {
            coefficients: solution,
            method: SolverMethod::QR,
            condition_estimate,
        });
    }

    log::warn!("QR found a rank-deficient design matrix, retrying with SVD");
    if let Some(solution) = svd(buffer, rows, cols) {
        return Ok(Solution {
            coefficients: solution,
            method: SolverMethod::SVD,
            condition_estimate,
        });
    }

    Err(PolyfitError::SingularSystem)
}

// ============================================================================
// Iterative Refinement
// ============================================================================

/// Upper bound on refinement sweeps per solve.
const MAX_REFINEMENT_SWEEPS: usize = 3;

/// Improve `solution` by solving `A d = b - A c` with the factorization that
/// produced it and applying `c += d`.
///
/// Residuals are computed with compensated dot products. Stops once the
/// residual vanishes, a correction no longer changes any coefficient, or the
/// corrections stop shrinking by at least half.
fn refine<T: FloatLinalg>(
    buffer: &mut FitBuffer<T>,
    rows: usize,
    cols: usize,
    solution: &mut Solution<T>,
) {
    let two = T::one() + T::one();
    let mut previous_step = T::infinity();

    for sweep in 0..MAX_REFINEMENT_SWEEPS {
        compensated_residuals(
            &buffer.design,
            &buffer.rhs,
            &solution.coefficients,
            cols,
            &mut buffer.residual,
        );
        if buffer.residual.iter().all(|&r| r == T::zero()) {
            break;
        }

        let correction = match solution.method {
            SolverMethod::QR => T::solve_qr(&buffer.design, &buffer.residual, rows, cols),
            SolverMethod::SVD => T::solve_svd(&buffer.design, &buffer.residual, rows, cols),
            SolverMethod::Cholesky | SolverMethod::Adaptive => {
                transpose_product(&buffer.design, &buffer.residual, cols, &mut buffer.atb);
                T::solve_cholesky(&buffer.gram, &buffer.atb, cols).map(|s| s.solution)
            }
        };
        let Some(correction) = correction.filter(|d| all_finite(d)) else {
            break;
        };

        let step = correction
            .iter()
            .fold(T::zero(), |m, d| if d.abs() > m { d.abs() } else { m });
        if step > previous_step / two {
            log::debug!("refinement stalled after {} sweep(s)", sweep);
            break;
        }
        previous_step = step;

        let mut changed = false;
        for (c, &d) in solution.coefficients.iter_mut().zip(&correction) {
            let next = *c + d;
            changed |= next != *c;
            *c = next;
        }
        if !changed {
            break;
        }
    }
}

#[inline]
fn direct<T>(coefficients: Vec<T>, method: SolverMethod) -> Solution<T> {
    Solution {
        coefficients,
        method,
        condition_estimate: None,
    }
}

fn cholesky<T: FloatLinalg>(buffer: &mut FitBuffer<T>, rows: usize, cols: usize) -> Option<(Vec<T>, T)> {
    T::accumulate_normal_equations(
        &buffer.design,
        &buffer.rhs,
        rows,
        cols,
        &mut buffer.gram,
        &mut buffer.atb,
    );
    let solved = T::solve_cholesky(&buffer.gram, &buffer.atb, cols)?;
    all_finite(&solved.solution).then_some((solved.solution, solved.condition))
}

fn qr<T: FloatLinalg>(buffer: &FitBuffer<T>, rows: usize, cols: usize) -> Option<Vec<T>> {
    T::solve_qr(&buffer.design, &buffer.rhs, rows, cols).filter(|c| all_finite(c))
}

fn svd<T: FloatLinalg>(buffer: &FitBuffer<T>, rows: usize, cols: usize) -> Option<Vec<T>> {
    T::solve_svd(&buffer.design, &buffer.rhs, rows, cols).filter(|c| all_finite(c))
}

#[inline]
fn all_finite<T: Float>(values: &[T]) -> bool {
    values.iter().all(|v| v.is_finite())
}
