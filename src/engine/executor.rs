//! Execution engine for polynomial fits.
//!
//! ## Purpose
//!
//! This module orchestrates a fit from raw samples to a polynomial value:
//! validation, normalization, design matrix assembly, the solve, conversion
//! of the coefficients back to the caller's coordinates, and optional
//! residual statistics.
//!
//! ## Design notes
//!
//! * Every call owns a fresh `FitBuffer`; nothing is cached between calls.
//! * Solving happens on normalized inputs. Coefficients come back about the
//!   sample center and are then re-expanded about the origin chosen by the
//!   centering policy.
//! * Generic over `FloatLinalg` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Back-conversion**: With `u = (x - c) / s`, a coefficient `a_k` of
//!   `u^k` becomes `a_k / s^k` for `(x - c)^k`.
//! * **Mean fit**: Degree 0 (or `(0, 0)`) is the mean of the observations.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing configuration (see `api`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::design::{MonomialTerms, TensorTerms, assemble_design};
use crate::algorithms::polynomial::one_d::OneD;
use crate::algorithms::polynomial::two_d::TwoD;
use crate::algorithms::solver::{Solution, SolverMethod};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::math::binomial::{shift_origin, shift_origin_2d};
use crate::math::linalg::FloatLinalg;
use crate::math::scaling::{Centering, Normalization};
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix2D;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration shared by 1D and 2D fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitConfig {
    /// Least-squares solver path.
    pub solver: SolverMethod,

    /// Expansion origin policy for the returned polynomial.
    pub centering: Centering,

    /// Attach `FitDiagnostics` to the result.
    pub return_diagnostics: bool,

    /// Attach the residual vector to the result.
    pub return_residuals: bool,
}

impl FitConfig {
    #[inline]
    fn needs_residuals(&self) -> bool {
        self.return_diagnostics || self.return_residuals || log::log_enabled!(log::Level::Debug)
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for polynomial fits.
pub struct FitExecutor;

impl FitExecutor {
    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Fit `y = p(x)` with a polynomial of the given degree.
    pub fn run_1d<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        degree: usize,
        config: &FitConfig,
    ) -> Result<FitResult<OneD<T>, T>, PolyfitError> {
        Validator::validate_samples(x, y)?;
        let n_coeffs = Validator::coefficients_1d(degree)?;
        let m = y.len();
        Validator::validate_system(m, n_coeffs)?;

        if degree == 0 {
            let polynomial = OneD::new(vec![mean(y)]);
            return Ok(Self::finish(polynomial, None, y, config, |p, i| {
                p.evaluate(x[i])
            }));
        }

        let norm = Normalization::from_samples(x);
        let generator = MonomialTerms { degree };

        let mut buffer = FitBuffer::new(m, 1, n_coeffs);
        buffer.prepare(m, 1, n_coeffs);
        for (u, &xi) in buffer.points.iter_mut().zip(x) {
            *u = norm.apply(xi);
        }
        buffer.rhs.copy_from_slice(y);
        assemble_design(&buffer.points, &generator, &mut buffer.design);

        let solution = config.solver.solve(&mut buffer, m, n_coeffs)?;

        // Coefficients of (x - center)^k
        let mut about_center = solution.coefficients.clone();
        let mut scale_power = T::one();
        for c in about_center.iter_mut() {
            *c = *c / scale_power;
            scale_power = scale_power * norm.scale;
        }

        let origin = config.centering.origin(&norm, degree);
        let coeffs = shift_origin(&about_center, origin - norm.center);
        let polynomial = OneD::with_origin(coeffs, origin);

        log::debug!(
            "1D fit: degree {} over {} samples via {} (center {}, scale {}, origin {})",
            degree,
            m,
            solution.method.name(),
            norm.center,
            norm.scale,
            origin
        );

        Ok(Self::finish(polynomial, Some(solution), y, config, |p, i| {
            p.evaluate(x[i])
        }))
    }

    /// Fit `z = p(x, y)` over three equally shaped sample grids.
    pub fn run_2d<T: FloatLinalg>(
        x: &Matrix2D<T>,
        y: &Matrix2D<T>,
        z: &Matrix2D<T>,
        degree_x: usize,
        degree_y: usize,
        config: &FitConfig,
    ) -> Result<FitResult<TwoD<T>, T>, PolyfitError> {
        Validator::validate_grids(x, y, z)?;
        let n_coeffs = Validator::coefficients_2d(degree_x, degree_y)?;
        let m = z.len();
        Validator::validate_system(m, n_coeffs)?;

        let (xs, ys, zs) = (x.as_slice(), y.as_slice(), z.as_slice());

        if degree_x == 0 && degree_y == 0 {
            let polynomial = TwoD::new(Matrix2D::from_fn(1, 1, |_, _| mean(zs)));
            return Ok(Self::finish(polynomial, None, zs, config, |p, i| {
                p.evaluate(xs[i], ys[i])
            }));
        }

        let norm_x = Normalization::from_samples(xs);
        let norm_y = Normalization::from_samples(ys);
        let generator = TensorTerms { degree_x, degree_y };

        let mut buffer = FitBuffer::new(m, 2, n_coeffs);
        buffer.prepare(m, 2, n_coeffs);
        for (i, uv) in buffer.points.chunks_exact_mut(2).enumerate() {
            uv[0] = norm_x.apply(xs[i]);
            uv[1] = norm_y.apply(ys[i]);
        }
        buffer.rhs.copy_from_slice(zs);
        assemble_design(&buffer.points, &generator, &mut buffer.design);

        let solution = config.solver.solve(&mut buffer, m, n_coeffs)?;

        // Coefficients of (x - cx)^i (y - cy)^j
        let about_center = Matrix2D::from_fn(degree_x + 1, degree_y + 1, |i, j| {
            let a = solution.coefficients[i * (degree_y + 1) + j];
            a / (norm_x.scale.powi(i as i32) * norm_y.scale.powi(j as i32))
        });

        let origin = config
            .centering
            .origin_2d(&norm_x, degree_x, &norm_y, degree_y);
        let table = shift_origin_2d(
            &about_center,
            origin.0 - norm_x.center,
            origin.1 - norm_y.center,
        );
        let polynomial = TwoD::with_origin(table, origin);

        log::debug!(
            "2D fit: degrees ({}, {}) over {} samples via {} (origin ({}, {}))",
            degree_x,
            degree_y,
            m,
            solution.method.name(),
            origin.0,
            origin.1
        );

        Ok(Self::finish(polynomial, Some(solution), zs, config, |p, i| {
            p.evaluate(xs[i], ys[i])
        }))
    }

    // ========================================================================
    // Result Assembly
    // ========================================================================

    fn finish<P, T, F>(
        polynomial: P,
        solution: Option<Solution<T>>,
        observed: &[T],
        config: &FitConfig,
        evaluate: F,
    ) -> FitResult<P, T>
    where
        T: FloatLinalg,
        F: Fn(&P, usize) -> T,
    {
        let (solver, condition_estimate) = match solution {
            Some(s) => (Some(s.method), s.condition_estimate),
            None => (None, None),
        };

        let mut diagnostics = None;
        let mut residuals = None;

        if config.needs_residuals() {
            let fitted: Vec<T> = (0..observed.len())
                .map(|i| evaluate(&polynomial, i))
                .collect();
            let diag = FitDiagnostics::compute(observed, &fitted);
            log::debug!(
                "residuals: mean |r| {:e}, rmse {:e}, max |r| {:e}",
                diag.mean_abs_residual,
                diag.rmse,
                diag.max_abs_residual
            );

            if config.return_residuals {
                residuals = Some(
                    observed
                        .iter()
                        .zip(&fitted)
                        .map(|(&o, &f)| o - f)
                        .collect(),
                );
            }
            if config.return_diagnostics {
                diagnostics = Some(diag);
            }
        }

        FitResult {
            polynomial,
            samples: observed.len(),
            solver,
            condition_estimate,
            diagnostics,
            residuals,
        }
    }
}

fn mean<T: Float>(values: &[T]) -> T {
    let n = T::from(values.len()).unwrap_or_else(T::one);
    values.iter().fold(T::zero(), |acc, &v| acc + v) / n
}
