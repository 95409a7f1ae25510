//! High-level API for least-squares polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configured fits and free functions for one-off fits with
//! default settings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Duplicate configuration is reported when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyfitBuilder`] via `Polyfit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.solver()`, etc.).
//! 3. Call `.build()` to get a [`PolyfitModel`], then `.fit()`, `.fit_fixed()`
//!    or `.fit_2d()`.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::polynomial::Univariate;
pub use crate::algorithms::polynomial::fixed::Fixed1D;
pub use crate::algorithms::polynomial::one_d::OneD;
pub use crate::algorithms::polynomial::two_d::TwoD;
pub use crate::algorithms::solver::SolverMethod;
pub use crate::engine::output::FitResult;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::math::binomial::n_choose_k;
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::scaling::Centering;
pub use crate::primitives::errors::PolyfitError;
pub use crate::primitives::matrix::Matrix2D;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring polynomial fits.
#[derive(Debug, Clone)]
pub struct PolyfitBuilder<T> {
    /// Degree of 1D fits, and of both axes of 2D fits unless `degrees` is set.
    pub degree: Option<usize>,

    /// Degrees `(x, y)` of 2D fits.
    pub degrees: Option<(usize, usize)>,

    /// Least-squares solver path.
    pub solver: Option<SolverMethod>,

    /// Expansion origin policy.
    pub centering: Option<Centering>,

    /// Attach residual diagnostics to results.
    pub return_diagnostics: Option<bool>,

    /// Attach residuals to results.
    pub return_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _float: PhantomData<T>,
}

impl<T: FloatLinalg> Default for PolyfitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> PolyfitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            degrees: None,
            solver: None,
            centering: None,
            return_diagnostics: None,
            return_residuals: None,
            duplicate_param: None,
            _float: PhantomData,
        }
    }

    /// Set the polynomial degree (default: 1).
    ///
    /// Also used for both axes of 2D fits unless `degrees` is set.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the degrees of 2D fits in x and y.
    pub fn degrees(mut self, degree_x: usize, degree_y: usize) -> Self {
        if self.degrees.is_some() {
            self.duplicate_param = Some("degrees");
        }
        self.degrees = Some((degree_x, degree_y));
        self
    }

    /// Set the least-squares solver.
    ///
    /// - `Adaptive` (default): Cholesky with QR and SVD fallbacks
    /// - `Cholesky`, `QR`, `SVD`: that factorization only
    pub fn solver(mut self, method: SolverMethod) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(method);
        self
    }

    /// Set the expansion origin policy of returned polynomials.
    pub fn centering(mut self, centering: Centering) -> Self {
        if self.centering.is_some() {
            self.duplicate_param = Some("centering");
        }
        self.centering = Some(centering);
        self
    }

    /// Include residual diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<PolyfitModel<T>, PolyfitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or(1);
        Ok(PolyfitModel {
            degree,
            degrees: self.degrees.unwrap_or((degree, degree)),
            config: FitConfig {
                solver: self.solver.unwrap_or_default(),
                centering: self.centering.unwrap_or_default(),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
            },
            _float: PhantomData,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated, immutable fit configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyfitModel<T> {
    degree: usize,
    degrees: (usize, usize),
    config: FitConfig,
    _float: PhantomData<T>,
}

impl<T: FloatLinalg> PolyfitModel<T> {
    /// Degree of 1D fits.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Degrees `(x, y)` of 2D fits.
    pub fn degrees(&self) -> (usize, usize) {
        self.degrees
    }

    /// Fit `y = p(x)` with the configured degree.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<OneD<T>, T>, PolyfitError> {
        FitExecutor::run_1d(x, y, self.degree, &self.config)
    }

    /// Fit `y = p(x)` with a polynomial of degree `N`, ignoring the configured degree.
    pub fn fit_fixed<const N: usize>(
        &self,
        x: &[T],
        y: &[T],
    ) -> Result<FitResult<Fixed1D<N, T>, T>, PolyfitError> {
        FitExecutor::run_1d(x, y, N, &self.config)?.try_map_polynomial(Fixed1D::try_from)
    }

    /// Fit `z = p(x, y)` over three equally shaped grids with the configured degrees.
    pub fn fit_2d(
        &self,
        x: &Matrix2D<T>,
        y: &Matrix2D<T>,
        z: &Matrix2D<T>,
    ) -> Result<FitResult<TwoD<T>, T>, PolyfitError> {
        FitExecutor::run_2d(x, y, z, self.degrees.0, self.degrees.1, &self.config)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Fit `y = p(x)` with a polynomial of the given degree using default settings.
pub fn fit_1d<T: FloatLinalg>(x: &[T], y: &[T], degree: usize) -> Result<OneD<T>, PolyfitError> {
    FitExecutor::run_1d(x, y, degree, &FitConfig::default()).map(FitResult::into_polynomial)
}

/// Fit `y = p(x)` with a polynomial of degree `N` using default settings.
pub fn fit_1d_fixed<const N: usize, T: FloatLinalg>(
    x: &[T],
    y: &[T],
) -> Result<Fixed1D<N, T>, PolyfitError> {
    let fitted = FitExecutor::run_1d(x, y, N, &FitConfig::default())?;
    Fixed1D::try_from(fitted.into_polynomial())
}

/// Fit `z = p(x, y)` with degrees `(degree_x, degree_y)` using default settings.
pub fn fit_2d<T: FloatLinalg>(
    x: &Matrix2D<T>,
    y: &Matrix2D<T>,
    z: &Matrix2D<T>,
    degree_x: usize,
    degree_y: usize,
) -> Result<TwoD<T>, PolyfitError> {
    FitExecutor::run_2d(x, y, z, degree_x, degree_y, &FitConfig::default())
        .map(FitResult::into_polynomial)
}
