//! # polyfit-rs: Least-Squares Polynomial Fitting for Rust
//!
//! Ordinary least-squares fitting of polynomials in one variable
//! (`y = p(x)`) and two variables (`z = p(x, y)`), returning polynomial
//! values that can be evaluated, compared, differentiated and re-expanded.
//!
//! ## What does it do?
//!
//! Given observed samples and a maximum degree, the crate computes the
//! polynomial coefficients that minimize the sum of squared residuals:
//!
//! ```text
//! minimize  sum_i ( p(x_i) - y_i )^2          (1D, monomial basis)
//! minimize  sum_i ( p(x_i, y_i) - z_i )^2     (2D, tensor-product basis)
//! ```
//!
//! **Key properties:**
//! - Stable on data far from zero (offsets of 1e4 and more)
//! - Cholesky on the normal equations, with QR and SVD fallbacks and
//!   iterative refinement
//! - Fixed-degree polynomials without heap storage
//! - Exact and tolerance-based comparison across polynomial types
//! - `no_std` support (with `alloc`)
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // Four samples of p(x) = 5 - 4x + 3x^2 - x^3
//! let x = [1.0, -1.0, 2.0, -2.0];
//! let y = [3.0, 13.0, 1.0, 33.0];
//!
//! let p = fit_1d(&x, &y, 3)?;
//!
//! assert_eq!(p, vec![5.0, -4.0, 3.0, -1.0]);
//! assert_eq!(p.evaluate(3.0), -7.0);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let y: Vec<f64> = x.iter().map(|&v| 2.0 + 0.5 * v - 0.25 * v * v).collect();
//!
//! // Build model with all features enabled
//! let model = Polyfit::new()
//!     .degree(2)                    // Polynomial degree
//!     .solver(Adaptive)             // Cholesky, falling back to QR / SVD
//!     .centering(Centering::Auto)   // Expansion origin policy
//!     .return_diagnostics()         // Residual statistics
//!     .return_residuals()           // Residual vector
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! println!("{}", result);
//!
//! let diagnostics = result.diagnostics.expect("requested");
//! assert!(diagnostics.rmse < 1e-9);
//! assert_eq!(result.residuals.map(|r| r.len()), Some(8));
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Samples: 8
//!   Solver:  Cholesky
//!   Condition estimate: 1.2e1
//!
//! Fit Diagnostics:
//!   Samples:        8
//!   Mean |resid|:   3.1e-16
//!   ...
//!
//! Polynomial:
//!   2 + 0.5*x^1 + -0.25*x^2
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fit returns `Result<_, PolyfitError>`:
//!
//! - **`DimensionMismatch`** / **`GridShapeMismatch`**: inputs of different lengths or shapes.
//! - **`UnderdeterminedSystem`**: fewer samples than coefficients.
//! - **`SingularSystem`**: no stable solution (e.g. repeated `x` values only).
//! - **`EmptyInput`** / **`InvalidNumericValue`**: empty or non-finite samples.
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! match fit_1d(&[1.0, 2.0], &[1.0, 4.0], 2) {
//!     Err(PolyfitError::UnderdeterminedSystem { samples, coefficients }) => {
//!         assert_eq!((samples, coefficients), (2, 3));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Data Far From Zero
//!
//! Samples are normalized to `[-1, 1]` before the solve. The returned
//! polynomial remembers the point it is expanded about:
//!
//! ```text
//! p(x) = sum_k c[k] * (x - origin)^k
//! ```
//!
//! With the default `Centering::Auto` the origin is `0`, so coefficients are
//! plain monomial coefficients, as long as expanding about zero amplifies
//! rounding errors by no more than `eps^(-1/4)`. The amplification grows
//! like `(1 + |center| / half_range)^degree`. Past that limit the origin is
//! the center of the sample range, because a monomial expansion about zero
//! cannot represent such a fit accurately in floating point. `to_monomial()`
//! converts on request.
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x: Vec<f64> = (0..10).map(|i| 10_000.0 + 0.5 * i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&v| 1.0 + 0.5 * (v - 10_000.0).powi(2)).collect();
//!
//! let p = fit_1d(&x, &y, 2)?;
//! assert_eq!(p.origin(), 10_002.25);
//!
//! let mean_abs = x.iter().zip(&y).map(|(&xi, &yi)| (p.evaluate(xi) - yi).abs()).sum::<f64>() / 10.0;
//! assert!(mean_abs < 1e-6);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Two Variables
//!
//! Grids need not be regular or axis-aligned; `(x[(r, c)], y[(r, c)])` maps
//! to `z[(r, c)]`.
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = Matrix2D::from_fn(4, 4, |r, c| r as f64 + 0.1 * c as f64);
//! let y = Matrix2D::from_fn(4, 4, |r, c| c as f64 - 0.2 * r as f64);
//! let z = Matrix2D::from_fn(4, 4, |r, c| {
//!     let (xv, yv) = (x[(r, c)], y[(r, c)]);
//!     1.0 + 2.0 * xv - yv + 0.5 * xv * yv
//! });
//!
//! let p = fit_2d(&x, &y, &z, 1, 1)?;
//! assert!((p.evaluate(0.5, 0.5) - 1.625).abs() < 1e-9);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Fixed Degree and Equality
//!
//! `Fixed1D<N>` holds its `N + 1` coefficients inline. Equality is exact and
//! works across `OneD`, `Fixed1D` and plain coefficient sequences:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [1.0, 2.0, 5.0, 10.0, 17.0];
//!
//! let fixed = fit_1d_fixed::<2, f64>(&x, &y)?;
//! let dynamic = fit_1d(&x, &y, 2)?;
//! assert_eq!(fixed, dynamic);
//!
//! let direct = OneD::new(vec![1.0, 0.0, 1.0]);
//! assert_eq!(direct, vec![1.0, 0.0, 1.0]);
//! assert_ne!(direct, vec![1.0, 0.0, 2.0]);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default     | Options                              | Description                          |
//! |------------------------|-------------|--------------------------------------|--------------------------------------|
//! | **degree**             | 1           | [0, ∞)                               | 1D degree, default for both 2D axes  |
//! | **degrees**            | `(d, d)`    | [0, ∞) x [0, ∞)                      | 2D degrees in x and y                |
//! | **solver**             | `Adaptive`  | `Adaptive`, `Cholesky`, `QR`, `SVD`  | Least-squares factorization          |
//! | **centering**          | `Auto`      | `Auto`, `Always`, `Never`            | Expansion origin of results          |
//! | **return_diagnostics** | false       | true/false                           | Attach `FitDiagnostics`              |
//! | **return_residuals**   | false       | true/false                           | Attach residual vector               |
//!
//! Setting a parameter twice makes `build()` fail with
//! `PolyfitError::DuplicateParameter`.
//!
//! ## Logging
//!
//! Solver choices, fallbacks and residual summaries are reported through the
//! [`log`](https://docs.rs/log) facade at `debug` level (`warn` when the SVD
//! fallback is needed). Install any logger to see them.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [0.0_f32, 1.0, 2.0, 3.0];
//! let y = [1.0_f32, 3.0, 5.0, 7.0];
//! let line = fit_1d_fixed::<1, f32>(&x, &y)?;
//! assert!((line.evaluate(4.0) - 9.0).abs() < 1e-3);
//! # Result::<(), PolyfitError>::Ok(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the `Matrix2D` container and per-fit scratch
// buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the linear algebra backend, sample normalization and binomial
// origin shifts.
mod math;

// Layer 3: Algorithms - polynomial types and the least-squares solve.
//
// Contains `OneD`, `Fixed1D`, `TwoD`, design matrix assembly and the
// solver pipeline.
mod algorithms;

// Layer 4: Evaluation - residual diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the 1D/2D fit drivers and result assembly.
mod engine;

// High-level fluent API for polynomial fitting.
//
// Provides the `Polyfit` builder and the `fit_1d`, `fit_1d_fixed` and
// `fit_2d` functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Centering, FitDiagnostics, FitResult, Fixed1D, FloatLinalg, Matrix2D, OneD,
        PolyfitBuilder as Polyfit, PolyfitError, PolyfitModel,
        SolverMethod::{self, Adaptive, Cholesky, QR, SVD},
        TwoD, Univariate, fit_1d, fit_1d_fixed, fit_2d, n_choose_k,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
