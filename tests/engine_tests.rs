#![cfg(feature = "dev")]
//! Tests for input validation and the fit executor.
//!
//! ## Test Organization
//!
//! 1. **Sample Validation** - Empty, mismatched and non-finite inputs
//! 2. **Grid Validation** - Shape checks for 2D inputs
//! 3. **System Validation** - Coefficient counts and determinedness
//! 4. **Executor** - Configured 1D and 2D runs

use approx::assert_abs_diff_eq;

use polyfit_rs::internals::algorithms::solver::SolverMethod;
use polyfit_rs::internals::engine::executor::{FitConfig, FitExecutor};
use polyfit_rs::internals::engine::validator::Validator;
use polyfit_rs::internals::math::scaling::Centering;
use polyfit_rs::internals::primitives::errors::PolyfitError;
use polyfit_rs::internals::primitives::matrix::Matrix2D;

// ============================================================================
// Sample Validation Tests
// ============================================================================

/// Test valid 1D samples.
#[test]
fn test_validate_samples_ok() {
    assert!(Validator::validate_samples(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
}

/// Test that length mismatches are reported before emptiness and values.
#[test]
fn test_validate_samples_order_of_checks() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_samples(&empty, &[1.0]),
        Err(PolyfitError::DimensionMismatch { x_len: 0, y_len: 1 })
    );
    assert_eq!(
        Validator::validate_samples(&[1.0], &empty),
        Err(PolyfitError::DimensionMismatch { x_len: 1, y_len: 0 })
    );
    assert_eq!(
        Validator::validate_samples(&empty, &empty),
        Err(PolyfitError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_samples(&[1.0, f64::NAN], &[1.0]),
        Err(PolyfitError::DimensionMismatch { x_len: 2, y_len: 1 })
    );
}

/// Test that the first non-finite value is named.
#[test]
fn test_validate_finite() {
    let err = Validator::validate_finite(&[0.0, f64::INFINITY, f64::NAN], "z").unwrap_err();
    assert_eq!(err, PolyfitError::InvalidNumericValue("z[1]=inf".to_string()));
    assert!(Validator::validate_finite(&[1.0_f32, -2.0], "x").is_ok());
}

// ============================================================================
// Grid Validation Tests
// ============================================================================

/// Test grid shape checks.
#[test]
fn test_validate_grids() {
    let a = Matrix2D::<f64>::new(2, 3);
    let b = Matrix2D::<f64>::new(3, 2);
    let empty = Matrix2D::<f64>::new(0, 3);

    assert!(Validator::validate_grids(&a, &a, &a).is_ok());
    assert_eq!(
        Validator::validate_grids(&empty, &empty, &empty),
        Err(PolyfitError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_grids(&a, &a, &empty),
        Err(PolyfitError::GridShapeMismatch {
            grid: "z",
            expected: (2, 3),
            got: (0, 3)
        })
    );
    assert_eq!(
        Validator::validate_grids(&a, &b, &a),
        Err(PolyfitError::GridShapeMismatch {
            grid: "y",
            expected: (2, 3),
            got: (3, 2)
        })
    );

    let mut bad = a.clone();
    bad[(1, 2)] = f64::NAN;
    let err = Validator::validate_grids(&a, &a, &bad).unwrap_err();
    assert_eq!(err, PolyfitError::InvalidNumericValue("z[5]=NaN".to_string()));
}

// ============================================================================
// System Validation Tests
// ============================================================================

/// Test coefficient counts and overflow.
#[test]
fn test_coefficient_counts() {
    assert_eq!(Validator::coefficients_1d(3), Ok(4));
    assert_eq!(Validator::coefficients_2d(2, 3), Ok(12));
    assert!(matches!(
        Validator::coefficients_1d(usize::MAX),
        Err(PolyfitError::InvalidInput(_))
    ));
    assert!(matches!(
        Validator::coefficients_2d(usize::MAX / 2, 4),
        Err(PolyfitError::InvalidInput(_))
    ));
}

/// Test determinedness.
#[test]
fn test_validate_system() {
    assert!(Validator::validate_system(4, 4).is_ok());
    assert_eq!(
        Validator::validate_system(3, 4),
        Err(PolyfitError::UnderdeterminedSystem {
            samples: 3,
            coefficients: 4
        })
    );
}

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("degree")),
        Err(PolyfitError::DuplicateParameter { parameter: "degree" })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test a configured 1D run reports its solver and condition estimate.
#[test]
fn test_run_1d_reports_solver() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 3.0, 7.0, 13.0, 21.0];

    let result = FitExecutor::run_1d(&x, &y, 2, &FitConfig::default()).unwrap();
    assert_eq!(result.solver, Some(SolverMethod::Cholesky));
    assert!(result.condition_estimate.is_some_and(|c| c >= 1.0));
    assert!(result.diagnostics.is_none());

    // 1 + x + x^2
    let p = result.polynomial;
    assert_abs_diff_eq!(p[0], 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(p[1], 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(p[2], 1.0, epsilon = 1e-10);
}

/// Test that centering is applied to the returned polynomial.
#[test]
fn test_run_1d_centering() {
    let x = [10.0, 11.0, 12.0, 13.0];
    let y = [20.0, 22.0, 24.0, 26.0];
    let config = FitConfig {
        centering: Centering::Always,
        solver: SolverMethod::QR,
        ..FitConfig::default()
    };

    let result = FitExecutor::run_1d(&x, &y, 1, &config).unwrap();
    assert_eq!(result.solver, Some(SolverMethod::QR));
    assert_eq!(result.condition_estimate, None);
    assert_eq!(result.polynomial.origin(), 11.5);
    assert_abs_diff_eq!(result.polynomial[0], 23.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.polynomial[1], 2.0, epsilon = 1e-12);
}

/// Test a 2D run with residuals and diagnostics.
#[test]
fn test_run_2d_outputs() {
    let x = Matrix2D::from_fn(3, 4, |r, _| r as f64);
    let y = Matrix2D::from_fn(3, 4, |_, c| c as f64);
    let z = Matrix2D::from_fn(3, 4, |r, c| 1.0 + r as f64 * c as f64);
    let config = FitConfig {
        return_diagnostics: true,
        return_residuals: true,
        ..FitConfig::default()
    };

    let result = FitExecutor::run_2d(&x, &y, &z, 1, 1, &config).unwrap();
    let residuals = result.residuals.as_ref().expect("residuals requested");
    let diagnostics = result.diagnostics.expect("diagnostics requested");

    assert_eq!(residuals.len(), 12);
    assert!(residuals.iter().all(|r| r.abs() < 1e-10));
    assert_eq!(diagnostics.samples, 12);
    assert_abs_diff_eq!(diagnostics.r_squared, 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(result.polynomial.evaluate(1.5, 2.5), 1.0 + 3.75, epsilon = 1e-10);
}
