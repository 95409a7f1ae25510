//! Tests for the public fitting API.
//!
//! These tests exercise the crate exactly as a user would, through the
//! prelude only:
//! - Free functions (`fit_1d`, `fit_1d_fixed`, `fit_2d`)
//! - The `Polyfit` builder and its validation
//! - Solver selection and centering policies
//!
//! ## Test Organization
//!
//! 1. **Exact 1D Fits** - Data generated by a known polynomial
//! 2. **Data Far From Zero** - Offsets of 1e4 and more
//! 3. **Least Squares** - Overdetermined, noisy systems
//! 4. **2D Fits** - Small hand-checked grid and a large offset grid
//! 5. **Builder** - Defaults, duplicates, outputs
//! 6. **Solvers** - Every path agrees on well-conditioned data
//! 7. **Errors** - Invalid inputs and degenerate systems

use approx::{assert_abs_diff_eq, assert_relative_eq};

use polyfit_rs::prelude::*;

fn cubic_samples() -> ([f64; 4], [f64; 4]) {
    // p(x) = 5 - 4x + 3x^2 - x^3
    ([1.0, -1.0, 2.0, -2.0], [3.0, 13.0, 1.0, 33.0])
}

fn mean_abs_residual<P: Univariate<f64>>(p: &P, x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| (p.evaluate(xi) - yi).abs())
        .sum::<f64>()
        / x.len() as f64
}

// ============================================================================
// Exact 1D Fits
// ============================================================================

/// Test recovery of a cubic from four samples.
#[test]
fn test_fit_1d_recovers_cubic() {
    let (x, y) = cubic_samples();
    let p = fit_1d(&x, &y, 3).unwrap();

    assert_eq!(p.order(), 3);
    assert_eq!(p.origin(), 0.0);

    let truth = vec![5.0, -4.0, 3.0, -1.0];
    assert_eq!(p, truth);
    assert_eq!(p, OneD::new(truth.clone()));
    assert_eq!(p, fit_1d_fixed::<3, f64>(&x, &y).unwrap());
}

/// Test that every solver path recovers the cubic coefficients exactly.
#[test]
fn test_fit_1d_exact_on_every_solver() {
    let (x, y) = cubic_samples();
    let truth = [5.0, -4.0, 3.0, -1.0];

    for method in [Adaptive, Cholesky, QR, SVD] {
        let model = Polyfit::new().degree(3).solver(method).build().unwrap();
        let p = model.fit(&x, &y).unwrap().polynomial;
        assert_eq!(p, truth, "solver {}", method.name());
    }
}

/// Test that model, free-function and fixed-degree fits agree exactly.
#[test]
fn test_fit_1d_entry_points_agree() {
    let (x, y) = cubic_samples();

    let free = fit_1d(&x, &y, 3).unwrap();
    let model = Polyfit::new().degree(3).build().unwrap();
    let configured = model.fit(&x, &y).unwrap().into_polynomial();
    let fixed = fit_1d_fixed::<3, f64>(&x, &y).unwrap();

    assert_eq!(free, configured);
    assert_eq!(fixed, free);
    assert_eq!(free, fixed);

    let from_model = model.fit_fixed::<3>(&x, &y).unwrap().polynomial;
    assert_eq!(from_model, fixed);
}

/// Test that a fit evaluates to the observations it interpolates.
#[test]
fn test_fit_1d_interpolates_samples() {
    let (x, y) = cubic_samples();
    let p = fit_1d(&x, &y, 3).unwrap();

    for (&xi, &yi) in x.iter().zip(&y) {
        assert_abs_diff_eq!(p.evaluate(xi), yi, epsilon = 1e-11);
    }
    assert_abs_diff_eq!(p.evaluate(3.0), -7.0, epsilon = 1e-10);
}

/// Test that degree 0 yields the mean of the observations.
#[test]
fn test_fit_1d_degree_zero_is_mean() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 4.0, 9.0];
    let p = fit_1d(&x, &y, 0).unwrap();

    assert_eq!(p.order(), 0);
    assert_relative_eq!(p[0], 4.0);
    assert_relative_eq!(p.evaluate(100.0), 4.0);
}

/// Test that a single sample supports a degree 0 fit.
#[test]
fn test_fit_1d_single_sample() {
    let p = fit_1d(&[3.0], &[7.5], 0).unwrap();
    assert_eq!(p, vec![7.5]);
}

/// Test fitting with single precision.
#[test]
fn test_fit_1d_f32() {
    let x = [0.0_f32, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f32> = x.iter().map(|&v| 1.0 - 2.0 * v + 0.5 * v * v).collect();
    let p = fit_1d(&x, &y, 2).unwrap();

    assert_abs_diff_eq!(p.evaluate(2.5), 1.0 - 5.0 + 3.125, epsilon = 1e-3);
}

// ============================================================================
// Data Far From Zero
// ============================================================================

/// Test the cubic fixture shifted by 1e4.
///
/// Raw monomial coefficients cannot represent this fit accurately; the
/// result is expanded about the sample center instead.
#[test]
fn test_fit_1d_large_offset() {
    const OFFSET: f64 = 10_000.0;
    let (x, y) = cubic_samples();
    let shifted: Vec<f64> = x.iter().map(|&v| v + OFFSET).collect();

    let near = fit_1d(&x, &y, 3).unwrap();
    let far = fit_1d(&shifted, &y, 3).unwrap();

    assert_eq!(far.origin(), OFFSET);
    assert!(mean_abs_residual(&near, &x, &y) < 1e-9);
    assert!(mean_abs_residual(&far, &shifted, &y) < 1e-9);

    // Same function, translated
    for &t in &[-2.0, -0.5, 0.0, 1.25, 2.0] {
        assert_abs_diff_eq!(far.evaluate(t + OFFSET), near.evaluate(t), epsilon = 1e-9);
    }
}

/// Test a quadratic sampled around 1e6.
#[test]
fn test_fit_1d_very_large_offset() {
    let x: Vec<f64> = (0..20).map(|i| 1.0e6 + 0.25 * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| {
            let t = v - 1.0e6;
            2.0 - 3.0 * t + 0.75 * t * t
        })
        .collect();

    let p = fit_1d(&x, &y, 2).unwrap();
    assert!(mean_abs_residual(&p, &x, &y) < 1e-8);

    // Coefficients about the center are well scaled
    let about_start = p.recenter(1.0e6);
    assert_abs_diff_eq!(about_start[0], 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(about_start[1], -3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(about_start[2], 0.75, epsilon = 1e-6);
}

/// Test that `Centering::Never` still produces monomial coefficients.
#[test]
fn test_centering_never_returns_monomial() {
    let x: Vec<f64> = (0..6).map(|i| 100.0 + i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| 3.0 + 0.5 * v).collect();

    let model = Polyfit::new()
        .degree(1)
        .centering(Centering::Never)
        .build()
        .unwrap();
    let p = model.fit(&x, &y).unwrap().polynomial;

    assert_eq!(p.origin(), 0.0);
    assert_abs_diff_eq!(p[0], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p[1], 0.5, epsilon = 1e-11);
}

/// Test that `Centering::Always` expands about the sample center.
#[test]
fn test_centering_always_uses_center() {
    let x = [-1.0, 0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 0.0, 1.0, 4.0, 9.0];

    let always = Polyfit::new()
        .degree(2)
        .centering(Centering::Always)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap()
        .polynomial;
    let auto = fit_1d(&x, &y, 2).unwrap();

    assert_eq!(always.origin(), 1.0);
    assert_eq!(auto.origin(), 0.0);
    assert!(always.approx_eq(&auto, 1e-10));
    assert!(always.to_monomial().approx_eq(&[0.0, 0.0, 1.0][..], 1e-10));
}

/// Test that moderate offsets keep plain monomial coefficients.
#[test]
fn test_centering_auto_keeps_monomial_near_zero() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 7.0, 9.0];

    let p = fit_1d(&x, &y, 1).unwrap();

    assert_eq!(p.origin(), 0.0);
    assert_abs_diff_eq!(p[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p[1], 2.0, epsilon = 1e-12);
    assert!(p.approx_eq(&[1.0, 2.0][..], 1e-12));

    // A cubic over a range a hundred half-widths from zero moves to the center
    let far: Vec<f64> = (0..8).map(|i| 100.0 + i as f64).collect();
    let cubic: Vec<f64> = far.iter().map(|&v| (v - 103.5).powi(3)).collect();
    assert_eq!(fit_1d(&far, &cubic, 3).unwrap().origin(), 103.5);
}

// ============================================================================
// Least Squares
// ============================================================================

/// Test a line through noisy samples against the closed-form solution.
#[test]
fn test_fit_1d_least_squares_line() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.1, 2.9, 5.2, 6.8, 9.1];

    // Closed form: slope = Sxy / Sxx, intercept = mean(y) - slope * mean(x)
    let mx = 2.0;
    let my = y.iter().sum::<f64>() / 5.0;
    let sxy: f64 = x.iter().zip(&y).map(|(&a, &b)| (a - mx) * (b - my)).sum();
    let sxx: f64 = x.iter().map(|&a| (a - mx) * (a - mx)).sum();
    let slope = sxy / sxx;
    let intercept = my - slope * mx;

    let p = fit_1d(&x, &y, 1).unwrap();
    assert_relative_eq!(p[1], slope, epsilon = 1e-10);
    assert_relative_eq!(p[0], intercept, epsilon = 1e-10);
}

/// Test that residuals of a least-squares fit are orthogonal to the design columns.
#[test]
fn test_fit_1d_residuals_orthogonal() {
    let x: Vec<f64> = (0..25).map(|i| -3.0 + 0.25 * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &v)| v.sin() + if i % 2 == 0 { 0.05 } else { -0.05 })
        .collect();

    let result = Polyfit::new()
        .degree(3)
        .return_residuals()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let residuals = result.residuals.expect("residuals requested");

    for k in 0..=3 {
        let dot: f64 = x.iter().zip(&residuals).map(|(&v, &r)| v.powi(k) * r).sum();
        assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-9);
    }
}

// ============================================================================
// 2D Fits
// ============================================================================

/// Test a bilinear fit over a small irregular grid.
#[test]
fn test_fit_2d_small_grid() {
    let x = Matrix2D::from_rows(&[
        vec![1.0, 1.0, 0.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
    ])
    .unwrap();
    let y = Matrix2D::from_rows(&[
        vec![1.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();
    let z = Matrix2D::from_rows(&[
        vec![1.0, 0.16, 0.0],
        vec![0.3, 1.0, 0.0],
        vec![0.0, 0.0, 0.85],
    ])
    .unwrap();

    let p = fit_2d(&x, &y, &z, 1, 1).unwrap();

    assert_eq!((p.order_x(), p.order_y()), (1, 1));
    assert_eq!(p.origin(), (0.0, 0.0));
    assert_abs_diff_eq!(p[(0, 0)], 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(p[(0, 1)], 0.15, epsilon = 1e-10);
    assert_abs_diff_eq!(p[(1, 0)], 0.08, epsilon = 1e-10);
    assert_abs_diff_eq!(p[(1, 1)], 0.4825, epsilon = 1e-10);
}

/// Test a cubic surface sampled on a grid far from zero.
#[test]
fn test_fit_2d_large_offset_grid() {
    let truth = TwoD::from_row_major(
        3,
        3,
        &[
            -1.021e-12, 7.5, 2.2, 5.5, //
            0.88, 4.825, 0.52, 0.69, //
            5.5, 1.0, 0.62, 1.01, //
            0.012, 6.32, 1.56, 0.376,
        ],
    )
    .unwrap();

    let x = Matrix2D::from_fn(9, 9, |i, _| 25_000.0 + i as f64 * 2_134.0);
    let y = Matrix2D::from_fn(9, 9, |_, j| 42_000.0 + j as f64 * 3_214.0);
    let z = Matrix2D::from_fn(9, 9, |i, j| truth.evaluate(i as f64, j as f64));

    let result = Polyfit::new()
        .degrees(5, 5)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit_2d(&x, &y, &z)
        .unwrap();

    assert_eq!(result.samples, 81);
    assert_eq!((result.polynomial.order_x(), result.polynomial.order_y()), (5, 5));

    let diagnostics = result.diagnostics.expect("diagnostics requested");
    assert!(diagnostics.mse < 1e-10, "mse = {}", diagnostics.mse);
}

/// Test a known cubic surface evaluated at grid coordinates far from zero.
///
/// Values reach ~1e28, so the residual is judged relative to the largest
/// observation.
#[test]
fn test_fit_2d_large_offset_surface() {
    let truth = TwoD::from_row_major(
        3,
        3,
        &[
            -1.021e-12, 7.5, 2.2, 5.5, //
            0.88, 4.825, 0.52, 0.69, //
            5.5, 1.0, 0.62, 1.01, //
            0.012, 6.32, 1.56, 0.376,
        ],
    )
    .unwrap();

    let x = Matrix2D::from_fn(9, 9, |i, _| 25_000.0 + i as f64 * 2_134.0);
    let y = Matrix2D::from_fn(9, 9, |_, j| 42_000.0 + j as f64 * 3_214.0);
    let z = Matrix2D::from_fn(9, 9, |i, j| truth.evaluate(x[(i, j)], y[(i, j)]));
    let z_max = z.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

    let result = Polyfit::new()
        .degrees(3, 3)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit_2d(&x, &y, &z)
        .unwrap();

    let p = &result.polynomial;
    assert_eq!(p.origin(), (33_536.0, 54_856.0));

    let diagnostics = result.diagnostics.expect("diagnostics requested");
    assert!(
        diagnostics.rmse / z_max < 1e-12,
        "relative rmse = {:e}",
        diagnostics.rmse / z_max
    );

    let (u, v) = (30_000.0, 50_000.0);
    assert_relative_eq!(p.evaluate(u, v), truth.evaluate(u, v), max_relative = 1e-10);
}

/// Test that a 2D fit reproduces a polynomial surface away from the samples.
#[test]
fn test_fit_2d_reproduces_surface() {
    let f = |x: f64, y: f64| 1.0 - 2.0 * x + 0.5 * y + 0.25 * x * x * y - 0.1 * y * y;
    let x = Matrix2D::from_fn(5, 6, |r, c| r as f64 * 0.5 + 0.05 * c as f64);
    let y = Matrix2D::from_fn(5, 6, |r, c| c as f64 * 0.4 - 0.03 * r as f64);
    let z = Matrix2D::from_fn(5, 6, |r, c| f(x[(r, c)], y[(r, c)]));

    let p = fit_2d(&x, &y, &z, 2, 2).unwrap();

    for &(a, b) in &[(0.3, 0.7), (1.1, 1.5), (1.9, 0.2)] {
        assert_abs_diff_eq!(p.evaluate(a, b), f(a, b), epsilon = 1e-9);
    }
}

/// Test that unequal degrees in x and y are honored.
#[test]
fn test_fit_2d_unequal_degrees() {
    let x = Matrix2D::from_fn(4, 5, |r, _| r as f64);
    let y = Matrix2D::from_fn(4, 5, |_, c| c as f64);
    let z = Matrix2D::from_fn(4, 5, |r, c| 2.0 + r as f64 - (c * c) as f64);

    let p = fit_2d(&x, &y, &z, 1, 2).unwrap();
    assert_eq!((p.order_x(), p.order_y()), (1, 2));
    assert!(p.approx_eq(
        &TwoD::from_row_major(1, 2, &[2.0, 0.0, -1.0, 1.0, 0.0, 0.0]).unwrap(),
        1e-10
    ));
}

/// Test that degrees (0, 0) yield the mean of the observations.
#[test]
fn test_fit_2d_degree_zero_is_mean() {
    let x = Matrix2D::from_fn(2, 2, |r, _| r as f64);
    let y = Matrix2D::from_fn(2, 2, |_, c| c as f64);
    let z = Matrix2D::from_fn(2, 2, |r, c| (r * 2 + c) as f64);

    let p = fit_2d(&x, &y, &z, 0, 0).unwrap();
    assert_relative_eq!(p.evaluate(10.0, -3.0), 1.5);
}

// ============================================================================
// Builder
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let model = Polyfit::<f64>::new().build().unwrap();
    assert_eq!(model.degree(), 1);
    assert_eq!(model.degrees(), (1, 1));

    let model = Polyfit::<f64>::new().degree(4).build().unwrap();
    assert_eq!(model.degrees(), (4, 4));

    let model = Polyfit::<f64>::new().degree(4).degrees(2, 3).build().unwrap();
    assert_eq!(model.degree(), 4);
    assert_eq!(model.degrees(), (2, 3));
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameters() {
    let cases = [
        (Polyfit::<f64>::new().degree(2).degree(3).build(), "degree"),
        (Polyfit::<f64>::new().degrees(1, 1).degrees(2, 2).build(), "degrees"),
        (Polyfit::<f64>::new().solver(QR).solver(SVD).build(), "solver"),
        (
            Polyfit::<f64>::new()
                .centering(Centering::Auto)
                .centering(Centering::Never)
                .build(),
            "centering",
        ),
    ];

    for (result, name) in cases {
        assert_eq!(
            result.unwrap_err(),
            PolyfitError::DuplicateParameter { parameter: name }
        );
    }
}

/// Test that outputs are only attached on request.
#[test]
fn test_builder_optional_outputs() {
    let (x, y) = cubic_samples();

    let plain = Polyfit::new().degree(2).build().unwrap().fit(&x, &y).unwrap();
    assert!(plain.diagnostics.is_none());
    assert!(plain.residuals.is_none());
    assert_eq!(plain.samples, 4);
    assert_eq!(plain.solver, Some(Cholesky));

    let full = Polyfit::new()
        .degree(2)
        .return_diagnostics()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let residuals = full.residuals.as_ref().expect("residuals requested");
    let diagnostics = full.diagnostics.expect("diagnostics requested");

    assert_eq!(residuals.len(), 4);
    for ((&xi, &yi), &r) in x.iter().zip(&y).zip(residuals) {
        assert_abs_diff_eq!(r, yi - full.polynomial.evaluate(xi), epsilon = 1e-12);
    }
    assert_eq!(diagnostics.samples, 4);
    assert!(diagnostics.rmse > 0.0);
}

/// Test that a mean fit reports no solver.
#[test]
fn test_mean_fit_reports_no_solver() {
    let result = Polyfit::new()
        .degree(0)
        .build()
        .unwrap()
        .fit(&[1.0, 2.0], &[3.0, 5.0])
        .unwrap();
    assert_eq!(result.solver, None);
    assert_eq!(result.condition_estimate, None);
}

/// Test that the fit summary names the solver and the polynomial.
#[test]
fn test_fit_result_display() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 5.0];
    let result = Polyfit::new()
        .degree(1)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let text = format!("{}", result);
    assert!(text.contains("Summary:"));
    assert!(text.contains("Samples: 3"));
    assert!(text.contains("Cholesky"));
    assert!(text.contains("Fit Diagnostics:"));
    assert!(text.contains("Polynomial:"));
}

// ============================================================================
// Solvers
// ============================================================================

/// Test that every solver path agrees on a well-conditioned problem.
#[test]
fn test_solvers_agree() {
    let x: Vec<f64> = (0..30).map(|i| -1.5 + 0.1 * i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| (0.7 * v).exp()).collect();

    let reference = fit_1d(&x, &y, 4).unwrap();
    for method in [Adaptive, Cholesky, QR, SVD] {
        let result = Polyfit::new()
            .degree(4)
            .solver(method)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();

        assert!(result.polynomial.approx_eq(&reference, 1e-9));
        if method != Adaptive {
            assert_eq!(result.solver, Some(method));
        }
    }
}

/// Test that every solver path agrees on a 2D problem.
#[test]
fn test_solvers_agree_2d() {
    let x = Matrix2D::from_fn(6, 6, |r, c| r as f64 + 0.1 * c as f64);
    let y = Matrix2D::from_fn(6, 6, |r, c| c as f64 - 0.1 * r as f64);
    let z = Matrix2D::from_fn(6, 6, |r, c| (0.2 * x[(r, c)]).cos() + 0.1 * y[(r, c)]);

    let reference = fit_2d(&x, &y, &z, 2, 2).unwrap();
    for method in [Cholesky, QR, SVD] {
        let p = Polyfit::new()
            .degrees(2, 2)
            .solver(method)
            .build()
            .unwrap()
            .fit_2d(&x, &y, &z)
            .unwrap()
            .polynomial;
        assert!(p.approx_eq(&reference, 1e-9));
    }
}

/// Test solver names.
#[test]
fn test_solver_names() {
    assert_eq!(Adaptive.name(), "Adaptive");
    assert_eq!(Cholesky.name(), "Cholesky");
    assert_eq!(QR.name(), "QR");
    assert_eq!(SVD.name(), "SVD");
    assert_eq!(SolverMethod::default(), Adaptive);
}

// ============================================================================
// Errors
// ============================================================================

/// Test rejection of empty and mismatched inputs.
#[test]
fn test_error_input_shapes() {
    let empty: [f64; 0] = [];
    assert_eq!(fit_1d(&empty, &empty, 1).unwrap_err(), PolyfitError::EmptyInput);
    assert_eq!(
        fit_1d(&empty, &[1.0], 0).unwrap_err(),
        PolyfitError::DimensionMismatch { x_len: 0, y_len: 1 }
    );
    assert_eq!(
        fit_1d(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1).unwrap_err(),
        PolyfitError::DimensionMismatch { x_len: 3, y_len: 2 }
    );

    let x = Matrix2D::from_fn(2, 3, |r, c| (r + c) as f64);
    let y = Matrix2D::from_fn(3, 2, |r, c| (r * c) as f64);
    assert_eq!(
        fit_2d(&x, &y, &x, 1, 1).unwrap_err(),
        PolyfitError::GridShapeMismatch {
            grid: "y",
            expected: (2, 3),
            got: (3, 2)
        }
    );
    assert_eq!(
        fit_2d(&x, &x, &y, 1, 1).unwrap_err(),
        PolyfitError::GridShapeMismatch {
            grid: "z",
            expected: (2, 3),
            got: (3, 2)
        }
    );
}

/// Test rejection of non-finite samples.
#[test]
fn test_error_non_finite() {
    let err = fit_1d(&[0.0, f64::NAN, 2.0], &[1.0, 2.0, 3.0], 1).unwrap_err();
    assert!(matches!(err, PolyfitError::InvalidNumericValue(_)));
    assert!(err.to_string().contains("x[1]"));

    let err = fit_1d(&[0.0, 1.0, 2.0], &[1.0, 2.0, f64::INFINITY], 1).unwrap_err();
    assert!(err.to_string().contains("y[2]"));
}

/// Test rejection of underdetermined systems.
#[test]
fn test_error_underdetermined() {
    assert_eq!(
        fit_1d(&[1.0, 2.0], &[1.0, 4.0], 2).unwrap_err(),
        PolyfitError::UnderdeterminedSystem {
            samples: 2,
            coefficients: 3
        }
    );

    let grid = Matrix2D::from_fn(2, 2, |r, c| (r + c) as f64);
    assert_eq!(
        fit_2d(&grid, &grid, &grid, 1, 2).unwrap_err(),
        PolyfitError::UnderdeterminedSystem {
            samples: 4,
            coefficients: 6
        }
    );
}

/// Test that repeated x values leave the system singular on every path.
#[test]
fn test_error_singular() {
    let x = [2.0; 5];
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(fit_1d(&x, &y, 1).unwrap_err(), PolyfitError::SingularSystem);
    for method in [Cholesky, QR, SVD] {
        let err = Polyfit::new()
            .degree(1)
            .solver(method)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap_err();
        assert_eq!(err, PolyfitError::SingularSystem);
    }
}

/// Test that a fixed-degree fit uses its own degree, not the configured one.
#[test]
fn test_fit_fixed_ignores_configured_degree() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 5.0, 10.0];
    let model = Polyfit::new().degree(3).build().unwrap();

    let p = model.fit_fixed::<2>(&x, &y).unwrap().polynomial;
    assert_eq!(p.order(), 2);
    assert_abs_diff_eq!(p.evaluate(4.0), 17.0, epsilon = 1e-10);
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(PolyfitError::EmptyInput.to_string(), "Input arrays are empty");
    assert_eq!(
        PolyfitError::DimensionMismatch { x_len: 3, y_len: 2 }.to_string(),
        "Length mismatch: x has 3 points, y has 2"
    );
    assert_eq!(
        PolyfitError::UnderdeterminedSystem {
            samples: 2,
            coefficients: 3
        }
        .to_string(),
        "Underdetermined system: 2 samples for 3 coefficients"
    );
    assert!(
        PolyfitError::DuplicateParameter { parameter: "solver" }
            .to_string()
            .contains("'solver'")
    );
}
