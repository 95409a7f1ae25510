//! Residual diagnostics for polynomial fit quality.
//!
//! ## Purpose
//!
//! This module summarizes how closely a fitted polynomial reproduces the
//! samples it was fitted to.
//!
//! ## Key concepts
//!
//! * **Mean absolute residual**: `sum |p(x_i) - y_i| / m`, the usual check
//!   that a noiseless fit reproduced its input.
//! * **MSE / RMSE**: mean squared residual and its square root.
//! * **R^2**: `1 - SS_res / SS_tot`.
//!
//! ## Invariants
//!
//! * All error metrics are non-negative; `R^2 <= 1`.
//! * Empty input yields all-zero metrics.
//!
//! ## Non-goals
//!
//! * Weighted metrics, information criteria and hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Residual statistics of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Number of samples the statistics cover.
    pub samples: usize,

    /// Mean absolute residual.
    pub mean_abs_residual: T,

    /// Mean squared residual.
    pub mse: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Largest absolute residual.
    pub max_abs_residual: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics from observed values and the fitted values at the
    /// same samples.
    pub fn compute(observed: &[T], fitted: &[T]) -> Self {
        let n = observed.len().min(fitted.len());
        if n == 0 {
            return Self {
                samples: 0,
                mean_abs_residual: T::zero(),
                mse: T::zero(),
                rmse: T::zero(),
                max_abs_residual: T::zero(),
                r_squared: T::zero(),
            };
        }
        let n_t = T::from(n).unwrap_or(T::one());

        let (sum_abs, sum_sq, max_abs) = observed
            .iter()
            .zip(fitted.iter())
            .fold((T::zero(), T::zero(), T::zero()), |(a, s, m), (&y, &f)| {
                let r = (f - y).abs();
                (a + r, s + r * r, m.max(r))
            });

        let mse = sum_sq / n_t;

        Self {
            samples: n,
            mean_abs_residual: sum_abs / n_t,
            mse,
            rmse: mse.sqrt(),
            max_abs_residual: max_abs,
            r_squared: Self::calculate_r_squared(&observed[..n], sum_sq),
        }
    }

    /// R^2 from the observations and the residual sum of squares.
    fn calculate_r_squared(observed: &[T], ss_res: T) -> T {
        let n_t = T::from(observed.len()).unwrap_or(T::one());
        let mean = observed.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = observed.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });

        if ss_tot == T::zero() {
            // Constant observations
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + LowerExp> Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Samples:        {}", self.samples)?;
        writeln!(f, "  Mean |resid|:   {:.6e}", self.mean_abs_residual)?;
        writeln!(f, "  MSE:            {:.6e}", self.mse)?;
        writeln!(f, "  RMSE:           {:.6e}", self.rmse)?;
        writeln!(f, "  Max |resid|:    {:.6e}", self.max_abs_residual)?;
        writeln!(f, "  R²:             {:.6}", self.r_squared)
    }
}
