//! Output types and result structures for polynomial fits.
//!
//! ## Purpose
//!
//! This module defines `FitResult`, which carries the fitted polynomial
//! together with metadata about how it was obtained and optional residual
//! statistics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Residuals are only stored when requested.
//! * **Generics**: Results are generic over the polynomial type and `Float`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * When present, `residuals` has one entry per sample, in input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solver::SolverMethod;
use crate::evaluation::diagnostics::FitDiagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Fitted polynomial and the metadata of the fit that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<P, T> {
    /// The fitted polynomial.
    pub polynomial: P,

    /// Number of samples the polynomial was fitted to.
    pub samples: usize,

    /// Factorization that produced the coefficients (`None` for a mean fit).
    pub solver: Option<SolverMethod>,

    /// Condition estimate of the normal equations, when computed.
    pub condition_estimate: Option<T>,

    /// Residual statistics, when requested.
    pub diagnostics: Option<FitDiagnostics<T>>,

    /// Residuals `y_i - p(x_i)` in input order, when requested.
    pub residuals: Option<Vec<T>>,
}

impl<P, T> FitResult<P, T> {
    /// Discard the metadata and keep the polynomial.
    pub fn into_polynomial(self) -> P {
        self.polynomial
    }

    /// Replace the polynomial, keeping the metadata.
    pub fn map_polynomial<Q, F>(self, f: F) -> FitResult<Q, T>
    where
        F: FnOnce(P) -> Q,
    {
        FitResult {
            polynomial: f(self.polynomial),
            samples: self.samples,
            solver: self.solver,
            condition_estimate: self.condition_estimate,
            diagnostics: self.diagnostics,
            residuals: self.residuals,
        }
    }

    /// Fallible variant of `map_polynomial`.
    pub fn try_map_polynomial<Q, E, F>(self, f: F) -> core::result::Result<FitResult<Q, T>, E>
    where
        F: FnOnce(P) -> core::result::Result<Q, E>,
    {
        Ok(FitResult {
            polynomial: f(self.polynomial)?,
            samples: self.samples,
            solver: self.solver,
            condition_estimate: self.condition_estimate,
            diagnostics: self.diagnostics,
            residuals: self.residuals,
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<P: Display, T: Float + Display + LowerExp> Display for FitResult<P, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.samples)?;
        match self.solver {
            Some(method) => writeln!(f, "  Solver:  {}", method.name())?,
            None => writeln!(f, "  Solver:  mean")?,
        }
        if let Some(cond) = self.condition_estimate {
            writeln!(f, "  Condition estimate: {:.3e}", cond)?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Polynomial:")?;
        writeln!(f, "  {}", self.polynomial)
    }
}
