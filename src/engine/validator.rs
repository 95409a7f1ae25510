//! Input validation for polynomial fits.
//!
//! ## Purpose
//!
//! This module checks sample data and problem sizes before any matrix is
//! built: input lengths and grid shapes, finite values, and whether the
//! system has at least as many samples as unknowns.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;
use crate::primitives::matrix::Matrix2D;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit inputs.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a pair of 1D sample sequences.
    pub fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), PolyfitError> {
        // Check 1: Matching lengths
        if x.len() != y.len() {
            return Err(PolyfitError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 2: Non-empty arrays
        if x.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate three 2D sample grids of equal shape.
    pub fn validate_grids<T: Float>(
        x: &Matrix2D<T>,
        y: &Matrix2D<T>,
        z: &Matrix2D<T>,
    ) -> Result<(), PolyfitError> {
        let expected = x.shape();
        for (grid, m) in [("y", y), ("z", z)] {
            if m.shape() != expected {
                return Err(PolyfitError::GridShapeMismatch {
                    grid,
                    expected,
                    got: m.shape(),
                });
            }
        }

        if x.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }

        Self::validate_finite(x.as_slice(), "x")?;
        Self::validate_finite(y.as_slice(), "y")?;
        Self::validate_finite(z.as_slice(), "z")
    }

    /// Ensure every value is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), PolyfitError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(PolyfitError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // System Validation
    // ========================================================================

    /// Number of coefficients of a 1D polynomial of `degree`.
    pub fn coefficients_1d(degree: usize) -> Result<usize, PolyfitError> {
        degree
            .checked_add(1)
            .ok_or_else(|| PolyfitError::InvalidInput(format!("degree {} is too large", degree)))
    }

    /// Number of coefficients of a 2D polynomial of degrees `(dx, dy)`.
    pub fn coefficients_2d(degree_x: usize, degree_y: usize) -> Result<usize, PolyfitError> {
        Self::coefficients_1d(degree_x)?
            .checked_mul(Self::coefficients_1d(degree_y)?)
            .ok_or_else(|| {
                PolyfitError::InvalidInput(format!(
                    "degrees ({}, {}) are too large",
                    degree_x, degree_y
                ))
            })
    }

    /// Ensure the system is not underdetermined.
    pub fn validate_system(samples: usize, coefficients: usize) -> Result<(), PolyfitError> {
        if samples < coefficients {
            return Err(PolyfitError::UnderdeterminedSystem {
                samples,
                coefficients,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PolyfitError> {
        if let Some(param) = duplicate_param {
            return Err(PolyfitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
