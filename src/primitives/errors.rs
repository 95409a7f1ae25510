//! Error types for polynomial fitting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while fitting or
//! constructing polynomials, including input validation, degenerate linear
//! systems, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths or grid shapes, non-finite values.
//! 2. **System validation**: Fewer samples than unknowns.
//! 3. **Numerical failure**: No stable solution from any solver path.
//! 4. **Builder constraints**: Parameters configured more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfitError {
    /// Input arrays are empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` sample sequences must have the same number of elements.
    DimensionMismatch {
        /// Number of elements in the `x` sequence.
        x_len: usize,
        /// Number of elements in the `y` sequence.
        y_len: usize,
    },

    /// A sample grid does not have the same shape as the `x` grid.
    GridShapeMismatch {
        /// Name of the offending grid (`"y"` or `"z"`).
        grid: &'static str,
        /// Shape of the `x` grid as `(rows, cols)`.
        expected: (usize, usize),
        /// Shape of the offending grid as `(rows, cols)`.
        got: (usize, usize),
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Fewer samples than polynomial coefficients.
    UnderdeterminedSystem {
        /// Number of samples provided.
        samples: usize,
        /// Number of coefficients to solve for.
        coefficients: usize,
    },

    /// The design matrix is rank deficient; no solver path produced a stable solution.
    SingularSystem,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyfitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DimensionMismatch { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::GridShapeMismatch {
                grid,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Grid shape mismatch: {grid} is {}x{}, expected {}x{}",
                    got.0, got.1, expected.0, expected.1
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnderdeterminedSystem {
                samples,
                coefficients,
            } => {
                write!(
                    f,
                    "Underdetermined system: {samples} samples for {coefficients} coefficients"
                )
            }
            Self::SingularSystem => {
                write!(f, "Singular system: design matrix has no stable solution")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyfitError {}
