//! Scratch buffers for a single fit.
//!
//! ## Purpose
//!
//! This module provides `FitBuffer`, the scratch space a fit uses for its
//! normalized samples, design matrix, normal equations and residuals. One
//! buffer is created per fit call and dropped when the call returns.
//!
//! ## Design notes
//!
//! * **Per-call ownership**: Buffers are created by the executor for each call;
//!   there is no global or thread-local scratch, so concurrent fits on
//!   independent threads never share state.
//! * **Pre-sized**: Capacities are computed once from the problem size so the
//!   assembly loops never reallocate.
//!
//! ## Key concepts
//!
//! * **Slot**: A `Vec` wrapper that can be reset to a given length and fill value.
//! * **FitBuffer**: The set of slots needed for one least-squares solve.
//!
//! ## Invariants
//!
//! * After `prepare`, every slot holds exactly the length its layout requires.
//!
//! ## Non-goals
//!
//! * Reuse across calls (scratch is deliberately not cached).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A vector slot that is reset in place rather than reallocated.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

impl<T: Copy> Slot<T> {
    /// Reset the slot to `len` copies of `value`.
    #[inline]
    pub fn reset(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// FitBuffer
// ============================================================================

/// Scratch space for one least-squares polynomial fit.
#[derive(Debug, Clone)]
pub struct FitBuffer<T> {
    /// Normalized sample coordinates, `dims` values per sample.
    pub points: Slot<T>,
    /// Design matrix, row-major `n_samples x n_coeffs`.
    pub design: Slot<T>,
    /// Observed values (right-hand side).
    pub rhs: Slot<T>,
    /// Normal matrix A'A, row-major `n_coeffs x n_coeffs`.
    pub gram: Slot<T>,
    /// Normal vector A'b (A'r while a solution is refined).
    pub atb: Slot<T>,
    /// Residuals `b - A c` of the current solution.
    pub residual: Slot<T>,
}

impl<T: Float> FitBuffer<T> {
    /// Create a buffer sized for `n_samples` samples in `dims` dimensions
    /// fitted with `n_coeffs` coefficients.
    pub fn new(n_samples: usize, dims: usize, n_coeffs: usize) -> Self {
        Self {
            points: Slot::new(n_samples * dims),
            design: Slot::new(n_samples * n_coeffs),
            rhs: Slot::new(n_samples),
            gram: Slot::new(n_coeffs * n_coeffs),
            atb: Slot::new(n_coeffs),
            residual: Slot::new(n_samples),
        }
    }

    /// Zero-fill every slot to the lengths required by the given problem size.
    pub fn prepare(&mut self, n_samples: usize, dims: usize, n_coeffs: usize) {
        self.points.reset(n_samples * dims, T::zero());
        self.design.reset(n_samples * n_coeffs, T::zero());
        self.rhs.reset(n_samples, T::zero());
        self.gram.reset(n_coeffs * n_coeffs, T::zero());
        self.atb.reset(n_coeffs, T::zero());
        self.residual.reset(n_samples, T::zero());
    }
}
