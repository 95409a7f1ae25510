//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Linear algebra (normal equations, Cholesky, QR, SVD)
//! - Input normalization and origin selection
//! - Binomial coefficients and Taylor shifts
//!
//! These are reusable mathematical building blocks with no fit-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend.
pub mod linalg;

/// Normalization of sample coordinates.
pub mod scaling;

/// Binomial coefficients and origin shifts.
pub mod binomial;
