//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates statistics about a finished fit:
//! - Residual diagnostics (mean absolute residual, MSE, RMSE, R^2)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual diagnostics for fit quality assessment.
pub mod diagnostics;
