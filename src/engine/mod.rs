//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates complete fits:
//! - Input validation
//! - Fit execution for 1D and 2D samples
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Result types.
pub mod output;

/// Input validation.
pub mod validator;
