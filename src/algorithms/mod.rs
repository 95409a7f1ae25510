//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core fitting algorithms:
//! - Polynomial value types and their operations
//! - Design matrix assembly from normalized samples
//! - The least-squares solver pipeline
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial types.
pub mod polynomial;

/// Design matrix assembly.
pub mod design;

/// Least-squares solver pipeline.
pub mod solver;
