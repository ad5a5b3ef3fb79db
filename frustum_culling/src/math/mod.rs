//! Scalar math collaborator.
//!
//! Vector and matrix types come from `glam`. This module only holds the
//! scalar primitives the frustum code needs, with an explicit choice between
//! exact and fast-approximate implementations.

mod scalar_math;

pub use scalar_math::{MathPrecision, ScalarMath};
