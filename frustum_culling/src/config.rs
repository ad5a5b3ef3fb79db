//! Frustum and culler configuration
//!
//! Plain data with a `Default`, like the rest of the crate's settings.
//! The scalar-math precision lives here so it is chosen once, at startup,
//! and handed to every frustum built from this config.

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::frustum::PlaneMask;
use crate::math::{MathPrecision, ScalarMath};

/// Frustum configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumConfig {
    /// Normalize plane normals at extraction so sphere tests are valid
    pub allow_sphere_tests: bool,
    /// Exact or fast-approximate scalar math
    pub precision: MathPrecision,
    /// Planes tested by `CoherentCuller`
    pub plane_mask: PlaneMask,
    /// Let `CoherentCuller` start each test at last frame's rejecting plane
    pub temporal_coherency: bool,
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self {
            allow_sphere_tests: true,
            precision: MathPrecision::Exact,
            plane_mask: PlaneMask::all(),
            temporal_coherency: true,
        }
    }
}

impl FrustumConfig {
    /// Set whether sphere tests are supported
    pub fn with_sphere_tests(mut self, allow: bool) -> Self {
        self.allow_sphere_tests = allow;
        self
    }

    /// Set the scalar-math precision
    pub fn with_precision(mut self, precision: MathPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the planes tested by the culler
    pub fn with_plane_mask(mut self, mask: PlaneMask) -> Self {
        self.plane_mask = mask;
        self
    }

    /// Enable or disable the last-rejecting-plane hint
    pub fn with_temporal_coherency(mut self, enabled: bool) -> Self {
        self.temporal_coherency = enabled;
        self
    }

    /// Scalar math collaborator for this config
    pub fn math(&self) -> ScalarMath {
        ScalarMath::new(self.precision)
    }

    /// Check the config can drive a culler.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `plane_mask` is empty: no plane would be
    /// tested and every object would be reported visible.
    pub fn validate(&self) -> Result<()> {
        if self.plane_mask.is_empty() {
            return Err(Diagnostics::log_and_return_error(
                "frustum::FrustumConfig",
                Error::InvalidConfig("plane mask is empty, no plane would be tested".to_string()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
