/*!
# Frustum Culling

View-frustum extraction and visibility classification for real-time 3D
rendering.

A `FrustumIntersection` is built from a combined projection * view matrix
and classifies points, spheres, axis-aligned boxes, rectangles and line
segments as inside, outside, or straddling the frustum. Box tests can skip
planes through a `PlaneMask` and start from the plane that rejected the same
box on the previous frame.

## Architecture

- **FrustumIntersection**: six planes + all classification tests
- **PlaneIndex / PlaneMask**: typed plane identifiers and plane sets
- **AabIntersection / SphereIntersection**: allocation-free results with
  a compact integer encoding
- **CoherentCuller**: batch culling with per-object last-rejecting-plane hints
- **ScalarMath**: exact or fast scalar primitives, chosen via `FrustumConfig`
*/

// Internal modules
mod config;
mod culler;
mod diagnostics;
mod error;
pub mod frustum;
pub mod geometry;
pub mod log;
pub mod math;

// Main namespace module
pub mod culling {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::FrustumConfig;

    // Log sink
    pub use crate::diagnostics::Diagnostics;

    // Frustum and results
    pub use crate::frustum::*;

    // Shapes
    pub use crate::geometry::{AABB, LineSegment, Sphere};

    // Scalar math
    pub use crate::math::{MathPrecision, ScalarMath};

    // Batch culling
    pub use crate::culler::{Culler, CoherentCuller, CullStats, PlainCuller};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
