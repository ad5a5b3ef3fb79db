//! Plane extraction and shape classification.
//!
//! `FrustumIntersection` owns the six planes of one camera. It is updated
//! with `set()` when the camera matrix changes and read by the classifiers
//! in between. It is plain `Copy` data: callers that cull from several
//! threads share it by reference or give each thread its own copy.

mod classification;
mod frustum_intersection;
mod plane;

pub use classification::{AabIntersection, SphereIntersection, INSIDE, INTERSECT, OUTSIDE};
pub use frustum_intersection::FrustumIntersection;
pub use plane::{
    PlaneIndex, PlaneMask,
    PLANE_NX, PLANE_PX, PLANE_NY, PLANE_PY, PLANE_NZ, PLANE_PZ,
    PLANE_MASK_NX, PLANE_MASK_PX, PLANE_MASK_NY, PLANE_MASK_PY, PLANE_MASK_NZ, PLANE_MASK_PZ,
};
