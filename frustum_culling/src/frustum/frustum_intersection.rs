//! Frustum planes extracted from a projection-view matrix, and the tests that read them.
//!
//! Each plane is a Vec4 (A, B, C, D):
//! - (A, B, C) is the inward-pointing normal
//! - D is the signed offset
//! - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
//!
//! Planes are extracted once per camera update with `set()` and then read by
//! any number of classification calls. Classification never allocates.
//!
//! All box and sphere tests are conservative near frustum edges and corners:
//! they may report a shape as visible when it is not, never the reverse.

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::config::FrustumConfig;
use crate::geometry::{AABB, LineSegment, Sphere};
use crate::math::ScalarMath;
use super::classification::{AabIntersection, SphereIntersection};
use super::plane::{PlaneIndex, PlaneMask};

/// Frustum planes plus the settings they were extracted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumIntersection {
    /// Planes in test order: NX, PX, NY, PY, NZ, PZ
    planes: [Vec4; 6],
    math: ScalarMath,
    allow_sphere_tests: bool,
}

impl Default for FrustumIntersection {
    fn default() -> Self {
        Self::new()
    }
}

impl FrustumIntersection {
    /// Frustum of the identity matrix (the cube [-1, 1]³), sphere tests allowed,
    /// exact math.
    pub fn new() -> Self {
        Self::from_matrix_with_config(&Mat4::IDENTITY, &FrustumConfig::default())
    }

    /// Frustum of the identity matrix using the precision and sphere
    /// setting of `config`.
    pub fn with_config(config: &FrustumConfig) -> Self {
        Self::from_matrix_with_config(&Mat4::IDENTITY, config)
    }

    /// Extract planes from a projection * view matrix, sphere tests allowed.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        Self::from_matrix_with_config(matrix, &FrustumConfig::default())
    }

    /// Extract planes from a projection * view matrix using `config`.
    pub fn from_matrix_with_config(matrix: &Mat4, config: &FrustumConfig) -> Self {
        crate::log::cull_debug!(
            "frustum::FrustumIntersection",
            "Created (sphere tests: {}, precision: {:?})",
            config.allow_sphere_tests,
            config.precision
        );
        let mut frustum = Self {
            planes: [Vec4::ZERO; 6],
            math: config.math(),
            allow_sphere_tests: config.allow_sphere_tests,
        };
        frustum.set(matrix, config.allow_sphere_tests);
        frustum
    }

    /// Update the planes from a new projection * view matrix.
    ///
    /// Uses the Gribb & Hartmann method, valid for perspective and
    /// orthographic projections. When `allow_sphere_tests` is true each
    /// plane is scaled so that (A, B, C) is unit length, which turns the
    /// sphere tests into plain signed-distance comparisons. Without it the
    /// normalization is skipped and sphere tests must not be used.
    ///
    /// A singular matrix yields degenerate planes; they are stored as
    /// computed.
    pub fn set(&mut self, matrix: &Mat4, allow_sphere_tests: bool) {
        let row0 = matrix.row(0);
        let row1 = matrix.row(1);
        let row2 = matrix.row(2);
        let row3 = matrix.row(3);

        self.planes = [
            row3 + row0, // NX
            row3 - row0, // PX
            row3 + row1, // NY
            row3 - row1, // PY
            row3 + row2, // NZ
            row3 - row2, // PZ
        ];
        self.allow_sphere_tests = allow_sphere_tests;

        if allow_sphere_tests {
            let math = self.math;
            for (plane, index) in self.planes.iter_mut().zip(PlaneIndex::ALL) {
                let inv_length = math.inv_sqrt(plane.truncate().length_squared());
                if !inv_length.is_finite() {
                    crate::log::cull_warn!(
                        "frustum::FrustumIntersection",
                        "Plane {:?} has a zero-length normal, matrix is degenerate",
                        index
                    );
                }
                *plane *= inv_length;
            }
        }

        crate::log::cull_trace!(
            "frustum::FrustumIntersection",
            "Planes updated (sphere tests: {})",
            allow_sphere_tests
        );
    }

    // ===== GETTERS =====

    /// All six planes in test order
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// A single plane
    pub fn plane(&self, index: PlaneIndex) -> Vec4 {
        self.planes[index.index()]
    }

    /// Whether the planes were normalized by the last `set()`
    pub fn supports_sphere_tests(&self) -> bool {
        self.allow_sphere_tests
    }

    /// Scalar math used by extraction and the segment test
    pub fn math(&self) -> ScalarMath {
        self.math
    }

    /// Planes as 24 contiguous floats (A, B, C, D per plane), ready for
    /// upload to a GPU culling shader.
    pub fn planes_as_floats(&self) -> &[f32; 24] {
        bytemuck::cast_ref(&self.planes)
    }

    /// Planes as raw bytes
    pub fn planes_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.planes.as_slice())
    }

    // ===== POINT =====

    /// Test whether a point is inside all six planes.
    pub fn test_point(&self, point: Vec3) -> bool {
        for plane in &self.planes {
            if below(distance(*plane, point), 0.0) {
                return false;
            }
        }
        true
    }

    // ===== SPHERE =====

    /// Test whether a sphere is (potentially) inside or intersecting.
    ///
    /// Requires planes extracted with sphere tests allowed.
    pub fn test_sphere(&self, center: Vec3, radius: f32) -> bool {
        for plane in &self.planes {
            if below(distance(*plane, center), -radius) {
                return false;
            }
        }
        true
    }

    /// Classify a sphere as outside, inside, or intersecting.
    ///
    /// Planes are tested in order; the first one the sphere lies fully
    /// behind yields `Outside`. Requires planes extracted with sphere tests
    /// allowed.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> SphereIntersection {
        let mut inside = true;

        for plane in &self.planes {
            let dist = distance(*plane, center);
            if below(dist, -radius) {
                return SphereIntersection::Outside;
            }
            inside &= dist >= radius;
        }

        if inside { SphereIntersection::Inside } else { SphereIntersection::Intersect }
    }

    /// [`test_sphere`](Self::test_sphere) on a [`Sphere`]
    pub fn test_bounding_sphere(&self, sphere: &Sphere) -> bool {
        self.test_sphere(sphere.center, sphere.radius)
    }

    /// [`intersect_sphere`](Self::intersect_sphere) on a [`Sphere`]
    pub fn intersect_bounding_sphere(&self, sphere: &Sphere) -> SphereIntersection {
        self.intersect_sphere(sphere.center, sphere.radius)
    }

    // ===== AXIS-ALIGNED BOX =====

    /// Test whether a box is (potentially) inside or intersecting.
    ///
    /// Uses the "positive vertex" test: for each plane, take the box corner
    /// furthest along the plane normal. If that corner is outside, so is
    /// the whole box.
    pub fn test_aab(&self, min: Vec3, max: Vec3) -> bool {
        for plane in &self.planes {
            if below(p_vertex_distance(*plane, min, max), 0.0) {
                return false;
            }
        }
        true
    }

    /// Classify a box against the frustum (3-way test).
    ///
    /// - The p-vertex is tested against each plane in order; the first
    ///   plane that rejects it is returned as `Outside(plane)`.
    /// - If every p-vertex passes, the n-vertex (opposite corner) is tested
    ///   against every plane: all inside → `Inside`, otherwise `Intersect`.
    pub fn intersect_aab(&self, min: Vec3, max: Vec3) -> AabIntersection {
        for (plane, index) in self.planes.iter().zip(PlaneIndex::ALL) {
            if below(p_vertex_distance(*plane, min, max), 0.0) {
                return AabIntersection::Outside(index);
            }
        }
        self.n_vertex_classification(min, max)
    }

    /// Like [`intersect_aab`](Self::intersect_aab), but only the planes in
    /// `mask` may reject the box. The others pass without being tested.
    pub fn intersect_aab_masked(&self, min: Vec3, max: Vec3, mask: PlaneMask) -> AabIntersection {
        self.masked_scan(min, max, mask, None)
    }

    /// Like [`intersect_aab_masked`](Self::intersect_aab_masked), but
    /// `start_plane` is tested first.
    ///
    /// Pass the plane that rejected the same box on the previous frame: when
    /// it still rejects it, the other planes are never evaluated. The
    /// outside/intersect/inside outcome is the same as the masked call; the
    /// plane reported for an outside box may be `start_plane` instead of the
    /// first rejecting plane in test order.
    pub fn intersect_aab_coherent(
        &self,
        min: Vec3,
        max: Vec3,
        mask: PlaneMask,
        start_plane: PlaneIndex,
    ) -> AabIntersection {
        if mask.tests(start_plane) {
            if below(p_vertex_distance(self.planes[start_plane.index()], min, max), 0.0) {
                return AabIntersection::Outside(start_plane);
            }
            self.masked_scan(min, max, mask, Some(start_plane))
        } else {
            self.masked_scan(min, max, mask, None)
        }
    }

    /// [`intersect_aab`](Self::intersect_aab) on an [`AABB`]
    pub fn classify_aabb(&self, aabb: &AABB) -> AabIntersection {
        self.intersect_aab(aabb.min, aabb.max)
    }

    /// p-vertex pass over the masked planes, then the n-vertex pass.
    /// `passed` names a plane already known to accept the p-vertex.
    #[inline]
    fn masked_scan(
        &self,
        min: Vec3,
        max: Vec3,
        mask: PlaneMask,
        passed: Option<PlaneIndex>,
    ) -> AabIntersection {
        for (plane, index) in self.planes.iter().zip(PlaneIndex::ALL) {
            if !mask.tests(index) || passed == Some(index) {
                continue;
            }
            if below(p_vertex_distance(*plane, min, max), 0.0) {
                return AabIntersection::Outside(index);
            }
        }
        self.n_vertex_classification(min, max)
    }

    /// Containment of a box whose p-vertex passed every tested plane.
    ///
    /// Evaluated on all six planes regardless of any mask: a box straddling
    /// a skipped plane still reports `Intersect`.
    #[inline]
    fn n_vertex_classification(&self, min: Vec3, max: Vec3) -> AabIntersection {
        for plane in &self.planes {
            if below(n_vertex_distance(*plane, min, max), 0.0) {
                return AabIntersection::Intersect;
            }
        }
        AabIntersection::Inside
    }

    // ===== RECTANGLES IN A COORDINATE PLANE =====

    // Rectangles are flat boxes: the zero-extent axis picks the same
    // coordinate for the p-vertex and the n-vertex.

    /// Test an axis-aligned rectangle lying in the XY plane (z = 0).
    pub fn test_plane_xy(&self, min: Vec2, max: Vec2) -> bool {
        self.test_aab(Vec3::new(min.x, min.y, 0.0), Vec3::new(max.x, max.y, 0.0))
    }

    /// Test an axis-aligned rectangle lying in the XZ plane (y = 0).
    pub fn test_plane_xz(&self, min: Vec2, max: Vec2) -> bool {
        self.test_aab(Vec3::new(min.x, 0.0, min.y), Vec3::new(max.x, 0.0, max.y))
    }

    /// Classify an axis-aligned rectangle lying in the XY plane (z = 0).
    ///
    /// Same outcomes as [`intersect_aab`](Self::intersect_aab).
    pub fn intersect_plane_xy(&self, min: Vec2, max: Vec2) -> AabIntersection {
        self.intersect_aab(Vec3::new(min.x, min.y, 0.0), Vec3::new(max.x, max.y, 0.0))
    }

    /// Classify an axis-aligned rectangle lying in the XZ plane (y = 0).
    ///
    /// `min.y` / `max.y` are the z bounds.
    pub fn intersect_plane_xz(&self, min: Vec2, max: Vec2) -> AabIntersection {
        self.intersect_aab(Vec3::new(min.x, 0.0, min.y), Vec3::new(max.x, 0.0, max.y))
    }

    // ===== LINE SEGMENT =====

    /// Test whether a line segment intersects the frustum.
    ///
    /// Clips the segment against each plane in turn: a segment fully behind
    /// a plane is rejected, a segment crossing a plane keeps only its inside
    /// part for the following planes. Symmetric in `a` and `b`.
    pub fn test_line_segment(&self, a: Vec3, b: Vec3) -> bool {
        let math = self.math;
        let mut a = a;
        let mut b = b;

        for plane in &self.planes {
            let da = plane_distance_fma(&math, *plane, a);
            let db = plane_distance_fma(&math, *plane, b);

            if below(da, 0.0) && below(db, 0.0) {
                return false;
            }

            if da * db < 0.0 {
                let t = math.abs(da) / math.abs(db - da);
                let crossing = Vec3::new(
                    math.fma(t, b.x - a.x, a.x),
                    math.fma(t, b.y - a.y, a.y),
                    math.fma(t, b.z - a.z, a.z),
                );
                if da < 0.0 {
                    a = crossing;
                } else {
                    b = crossing;
                }
            }
        }

        true
    }

    /// [`test_line_segment`](Self::test_line_segment) on a [`LineSegment`]
    pub fn test_segment(&self, segment: &LineSegment) -> bool {
        self.test_line_segment(segment.a, segment.b)
    }
}

// ===== PLANE DISTANCES =====

/// `true` unless `dist >= bound`; a NaN distance never meets the bound.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn below(dist: f32, bound: f32) -> bool {
    !(dist >= bound)
}

/// Signed distance (scaled by the normal length if not normalized)
#[inline]
fn distance(plane: Vec4, point: Vec3) -> f32 {
    plane.truncate().dot(point) + plane.w
}

#[inline]
fn plane_distance_fma(math: &ScalarMath, plane: Vec4, point: Vec3) -> f32 {
    math.fma(plane.x, point.x, math.fma(plane.y, point.y, math.fma(plane.z, point.z, plane.w)))
}

/// Distance of the box corner furthest along the plane normal
#[inline]
fn p_vertex_distance(plane: Vec4, min: Vec3, max: Vec3) -> f32 {
    plane.x * if plane.x < 0.0 { min.x } else { max.x }
        + plane.y * if plane.y < 0.0 { min.y } else { max.y }
        + plane.z * if plane.z < 0.0 { min.z } else { max.z }
        + plane.w
}

/// Distance of the box corner furthest against the plane normal
#[inline]
fn n_vertex_distance(plane: Vec4, min: Vec3, max: Vec3) -> f32 {
    plane.x * if plane.x < 0.0 { max.x } else { min.x }
        + plane.y * if plane.y < 0.0 { max.y } else { min.y }
        + plane.z * if plane.z < 0.0 { max.z } else { min.z }
        + plane.w
}

#[cfg(test)]
#[path = "frustum_intersection_tests.rs"]
mod tests;
