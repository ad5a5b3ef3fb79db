//! Shapes classified against a frustum.
//!
//! A point is a plain `glam::Vec3`.

mod aabb;
mod line_segment;
mod sphere;

pub use aabb::AABB;
pub use line_segment::LineSegment;
pub use sphere::Sphere;
