//! Classification results and their compact integer encoding.
//!
//! Plane indices `0..=5` mean "outside, rejected by this plane". The
//! negative sentinels cover the other outcomes. The enums are `Copy` and
//! carry no heap data.

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use super::plane::PlaneIndex;

/// The shape straddles at least one plane
pub const INTERSECT: i32 = -1;
/// The shape is fully inside the frustum
pub const INSIDE: i32 = -2;
/// The sphere is fully outside the frustum (sphere classification only)
pub const OUTSIDE: i32 = -3;

/// Result of a 3-way box or rectangle classification.
///
/// - `Outside(plane)` → skip; `plane` is the plane that rejected the shape
/// - `Inside` → fully contained, no further tests needed
/// - `Intersect` → straddles the frustum boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AabIntersection {
    /// Conservatively outside, rejected by this plane
    Outside(PlaneIndex),
    /// Straddles at least one plane
    Intersect,
    /// Fully inside all planes
    Inside,
}

impl AabIntersection {
    /// Compact code: plane index, [`INTERSECT`] or [`INSIDE`]
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            AabIntersection::Outside(plane) => plane.code(),
            AabIntersection::Intersect => INTERSECT,
            AabIntersection::Inside => INSIDE,
        }
    }

    /// True unless the shape was rejected by a plane
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, AabIntersection::Outside(_))
    }

    /// Rejecting plane, if any
    #[inline]
    pub fn rejecting_plane(self) -> Option<PlaneIndex> {
        match self {
            AabIntersection::Outside(plane) => Some(plane),
            _ => None,
        }
    }

    /// Outside / intersect / inside, ignoring which plane rejected.
    pub fn same_category(self, other: AabIntersection) -> bool {
        matches!(
            (self, other),
            (AabIntersection::Outside(_), AabIntersection::Outside(_))
                | (AabIntersection::Intersect, AabIntersection::Intersect)
                | (AabIntersection::Inside, AabIntersection::Inside)
        )
    }
}

impl TryFrom<i32> for AabIntersection {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            INTERSECT => Ok(AabIntersection::Intersect),
            INSIDE => Ok(AabIntersection::Inside),
            0..=5 => PlaneIndex::try_from(code).map(AabIntersection::Outside),
            _ => Err(Diagnostics::log_and_return_error(
                "frustum::AabIntersection",
                Error::InvalidClassificationCode(code),
            )),
        }
    }
}

/// Result of [`intersect_sphere`](super::FrustumIntersection::intersect_sphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphereIntersection {
    /// Fully outside at least one plane
    Outside,
    /// Straddles at least one plane
    Intersect,
    /// Fully inside all planes
    Inside,
}

impl SphereIntersection {
    /// Compact code: [`OUTSIDE`], [`INTERSECT`] or [`INSIDE`]
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            SphereIntersection::Outside => OUTSIDE,
            SphereIntersection::Intersect => INTERSECT,
            SphereIntersection::Inside => INSIDE,
        }
    }
}

impl TryFrom<i32> for SphereIntersection {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            OUTSIDE => Ok(SphereIntersection::Outside),
            INTERSECT => Ok(SphereIntersection::Intersect),
            INSIDE => Ok(SphereIntersection::Inside),
            _ => Err(Diagnostics::log_and_return_error(
                "frustum::SphereIntersection",
                Error::InvalidClassificationCode(code),
            )),
        }
    }
}

#[cfg(test)]
#[path = "classification_tests.rs"]
mod tests;
