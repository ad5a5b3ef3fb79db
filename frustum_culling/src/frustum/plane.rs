//! Frustum plane identifiers and plane masks.
//!
//! Planes are numbered in test order. The integer constants and the mask
//! constants form the compact interface used in hot loops; `PlaneIndex`
//! and `PlaneMask` are the typed equivalents.

use bitflags::bitflags;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};

/// Plane `x = -1` of the identity frustum (left)
pub const PLANE_NX: i32 = 0;
/// Plane `x = 1` of the identity frustum (right)
pub const PLANE_PX: i32 = 1;
/// Plane `y = -1` of the identity frustum (bottom)
pub const PLANE_NY: i32 = 2;
/// Plane `y = 1` of the identity frustum (top)
pub const PLANE_PY: i32 = 3;
/// Plane `z = -1` of the identity frustum (near)
pub const PLANE_NZ: i32 = 4;
/// Plane `z = 1` of the identity frustum (far)
pub const PLANE_PZ: i32 = 5;

/// Mask bit for [`PLANE_NX`]
pub const PLANE_MASK_NX: u32 = 1 << PLANE_NX;
/// Mask bit for [`PLANE_PX`]
pub const PLANE_MASK_PX: u32 = 1 << PLANE_PX;
/// Mask bit for [`PLANE_NY`]
pub const PLANE_MASK_NY: u32 = 1 << PLANE_NY;
/// Mask bit for [`PLANE_PY`]
pub const PLANE_MASK_PY: u32 = 1 << PLANE_PY;
/// Mask bit for [`PLANE_NZ`]
pub const PLANE_MASK_NZ: u32 = 1 << PLANE_NZ;
/// Mask bit for [`PLANE_PZ`]
pub const PLANE_MASK_PZ: u32 = 1 << PLANE_PZ;

/// One of the six frustum planes, in test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PlaneIndex {
    /// Left
    NX = 0,
    /// Right
    PX = 1,
    /// Bottom
    NY = 2,
    /// Top
    PY = 3,
    /// Near
    NZ = 4,
    /// Far
    PZ = 5,
}

impl PlaneIndex {
    /// All planes in test order
    pub const ALL: [PlaneIndex; 6] = [
        PlaneIndex::NX,
        PlaneIndex::PX,
        PlaneIndex::NY,
        PlaneIndex::PY,
        PlaneIndex::NZ,
        PlaneIndex::PZ,
    ];

    /// Position in the plane array
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer code (`PLANE_NX` .. `PLANE_PZ`)
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Single-bit mask for this plane
    #[inline]
    pub fn mask(self) -> PlaneMask {
        PlaneMask::from_bits_retain(1 << self as u32)
    }
}

impl TryFrom<i32> for PlaneIndex {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            PLANE_NX => Ok(PlaneIndex::NX),
            PLANE_PX => Ok(PlaneIndex::PX),
            PLANE_NY => Ok(PlaneIndex::NY),
            PLANE_PY => Ok(PlaneIndex::PY),
            PLANE_NZ => Ok(PlaneIndex::NZ),
            PLANE_PZ => Ok(PlaneIndex::PZ),
            _ => Err(Diagnostics::log_and_return_error(
                "frustum::PlaneIndex",
                Error::InvalidPlaneIndex(value),
            )),
        }
    }
}

impl From<PlaneIndex> for i32 {
    fn from(plane: PlaneIndex) -> i32 {
        plane.code()
    }
}

bitflags! {
    /// Set of planes to test. Planes absent from the mask pass automatically.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlaneMask: u32 {
        /// Left
        const NX = PLANE_MASK_NX;
        /// Right
        const PX = PLANE_MASK_PX;
        /// Bottom
        const NY = PLANE_MASK_NY;
        /// Top
        const PY = PLANE_MASK_PY;
        /// Near
        const NZ = PLANE_MASK_NZ;
        /// Far
        const PZ = PLANE_MASK_PZ;
    }
}

impl PlaneMask {
    /// Whether `plane` must be tested
    #[inline]
    pub fn tests(self, plane: PlaneIndex) -> bool {
        self.bits() & (1 << plane as u32) != 0
    }

    /// Parse raw bits, rejecting anything above the six plane bits
    pub fn try_from_bits(bits: u32) -> Result<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            Diagnostics::log_and_return_error("frustum::PlaneMask", Error::InvalidPlaneMask(bits))
        })
    }
}

impl Default for PlaneMask {
    fn default() -> Self {
        PlaneMask::all()
    }
}

impl From<PlaneIndex> for PlaneMask {
    fn from(plane: PlaneIndex) -> Self {
        plane.mask()
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
