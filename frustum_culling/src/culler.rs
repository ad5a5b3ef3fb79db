//! Culling strategies over batches of bounding boxes.
//!
//! A Culler classifies a list of keyed AABBs against a frustum and
//! collects the keys of the visible ones. `CoherentCuller` remembers, per
//! key, the plane that rejected the object last frame and tries that plane
//! first on the next frame.

use std::hash::Hash;
use rustc_hash::FxHashMap;
use crate::config::FrustumConfig;
use crate::error::Result;
use crate::frustum::{AabIntersection, FrustumIntersection, PlaneIndex, PlaneMask};
use crate::geometry::AABB;

/// Per-frame culling counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Objects classified
    pub tested: u32,
    /// Objects fully inside
    pub inside: u32,
    /// Objects straddling the boundary
    pub intersect: u32,
    /// Objects rejected
    pub outside: u32,
    /// Rejections decided by last frame's plane alone
    pub hint_hits: u32,
}

impl CullStats {
    /// Objects that survived culling
    pub fn visible(&self) -> u32 {
        self.inside + self.intersect
    }

    fn record(&mut self, result: AabIntersection) {
        self.tested += 1;
        match result {
            AabIntersection::Outside(_) => self.outside += 1,
            AabIntersection::Intersect => self.intersect += 1,
            AabIntersection::Inside => self.inside += 1,
        }
    }
}

/// Strategy for culling a batch of keyed boxes.
///
/// `&mut self` allows stateful implementations to keep state across frames.
pub trait Culler<K> {
    /// Classify every object and append the keys of visible ones to `visible`.
    fn cull(
        &mut self,
        frustum: &FrustumIntersection,
        objects: &[(K, AABB)],
        visible: &mut Vec<K>,
    ) -> CullStats;
}

/// Stateless culler: full masked test on every object, every frame.
pub struct PlainCuller {
    mask: PlaneMask,
}

impl PlainCuller {
    /// Cull against the planes in `mask`
    pub fn new(mask: PlaneMask) -> Self {
        Self { mask }
    }
}

impl Default for PlainCuller {
    fn default() -> Self {
        Self::new(PlaneMask::all())
    }
}

impl<K: Copy> Culler<K> for PlainCuller {
    fn cull(
        &mut self,
        frustum: &FrustumIntersection,
        objects: &[(K, AABB)],
        visible: &mut Vec<K>,
    ) -> CullStats {
        let mut stats = CullStats::default();
        for (key, aabb) in objects {
            let result = frustum.intersect_aab_masked(aabb.min, aabb.max, self.mask);
            stats.record(result);
            if result.is_visible() {
                visible.push(*key);
            }
        }
        stats
    }
}

/// Culler exploiting temporal coherency.
///
/// Camera and objects move little between frames, so the plane that
/// rejected an object last frame is the most likely to reject it again.
/// The hint only changes how much work is done, never whether an object is
/// visible.
pub struct CoherentCuller<K> {
    mask: PlaneMask,
    temporal_coherency: bool,
    /// Last rejecting plane per object; absent when the object was visible
    hints: FxHashMap<K, PlaneIndex>,
    stats: CullStats,
    frame: u64,
}

impl<K: Copy + Eq + Hash> CoherentCuller<K> {
    /// Create a culler from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the config's plane mask is empty.
    pub fn new(config: &FrustumConfig) -> Result<Self> {
        config.validate()?;
        crate::log::cull_debug!(
            "frustum::CoherentCuller",
            "Created (mask: {:#08b}, temporal coherency: {})",
            config.plane_mask.bits(),
            config.temporal_coherency
        );
        Ok(Self {
            mask: config.plane_mask,
            temporal_coherency: config.temporal_coherency,
            hints: FxHashMap::default(),
            stats: CullStats::default(),
            frame: 0,
        })
    }

    /// Start a new frame: reset counters.
    pub fn begin_frame(&mut self) {
        if self.stats.tested > 0 {
            crate::log::cull_trace!(
                "frustum::CoherentCuller",
                "Frame {}: {} tested, {} visible, {} culled ({} by hint)",
                self.frame,
                self.stats.tested,
                self.stats.visible(),
                self.stats.outside,
                self.stats.hint_hits
            );
        }
        self.frame += 1;
        self.stats = CullStats::default();
    }

    /// Classify one object, updating the frame counters and, with temporal
    /// coherency on, its hint.
    pub fn classify(&mut self, frustum: &FrustumIntersection, key: K, aabb: &AABB) -> AabIntersection {
        let hint = if self.temporal_coherency { self.hints.get(&key).copied() } else { None };

        let result = match hint {
            Some(plane) => frustum.intersect_aab_coherent(aabb.min, aabb.max, self.mask, plane),
            None => frustum.intersect_aab_masked(aabb.min, aabb.max, self.mask),
        };

        self.stats.record(result);
        if !self.temporal_coherency {
            return result;
        }
        match result {
            AabIntersection::Outside(plane) => {
                if hint == Some(plane) {
                    self.stats.hint_hits += 1;
                } else {
                    self.hints.insert(key, plane);
                }
            }
            AabIntersection::Intersect | AabIntersection::Inside => {
                self.hints.remove(&key);
            }
        }
        result
    }

    /// Plane that rejected `key` last time it was classified
    pub fn hint(&self, key: &K) -> Option<PlaneIndex> {
        self.hints.get(key).copied()
    }

    /// Drop the hint of an object that left the scene
    pub fn forget(&mut self, key: &K) {
        self.hints.remove(key);
    }

    /// Drop every hint (e.g. after a camera cut)
    pub fn clear(&mut self) {
        self.hints.clear();
    }

    /// Number of objects with a cached hint
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    /// Counters for the current frame
    pub fn stats(&self) -> CullStats {
        self.stats
    }

    /// Frames started so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl<K: Copy + Eq + Hash> Culler<K> for CoherentCuller<K> {
    fn cull(
        &mut self,
        frustum: &FrustumIntersection,
        objects: &[(K, AABB)],
        visible: &mut Vec<K>,
    ) -> CullStats {
        self.begin_frame();
        for (key, aabb) in objects {
            if self.classify(frustum, *key, aabb).is_visible() {
                visible.push(*key);
            }
        }
        self.stats
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
