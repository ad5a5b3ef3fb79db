use glam::Vec3;

/// Line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint
    pub a: Vec3,
    /// Second endpoint
    pub b: Vec3,
}

impl LineSegment {
    /// Create a segment
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Same segment with endpoints swapped
    pub fn reversed(&self) -> Self {
        Self { a: self.b, b: self.a }
    }
}
