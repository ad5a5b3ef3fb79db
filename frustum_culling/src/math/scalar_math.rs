//! Scalar primitives with selectable precision.
//!
//! The precision is a value carried by `ScalarMath`, picked once when a
//! frustum is configured. There is no global switch.

/// Exact vs fast-approximate scalar math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MathPrecision {
    /// IEEE-754 operations (`sqrt`, fused `mul_add`)
    #[default]
    Exact,
    /// Bit-level inverse square root refined by Newton steps,
    /// unfused multiply-add. Relative error below 1e-5.
    Fast,
}

/// Scalar math collaborator used by plane extraction and the segment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarMath {
    precision: MathPrecision,
}

impl ScalarMath {
    /// Exact math
    pub const EXACT: ScalarMath = ScalarMath { precision: MathPrecision::Exact };
    /// Fast-approximate math
    pub const FAST: ScalarMath = ScalarMath { precision: MathPrecision::Fast };

    /// Create a collaborator with the given precision
    pub const fn new(precision: MathPrecision) -> Self {
        Self { precision }
    }

    /// Selected precision
    pub fn precision(&self) -> MathPrecision {
        self.precision
    }

    /// Square root. Negative input yields NaN in exact mode.
    #[inline]
    pub fn sqrt(&self, x: f32) -> f32 {
        match self.precision {
            MathPrecision::Exact => x.sqrt(),
            MathPrecision::Fast => {
                if x <= 0.0 {
                    if x == 0.0 { 0.0 } else { f32::NAN }
                } else {
                    x * fast_inv_sqrt(x)
                }
            }
        }
    }

    /// `1 / sqrt(x)`. Zero yields +inf.
    #[inline]
    pub fn inv_sqrt(&self, x: f32) -> f32 {
        match self.precision {
            MathPrecision::Exact => 1.0 / x.sqrt(),
            MathPrecision::Fast => {
                if x > 0.0 && x.is_finite() {
                    fast_inv_sqrt(x)
                } else {
                    1.0 / x.sqrt()
                }
            }
        }
    }

    /// Absolute value (identical in both modes)
    #[inline]
    pub fn abs(&self, x: f32) -> f32 {
        x.abs()
    }

    /// `a * b + c`
    #[inline]
    pub fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        match self.precision {
            MathPrecision::Exact => a.mul_add(b, c),
            MathPrecision::Fast => a * b + c,
        }
    }
}

/// Quake-style inverse square root with two Newton-Raphson steps.
#[inline]
fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = f32::from_bits(0x5f37_59df - (x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

#[cfg(test)]
#[path = "scalar_math_tests.rs"]
mod tests;
