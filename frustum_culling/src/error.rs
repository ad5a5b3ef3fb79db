//! Error types for the frustum culling crate
//!
//! Classification itself never fails. Errors only come from the API edge:
//! converting raw integers coming from callers (plane indices, result codes,
//! plane masks) into typed values, and validating configuration.

use std::fmt;

/// Result type for frustum culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum culling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Integer is not a plane index in `0..=5`
    InvalidPlaneIndex(i32),

    /// Integer is neither a plane index nor a classification sentinel
    InvalidClassificationCode(i32),

    /// Bits set outside the six plane bits
    InvalidPlaneMask(u32),

    /// Configuration rejected by validation
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPlaneIndex(index) => {
                write!(f, "Invalid plane index: {} (expected 0..=5)", index)
            }
            Error::InvalidClassificationCode(code) => {
                write!(f, "Invalid classification code: {}", code)
            }
            Error::InvalidPlaneMask(bits) => {
                write!(f, "Invalid plane mask: {:#x} (only the low 6 bits may be set)", bits)
            }
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
