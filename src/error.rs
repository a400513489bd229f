//! Error types for sphere tessellation

use std::fmt;

/// Errors that can occur while building a tessellation configuration
#[derive(Debug, Clone)]
pub enum SphereError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Requested solid selector index does not name a platonic solid
    UnknownSolid(u32),
}

impl fmt::Display for SphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SphereError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            SphereError::UnknownSolid(index) => write!(f, "unknown platonic solid: {}", index),
        }
    }
}

impl std::error::Error for SphereError {}

/// Result type alias for tessellation operations
pub type Result<T> = std::result::Result<T, SphereError>;
