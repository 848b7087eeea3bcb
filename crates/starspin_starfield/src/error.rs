//! Starfield error types

use thiserror::Error;

/// Starfield-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StarfieldError {
    /// A configuration constant is out of range
    #[error("invalid starfield config: {0}")]
    InvalidConfig(String),

    /// Viewport has a zero, negative or non-finite dimension
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

/// Result type for starfield operations
pub type Result<T> = std::result::Result<T, StarfieldError>;
