//! Tween error types

use thiserror::Error;

/// Errors raised when constructing a tween
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// Duration must be strictly positive
    #[error("tween duration must be greater than zero")]
    InvalidDuration,

    /// The weakly held target was dropped before the tween was built
    #[error("tween target is no longer alive")]
    TargetDropped,

    /// Start or end value is NaN or infinite
    #[error("tween {which} value is not finite: {value}")]
    NonFiniteValue { which: &'static str, value: f64 },
}

/// Result type for tween operations
pub type Result<T> = std::result::Result<T, TweenError>;
