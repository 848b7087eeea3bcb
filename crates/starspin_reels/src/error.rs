//! Reel error types

use starspin_animation::TweenError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReelError {
    #[error("reel layout needs at least one reel")]
    NoReels,

    #[error("reels need at least one symbol slot")]
    NoSymbols,

    #[error("symbol pool is empty")]
    EmptySymbolPool,

    /// Symbol size or an intrinsic symbol dimension is not positive
    #[error("invalid symbol size: {0}")]
    InvalidSymbolSize(f64),

    /// A layout constant is negative or not finite
    #[error("invalid reel layout: {field} = {value}")]
    InvalidLayout { field: &'static str, value: f64 },

    #[error(transparent)]
    Tween(#[from] TweenError),
}

/// Result type for reel operations
pub type Result<T> = std::result::Result<T, ReelError>;
