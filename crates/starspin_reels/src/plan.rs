//! Reel geometry and spin timing constants

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ReelError, Result};

/// Reel geometry
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReelLayout {
    pub reel_count: usize,
    pub symbols_per_reel: usize,
    /// Vertical spacing between symbols, in pixels
    pub symbol_size: f64,
    /// Horizontal spacing between reel columns
    pub reel_width: f64,
    /// Blur per unit of position change per tick
    pub blur_gain: f64,
}

impl Default for ReelLayout {
    fn default() -> Self {
        Self {
            reel_count: 1,
            symbols_per_reel: 5,
            symbol_size: 150.0,
            reel_width: 160.0,
            blur_gain: 8.0,
        }
    }
}

impl ReelLayout {
    pub fn validate(&self) -> Result<()> {
        if self.reel_count == 0 {
            return Err(ReelError::NoReels);
        }
        if self.symbols_per_reel == 0 {
            return Err(ReelError::NoSymbols);
        }
        if !(self.symbol_size.is_finite() && self.symbol_size > 0.0) {
            return Err(ReelError::InvalidSymbolSize(self.symbol_size));
        }
        for (field, value) in [("reel_width", self.reel_width), ("blur_gain", self.blur_gain)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ReelError::InvalidLayout { field, value });
            }
        }
        Ok(())
    }

    /// Left edge of reel `index`; the first column sits one reel width in
    pub fn column_x(&self, index: usize) -> f64 {
        (index + 1) as f64 * self.reel_width
    }
}

/// Staggered spin targets and durations.
///
/// Reel `i` travels `base_rotations + i * per_reel_extra + global_extra`
/// symbols over `base_duration + (i + global_extra) * per_reel_delay`, so
/// reels further right land later and travel further.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpinPlan {
    pub base_rotations: f64,
    pub per_reel_extra: f64,
    pub global_extra: f64,
    pub base_duration_ms: f64,
    pub per_reel_delay_ms: f64,
    /// Overshoot of the back-out easing
    pub backout_amount: f64,
}

impl Default for SpinPlan {
    fn default() -> Self {
        Self {
            base_rotations: 10.0,
            per_reel_extra: 5.0,
            global_extra: 3.0,
            base_duration_ms: 2500.0,
            per_reel_delay_ms: 600.0,
            backout_amount: 0.5,
        }
    }
}

impl SpinPlan {
    /// Target position for reel `index` starting from `position`
    pub fn target(&self, index: usize, position: f64) -> f64 {
        position + self.base_rotations + index as f64 * self.per_reel_extra + self.global_extra
    }

    /// Spin duration for reel `index`
    pub fn duration(&self, index: usize) -> Duration {
        let ms = self.base_duration_ms
            + index as f64 * self.per_reel_delay_ms
            + self.global_extra * self.per_reel_delay_ms;
        Duration::from_micros((ms.max(0.0) * 1000.0).round() as u64)
    }
}
