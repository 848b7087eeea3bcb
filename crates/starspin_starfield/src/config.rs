//! Starfield tuning constants

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarfieldError};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars in the pool, fixed for the simulation's lifetime
    pub star_count: usize,
    pub field_of_view: f64,
    /// Camera speed added on top of the smoothed warp speed
    pub base_speed: f64,
    /// Motion-stretch factor applied along the radial axis
    pub star_stretch: f64,
    pub star_base_size: f64,
    /// Divisor for one step of exponential speed smoothing
    pub speed_smoothing: f64,
    /// Depth units advanced per frame unit at speed 1
    pub time_scale: f64,
    /// Respawned stars land at least this far ahead of the camera
    pub min_spawn_depth: f64,
    pub spawn_depth_spread: f64,
    /// Initial stars are spread over `[0, initial_max_depth)`
    pub initial_max_depth: f64,
    /// Stars this deep (relative to the camera) or deeper are scaled to zero
    pub fade_depth: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Projection depth floor for stars level with the camera
    pub min_projection_depth: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 800,
            field_of_view: 20.0,
            base_speed: 0.025,
            star_stretch: 5.0,
            star_base_size: 0.05,
            speed_smoothing: 20.0,
            time_scale: 10.0,
            min_spawn_depth: 2000.0,
            spawn_depth_spread: 1000.0,
            initial_max_depth: 2000.0,
            fade_depth: 2000.0,
            min_radius: 1.0,
            max_radius: 51.0,
            min_projection_depth: 1e-3,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.star_count == 0 {
            return Err(invalid("star_count must be at least 1".to_string()));
        }

        let positive = [
            ("field_of_view", self.field_of_view),
            ("speed_smoothing", self.speed_smoothing),
            ("spawn_depth_spread", self.spawn_depth_spread),
            ("initial_max_depth", self.initial_max_depth),
            ("fade_depth", self.fade_depth),
            ("min_projection_depth", self.min_projection_depth),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive and finite, got {value}")));
            }
        }

        let non_negative = [
            ("base_speed", self.base_speed),
            ("star_stretch", self.star_stretch),
            ("star_base_size", self.star_base_size),
            ("time_scale", self.time_scale),
            ("min_spawn_depth", self.min_spawn_depth),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{name} must be finite and not negative, got {value}")));
            }
        }

        // Keeps every star off the camera axis
        if !(self.min_radius.is_finite() && self.min_radius >= 1.0) {
            return Err(invalid(format!("min_radius must be at least 1, got {}", self.min_radius)));
        }
        if !(self.max_radius.is_finite() && self.max_radius > self.min_radius) {
            return Err(invalid(format!(
                "radius range [{}, {}) is empty",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> StarfieldError {
    StarfieldError::InvalidConfig(message)
}
