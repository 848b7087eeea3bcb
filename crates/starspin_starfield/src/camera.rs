//! Camera state shared by every star in the field

/// Camera position and speed along the depth axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Accumulated depth, never decreases
    pub depth: f64,
    /// Smoothed speed, eased toward `target_speed` every tick
    pub speed: f64,
    /// Warp signal, 0 or 1
    pub target_speed: f64,
}

impl CameraState {
    /// Flip warp on or off
    pub fn toggle_warp(&mut self) {
        self.target_speed = if self.target_speed > 0.0 { 0.0 } else { 1.0 };
    }

    pub fn set_target_speed(&mut self, target: f64) {
        self.target_speed = target;
    }

    pub fn is_warping(&self) -> bool {
        self.target_speed > 0.0
    }

    /// One step of exponential smoothing toward the target speed
    pub(crate) fn smooth_speed(&mut self, smoothing: f64) {
        self.speed += (self.target_speed - self.speed) / smoothing;
    }

    /// Move forward; negative deltas are ignored so depth stays monotonic
    pub(crate) fn advance(&mut self, delta: f64, time_scale: f64, base_speed: f64) {
        let step = delta * time_scale * (self.speed + base_speed);
        if step > 0.0 {
            self.depth += step;
        }
    }
}
