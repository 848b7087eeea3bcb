//! Headless runtime primitives for diagnostics execution.

use anyhow::{bail, Result};
use std::time::Duration;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    /// Logical time covered by this frame.
    pub frame_ms: u64,
    /// Logical time at the end of this frame.
    pub elapsed_ms: u64,
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget in headless mode.
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext),
    {
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        for frame in 0..cfg.max_frames {
            let elapsed_ms = cfg.tick_ms.saturating_mul(frame as u64 + 1);
            on_frame(&HeadlessContext {
                frame_index: frame,
                frame_ms: cfg.tick_ms,
                elapsed_ms,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_frame_budget() {
        let cfg = HeadlessRunConfig {
            max_frames: 4,
            tick_ms: 10,
        };
        let mut seen = Vec::new();
        HeadlessRuntime::run(cfg, |ctx| seen.push((ctx.frame_index, ctx.elapsed_ms))).unwrap();
        assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30), (3, 40)]);
    }

    #[test]
    fn rejects_empty_budgets() {
        let cfg = HeadlessRunConfig {
            max_frames: 0,
            ..HeadlessRunConfig::default()
        };
        assert!(HeadlessRuntime::run(cfg, |_| {}).is_err());

        let cfg = HeadlessRunConfig {
            tick_ms: 0,
            ..HeadlessRunConfig::default()
        };
        assert!(HeadlessRuntime::run(cfg, |_| {}).is_err());
    }
}
