//! One demo session: starfield, tweens, and reels driven frame by frame
//!
//! Per frame: warp timer, starfield, tween scheduler, overlays, then the
//! reel layout pass, so the layout always sees this frame's eased reel
//! positions. A spin that completes during the tween tick shows the win
//! banner on that same frame.

use anyhow::{bail, Context, Result};
use starspin_animation::{Clock, SystemClock, TweenScheduler};
use starspin_reels::{ReelController, SymbolSwap};
use starspin_starfield::{Starfield, Viewport};
use std::time::Duration;

use crate::config::DemoConfig;
use crate::headless_report::FrameStats;
use crate::overlay::{TimedOverlay, WinBanner};
use crate::timer::IntervalTimer;

/// Nominal ticker rate; starfield deltas are in frames at this rate
const FRAMES_PER_SECOND: f64 = 60.0;

/// What changed during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    pub respawned: usize,
    pub tweens_completed: usize,
    pub warp_toggles: u32,
    pub swaps: Vec<SymbolSwap>,
    pub banner_shown: bool,
    pub banner_dismissed: bool,
}

pub struct DemoSession<C: Clock = SystemClock> {
    clock: C,
    viewport: Viewport,
    starfield: Starfield,
    scheduler: TweenScheduler,
    reels: ReelController,
    warp_timer: IntervalTimer,
    banner: WinBanner,
    fps_overlay: TimedOverlay,
    fps: f64,
    stats: FrameStats,
}

impl DemoSession<SystemClock> {
    /// Session on the real monotonic clock
    pub fn live(config: DemoConfig) -> Result<Self> {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> DemoSession<C> {
    pub fn new(config: DemoConfig, clock: C) -> Result<Self> {
        let viewport = Viewport::from(config.viewport);
        viewport.validate().context("Invalid viewport")?;
        if config.banner.grow_ms == 0 {
            bail!("banner grow_ms must be > 0");
        }
        let pool = config.symbol_pool()?;
        let (starfield, reels) = match config.seed {
            Some(seed) => (
                Starfield::with_seed(config.starfield, seed),
                ReelController::with_seed(config.reels, config.spin, pool, seed.wrapping_add(1)),
            ),
            None => (
                Starfield::new(config.starfield),
                ReelController::new(config.reels, config.spin, pool),
            ),
        };
        let starfield = starfield.context("Failed to create starfield")?;
        let reels = reels.context("Failed to create reels")?;

        tracing::info!(
            width = config.viewport.width,
            height = config.viewport.height,
            stars = config.starfield.star_count,
            reels = config.reels.reel_count,
            "demo session created"
        );

        Ok(Self {
            clock,
            viewport,
            starfield,
            scheduler: TweenScheduler::new(),
            reels,
            warp_timer: IntervalTimer::new(Duration::from_millis(config.warp_interval_ms)),
            banner: WinBanner::new(config.banner),
            fps_overlay: TimedOverlay::new(Duration::from_millis(config.fps_overlay_ms)),
            fps: 0.0,
            stats: FrameStats::default(),
        })
    }

    /// Input trigger: start a spin unless one is already running.
    ///
    /// Returns whether a new spin started.
    pub fn request_spin(&mut self) -> Result<bool> {
        let now = self.clock.now();
        let started = self.reels.start_spin(&mut self.scheduler, now)?;
        if started {
            self.stats.spins_started += 1;
            self.fps_overlay.show(now);
        }
        Ok(started)
    }

    /// Flip the starfield warp signal
    pub fn toggle_warp(&mut self) {
        self.starfield.camera_mut().toggle_warp();
        tracing::debug!(warping = self.starfield.camera().is_warping(), "warp toggled");
    }

    /// Change the viewport; a zero or non-finite size is rejected and the
    /// previous viewport kept
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        let viewport = Viewport::new(width, height);
        viewport.validate().context("Invalid viewport")?;
        self.viewport = viewport;
        tracing::debug!(width, height, "viewport resized");
        Ok(())
    }

    /// Run one frame that took `elapsed` of wall time
    pub fn frame(&mut self, elapsed: Duration) -> FrameOutput {
        let warp_toggles = self.warp_timer.advance(elapsed);
        for _ in 0..warp_toggles {
            self.toggle_warp();
        }

        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            self.fps = 1.0 / secs;
        }
        let delta = secs * FRAMES_PER_SECOND;
        let respawned = self.starfield.tick(delta, self.viewport);

        let now = self.clock.now();
        let spins_before = self.reels.spins_completed();
        let tweens_completed = self.scheduler.tick(now);

        self.fps_overlay.update(now);
        let banner_dismissed = self.banner.update(&mut self.scheduler, now);
        let mut banner_shown = false;
        if self.reels.spins_completed() > spins_before {
            match self.banner.show(&mut self.scheduler, now) {
                Ok(()) => banner_shown = true,
                Err(err) => tracing::warn!(%err, "win banner not shown"),
            }
        }

        let swaps = self.reels.tick();

        self.stats.frames += 1;
        self.stats.respawns += respawned as u64;
        self.stats.tweens_completed += tweens_completed as u64;
        self.stats.symbol_swaps += swaps.len() as u64;
        self.stats.camera_depth = self.starfield.camera().depth;
        self.stats.spins_completed = self.reels.spins_completed();

        FrameOutput {
            respawned,
            tweens_completed,
            warp_toggles,
            swaps,
            banner_shown,
            banner_dismissed,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.reels.is_spinning()
    }

    pub fn banner(&self) -> &WinBanner {
        &self.banner
    }

    /// Frame rate of the last frame, while the overlay is up
    pub fn fps_overlay(&self) -> Option<f64> {
        self.fps_overlay.is_visible().then_some(self.fps)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn reels(&self) -> &ReelController {
        &self.reels
    }

    pub fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
