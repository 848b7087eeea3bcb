//! Timed overlays
//!
//! The win banner grows in when a spin completes and is dismissed after a
//! fixed time; the frame-rate overlay is shown for a while after each spin
//! starts.

use serde::{Deserialize, Serialize};
use starspin_animation::{Easing, Property, Tween, TweenId, TweenScheduler};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Something visible for a fixed time after it is shown
#[derive(Debug, Clone, Copy)]
pub struct TimedOverlay {
    duration: Duration,
    shown_at: Option<Instant>,
}

impl TimedOverlay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown_at: None,
        }
    }

    /// Show, restarting the dismiss countdown if already visible
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn dismiss(&mut self) {
        self.shown_at = None;
    }

    /// Dismiss once the duration has elapsed. Returns `true` on the call
    /// that dismisses.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.shown_at {
            Some(shown_at) if now.saturating_duration_since(shown_at) >= self.duration => {
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Win banner timing, from `[banner]` in starspin.toml
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Scale both axes grow to
    pub target_scale: f64,
    pub grow_ms: u64,
    pub visible_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            target_scale: 1.5,
            grow_ms: 2000,
            visible_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BannerScale {
    pub x: f64,
    pub y: f64,
}

/// "Win" banner shown when the reels stop
#[derive(Debug)]
pub struct WinBanner {
    config: BannerConfig,
    scale: Rc<Cell<BannerScale>>,
    overlay: TimedOverlay,
    tweens: Vec<TweenId>,
}

impl WinBanner {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            config,
            scale: Rc::new(Cell::new(BannerScale::default())),
            overlay: TimedOverlay::new(Duration::from_millis(config.visible_ms)),
            tweens: Vec::with_capacity(2),
        }
    }

    /// Show from zero scale and grow both axes toward the target.
    ///
    /// A banner that is still up restarts; its old tweens are cancelled.
    pub fn show(&mut self, scheduler: &mut TweenScheduler, now: Instant) -> starspin_animation::Result<()> {
        self.cancel_tweens(scheduler);
        self.scale.set(BannerScale::default());

        let grow = Duration::from_millis(self.config.grow_ms);
        let x = Tween::to(axis(&self.scale, |s| &mut s.x), self.config.target_scale, grow, Easing::EaseOutQuad, now)?;
        let y = Tween::to(axis(&self.scale, |s| &mut s.y), self.config.target_scale, grow, Easing::EaseOutQuad, now)?;
        self.tweens.push(scheduler.add(x));
        self.tweens.push(scheduler.add(y));

        self.overlay.show(now);
        tracing::debug!(target_scale = self.config.target_scale, "win banner shown");
        Ok(())
    }

    /// Returns `true` on the frame the banner is dismissed
    pub fn update(&mut self, scheduler: &mut TweenScheduler, now: Instant) -> bool {
        if !self.overlay.update(now) {
            return false;
        }
        self.cancel_tweens(scheduler);
        tracing::debug!("win banner dismissed");
        true
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    pub fn scale(&self) -> BannerScale {
        self.scale.get()
    }

    fn cancel_tweens(&mut self, scheduler: &mut TweenScheduler) {
        for id in self.tweens.drain(..) {
            scheduler.cancel(id);
        }
    }
}

fn axis(scale: &Rc<Cell<BannerScale>>, field: fn(&mut BannerScale) -> &mut f64) -> Property {
    let read = scale.clone();
    let write = scale.clone();
    Property::new(
        move || {
            let mut current = read.get();
            *field(&mut current)
        },
        move |value| {
            let mut current = write.get();
            *field(&mut current) = value;
            write.set(current);
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn overlay_dismisses_after_duration() {
        let start = Instant::now();
        let mut overlay = TimedOverlay::new(ms(3500));
        assert!(!overlay.is_visible());

        overlay.show(start);
        assert!(!overlay.update(start + ms(3499)));
        assert!(overlay.is_visible());
        assert!(overlay.update(start + ms(3500)));
        assert!(!overlay.is_visible());
        assert!(!overlay.update(start + ms(4000)));
    }

    #[test]
    fn banner_grows_both_axes_and_lands_exactly() {
        let start = Instant::now();
        let mut scheduler = TweenScheduler::new();
        let mut banner = WinBanner::new(BannerConfig::default());
        banner.show(&mut scheduler, start).unwrap();
        assert_eq!(scheduler.len(), 2);
        assert_eq!(banner.scale(), BannerScale::default());

        scheduler.tick(start + ms(1000));
        let half = banner.scale();
        // Ease-out quad at t = 0.5 is 0.75
        assert!((half.x - 1.125).abs() < 1e-9);
        assert_eq!(half.x, half.y);

        scheduler.tick(start + ms(2000));
        assert_eq!(banner.scale(), BannerScale { x: 1.5, y: 1.5 });
        assert!(banner.update(&mut scheduler, start + ms(2000)));
        assert!(!banner.is_visible());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn reshow_restarts_from_zero() {
        let start = Instant::now();
        let mut scheduler = TweenScheduler::new();
        let mut banner = WinBanner::new(BannerConfig::default());
        banner.show(&mut scheduler, start).unwrap();
        scheduler.tick(start + ms(1500));

        banner.show(&mut scheduler, start + ms(1500)).unwrap();
        assert_eq!(scheduler.len(), 2);
        assert_eq!(banner.scale().x, 0.0);
        // The first countdown no longer applies
        assert!(!banner.update(&mut scheduler, start + ms(2000)));
        assert!(banner.is_visible());
    }

    #[test]
    fn zero_grow_time_is_rejected() {
        let mut scheduler = TweenScheduler::new();
        let mut banner = WinBanner::new(BannerConfig {
            grow_ms: 0,
            ..BannerConfig::default()
        });
        assert!(banner.show(&mut scheduler, Instant::now()).is_err());
        assert!(scheduler.is_empty());
        assert!(!banner.is_visible());
    }
}
