//! Property tweens
//!
//! A [`Tween`] drives one [`Property`] from the value it had at construction
//! to an end value over a fixed duration.

use std::fmt;
use std::time::{Duration, Instant};

use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::property::Property;

/// Per-frame hook, called after the property has been written
pub type UpdateHook = Box<dyn FnMut(&Tween)>;

/// Completion hook, called once after the end value has been forced
pub type CompleteHook = Box<dyn FnOnce(&Tween)>;

/// Linear interpolation in the `a*(1-t) + b*t` form.
///
/// Returns `a` exactly at `t = 0` and `b` exactly at `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// One in-flight animation
pub struct Tween {
    property: Property,
    start_value: f64,
    end_value: f64,
    duration: Duration,
    started_at: Instant,
    easing: Easing,
    phase: f64,
    on_update: Option<UpdateHook>,
    on_complete: Option<CompleteHook>,
}

impl Tween {
    /// Build a tween toward `end_value`, capturing the property's current
    /// value as the start value.
    ///
    /// The tween is not scheduled; hand it to
    /// [`TweenScheduler::add`](crate::TweenScheduler::add).
    pub fn to(
        property: Property,
        end_value: f64,
        duration: Duration,
        easing: Easing,
        started_at: Instant,
    ) -> Result<Self> {
        if duration.is_zero() {
            return Err(TweenError::InvalidDuration);
        }
        let start_value = property.get().ok_or(TweenError::TargetDropped)?;
        if !start_value.is_finite() {
            return Err(TweenError::NonFiniteValue {
                which: "start",
                value: start_value,
            });
        }
        if !end_value.is_finite() {
            return Err(TweenError::NonFiniteValue {
                which: "end",
                value: end_value,
            });
        }

        Ok(Self {
            property,
            start_value,
            end_value,
            duration,
            started_at,
            easing,
            phase: 0.0,
            on_update: None,
            on_complete: None,
        })
    }

    /// Builder: call `hook` every tick this tween is advanced
    pub fn on_update<F: FnMut(&Tween) + 'static>(mut self, hook: F) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Builder: call `hook` once, on the tick the tween completes
    pub fn on_complete<F: FnOnce(&Tween) + 'static>(mut self, hook: F) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`
    pub fn phase_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Interpolated value for a given phase, before exact-arrival forcing
    pub fn value_at_phase(&self, phase: f64) -> f64 {
        lerp(self.start_value, self.end_value, self.easing.apply(phase))
    }

    /// Phase computed on the most recent tick
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == 1.0
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Advance to `now`. Returns `true` on the tick the tween completes.
    pub(crate) fn advance(&mut self, now: Instant) -> bool {
        let phase = self.phase_at(now);
        self.phase = phase;
        self.property.set(self.value_at_phase(phase));

        if let Some(mut hook) = self.on_update.take() {
            hook(&*self);
            self.on_update = Some(hook);
        }

        if phase < 1.0 {
            return false;
        }

        // Exact arrival, no easing residue
        self.property.set(self.end_value);
        if let Some(hook) = self.on_complete.take() {
            hook(&*self);
        }
        true
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("phase", &self.phase)
            .field("on_update", &self.on_update.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        for (a, b) in [(0.0, 1.0), (-3.25, 17.5), (1e9, -1e-9), (0.1, 0.3)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        let target = Rc::new(Cell::new(0.0));
        let err = Tween::to(Property::cell(&target), 1.0, Duration::ZERO, Easing::Linear, Instant::now())
            .unwrap_err();
        assert_eq!(err, TweenError::InvalidDuration);
    }

    #[test]
    fn dropped_target_is_rejected() {
        let target = Rc::new(Cell::new(0.0));
        let property = Property::cell(&target);
        drop(target);

        let err = Tween::to(property, 1.0, ms(10), Easing::Linear, Instant::now()).unwrap_err();
        assert_eq!(err, TweenError::TargetDropped);
    }

    #[test]
    fn non_finite_end_is_rejected() {
        let target = Rc::new(Cell::new(0.0));
        let err = Tween::to(Property::cell(&target), f64::NAN, ms(10), Easing::Linear, Instant::now())
            .unwrap_err();
        assert!(matches!(err, TweenError::NonFiniteValue { which: "end", .. }));
    }

    #[test]
    fn start_value_is_captured_at_construction() {
        let target = Rc::new(Cell::new(4.0));
        let tween = Tween::to(Property::cell(&target), 8.0, ms(100), Easing::Linear, Instant::now()).unwrap();
        target.set(100.0);
        assert_eq!(tween.start_value(), 4.0);
    }

    #[test]
    fn phase_is_clamped() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let tween = Tween::to(Property::cell(&target), 1.0, ms(200), Easing::Linear, start).unwrap();

        assert_eq!(tween.phase_at(start), 0.0);
        assert!((tween.phase_at(start + ms(50)) - 0.25).abs() < 1e-9);
        assert_eq!(tween.phase_at(start + ms(200)), 1.0);
        assert_eq!(tween.phase_at(start + ms(10_000)), 1.0);
    }

    #[test]
    fn phase_before_start_is_zero() {
        let start = Instant::now() + ms(500);
        let target = Rc::new(Cell::new(0.0));
        let tween = Tween::to(Property::cell(&target), 1.0, ms(200), Easing::Linear, start).unwrap();
        assert_eq!(tween.phase_at(start - ms(100)), 0.0);
    }

    #[test]
    fn advance_forces_exact_end_value() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.1));
        let mut tween = Tween::to(Property::cell(&target), 0.3, ms(100), Easing::back_out(0.5), start).unwrap();

        assert!(!tween.advance(start + ms(40)));
        assert!(tween.advance(start + ms(100)));
        assert_eq!(target.get(), 0.3);
        assert!(tween.is_complete());
    }

    #[test]
    fn completion_hook_runs_once() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut tween = Tween::to(Property::cell(&target), 1.0, ms(10), Easing::Linear, start)
            .unwrap()
            .on_complete(move |t| {
                assert_eq!(t.phase(), 1.0);
                counter.set(counter.get() + 1);
            });

        tween.advance(start + ms(20));
        tween.advance(start + ms(30));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn update_hook_sees_written_value() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let seen = Rc::new(Cell::new(f64::NAN));
        let sink = seen.clone();
        let mut tween = Tween::to(Property::cell(&target), 10.0, ms(100), Easing::Linear, start)
            .unwrap()
            .on_update(move |t| sink.set(t.property().get().unwrap_or(f64::NAN)));

        tween.advance(start + ms(50));
        assert!((seen.get() - 5.0).abs() < 1e-9);
    }
}
