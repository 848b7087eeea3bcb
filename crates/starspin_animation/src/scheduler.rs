//! Tween scheduler
//!
//! Owns all active tweens and advances them once per frame.

use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::Instant;

new_key_type! {
    pub struct TweenId;
}

/// The scheduler that ticks all active tweens
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, Tween>,
    /// Registration order; slot order is not insertion order once slots are reused
    order: Vec<TweenId>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a tween built with [`Tween::to`]
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = self.tweens.insert(tween);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    /// Remove an in-flight tween.
    ///
    /// The property keeps whatever value the last tick wrote and the
    /// completion hook is not called.
    pub fn cancel(&mut self, id: TweenId) -> Option<Tween> {
        let tween = self.tweens.remove(id)?;
        self.order.retain(|other| *other != id);
        tracing::debug!(?id, phase = tween.phase(), "tween cancelled");
        Some(tween)
    }

    /// Drop every tween without completing it
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.order.clear();
    }

    /// Tick all tweens in registration order.
    ///
    /// Tweens reaching phase 1 get their exact end value, fire their
    /// completion hook, and are removed after the pass. Returns how many
    /// completed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut completed: SmallVec<[TweenId; 4]> = SmallVec::new();

        for &id in &self.order {
            let Some(tween) = self.tweens.get_mut(id) else {
                continue;
            };
            if tween.advance(now) {
                completed.push(id);
            }
        }

        if completed.is_empty() {
            return 0;
        }

        for &id in &completed {
            self.tweens.remove(id);
        }
        self.order.retain(|id| self.tweens.contains_key(*id));

        tracing::trace!(completed = completed.len(), remaining = self.tweens.len(), "tweens completed");
        completed.len()
    }

    /// Check if any tweens are still active
    pub fn has_active_tweens(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Iterate over active tweens in registration order
    pub fn iter(&self) -> impl Iterator<Item = (TweenId, &Tween)> {
        self.order
            .iter()
            .filter_map(|&id| self.tweens.get(id).map(|tween| (id, tween)))
    }

    /// Get the number of tweens in the scheduler
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Easing, Property};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn tween(target: &Rc<Cell<f64>>, end: f64, duration_ms: u64, start: Instant) -> Tween {
        Tween::to(Property::cell(target), end, ms(duration_ms), Easing::back_out(0.5), start).unwrap()
    }

    #[test]
    fn completed_tween_lands_exactly_and_is_removed() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.add(tween(&target, 13.0, 100, start));

        assert_eq!(scheduler.tick(start + ms(50)), 0);
        assert!(scheduler.contains(id));

        assert_eq!(scheduler.tick(start + ms(120)), 1);
        assert_eq!(target.get(), 13.0);
        assert!(!scheduler.contains(id));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn phase_is_monotonic_over_ticks() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let phases = Rc::new(RefCell::new(Vec::new()));
        let sink = phases.clone();
        let mut scheduler = TweenScheduler::new();
        scheduler.add(
            tween(&target, 1.0, 100, start).on_update(move |t| sink.borrow_mut().push(t.phase())),
        );

        for step in 0..15 {
            scheduler.tick(start + ms(step * 10));
        }

        let phases = phases.borrow();
        assert_eq!(phases.len(), 11);
        assert!(phases.windows(2).all(|w| w[0] <= w[1]));
        assert!(phases.iter().all(|p| (0.0..=1.0).contains(p)));
        assert_eq!(*phases.last().unwrap(), 1.0);
    }

    #[test]
    fn tweens_update_in_registration_order() {
        let start = Instant::now();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = TweenScheduler::new();
        let targets: Vec<_> = (0..4).map(|_| Rc::new(Cell::new(0.0))).collect();

        let logged = |name: &'static str, target: &Rc<Cell<f64>>, duration_ms: u64| {
            let sink = log.clone();
            tween(target, 1.0, duration_ms, start).on_update(move |_| sink.borrow_mut().push(name))
        };

        scheduler.add(logged("a", &targets[0], 1000));
        let short = scheduler.add(logged("short", &targets[1], 10));
        scheduler.add(logged("b", &targets[2], 1000));
        scheduler.tick(start + ms(20));
        assert!(!scheduler.contains(short));

        // Reuses the freed slot between "a" and "b"
        scheduler.add(logged("c", &targets[3], 1000));
        log.borrow_mut().clear();

        scheduler.tick(start + ms(30));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn removal_never_skips_neighbours() {
        let start = Instant::now();
        let mut scheduler = TweenScheduler::new();
        let updates = Rc::new(Cell::new(0));
        let targets: Vec<_> = (0..6).map(|_| Rc::new(Cell::new(0.0))).collect();

        for (i, target) in targets.iter().enumerate() {
            let counter = updates.clone();
            // Alternate short and long tweens
            let duration = if i % 2 == 0 { 10 } else { 1000 };
            scheduler.add(
                tween(target, 5.0, duration, start).on_update(move |_| counter.set(counter.get() + 1)),
            );
        }

        assert_eq!(scheduler.tick(start + ms(50)), 3);
        assert_eq!(updates.get(), 6);
        assert_eq!(scheduler.len(), 3);

        scheduler.tick(start + ms(60));
        assert_eq!(updates.get(), 9);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween(&target, 2.0, 10, start).on_complete(move |_| counter.set(counter.get() + 1)));

        for step in 1..5 {
            scheduler.tick(start + ms(step * 20));
        }
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn cancel_keeps_last_value_and_skips_completion() {
        let start = Instant::now();
        let target = Rc::new(Cell::new(0.0));
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.add(
            Tween::to(Property::cell(&target), 10.0, ms(100), Easing::Linear, start)
                .unwrap()
                .on_complete(move |_| flag.set(true)),
        );

        scheduler.tick(start + ms(50));
        let cancelled = scheduler.cancel(id).unwrap();
        assert!((cancelled.phase() - 0.5).abs() < 1e-9);
        assert!((target.get() - 5.0).abs() < 1e-9);

        scheduler.tick(start + ms(200));
        assert!(!fired.get());
        assert!(scheduler.cancel(id).is_none());
    }

    #[test]
    fn dropped_target_degrades_without_affecting_others() {
        let start = Instant::now();
        let kept = Rc::new(Cell::new(0.0));
        let dropped = Rc::new(Cell::new(0.0));
        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween(&dropped, 3.0, 100, start));
        scheduler.add(tween(&kept, 3.0, 100, start));
        drop(dropped);

        assert_eq!(scheduler.tick(start + ms(100)), 2);
        assert_eq!(kept.get(), 3.0);
    }

    #[test]
    fn iter_follows_registration_order() {
        let start = Instant::now();
        let mut scheduler = TweenScheduler::new();
        let a = Rc::new(Cell::new(0.0));
        let b = Rc::new(Cell::new(0.0));
        scheduler.add(tween(&a, 1.0, 100, start));
        scheduler.add(tween(&b, 2.0, 100, start));

        let ends: Vec<f64> = scheduler.iter().map(|(_, t)| t.end_value()).collect();
        assert_eq!(ends, vec![1.0, 2.0]);
        assert!(scheduler.has_active_tweens());

        scheduler.clear();
        assert!(!scheduler.has_active_tweens());
    }
}
