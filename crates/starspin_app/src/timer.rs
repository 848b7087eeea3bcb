//! Fixed-interval timer for periodic session events

use std::time::Duration;

/// Fires once per elapsed `period`; several periods elapsed in one frame
/// fire several times.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    period: Duration,
    accumulator: Duration,
}

impl IntervalTimer {
    /// A zero period never fires
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add elapsed time and return how many times the timer fired
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulator += elapsed;
        let mut fired = 0u32;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_period_boundaries() {
        let mut timer = IntervalTimer::new(Duration::from_millis(3500));
        assert_eq!(timer.advance(Duration::from_millis(3000)), 0);
        assert_eq!(timer.advance(Duration::from_millis(500)), 1);
        assert_eq!(timer.advance(Duration::from_millis(3499)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn long_frames_fire_multiple_times() {
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(350)), 3);
        assert_eq!(timer.advance(Duration::from_millis(50)), 1);
    }

    #[test]
    fn zero_period_never_fires() {
        let mut timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.advance(Duration::from_secs(10)), 0);
    }
}
