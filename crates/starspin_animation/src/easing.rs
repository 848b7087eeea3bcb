//! Easing functions for tweens
//!
//! An easing maps normalized progress in `[0, 1]` to eased progress. Curves are
//! trusted as given: overshooting curves such as [`Easing::BackOut`] leave
//! `[0, 1]` between their endpoints.

/// Easing function type
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseOutCubic,
    /// Overshoots the target, then settles back onto it.
    ///
    /// `amount` controls the overshoot magnitude.
    BackOut { amount: f64 },
    /// Caller-supplied curve.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Back-out curve with the given overshoot amount
    pub fn back_out(amount: f64) -> Self {
        Easing::BackOut { amount }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut { amount } => back_out(t, *amount),
            Easing::Custom(f) => f(t),
        }
    }

    /// Whether the curve may leave `[0, 1]` for inputs inside `[0, 1]`
    pub fn overshoots(&self) -> bool {
        match self {
            Easing::BackOut { amount } => *amount > 0.0,
            Easing::Custom(_) => true,
            _ => false,
        }
    }
}

/// `(t-1)² * ((amount+1)(t-1) + amount) + 1`
///
/// Exactly 0 at `t = 0` and exactly 1 at `t = 1`.
#[inline]
fn back_out(t: f64, amount: f64) -> f64 {
    let s = t - 1.0;
    s * s * ((amount + 1.0) * s + amount) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseOutCubic,
        Easing::BackOut { amount: 0.5 },
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn back_out_endpoints_are_exact() {
        // (0-1)^2 * (1.5 * -1 + 0.5) + 1 = 0
        let easing = Easing::back_out(0.5);
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn back_out_overshoots_between_endpoints() {
        let easing = Easing::back_out(0.5);
        let peak = (1..100)
            .map(|i| easing.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
        assert!(easing.overshoots());
    }

    #[test]
    fn back_out_matches_formula() {
        let amount = 0.5;
        let easing = Easing::back_out(amount);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let expected = (t - 1.0).powi(2) * ((amount + 1.0) * (t - 1.0) + amount) + 1.0;
            assert!((easing.apply(t) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn back_out_zero_amount_stays_in_range() {
        let easing = Easing::back_out(0.0);
        for i in 0..=50 {
            let v = easing.apply(i as f64 / 50.0);
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(!easing.overshoots());
    }

    #[test]
    fn custom_curve_is_called() {
        fn step(t: f64) -> f64 {
            if t < 1.0 {
                0.0
            } else {
                1.0
            }
        }
        let easing = Easing::Custom(step);
        assert_eq!(easing.apply(0.99), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOutQuad;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        let a = easing.apply(0.25);
        let b = easing.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-12);
    }
}
