//! Running min/max temperature tracking
//!
//! The original sketch kept the extremes in process-wide statics seeded
//! with `INT_MAX`/`INT_MIN`. Here the state is an explicit value owned by
//! the cycle driver and the "unset" phase is an `Option`, so the first
//! sample becomes both bounds without sentinel arithmetic.
//!
//! Invariants:
//! - After any non-reset update, `min <= sample <= max`.
//! - Both bounds are always values some processed sample actually had.
//! - Bounds never shrink except on an explicit reset.

/// Min/max pair returned by [`ExtremumTracker::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    /// Lowest temperature seen since start or last reset
    pub min: i32,
    /// Highest temperature seen since start or last reset
    pub max: i32,
}

/// Tracks the running minimum and maximum temperature
///
/// Resettable by the button: a reset collapses both bounds onto the
/// current sample, discarding all prior history.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtremumTracker {
    bounds: Option<Extremes>,
}

impl ExtremumTracker {
    /// New tracker with no history
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Fold one sample into the bounds
    ///
    /// With `reset` set (button held), both bounds collapse onto
    /// `temperature` regardless of prior state. The first sample always
    /// becomes both bounds.
    pub fn update(&mut self, temperature: i32, reset: bool) -> Extremes {
        let next = match self.bounds {
            Some(current) if !reset => Extremes {
                min: current.min.min(temperature),
                max: current.max.max(temperature),
            },
            _ => Extremes {
                min: temperature,
                max: temperature,
            },
        };
        self.bounds = Some(next);
        next
    }

    /// Current bounds, if any sample has been processed
    pub fn extremes(&self) -> Option<Extremes> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_becomes_both_bounds() {
        let mut tracker = ExtremumTracker::new();
        assert!(tracker.extremes().is_none());

        let e = tracker.update(21, false);
        assert_eq!(e, Extremes { min: 21, max: 21 });
    }

    #[test]
    fn bounds_widen_and_never_shrink() {
        let mut tracker = ExtremumTracker::new();
        for t in [10, 20, 30, 15] {
            tracker.update(t, false);
        }
        let e = tracker.extremes().unwrap();
        assert_eq!(e, Extremes { min: 10, max: 30 });
    }

    #[test]
    fn reset_collapses_bounds() {
        let mut tracker = ExtremumTracker::new();
        tracker.update(5, false);
        tracker.update(35, false);

        let e = tracker.update(22, true);
        assert_eq!(e, Extremes { min: 22, max: 22 });
    }

    #[test]
    fn reset_mid_sequence_forgets_earlier_samples() {
        // Button pressed on the 3rd of 5 readings
        let mut tracker = ExtremumTracker::new();
        let readings = [10, 40, 22, 25, 19];
        for (i, t) in readings.iter().enumerate() {
            tracker.update(*t, i == 2);
        }
        let e = tracker.extremes().unwrap();
        assert_eq!(e, Extremes { min: 19, max: 25 });
    }

    #[test]
    fn bounds_bracket_every_sample() {
        let mut tracker = ExtremumTracker::new();
        let readings = [3, -7, 12, 0, 12, -7];
        for t in readings {
            let e = tracker.update(t, false);
            assert!(e.min <= t && t <= e.max);
        }
        let e = tracker.extremes().unwrap();
        assert!(readings.contains(&e.min));
        assert!(readings.contains(&e.max));
    }
}
