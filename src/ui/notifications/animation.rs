// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of the banner's top offset.

use std::time::{Duration, Instant};

/// Decelerating curve: fast start, gentle landing.
#[must_use]
pub fn ease_out(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

/// A value moving from `from` to `to` over `duration`, starting at `started_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Same timing, heading for `to` instead.
    #[must_use]
    pub fn with_target(self, to: f32) -> Self {
        Self { to, ..self }
    }

    /// Linear progress in `0.0..=1.0`. Zero-length tweens are complete at once.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased value at `now`; exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out(self.progress(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, LAYOUT_EPSILON};

    #[test]
    fn ease_out_is_bounded_and_decelerating() {
        assert_abs_diff_eq!(ease_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert_abs_diff_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let start = Instant::now();
        let tween = Tween::new(-100.0, 8.0, start, Duration::from_millis(300));

        assert_abs_diff_eq!(tween.value_at(start), -100.0, epsilon = LAYOUT_EPSILON);
        assert!(!tween.is_finished(start + Duration::from_millis(150)));
        assert_eq!(tween.value_at(start + Duration::from_millis(300)), 8.0);
        assert!(tween.is_finished(start + Duration::from_secs(1)));
    }

    #[test]
    fn retargeted_tween_keeps_timing() {
        let start = Instant::now();
        let tween = Tween::new(0.0, -100.0, start, Duration::from_millis(300)).with_target(-140.0);

        assert!(!tween.is_finished(start + Duration::from_millis(150)));
        assert_eq!(tween.value_at(start + Duration::from_millis(300)), -140.0);
    }

    #[test]
    fn tween_moves_toward_target_midway() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 100.0, start, Duration::from_millis(200));
        let mid = tween.value_at(start + Duration::from_millis(100));
        assert!(mid > 50.0 && mid < 100.0);
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 5.0, start, Duration::ZERO);
        assert!(tween.is_finished(start));
        assert_eq!(tween.value_at(start), 5.0);
    }
}
