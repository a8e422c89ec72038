//! Single-value tweens sampled on frame ticks.
//!
//! A [`Tween`] moves one `f32` from wherever it currently is to a target
//! over a fixed duration. Retargeting mid-flight starts the new leg from the
//! interpolated value, so an interrupted animation never jumps.

use std::time::{Duration, Instant};

/// Interpolation curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic, slow start.
    EaseIn,
    /// Cubic, slow finish.
    EaseOut,
    /// Cubic, slow start and finish.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to `0..=1`) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value` with nothing in flight.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// The value this tween is heading for (or resting at).
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether a leg has been started and not yet [`finish`](Tween::finish)ed.
    pub fn in_flight(&self) -> bool {
        self.started.is_some()
    }

    /// Whether the current leg is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started {
            Some(start) => now.saturating_duration_since(start) < self.duration,
            None => false,
        }
    }

    /// Sample the tween at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(start) = self.started else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Start a leg toward `target`. Returns `false` without touching
    /// anything when `target` is already the destination.
    pub fn animate_to(
        &mut self,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) -> bool {
        if self.to == target {
            return false;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started = Some(now);
        self.duration = duration;
        self.easing = easing;
        true
    }

    /// Drop a completed leg so [`in_flight`](Tween::in_flight) turns false.
    /// Returns `true` if a leg was finished by this call.
    pub fn finish(&mut self, now: Instant) -> bool {
        if self.in_flight() && !self.is_running(now) {
            self.from = self.to;
            self.started = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.25);
        let b = Easing::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn settled_tween_reports_target() {
        let tween = Tween::settled(0.0);
        assert_eq!(tween.value_at(Instant::now()), 0.0);
        assert!(!tween.in_flight());
    }

    #[test]
    fn linear_tween_midpoint() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0);
        assert!(tween.animate_to(1.0, start, MS_300, Easing::Linear));
        let mid = tween.value_at(start + Duration::from_millis(150));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(tween.value_at(start + MS_300), 1.0);
    }

    #[test]
    fn same_target_is_ignored() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0);
        tween.animate_to(1.0, start, MS_300, Easing::Linear);
        let later = start + Duration::from_millis(100);
        assert!(!tween.animate_to(1.0, later, MS_300, Easing::Linear));
        // The original leg keeps its start time.
        let sample = tween.value_at(start + Duration::from_millis(150));
        assert!((sample - 0.5).abs() < 1e-3);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0);
        tween.animate_to(1.0, start, MS_300, Easing::Linear);
        let half = start + Duration::from_millis(150);
        tween.animate_to(0.0, half, MS_300, Easing::Linear);
        assert!((tween.value_at(half) - 0.5).abs() < 1e-3);
        assert_eq!(tween.value_at(half + MS_300), 0.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0);
        tween.animate_to(1.0, now, Duration::ZERO, Easing::EaseInOut);
        assert_eq!(tween.value_at(now), 1.0);
        assert!(tween.finish(now));
    }

    #[test]
    fn finish_only_after_duration() {
        let start = Instant::now();
        let mut tween = Tween::settled(1.0);
        tween.animate_to(0.0, start, MS_300, Easing::EaseOut);
        assert!(!tween.finish(start + Duration::from_millis(10)));
        assert!(tween.in_flight());
        assert!(tween.finish(start + MS_300));
        assert!(!tween.in_flight());
        assert_eq!(tween.value_at(start), 0.0);
    }
}
