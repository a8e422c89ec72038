use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Default animation sampling rate.
pub const DEFAULT_FPS: u32 = 60;

/// A fixed-rate clock that emits the current [`Instant`] once per frame.
///
/// Animated components declare a `FrameClock` only while a tween is in
/// flight. The `key` gives each component its own identity so that two
/// fields animating at once keep separate clocks.
///
/// # Example
///
/// ```rust,ignore
/// use floatfield_core::subscription::subscribe;
/// use floatfield_core::subscriptions::FrameClock;
///
/// let sub = subscribe(FrameClock::new("email")).map(Msg::Frame);
/// ```
pub struct FrameClock {
    /// Distinguishes this clock from clocks owned by other components.
    pub key: String,
    /// Frames per second, clamped to `1..=120`.
    pub fps: u32,
}

impl FrameClock {
    /// Create a clock ticking at [`DEFAULT_FPS`].
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fps: DEFAULT_FPS,
        }
    }

    /// Override the tick rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Time between two ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.clamp(1, 120)))
    }
}

impl SubscriptionSource for FrameClock {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(&self.key)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let stream = tokio_stream::wrappers::IntervalStream::new(interval).map(|tick| tick.into_std());
        Box::pin(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_clamps_fps() {
        assert_eq!(FrameClock::new("a").with_fps(0).interval(), Duration::from_secs(1));
        assert_eq!(
            FrameClock::new("a").with_fps(500).interval(),
            Duration::from_secs_f64(1.0 / 120.0)
        );
    }

    #[test]
    fn clocks_are_keyed() {
        assert_eq!(FrameClock::new("email").id(), FrameClock::new("email").id());
        assert_ne!(FrameClock::new("email").id(), FrameClock::new("name").id());
    }

    #[tokio::test]
    async fn clock_emits_ticks() {
        let mut stream = FrameClock::new("t").with_fps(120).stream();
        let first = stream.next().await;
        let second = stream.next().await;
        assert!(matches!((first, second), (Some(a), Some(b)) if b >= a));
    }
}
