//! Animation Timing
//!
//! Tunables for the typing curve, the blink period and the pan frame rate.

use std::time::Duration;

/// Timing parameters for every animation phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    /// Delay before the first character (slow start)
    pub initial_typing_delay: Duration,
    /// Floor the typing delay decays towards
    pub min_typing_delay: Duration,
    /// Multiplicative decay applied to the delay after each character
    pub typing_decay: f64,
    /// Cursor blink period once typing is finished
    pub blink_interval: Duration,
    /// Frame interval while panning (~30 FPS)
    pub pan_frame_interval: Duration,
    /// Columns moved per panning frame
    pub pan_speed: usize,
    /// Panning frames between cursor toggles
    pub blink_interval_frames: u32,
}

impl AnimationTiming {
    /// Defaults: 150ms → 20ms typing at 0.98/char, 500ms blink, 33ms pan frames
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_typing_delay: Duration::from_millis(150),
            min_typing_delay: Duration::from_millis(20),
            typing_decay: 0.98,
            blink_interval: Duration::from_millis(500),
            pan_frame_interval: Duration::from_millis(33),
            pan_speed: 2,
            blink_interval_frames: 15,
        }
    }

    /// Set the typing delay range
    #[must_use]
    pub const fn with_typing_delays(mut self, initial: Duration, min: Duration) -> Self {
        self.initial_typing_delay = initial;
        self.min_typing_delay = min;
        self
    }

    /// Set the pan speed in columns per frame
    #[must_use]
    pub const fn with_pan_speed(mut self, speed: usize) -> Self {
        self.pan_speed = speed;
        self
    }

    /// Next typing delay after one more character: exponential decay,
    /// clamped to `[min_typing_delay, initial_typing_delay]`.
    #[must_use]
    pub fn next_typing_delay(&self, current: Duration) -> Duration {
        let decayed = current.mul_f64(self.typing_decay.clamp(0.0, 1.0));
        decayed
            .max(self.min_typing_delay)
            .min(self.initial_typing_delay)
    }

    /// Normalise inconsistent settings (floor above start, zero speed)
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.min_typing_delay > self.initial_typing_delay {
            self.min_typing_delay = self.initial_typing_delay;
        }
        self.pan_speed = self.pan_speed.max(1);
        self.blink_interval_frames = self.blink_interval_frames.max(1);
        self
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::new()
    }
}
