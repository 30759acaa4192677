//! Linear value transitions
//!
//! The dial does not jump to a new value; it slides there over a short
//! linear animation. Time is passed in explicitly so the interpolation can
//! be tested without a clock.

use std::time::{Duration, Instant};

/// Default animation length for value changes
pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

/// A displayed value moving linearly towards a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransition {
    start_value: f32,
    target: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl ValueTransition {
    /// A transition resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            start_value: value,
            target: value,
            started: None,
            duration: Duration::ZERO,
        }
    }

    /// Final value of the current segment
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start a new segment from whatever is displayed at `now`
    pub fn retarget(&mut self, target: f32, now: Instant, duration: Duration) {
        if target == self.target {
            return;
        }
        self.start_value = self.value_at(now);
        self.target = target;
        if duration.is_zero() {
            self.started = None;
            self.start_value = target;
        } else {
            self.started = Some(now);
        }
        self.duration = duration;
    }

    /// Displayed value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.start_value + (self.target - self.start_value) * progress
    }

    /// Whether the value is still moving at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Segment progress in `[0, 1]`
    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            Some(started) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }
}
