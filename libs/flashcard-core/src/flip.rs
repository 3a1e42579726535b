//! Card flip animation math.
//!
//! A normalized value moves between 0.0 (front) and 1.0 (back) along an
//! ease-in-out curve and maps linearly onto a 0-180 degree rotation.

use std::time::{Duration, Instant};

/// Default flip duration.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(300);

/// Cubic ease-in-out over `t` in 0.0..=1.0 (clamped).
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Rotation in degrees for a normalized flip value.
pub fn rotation_degrees(value: f32) -> f32 {
    value.clamp(0.0, 1.0) * 180.0
}

/// Time-driven flip between the two card faces.
#[derive(Debug, Clone)]
pub struct FlipAnimation {
    duration: Duration,
    from: f32,
    to: f32,
    started_at: Option<Instant>,
}

impl Default for FlipAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_FLIP_DURATION)
    }
}

impl FlipAnimation {
    /// Create an animation resting on the front face.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            from: 0.0,
            to: 0.0,
            started_at: None,
        }
    }

    /// Endpoint the animation is heading to (or resting on).
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start a transition toward the opposite face from wherever it is now.
    pub fn toggle(&mut self, now: Instant) {
        let current = self.value_at(now);
        self.from = current;
        self.to = if self.to >= 0.5 { 0.0 } else { 1.0 };
        self.started_at = Some(now);
    }

    /// Snap to the front face without animating.
    pub fn reset(&mut self) {
        self.from = 0.0;
        self.to = 0.0;
        self.started_at = None;
    }

    /// Normalized value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(started_at);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn rotation_at(&self, now: Instant) -> f32 {
        rotation_degrees(self.value_at(now))
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started_at) => now.saturating_duration_since(started_at) < self.duration,
            None => false,
        }
    }
}
