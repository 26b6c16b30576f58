use super::easing::Ease;

pub const COUNTER_DURATION_SEC: f32 = 2.0;

/// Count-up animation for a statistic: shows `0` then climbs to `target`.
///
/// Intermediate values are rounded up, so with a monotonic ease the display
/// never goes backwards. The last frame always shows `target` exactly.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    elapsed: f32,
    duration: f32,
    ease: Ease,
    last_shown: i64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_SEC, Ease::Power2Out)
    }

    pub fn with_timing(target: i64, duration: f32, ease: Ease) -> Self {
        Self {
            target,
            elapsed: 0.0,
            duration,
            ease,
            last_shown: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Display value at `elapsed` seconds into the animation.
    pub fn value_at(&self, elapsed: f32) -> i64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.target;
        }
        let k = self.ease.apply(elapsed.max(0.0) / self.duration) as f64;
        let raw = (self.target as f64 * k).ceil() as i64;
        if self.target >= 0 {
            raw.min(self.target)
        } else {
            raw.max(self.target)
        }
    }

    /// Advance and return the value to display this frame.
    pub fn step(&mut self, dt: f32) -> i64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        let v = self.value_at(self.elapsed);
        self.last_shown = if self.target >= 0 {
            v.max(self.last_shown)
        } else {
            v
        };
        self.last_shown
    }
}
