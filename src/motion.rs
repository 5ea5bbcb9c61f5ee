//! Time-based interpolation used by every animation on the landing page.
//!
//! Animations are snapshots (`Tween`) evaluated against the current frame
//! time. Replacing a snapshot is how an animation gets cancelled or reversed:
//! the replacement starts from whatever value the old one had reached.

use std::time::Duration;

/// `1 - (1 - t)^3`, clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// An eased interpolation from `from` to `to` starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A tween that already sits at `value`.
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO)
    }

    /// Linear progress in `[0, 1]`; times before `start` count as 0.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated value at `now`. Exactly `to` once finished.
    pub fn value_at(&self, now: Duration) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, ease_out_cubic(p))
        }
    }

    /// Start a new tween towards `to` from the value reached at `now`.
    pub fn retarget(&self, to: f64, now: Duration, duration: Duration) -> Self {
        Self::new(self.value_at(now), to, now, duration)
    }
}

/// Per-layer background scale animations, one slot per track.
#[derive(Debug, Clone)]
pub struct ScaleStore {
    tweens: Vec<Tween>,
    rest: f64,
}

impl ScaleStore {
    pub fn new(len: usize, rest: f64) -> Self {
        Self {
            tweens: vec![Tween::settled(rest); len],
            rest,
        }
    }

    /// Animate layer `index` towards `to`, replacing any animation in flight.
    pub fn animate(&mut self, index: usize, to: f64, now: Duration, duration: Duration) {
        if let Some(slot) = self.tweens.get_mut(index) {
            *slot = slot.retarget(to, now, duration);
        }
    }

    pub fn value_at(&self, index: usize, now: Duration) -> f64 {
        self.tweens
            .get(index)
            .map(|t| t.value_at(now))
            .unwrap_or(self.rest)
    }

    /// True while any layer is still moving at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.tweens.iter().any(|t| !t.is_finished(now))
    }
}
