/// Frame clock for the host's animation callback.
/// Turns absolute timestamps (milliseconds) into per-frame deltas in seconds.
pub struct FrameClock {
    /// Timestamp of the previous frame, `None` before the first frame.
    last_ms: Option<f64>,
    /// Upper bound for a single delta.
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Record a frame at `now_ms` and return the elapsed seconds since the previous one.
    ///
    /// The first frame yields 0. Deltas are capped at `max_dt` so a tab coming back
    /// from the background does not teleport every entity; clocks running backwards
    /// or non-finite timestamps yield 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }
}

/// Fire-once countdown in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: f32,
    fired: bool,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
            fired: false,
        }
    }

    /// Advance by `dt`. Returns the leftover time past zero on the tick the
    /// countdown expires, and `None` on every other tick (including after it fired).
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if self.fired {
            return None;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.fired = true;
            Some(-self.remaining)
        } else {
            None
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}
