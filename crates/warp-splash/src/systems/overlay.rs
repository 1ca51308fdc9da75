use crate::math::{ease, Easing};

/// Full-screen white fade layered over the scene during the warp jump.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Fade {
    /// A settled fade at `alpha`.
    pub fn hold(alpha: f32) -> Self {
        Self {
            from: alpha,
            to: alpha,
            duration: 0.0,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Start a new fade from the current alpha towards `target`.
    pub fn start(&mut self, target: f32, duration: f32, easing: Easing) {
        self.from = self.alpha();
        self.to = target.clamp(0.0, 1.0);
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
        self.easing = easing;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    pub fn alpha(&self) -> f32 {
        if self.is_settled() {
            return self.to;
        }
        ease(self.from, self.to, self.elapsed / self.duration, self.easing)
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::hold(0.0)
    }
}
