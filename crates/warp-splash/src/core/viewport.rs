use glam::Vec2;

/// Canvas geometry in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f32,
    /// Height in device pixels.
    pub height: f32,
    /// Device pixel ratio reported by the host.
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr > 0.0 && dpr.is_finite() { dpr } else { 1.0 },
        }
    }

    /// Canvas center in pixels.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies outside the canvas grown by `margin` on every side.
    pub fn is_outside(&self, point: Vec2, margin: f32) -> bool {
        point.x < -margin
            || point.x > self.width + margin
            || point.y < -margin
            || point.y > self.height + margin
    }

    /// Whether a circle overlaps the canvas.
    pub fn is_circle_visible(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius >= 0.0
            && center.x - radius <= self.width
            && center.y + radius >= 0.0
            && center.y - radius <= self.height
    }
}

/// Debounces canvas size changes so the expensive field regeneration runs
/// once per settled size instead of on every intermediate frame of a drag-resize.
#[derive(Debug, Clone)]
pub struct ResizeWatcher {
    current: Option<Viewport>,
    pending: Option<Viewport>,
    settled_for: f32,
    debounce: f32,
}

impl ResizeWatcher {
    pub fn new(debounce: f32) -> Self {
        Self {
            current: None,
            pending: None,
            settled_for: 0.0,
            debounce: debounce.max(0.0),
        }
    }

    /// Feed the viewport observed this frame. Returns the viewport to regenerate
    /// for when it changed and has stayed stable for the debounce period.
    /// The very first observation is returned immediately.
    pub fn observe(&mut self, viewport: Viewport, dt: f32) -> Option<Viewport> {
        let Some(current) = self.current else {
            self.current = Some(viewport);
            return Some(viewport);
        };

        if viewport == current {
            self.pending = None;
            return None;
        }

        if self.pending == Some(viewport) {
            self.settled_for += dt.max(0.0);
        } else {
            self.pending = Some(viewport);
            self.settled_for = 0.0;
        }

        if self.settled_for >= self.debounce {
            self.current = Some(viewport);
            self.pending = None;
            Some(viewport)
        } else {
            None
        }
    }

    /// The last viewport that was applied.
    pub fn current(&self) -> Option<Viewport> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_sanitizes_dpr() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f32::NAN).dpr, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, 2.0).dpr, 2.0);
    }

    #[test]
    fn outside_respects_margin() {
        let vp = Viewport::new(100.0, 100.0, 1.0);
        assert!(!vp.is_outside(Vec2::new(-5.0, 50.0), 10.0));
        assert!(vp.is_outside(Vec2::new(-11.0, 50.0), 10.0));
        assert!(vp.is_outside(Vec2::new(50.0, 111.0), 10.0));
    }

    #[test]
    fn circle_visibility() {
        let vp = Viewport::new(100.0, 100.0, 1.0);
        assert!(vp.is_circle_visible(Vec2::new(50.0, 50.0), 1.0));
        assert!(vp.is_circle_visible(Vec2::new(-5.0, 50.0), 10.0));
        assert!(!vp.is_circle_visible(Vec2::new(-50.0, 50.0), 10.0));
    }

    #[test]
    fn first_observation_applies_immediately() {
        let mut w = ResizeWatcher::new(0.15);
        let vp = Viewport::new(800.0, 600.0, 1.0);
        assert_eq!(w.observe(vp, 0.0), Some(vp));
        assert_eq!(w.observe(vp, 0.016), None);
    }

    #[test]
    fn change_waits_for_stable_size() {
        let mut w = ResizeWatcher::new(0.1);
        w.observe(Viewport::new(800.0, 600.0, 1.0), 0.0);

        let a = Viewport::new(900.0, 600.0, 1.0);
        let b = Viewport::new(1000.0, 600.0, 1.0);
        assert_eq!(w.observe(a, 0.05), None);
        // Size keeps changing: the timer restarts
        assert_eq!(w.observe(b, 0.05), None);
        assert_eq!(w.observe(b, 0.05), None);
        assert_eq!(w.observe(b, 0.06), Some(b));
        assert_eq!(w.current(), Some(b));
    }

    #[test]
    fn reverting_cancels_pending_change() {
        let mut w = ResizeWatcher::new(0.1);
        let original = Viewport::new(800.0, 600.0, 1.0);
        w.observe(original, 0.0);
        w.observe(Viewport::new(801.0, 600.0, 1.0), 0.05);
        assert_eq!(w.observe(original, 0.05), None);
        assert_eq!(w.current(), Some(original));
    }

    #[test]
    fn zero_debounce_applies_on_first_changed_frame() {
        let mut w = ResizeWatcher::new(0.0);
        w.observe(Viewport::new(800.0, 600.0, 1.0), 0.0);
        let vp = Viewport::new(640.0, 480.0, 2.0);
        assert_eq!(w.observe(vp, 0.016), Some(vp));
    }
}
