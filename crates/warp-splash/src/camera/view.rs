use glam::Vec2;

/// Maps scene positions (canvas pixels around the centre) to screen pixels.
///
/// `screen = centre + ((p - centre) * layout_scale + offset) * zoom * dpr`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub center: Vec2,
    pub layout_scale: f32,
    /// Pan offset in layout pixels (before zoom).
    pub offset: Vec2,
    pub zoom: f32,
    pub dpr: f32,
}

impl ViewTransform {
    /// Unpanned view used by the intro phases.
    pub fn intro(center: Vec2, zoom: f32, dpr: f32) -> Self {
        Self {
            center,
            layout_scale: 1.0,
            offset: Vec2::ZERO,
            zoom,
            dpr,
        }
    }

    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.center + ((p - self.center) * self.layout_scale + self.offset) * self.zoom * self.dpr
    }

    /// Scale a length (radius, stroke width) from scene to screen pixels.
    #[inline]
    pub fn scale(&self, length: f32) -> f32 {
        length * self.layout_scale * self.zoom * self.dpr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_fixed_point_without_offset() {
        let c = Vec2::new(400.0, 300.0);
        let view = ViewTransform::intro(c, 3.0, 2.0);
        assert_eq!(view.to_screen(c), c);
        assert_eq!(view.to_screen(c + Vec2::new(10.0, 0.0)), c + Vec2::new(60.0, 0.0));
        assert_eq!(view.scale(1.5), 9.0);
    }

    #[test]
    fn offset_is_applied_before_zoom() {
        let c = Vec2::new(100.0, 100.0);
        let view = ViewTransform {
            center: c,
            layout_scale: 0.5,
            offset: Vec2::new(-5.0, 0.0),
            zoom: 4.0,
            dpr: 1.0,
        };
        // (10 * 0.5 - 5) * 4 = 0: the point lands on the centre.
        assert_eq!(view.to_screen(c + Vec2::new(10.0, 0.0)), c);
    }
}
