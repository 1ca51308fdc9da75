//! Plane geometry helpers shared by the motion updaters.

use glam::Vec2;

const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Rotate `point` about `pivot` by `degrees` (counter-clockwise in a Y-up frame,
/// clockwise on a Y-down canvas).
#[inline]
pub fn rotate_point(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
    let d = point - pivot;
    Vec2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y) + pivot
}

/// Unit vector parallel to `v`. The zero vector maps to the zero vector.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
