use glam::Vec2;

use crate::math::HexColor;

/// Concentric rings drawn around a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSet {
    pub count: u32,
    pub color: HexColor,
    /// Gap between consecutive rings, planet scale applied.
    pub spacing: f32,
    /// Stroke width of each ring, planet scale applied.
    pub width: f32,
}

impl RingSet {
    /// Radius of ring `i` (0-based) around a body of radius `size`.
    pub fn radius(&self, size: f32, i: u32) -> f32 {
        size + self.spacing * (i + 1) as f32
    }

    /// Total stroke width of all rings, used to lift the label clear of them.
    pub fn extent(&self) -> f32 {
        self.count as f32 * self.width
    }
}

/// Soft halo drawn behind the body (canvas shadow blur).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub strength: f32,
}

/// A body of the menu's solar system.
///
/// `orbit_radius` and `size` are already multiplied by the planet scale;
/// `angular_speed` is in degrees per second.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDisplay {
    pub name: &'static str,
    pub pos: Vec2,
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub size: f32,
    pub color: HexColor,
    pub rings: Option<RingSet>,
    pub glow: Option<Glow>,
}

impl PlanetDisplay {
    pub fn ring_count(&self) -> u32 {
        self.rings.map_or(0, |r| r.count)
    }

    /// Current orbital angle around `center`, in radians.
    pub fn angle(&self, center: Vec2) -> f32 {
        let d = self.pos - center;
        d.y.atan2(d.x)
    }
}
