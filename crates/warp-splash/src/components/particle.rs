use glam::Vec2;

use crate::math::HexColor;

/// A star in the galaxy intro or a warp streak.
///
/// Galaxy stars interpret `speed` as degrees per second around the centre and
/// never use `heading`. Warp streaks interpret `speed` as pixels per second
/// along `heading`, a unit vector fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StarParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: HexColor,
    pub visible: bool,
    pub heading: Vec2,
}

impl StarParticle {
    pub fn new(pos: Vec2, radius: f32, speed: f32, color: HexColor) -> Self {
        Self {
            pos,
            radius,
            speed,
            color,
            visible: true,
            heading: Vec2::ZERO,
        }
    }

    pub fn with_heading(mut self, heading: Vec2) -> Self {
        self.heading = heading;
        self
    }
}

/// One rock of an asteroid belt. Static unless the belt has an angular speed.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub color: HexColor,
    pub visible: bool,
}

impl AsteroidParticle {
    pub fn new(pos: Vec2, radius: f32, color: HexColor) -> Self {
        Self {
            pos,
            radius,
            color,
            visible: true,
        }
    }
}
