//! Galaxy intro starfield: a Gaussian blob of stars spinning about the canvas centre.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::particle::StarParticle;
use crate::core::viewport::Viewport;
use crate::math::{rotate_point, HexColor, Rng};

/// Galaxy generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub star_count: usize,
    /// Standard deviation of the star positions around the centre, in pixels.
    pub spread: f32,
    pub star_radius: f32,
    /// Colour at the core.
    pub base_color: HexColor,
    /// Edge hues, picked by a Gaussian sample on [0, 10].
    pub cool_color: HexColor,
    pub warm_color: HexColor,
    pub neutral_color: HexColor,
    /// Blend weight towards the edge hue per pixel of distance (capped at 1).
    pub color_falloff: f32,
    /// Degrees per second at the speed floor; stars further out turn faster.
    pub base_speed: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: 6000,
            spread: 60.0,
            star_radius: 1.2,
            base_color: HexColor::from_u32(0xfae684),
            cool_color: HexColor::from_u32(0x65d4fc),
            warm_color: HexColor::from_u32(0x881da8),
            neutral_color: HexColor::WHITE,
            color_falloff: 0.007,
            base_speed: 80.0,
        }
    }
}

impl GalaxyConfig {
    fn edge_color(&self, sample: f32) -> HexColor {
        if sample <= 3.0 {
            self.cool_color
        } else if sample >= 7.0 {
            self.warm_color
        } else {
            self.neutral_color
        }
    }
}

/// Generate a fresh galaxy for `viewport`.
pub fn generate_galaxy(
    config: &GalaxyConfig,
    viewport: &Viewport,
    rng: &mut Rng,
) -> Vec<StarParticle> {
    let center = viewport.center();
    (0..config.star_count)
        .map(|_| {
            let pos = Vec2::new(
                rng.gaussian(0.0, viewport.width, center.x, config.spread),
                rng.gaussian(0.0, viewport.height, center.y, config.spread),
            );
            let distance = pos.distance(center);
            let speed = config.base_speed * (distance * 0.001).max(0.1);
            let edge = config.edge_color(rng.gaussian(0.0, 10.0, 5.0, 3.0));
            let color = config
                .base_color
                .lerp(edge, (distance * config.color_falloff).min(1.0));
            StarParticle::new(pos, config.star_radius, speed, color)
        })
        .collect()
}

/// Spin every star about `center` by its angular speed.
pub fn rotate_galaxy(stars: &mut [StarParticle], center: Vec2, dt: f32) {
    for star in stars.iter_mut() {
        star.pos = rotate_point(star.pos, center, star.speed * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GalaxyConfig {
        GalaxyConfig {
            star_count: 500,
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn stars_stay_inside_canvas() {
        let vp = Viewport::new(300.0, 200.0, 1.0);
        let mut rng = Rng::new(3);
        let stars = generate_galaxy(&small_config(), &vp, &mut rng);
        assert_eq!(stars.len(), 500);
        for s in &stars {
            assert!(s.pos.x >= 0.0 && s.pos.x <= 300.0);
            assert!(s.pos.y >= 0.0 && s.pos.y <= 200.0);
            assert!(s.visible);
        }
    }

    #[test]
    fn outer_stars_turn_faster() {
        let vp = Viewport::new(800.0, 600.0, 1.0);
        let mut rng = Rng::new(11);
        let stars = generate_galaxy(&small_config(), &vp, &mut rng);
        let center = vp.center();
        for s in &stars {
            let d = s.pos.distance(center);
            assert!(s.speed >= 8.0 - 1e-4);
            if d > 100.0 {
                assert!((s.speed - 80.0 * d * 0.001).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn core_star_keeps_base_color() {
        let config = small_config();
        let vp = Viewport::new(0.0, 0.0, 1.0);
        let mut rng = Rng::new(5);
        // A zero-size canvas collapses every star onto the centre.
        let stars = generate_galaxy(&config, &vp, &mut rng);
        assert!(stars.iter().all(|s| s.color == config.base_color));
    }

    #[test]
    fn edge_color_thresholds() {
        let c = GalaxyConfig::default();
        assert_eq!(c.edge_color(2.0), c.cool_color);
        assert_eq!(c.edge_color(3.0), c.cool_color);
        assert_eq!(c.edge_color(5.0), c.neutral_color);
        assert_eq!(c.edge_color(7.0), c.warm_color);
    }

    #[test]
    fn rotation_preserves_distance() {
        let vp = Viewport::new(800.0, 600.0, 1.0);
        let mut rng = Rng::new(9);
        let mut stars = generate_galaxy(&small_config(), &vp, &mut rng);
        let before: Vec<f32> = stars.iter().map(|s| s.pos.distance(vp.center())).collect();
        rotate_galaxy(&mut stars, vp.center(), 0.5);
        for (s, d) in stars.iter().zip(before) {
            assert!((s.pos.distance(vp.center()) - d).abs() < 1e-2);
        }
    }
}
