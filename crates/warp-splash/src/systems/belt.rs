//! Asteroid belts with a coarse and a fine level of detail.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::particle::AsteroidParticle;
use crate::math::{rotate_point, HexColor, Rng};

/// Belt description. Radii and sizes are in catalog units (multiplied by the
/// planet scale at generation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltConfig {
    pub name: String,
    pub inner_radius: f32,
    pub thickness: f32,
    pub low_detail_count: usize,
    pub high_detail_count: usize,
    /// Rock size range `[min, max]` for the low-detail tier.
    pub low_detail_size: [f32; 2],
    /// Rock size range `[min, max]` for the high-detail tier.
    pub high_detail_size: [f32; 2],
    /// Palette sampled uniformly; `default_color` is used when empty.
    pub colors: Vec<HexColor>,
    pub default_color: HexColor,
    /// Zoom at which the high-detail tier takes over.
    pub lod_zoom: f32,
    /// Degrees per second about the centre.
    pub angular_speed: f32,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            inner_radius: 250.0,
            thickness: 300.0,
            low_detail_count: 300,
            high_detail_count: 3000,
            low_detail_size: [10.0, 20.0],
            high_detail_size: [0.4, 4.0],
            colors: Vec::new(),
            default_color: HexColor::GREY,
            lod_zoom: 5.0,
            angular_speed: 0.0,
        }
    }
}

/// Level-of-detail tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTier {
    Low,
    High,
}

/// A belt and its two generated rock lists.
#[derive(Debug, Clone)]
pub struct Belt {
    pub config: BeltConfig,
    low_detail: Vec<AsteroidParticle>,
    high_detail: Vec<AsteroidParticle>,
}

impl Belt {
    pub fn new(config: BeltConfig) -> Self {
        Self {
            config,
            low_detail: Vec::new(),
            high_detail: Vec::new(),
        }
    }

    /// Replace both tiers with fresh rocks around `center`.
    pub fn regenerate(&mut self, center: Vec2, planet_scale: f32, rng: &mut Rng) {
        let c = &self.config;
        let ring = Ring {
            r_min: c.inner_radius * planet_scale,
            r_max: (c.inner_radius + c.thickness) * planet_scale,
            center,
            planet_scale,
        };
        self.low_detail = ring.sample(c, c.low_detail_count, c.low_detail_size, rng);
        self.high_detail = ring.sample(c, c.high_detail_count, c.high_detail_size, rng);
    }

    /// Turn every rock about `center` by the belt's angular speed.
    pub fn rotate(&mut self, center: Vec2, dt: f32) {
        let degrees = self.config.angular_speed * dt;
        if degrees == 0.0 {
            return;
        }
        for rock in self.low_detail.iter_mut().chain(self.high_detail.iter_mut()) {
            rock.pos = rotate_point(rock.pos, center, degrees);
        }
    }

    /// The tier to draw at `zoom`.
    pub fn tier(&self, zoom: f32, high_detail: bool) -> DetailTier {
        if high_detail && zoom >= self.config.lod_zoom {
            DetailTier::High
        } else {
            DetailTier::Low
        }
    }

    pub fn rocks(&self, tier: DetailTier) -> &[AsteroidParticle] {
        match tier {
            DetailTier::Low => &self.low_detail,
            DetailTier::High => &self.high_detail,
        }
    }
}

/// Scaled annulus the rocks are sampled in.
struct Ring {
    r_min: f32,
    r_max: f32,
    center: Vec2,
    planet_scale: f32,
}

impl Ring {
    fn sample(
        &self,
        config: &BeltConfig,
        count: usize,
        size: [f32; 2],
        rng: &mut Rng,
    ) -> Vec<AsteroidParticle> {
        let scale = self.planet_scale;
        (0..count)
            .map(|_| {
                let pos = rng.annulus(self.r_min, self.r_max, self.center);
                let radius = rng.range(size[0] * scale, size[1] * scale);
                let color = rng
                    .choose(&config.colors)
                    .copied()
                    .unwrap_or(config.default_color);
                AsteroidParticle::new(pos, radius, color)
            })
            .collect()
    }
}
