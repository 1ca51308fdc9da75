//! Warp streaks: bursts of stars flying radially out of the canvas centre.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::particle::StarParticle;
use crate::core::viewport::Viewport;
use crate::math::{normalize, HexColor, Rng};

/// Warp field parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    /// Seconds between bursts.
    pub spawn_interval: f32,
    /// Burst size bounds; the count is a wide Gaussian around their midpoint.
    pub min_per_spawn: u32,
    pub max_per_spawn: u32,
    /// Pixels per second.
    pub speed: f32,
    /// Half-extent of the random offset that sets each streak's direction.
    pub direction_jitter: f32,
    /// Streak radius grows with distance: `radius = distance * radius_growth`.
    pub radius_growth: f32,
    /// Fraction of `radius` actually drawn.
    pub draw_scale: f32,
    /// Streaks are dropped once this far outside the canvas.
    pub margin: f32,
    /// Spawns beyond this many live streaks are discarded.
    pub max_particles: usize,
    pub color: HexColor,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 0.05,
            min_per_spawn: 1,
            max_per_spawn: 4,
            speed: 1500.0,
            direction_jitter: 10.0,
            radius_growth: 0.5,
            draw_scale: 0.02,
            margin: 10.0,
            max_particles: 2048,
            color: HexColor::WHITE,
        }
    }
}

/// Live warp streaks plus the burst timer.
#[derive(Debug, Clone, Default)]
pub struct WarpField {
    particles: Vec<StarParticle>,
    spawn_timer: f32,
}

impl WarpField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[StarParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Accumulate `dt`; once the interval has elapsed emit one burst at the
    /// centre and restart the timer. Returns the number of streaks added.
    pub fn spawn(
        &mut self,
        config: &WarpConfig,
        viewport: &Viewport,
        rng: &mut Rng,
        dt: f32,
    ) -> usize {
        self.spawn_timer += dt.max(0.0);
        if self.spawn_timer < config.spawn_interval {
            return 0;
        }
        self.spawn_timer = 0.0;

        let min = config.min_per_spawn as f32;
        let max = config.max_per_spawn.max(config.min_per_spawn) as f32;
        let count = rng.gaussian(min, max, (min + max) * 0.5, 30.0).ceil() as usize;
        let room = config.max_particles.saturating_sub(self.particles.len());
        let count = count.min(room);

        let center = viewport.center();
        let jitter = config.direction_jitter;
        for _ in 0..count {
            let offset = Vec2::new(rng.range(-jitter, jitter), rng.range(-jitter, jitter));
            let mut heading = normalize(offset);
            if heading == Vec2::ZERO {
                heading = Vec2::X;
            }
            self.particles.push(
                StarParticle::new(center, 1.0, config.speed, config.color).with_heading(heading),
            );
        }
        count
    }

    /// Move every streak outwards, grow it with distance, and drop the ones
    /// that left the canvas (or were hidden) in the same pass.
    pub fn advance(&mut self, config: &WarpConfig, viewport: &Viewport, dt: f32) {
        let center = viewport.center();
        self.particles.retain_mut(|p| {
            if !p.visible || viewport.is_outside(p.pos, config.margin) {
                return false;
            }
            p.pos += p.heading * p.speed * dt;
            p.radius = p.pos.distance(center) * config.radius_growth;
            true
        });
    }

    /// Mark every streak invisible; the next `advance` removes them.
    pub fn hide_all(&mut self) {
        for p in &mut self.particles {
            p.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (WarpConfig, Viewport, Rng) {
        (WarpConfig::default(), Viewport::new(800.0, 600.0, 1.0), Rng::new(42))
    }

    #[test]
    fn spawns_only_after_interval() {
        let (config, vp, mut rng) = setup();
        let mut field = WarpField::new();
        assert_eq!(field.spawn(&config, &vp, &mut rng, 0.02), 0);
        let added = field.spawn(&config, &vp, &mut rng, 0.04);
        assert!((1..=4).contains(&added), "added {}", added);
        assert_eq!(field.len(), added);
        for p in field.particles() {
            assert_eq!(p.pos, vp.center());
            assert!((p.heading.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn streaks_fly_out_and_grow() {
        let (config, vp, mut rng) = setup();
        let mut field = WarpField::new();
        field.spawn(&config, &vp, &mut rng, 0.05);
        field.advance(&config, &vp, 0.1);
        for p in field.particles() {
            let d = p.pos.distance(vp.center());
            assert!((d - 150.0).abs() < 1e-2);
            assert!((p.radius - 75.0).abs() < 1e-2);
        }
    }

    #[test]
    fn field_stays_bounded() {
        let (config, vp, mut rng) = setup();
        let mut field = WarpField::new();
        let mut peak = 0;
        for _ in 0..(60 * 30) {
            field.spawn(&config, &vp, &mut rng, 1.0 / 60.0);
            field.advance(&config, &vp, 1.0 / 60.0);
            peak = peak.max(field.len());
        }
        // A streak crosses half the canvas in well under half a second.
        assert!(peak < 60, "peak {}", peak);
    }

    #[test]
    fn cap_drops_extra_spawns() {
        let (mut config, vp, mut rng) = setup();
        config.max_particles = 3;
        config.min_per_spawn = 4;
        let mut field = WarpField::new();
        assert_eq!(field.spawn(&config, &vp, &mut rng, 1.0), 3);
        assert_eq!(field.spawn(&config, &vp, &mut rng, 1.0), 0);
    }

    #[test]
    fn hidden_streaks_are_compacted() {
        let (config, vp, mut rng) = setup();
        let mut field = WarpField::new();
        field.spawn(&config, &vp, &mut rng, 1.0);
        assert!(!field.is_empty());
        field.hide_all();
        field.advance(&config, &vp, 0.016);
        assert!(field.is_empty());
    }
}
