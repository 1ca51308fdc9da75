use serde::{Deserialize, Serialize};

use crate::bodies::{kuiper_belt, main_belt};
use crate::camera::controller::CameraConfig;
use crate::core::phase::PhaseDurations;
use crate::systems::belt::BeltConfig;
use crate::systems::galaxy::GalaxyConfig;
use crate::systems::warp::WarpConfig;

/// Splash configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// RNG seed. `None` lets the host pick one (the bridge uses the clock).
    pub seed: Option<u64>,
    /// Upper bound for a frame delta in seconds (default: 0.1).
    pub max_dt: f32,
    /// Seconds a new canvas size must stay stable before regenerating (default: 0.15).
    pub resize_debounce: f32,
    /// Allow the high-detail asteroid tier (default: true).
    pub high_detail: bool,
    pub timing: TimingConfig,
    pub galaxy: GalaxyConfig,
    pub warp: WarpConfig,
    pub planets: PlanetConfig,
    pub camera: CameraConfig,
    pub belts: Vec<BeltConfig>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_dt: 0.1,
            resize_debounce: 0.15,
            high_detail: true,
            timing: TimingConfig::default(),
            galaxy: GalaxyConfig::default(),
            warp: WarpConfig::default(),
            planets: PlanetConfig::default(),
            camera: CameraConfig::default(),
            belts: vec![main_belt(), kuiper_belt()],
        }
    }
}

/// Phase durations and transition effects, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub galaxy: f32,
    pub warp_transition: f32,
    pub warp: f32,
    /// White overlay fade-in when the warp jump starts.
    pub overlay_fade_in: f32,
    /// Overlay fade-out once the warp streaks appear.
    pub overlay_fade_out: f32,
    /// Growth of the galaxy zoom per second during the jump.
    pub transition_zoom_rate: f32,
    /// Delay between consecutive menu buttons sliding in.
    pub menu_stagger: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            galaxy: 1.0,
            warp_transition: 1.2,
            warp: 2.0,
            overlay_fade_in: 1.0,
            overlay_fade_out: 0.6,
            transition_zoom_rate: 2.4,
            menu_stagger: 0.2,
        }
    }
}

impl TimingConfig {
    pub fn durations(&self) -> PhaseDurations {
        PhaseDurations {
            galaxy: self.galaxy,
            warp_transition: self.warp_transition,
            warp: self.warp,
        }
    }
}

/// Solar-system layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// Catalog units to pixels (default: 0.1).
    pub planet_scale: f32,
    /// Multiplier on every orbital speed (default: 1).
    pub time_scale: f32,
    pub show_labels: bool,
    /// Label height as a fraction of the body's on-screen size, per 100 px of canvas width.
    pub label_scale: f32,
    /// Layout scale reached by the intro scale-up (default: 0.5).
    pub max_layout_scale: f32,
    /// Layout scale gained per second during the intro (default: 0.05).
    pub intro_scale_rate: f32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            planet_scale: 0.1,
            time_scale: 1.0,
            show_labels: true,
            label_scale: 0.1,
            max_layout_scale: 0.5,
            intro_scale_rate: 0.05,
        }
    }
}

impl SplashConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace out-of-range values with usable ones, logging a warning for each fix.
    pub fn sanitized(mut self) -> Self {
        let d = SplashConfig::default();

        fix(&mut self.max_dt, "max_dt", positive, d.max_dt);
        fix(&mut self.resize_debounce, "resize_debounce", non_negative, d.resize_debounce);

        let t = &mut self.timing;
        fix(&mut t.galaxy, "timing.galaxy", non_negative, d.timing.galaxy);
        fix(
            &mut t.warp_transition,
            "timing.warp_transition",
            non_negative,
            d.timing.warp_transition,
        );
        fix(&mut t.warp, "timing.warp", non_negative, d.timing.warp);
        fix(
            &mut t.overlay_fade_in,
            "timing.overlay_fade_in",
            non_negative,
            d.timing.overlay_fade_in,
        );
        fix(
            &mut t.overlay_fade_out,
            "timing.overlay_fade_out",
            non_negative,
            d.timing.overlay_fade_out,
        );
        fix(
            &mut t.transition_zoom_rate,
            "timing.transition_zoom_rate",
            non_negative,
            d.timing.transition_zoom_rate,
        );
        fix(&mut t.menu_stagger, "timing.menu_stagger", non_negative, d.timing.menu_stagger);

        let g = &mut self.galaxy;
        fix(&mut g.spread, "galaxy.spread", positive, d.galaxy.spread);
        fix(&mut g.star_radius, "galaxy.star_radius", positive, d.galaxy.star_radius);

        let w = &mut self.warp;
        fix(&mut w.spawn_interval, "warp.spawn_interval", positive, d.warp.spawn_interval);
        fix(&mut w.speed, "warp.speed", non_negative, d.warp.speed);
        if w.min_per_spawn > w.max_per_spawn {
            log::warn!("config: warp.min_per_spawn > max_per_spawn, swapping");
            std::mem::swap(&mut w.min_per_spawn, &mut w.max_per_spawn);
        }

        let p = &mut self.planets;
        fix(&mut p.planet_scale, "planets.planet_scale", positive, d.planets.planet_scale);
        fix(&mut p.time_scale, "planets.time_scale", finite, d.planets.time_scale);
        fix(
            &mut p.max_layout_scale,
            "planets.max_layout_scale",
            positive,
            d.planets.max_layout_scale,
        );
        fix(
            &mut p.intro_scale_rate,
            "planets.intro_scale_rate",
            positive,
            d.planets.intro_scale_rate,
        );
        fix(&mut p.label_scale, "planets.label_scale", non_negative, d.planets.label_scale);

        let c = &mut self.camera;
        if !(0.0..=0.99).contains(&c.smoothing) {
            log::warn!("config: camera.smoothing {} out of [0, 0.99], clamping", c.smoothing);
            c.smoothing = if c.smoothing.is_nan() {
                d.camera.smoothing
            } else {
                c.smoothing.clamp(0.0, 0.99)
            };
        }
        fix(&mut c.offset_epsilon, "camera.offset_epsilon", positive, d.camera.offset_epsilon);
        fix(&mut c.zoom_epsilon, "camera.zoom_epsilon", positive, d.camera.zoom_epsilon);
        fix(&mut c.min_zoom, "camera.min_zoom", positive, d.camera.min_zoom);
        fix(&mut c.max_zoom, "camera.max_zoom", positive, d.camera.max_zoom);
        if c.min_zoom > c.max_zoom {
            log::warn!("config: camera.min_zoom > max_zoom, swapping");
            std::mem::swap(&mut c.min_zoom, &mut c.max_zoom);
        }
        fix(&mut c.base_zoom, "camera.base_zoom", positive, d.camera.base_zoom);
        c.base_zoom = c.base_zoom.clamp(c.min_zoom, c.max_zoom);

        for belt in &mut self.belts {
            fix(&mut belt.inner_radius, "belt.inner_radius", non_negative, 0.0);
            fix(&mut belt.thickness, "belt.thickness", non_negative, 0.0);
            fix(&mut belt.lod_zoom, "belt.lod_zoom", positive, 5.0);
            fix(&mut belt.angular_speed, "belt.angular_speed", finite, 0.0);
            for range in [&mut belt.low_detail_size, &mut belt.high_detail_size] {
                if range[0] > range[1] {
                    log::warn!("config: belt '{}' has an inverted size range, swapping", belt.name);
                    range.swap(0, 1);
                }
            }
        }

        self
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn finite(v: f32) -> bool {
    v.is_finite()
}

fn fix(value: &mut f32, name: &str, valid: fn(f32) -> bool, fallback: f32) {
    if !valid(*value) {
        log::warn!("config: {} = {} is out of range, using {}", name, value, fallback);
        *value = fallback;
    }
}
