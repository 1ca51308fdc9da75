/// Catalog of the menu's solar system: the Sun, nine planets and two belts.
///
/// Distances and sizes are hand-tuned for readability, not to scale. They are
/// multiplied by the planet scale (0.1 by default) when the displays are built.

use glam::Vec2;

use crate::components::planet::{Glow, PlanetDisplay, RingSet};
use crate::math::HexColor;
use crate::systems::belt::BeltConfig;

/// Body index constants (position in the menu and in the planet list).
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;
pub const PLUTO: usize = 9;
pub const PLANET_COUNT: usize = 10;

/// Names for the menu buttons (indexed by body constant).
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// Unscaled catalog entry for one body.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub name: &'static str,
    /// Orbit radius from the centre.
    pub distance: f32,
    /// Degrees per second at time scale 1.
    pub orbit_speed: f32,
    pub size: f32,
    pub color: HexColor,
    pub rings: Option<RingSet>,
    pub glow: Option<Glow>,
}

const fn body(
    name: &'static str,
    distance: f32,
    orbit_speed: f32,
    size: f32,
    color: u32,
) -> BodySpec {
    BodySpec {
        name,
        distance,
        orbit_speed,
        size,
        color: HexColor::from_u32(color),
        rings: None,
        glow: None,
    }
}

const fn rings(count: u32, color: u32, spacing: f32, width: f32) -> Option<RingSet> {
    Some(RingSet {
        count,
        color: HexColor::from_u32(color),
        spacing,
        width,
    })
}

/// The fixed body catalog, Sun first.
pub fn catalog() -> [BodySpec; PLANET_COUNT] {
    [
        BodySpec {
            glow: Some(Glow { strength: 70.0 }),
            ..body("Sun", 0.0, 0.0, 400.0, 0xf09826)
        },
        body("Mercury", 450.0, 80.35, 1.5, 0x825844),
        body("Venus", 831.0, 58.5, 3.6, 0xbaa266),
        body("Earth", 1154.0, 50.0, 4.0, 0x86b6db),
        body("Mars", 1754.0, 40.1, 2.0, 0xab2f13),
        BodySpec {
            rings: rings(1, 0xb89e76, 6.0, 0.3),
            ..body("Jupiter", 6000.0, 21.7, 40.0, 0xb89e76)
        },
        BodySpec {
            rings: rings(2, 0xe3d5c1, 11.0, 10.0),
            ..body("Saturn", 11007.0, 16.5, 36.0, 0xe8cea7)
        },
        BodySpec {
            rings: rings(2, 0xffffff, 0.7, 0.4),
            ..body("Uranus", 22177.0, 11.4, 16.0, 0xbfdaf2)
        },
        BodySpec {
            rings: rings(4, 0xacbcfa, 0.6, 0.4),
            ..body("Neptune", 34689.0, 9.1, 12.0, 0x4361d9)
        },
        body("Pluto", 45006.0, 7.95, 0.8, 0x5e4840),
    ]
}

/// Build the planet displays around `center`. Every body starts on the
/// positive x axis at its scaled orbit radius.
pub fn build_planets(center: Vec2, planet_scale: f32, time_scale: f32) -> Vec<PlanetDisplay> {
    catalog()
        .iter()
        .map(|spec| {
            let orbit_radius = spec.distance * planet_scale;
            PlanetDisplay {
                name: spec.name,
                pos: center + Vec2::new(orbit_radius, 0.0),
                orbit_radius,
                angular_speed: spec.orbit_speed * time_scale,
                size: spec.size * planet_scale,
                color: spec.color,
                rings: spec.rings.map(|r| RingSet {
                    spacing: r.spacing * planet_scale,
                    width: r.width * planet_scale,
                    ..r
                }),
                glow: spec.glow,
            }
        })
        .collect()
}

/// Asteroid belt between Mars and Jupiter.
pub fn main_belt() -> BeltConfig {
    BeltConfig {
        name: "main".to_string(),
        inner_radius: 3400.0,
        thickness: 3000.0,
        ..BeltConfig::default()
    }
}

/// Kuiper belt just beyond Pluto.
pub fn kuiper_belt() -> BeltConfig {
    BeltConfig {
        name: "kuiper".to_string(),
        inner_radius: 45010.0,
        thickness: 10000.0,
        low_detail_count: 10000,
        high_detail_count: 11000,
        ..BeltConfig::default()
    }
}
