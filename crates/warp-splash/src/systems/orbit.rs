use glam::Vec2;

use crate::components::planet::PlanetDisplay;
use crate::math::rotate_point;

/// Advance every planet along its circular orbit about `center`.
/// Plain Euler steps of the rotation; the radius drifts only by float error.
pub fn rotate_planets(planets: &mut [PlanetDisplay], center: Vec2, dt: f32) {
    for planet in planets.iter_mut() {
        planet.pos = rotate_point(planet.pos, center, planet.angular_speed * dt);
    }
}

/// Move the planets with a new canvas centre, keeping each orbital angle.
/// Positions are re-projected onto the exact orbit radius, which also
/// removes any drift accumulated by `rotate_planets`.
pub fn recenter_planets(planets: &mut [PlanetDisplay], old_center: Vec2, new_center: Vec2) {
    for planet in planets.iter_mut() {
        let angle = planet.angle(old_center);
        planet.pos = new_center + Vec2::from_angle(angle) * planet.orbit_radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{build_planets, EARTH, SUN};

    #[test]
    fn planets_keep_their_orbit_radius() {
        let center = Vec2::new(400.0, 300.0);
        let mut planets = build_planets(center, 0.1, 1.0);
        for _ in 0..600 {
            rotate_planets(&mut planets, center, 1.0 / 60.0);
        }
        for p in &planets {
            let drift = (p.pos.distance(center) - p.orbit_radius).abs();
            assert!(drift < p.orbit_radius * 1e-3 + 1e-3, "{} drifted {}", p.name, drift);
        }
        assert_eq!(planets[SUN].pos, center);
    }

    #[test]
    fn earth_moves_fifty_degrees_per_second() {
        let center = Vec2::ZERO;
        let mut planets = build_planets(center, 0.1, 1.0);
        rotate_planets(&mut planets, center, 1.0);
        let angle = planets[EARTH].angle(center).to_degrees();
        assert!((angle - 50.0).abs() < 1e-3, "angle {}", angle);
    }

    #[test]
    fn recenter_preserves_angle() {
        let old = Vec2::new(400.0, 300.0);
        let new = Vec2::new(640.0, 360.0);
        let mut planets = build_planets(old, 0.1, 1.0);
        rotate_planets(&mut planets, old, 2.0);
        let before = planets[EARTH].angle(old);

        recenter_planets(&mut planets, old, new);
        let earth = &planets[EARTH];
        assert!((earth.angle(new) - before).abs() < 1e-4);
        assert!((earth.pos.distance(new) - earth.orbit_radius).abs() < 1e-3);
        assert!(planets[SUN].pos.distance(new) < 1e-4);
    }
}
