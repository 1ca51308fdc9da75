//! Read-only render pass: walks the scene and issues canvas calls.
//!
//! Order: clear, black backdrop, galaxy, warp streaks, planets (glow, body,
//! rings, label), asteroid belts, white overlay.

use glam::Vec2;

use crate::core::scene::SplashScene;
use crate::math::{HexColor, Rgba};
use crate::surface::CanvasSurface;

/// Labels smaller than this many pixels are skipped.
const MIN_LABEL_PX: f32 = 1.0;

pub fn render_scene<S: CanvasSurface + ?Sized>(scene: &SplashScene, surface: &mut S) {
    surface.clear();
    surface.fill_rect(Rgba::opaque(HexColor::BLACK));

    let flags = scene.flags();
    if flags.galaxy {
        render_galaxy(scene, surface);
    }
    if flags.moves_warp() {
        render_warp(scene, surface);
    }
    if flags.menu {
        render_planets(scene, surface);
        render_belts(scene, surface);
    }

    let alpha = scene.overlay_alpha();
    if alpha > 0.0 {
        surface.fill_rect(Rgba::new(HexColor::WHITE, alpha));
    }
}

fn render_galaxy<S: CanvasSurface + ?Sized>(scene: &SplashScene, surface: &mut S) {
    let view = scene.intro_view();
    for star in scene.galaxy().iter().filter(|s| s.visible) {
        surface.fill_circle(
            view.to_screen(star.pos),
            view.scale(star.radius),
            Rgba::opaque(star.color),
        );
    }
}

fn render_warp<S: CanvasSurface + ?Sized>(scene: &SplashScene, surface: &mut S) {
    let view = scene.intro_view();
    let draw_scale = scene.config().warp.draw_scale;
    for streak in scene.warp().particles().iter().filter(|s| s.visible) {
        surface.fill_circle(
            view.to_screen(streak.pos),
            view.scale(streak.radius * draw_scale),
            Rgba::opaque(streak.color),
        );
    }
}

fn render_planets<S: CanvasSurface + ?Sized>(scene: &SplashScene, surface: &mut S) {
    let view = scene.menu_view();
    let viewport = scene.viewport();
    let label_scale = scene.config().planets.label_scale;

    for planet in scene.planets() {
        let pos = view.to_screen(planet.pos);
        let radius = view.scale(planet.size);
        let reach = planet
            .rings
            .map_or(radius, |r| view.scale(r.radius(planet.size, r.count) + r.width));
        if !viewport.is_circle_visible(pos, reach) {
            continue;
        }

        if let Some(glow) = planet.glow {
            // Shadow blur ignores the canvas transform, so only the layout scale applies.
            surface.set_glow(Rgba::opaque(planet.color), glow.strength * scene.layout_scale());
        }
        if viewport.is_circle_visible(pos, radius) {
            surface.fill_circle(pos, radius, Rgba::opaque(planet.color));
        }
        if let Some(rings) = planet.rings {
            for i in 0..rings.count {
                surface.stroke_circle(
                    pos,
                    view.scale(rings.radius(planet.size, i)),
                    Rgba::opaque(rings.color),
                    view.scale(rings.width),
                );
            }
        }
        if planet.glow.is_some() {
            surface.clear_glow();
        }

        if scene.show_labels() {
            let font_px = radius / view.dpr * label_scale * (viewport.width / 100.0);
            if font_px >= MIN_LABEL_PX {
                let lift = view.scale(2.0 * planet.size)
                    + view.scale(planet.rings.map_or(0.0, |r| r.extent()));
                let at = pos - Vec2::new(0.0, lift);
                surface.fill_text(planet.name, at, font_px, Rgba::opaque(HexColor::WHITE));
            }
        }
    }
}

fn render_belts<S: CanvasSurface + ?Sized>(scene: &SplashScene, surface: &mut S) {
    let view = scene.menu_view();
    let viewport = scene.viewport();
    for belt in scene.belts() {
        for rock in belt.rocks(scene.belt_tier(belt)).iter().filter(|r| r.visible) {
            let pos = view.to_screen(rock.pos);
            let radius = view.scale(rock.radius);
            if !viewport.is_circle_visible(pos, radius) {
                continue;
            }
            surface.fill_circle(pos, radius, Rgba::opaque(rock.color));
        }
    }
}
