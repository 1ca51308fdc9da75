//! The splash scene: single owner of every field, the planets, the camera
//! and the phase director. Updated once per frame, rendered read-only.

use crate::api::config::SplashConfig;
use crate::api::types::SplashEvent;
use crate::bodies::{build_planets, PLANET_NAMES, SUN};
use crate::camera::controller::{CameraController, CameraMode, LockTarget};
use crate::camera::view::ViewTransform;
use crate::components::particle::StarParticle;
use crate::components::planet::PlanetDisplay;
use crate::core::phase::{PhaseDirector, PhaseFlags, ScenePhase};
use crate::core::viewport::Viewport;
use crate::math::{Easing, Rng};
use crate::systems::belt::{Belt, DetailTier};
use crate::systems::galaxy::{generate_galaxy, rotate_galaxy};
use crate::systems::orbit::{recenter_planets, rotate_planets};
use crate::systems::overlay::Fade;
use crate::systems::warp::WarpField;

pub struct SplashScene {
    config: SplashConfig,
    viewport: Viewport,
    rng: Rng,
    director: PhaseDirector,
    galaxy: Vec<StarParticle>,
    warp: WarpField,
    planets: Vec<PlanetDisplay>,
    belts: Vec<Belt>,
    camera: CameraController,
    /// Intro scale of the solar system, 0 until the menu appears.
    layout_scale: f32,
    /// Extra galaxy zoom accumulated during the warp jump.
    transition_zoom: f32,
    overlay: Fade,
    show_labels: bool,
    high_detail: bool,
    menu_entered: bool,
    interactive: bool,
    events: Vec<SplashEvent>,
}

impl SplashScene {
    /// Build the scene for `viewport`: planets, galaxy and belts are generated up front.
    /// Out-of-range config values are sanitized first.
    pub fn new(config: SplashConfig, viewport: Viewport, seed: u64) -> Self {
        let config = config.sanitized();
        let planets = build_planets(
            viewport.center(),
            config.planets.planet_scale,
            config.planets.time_scale,
        );
        let belts = config.belts.iter().cloned().map(Belt::new).collect();

        let mut scene = Self {
            viewport,
            rng: Rng::new(seed),
            director: PhaseDirector::new(config.timing.durations()),
            galaxy: Vec::new(),
            warp: WarpField::new(),
            planets,
            belts,
            camera: CameraController::new(config.camera.clone()),
            layout_scale: 0.0,
            transition_zoom: 0.0,
            overlay: Fade::default(),
            show_labels: config.planets.show_labels,
            high_detail: config.high_detail,
            menu_entered: false,
            interactive: false,
            events: Vec::new(),
            config,
        };
        scene.rebuild_galaxy();
        scene.rebuild_belts();
        log::info!(
            "splash: initialized {}x{} (seed {}, {} stars, {} belts)",
            viewport.width,
            viewport.height,
            seed,
            scene.galaxy.len(),
            scene.belts.len()
        );
        scene
    }

    /// Rebuild everything that depends on the canvas size.
    pub fn regenerate(&mut self, viewport: Viewport) {
        let old_center = self.viewport.center();
        self.viewport = viewport;

        self.rebuild_galaxy();
        self.warp.hide_all();
        recenter_planets(&mut self.planets, old_center, viewport.center());
        self.rebuild_belts();
        log::info!(
            "splash: regenerated for {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.dpr
        );
    }

    fn rebuild_galaxy(&mut self) {
        if self.director.flags().galaxy {
            self.galaxy = generate_galaxy(&self.config.galaxy, &self.viewport, &mut self.rng);
        }
    }

    fn rebuild_belts(&mut self) {
        let center = self.viewport.center();
        let scale = self.config.planets.planet_scale;
        for belt in &mut self.belts {
            belt.regenerate(center, scale, &mut self.rng);
        }
    }

    /// Advance the whole scene by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for phase in self.director.advance(dt) {
            self.enter(phase);
        }

        let flags = self.director.flags();
        let center = self.viewport.center();

        if flags.galaxy {
            rotate_galaxy(&mut self.galaxy, center, dt);
            if self.director.phase() == ScenePhase::WarpTransition {
                self.transition_zoom += self.config.timing.transition_zoom_rate * dt;
            }
        }

        if flags.warp {
            self.warp.spawn(&self.config.warp, &self.viewport, &mut self.rng, dt);
        }
        if flags.moves_warp() {
            self.warp.advance(&self.config.warp, &self.viewport, dt);
        }

        self.overlay.tick(dt);

        if flags.menu {
            rotate_planets(&mut self.planets, center, dt);
            for belt in &mut self.belts {
                belt.rotate(center, dt);
            }
            self.scale_up_intro(dt);
            self.update_camera(dt);
        }
    }

    fn enter(&mut self, phase: ScenePhase) {
        log::info!("splash: entering {}", phase.name());
        self.events.push(SplashEvent::PhaseChanged(phase));
        let timing = &self.config.timing;

        match phase {
            ScenePhase::Galaxy => {}
            ScenePhase::WarpTransition => {
                self.transition_zoom = 0.0;
                self.overlay.start(1.0, timing.overlay_fade_in, Easing::SineInOut);
            }
            ScenePhase::Warp => {
                self.galaxy = Vec::new();
                self.transition_zoom = 0.0;
                self.overlay.start(0.0, timing.overlay_fade_out, Easing::SineInOut);
            }
            ScenePhase::MainMenu => {
                if self.menu_entered {
                    return;
                }
                self.menu_entered = true;
                self.layout_scale = 0.0;
                self.events.push(SplashEvent::PlanetsListed {
                    count: self.planets.len(),
                });
                self.camera.select(SUN);
                self.events.push(SplashEvent::FocusChanged { index: SUN });
            }
        }
    }

    fn scale_up_intro(&mut self, dt: f32) {
        if self.interactive {
            return;
        }
        let planets = &self.config.planets;
        self.layout_scale += planets.intro_scale_rate * dt;
        if self.layout_scale >= planets.max_layout_scale {
            self.layout_scale = planets.max_layout_scale;
            self.interactive = true;
            log::info!("splash: menu interactive");
            self.events.push(SplashEvent::MenuInteractive {
                stagger: self.config.timing.menu_stagger,
            });
        }
    }

    fn update_camera(&mut self, dt: f32) {
        let Some(index) = self.camera.focus() else {
            return;
        };
        let (Some(planet), Some(reference)) = (self.planets.get(index), self.planets.get(SUN))
        else {
            return;
        };
        let target = LockTarget::for_planet(
            planet.pos,
            self.viewport.center(),
            self.layout_scale,
            planet.size,
            reference.size,
        );
        self.camera.track(target);
        if self.camera.update(dt, self.interactive) == Some(CameraMode::LockedOnPlanet) {
            log::info!("splash: camera locked on {}", planet.name);
            self.events.push(SplashEvent::CameraLocked { index });
        }
    }

    /// Focus the camera on planet `index`. Ignored (returns false) before the
    /// menu is interactive or for an unknown index.
    pub fn select_planet(&mut self, index: usize) -> bool {
        if index >= self.planets.len() {
            log::warn!("splash: planet index {} out of range", index);
            return false;
        }
        if !self.interactive {
            log::debug!("splash: selection of {} ignored, menu not interactive", index);
            return false;
        }
        self.camera.select(index);
        self.events.push(SplashEvent::FocusChanged { index });
        true
    }

    pub fn set_labels_visible(&mut self, visible: bool) {
        self.show_labels = visible;
    }

    pub fn set_high_detail(&mut self, enabled: bool) {
        self.high_detail = enabled;
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SplashEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Read access for the render pass and the bridge --

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    pub fn phase(&self) -> ScenePhase {
        self.director.phase()
    }

    pub fn flags(&self) -> PhaseFlags {
        self.director.flags()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn galaxy(&self) -> &[StarParticle] {
        &self.galaxy
    }

    pub fn warp(&self) -> &WarpField {
        &self.warp
    }

    pub fn planets(&self) -> &[PlanetDisplay] {
        &self.planets
    }

    pub fn planet_name(&self, index: usize) -> Option<&'static str> {
        PLANET_NAMES.get(index).copied()
    }

    pub fn belts(&self) -> &[Belt] {
        &self.belts
    }

    /// The asteroid tier a belt draws at the current zoom.
    pub fn belt_tier(&self, belt: &Belt) -> DetailTier {
        belt.tier(self.camera.zoom(), self.high_detail)
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn layout_scale(&self) -> f32 {
        self.layout_scale
    }

    pub fn overlay_alpha(&self) -> f32 {
        self.overlay.alpha()
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn high_detail(&self) -> bool {
        self.high_detail
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// View used by the galaxy and warp passes.
    pub fn intro_view(&self) -> ViewTransform {
        ViewTransform::intro(
            self.viewport.center(),
            1.0 + self.transition_zoom,
            self.viewport.dpr,
        )
    }

    /// View used by the planet and belt passes.
    pub fn menu_view(&self) -> ViewTransform {
        ViewTransform {
            center: self.viewport.center(),
            layout_scale: self.layout_scale,
            offset: self.camera.offset(),
            zoom: self.camera.zoom(),
            dpr: self.viewport.dpr,
        }
    }
}
