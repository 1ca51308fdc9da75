use crate::api::config::SplashConfig;
use crate::api::types::SplashEvent;
use crate::core::scene::SplashScene;
use crate::core::time::FrameClock;
use crate::core::viewport::{ResizeWatcher, Viewport};
use crate::input::queue::{InputQueue, SplashInput};
use crate::surface::CanvasSurface;
use crate::systems::render::render_scene;

/// Frame loop around the splash scene.
///
/// The host calls [`SplashApp::frame`] from its animation callback with the
/// callback timestamp and the canvas surface. The scene is created lazily on
/// the first frame, once the canvas size is known.
pub struct SplashApp {
    config: SplashConfig,
    seed: u64,
    clock: FrameClock,
    input: InputQueue,
    resize: ResizeWatcher,
    scene: Option<SplashScene>,
    events: Vec<SplashEvent>,
}

impl SplashApp {
    /// `fallback_seed` is used when the config does not pin a seed.
    pub fn new(config: SplashConfig, fallback_seed: u64) -> Self {
        let config = config.sanitized();
        Self {
            seed: config.seed.unwrap_or(fallback_seed),
            clock: FrameClock::new(config.max_dt),
            input: InputQueue::new(),
            resize: ResizeWatcher::new(config.resize_debounce),
            scene: None,
            events: Vec::new(),
            config,
        }
    }

    pub fn push_input(&mut self, input: SplashInput) {
        self.input.push(input);
    }

    /// Run one animation frame: measure `dt`, update, then render onto `surface`.
    /// Returns the `dt` used, in seconds.
    pub fn frame<S: CanvasSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> f32 {
        let dt = self.clock.tick(now_ms);
        let viewport = Viewport::new(
            surface.width(),
            surface.height(),
            surface.device_pixel_ratio(),
        );
        self.step(dt, viewport);
        self.render(surface);
        dt
    }

    /// Advance by an explicit `dt` for a canvas of size `viewport`.
    pub fn step(&mut self, dt: f32, viewport: Viewport) {
        let applied = self.resize.observe(viewport, dt);

        let fresh = self.scene.is_none();
        let (config, seed) = (&self.config, self.seed);
        let scene = self
            .scene
            .get_or_insert_with(|| SplashScene::new(config.clone(), viewport, seed));
        if let (false, Some(viewport)) = (fresh, applied) {
            scene.regenerate(viewport);
        }

        for intent in self.input.drain() {
            match intent {
                SplashInput::SelectPlanet(index) => {
                    scene.select_planet(index);
                }
                SplashInput::SetLabelsVisible(visible) => scene.set_labels_visible(visible),
                SplashInput::SetHighDetail(enabled) => scene.set_high_detail(enabled),
            }
        }

        scene.update(dt);
        self.events.extend(scene.drain_events());
    }

    /// Draw the current state. Does nothing before the first frame.
    pub fn render<S: CanvasSurface + ?Sized>(&self, surface: &mut S) {
        if let Some(scene) = &self.scene {
            render_scene(scene, surface);
        }
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SplashEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn scene(&self) -> Option<&SplashScene> {
        self.scene.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.scene.is_some()
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::EARTH;
    use crate::core::phase::ScenePhase;
    use crate::surface::DrawList;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn app() -> SplashApp {
        let mut config = SplashConfig::default();
        config.galaxy.star_count = 200;
        for belt in &mut config.belts {
            belt.low_detail_count = 20;
            belt.high_detail_count = 40;
        }
        SplashApp::new(config, 77)
    }

    /// Drive `frames` frames at 60 Hz starting after `start` frames.
    fn drive(app: &mut SplashApp, list: &mut DrawList, start: usize, frames: usize) {
        for i in start..start + frames {
            list.reset();
            app.frame(i as f64 * FRAME_MS, list);
        }
    }

    #[test]
    fn first_frame_initializes_and_renders() {
        let mut app = app();
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        assert!(!app.is_initialized());
        assert_eq!(app.frame(5_000.0, &mut list), 0.0);
        assert!(app.is_initialized());
        assert_eq!(app.scene().unwrap().phase(), ScenePhase::Galaxy);
        assert!(!list.is_empty());
        assert_eq!(app.seed(), 77);
    }

    #[test]
    fn pinned_seed_wins() {
        let config = SplashConfig {
            seed: Some(5),
            ..SplashConfig::default()
        };
        assert_eq!(SplashApp::new(config, 77).seed(), 5);
    }

    #[test]
    fn long_pause_is_clamped() {
        let mut app = app();
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        app.frame(0.0, &mut list);
        let dt = app.frame(60_000.0, &mut list);
        assert_eq!(dt, 0.1);
        assert_eq!(app.scene().unwrap().phase(), ScenePhase::Galaxy);
    }

    #[test]
    fn sequence_runs_on_timestamps() {
        let mut app = app();
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        drive(&mut app, &mut list, 0, 60 * 5);
        assert_eq!(app.scene().unwrap().phase(), ScenePhase::MainMenu);
        let events = app.drain_events();
        assert_eq!(events[0], SplashEvent::PhaseChanged(ScenePhase::WarpTransition));
        assert!(events.contains(&SplashEvent::PhaseChanged(ScenePhase::MainMenu)));
    }

    #[test]
    fn resize_is_debounced() {
        let mut app = app();
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        drive(&mut app, &mut list, 0, 10);

        list.resize(1024.0, 768.0, 1.0);
        drive(&mut app, &mut list, 10, 3);
        assert_eq!(app.scene().unwrap().viewport().width, 800.0);

        drive(&mut app, &mut list, 13, 15);
        let vp = app.scene().unwrap().viewport();
        assert_eq!((vp.width, vp.height), (1024.0, 768.0));
    }

    #[test]
    fn selection_waits_for_interactive_menu() {
        let mut app = app();
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        app.push_input(SplashInput::SelectPlanet(EARTH));
        drive(&mut app, &mut list, 0, 60);
        assert_eq!(app.scene().unwrap().camera().focus(), None);

        drive(&mut app, &mut list, 60, 60 * 15);
        assert!(app.scene().unwrap().is_interactive());
        app.push_input(SplashInput::SelectPlanet(EARTH));
        app.push_input(SplashInput::SetLabelsVisible(false));
        drive(&mut app, &mut list, 60 * 16, 1);

        let scene = app.scene().unwrap();
        assert_eq!(scene.camera().focus(), Some(EARTH));
        assert!(!scene.show_labels());
        assert!(app
            .drain_events()
            .contains(&SplashEvent::FocusChanged { index: EARTH }));
    }
}
