//! WASM exports for the splash page.
//!
//! The page calls `splash_init` once, then `splash_frame` from every
//! `requestAnimationFrame` callback, and replays the draw list found at
//! `get_draw_commands_ptr` onto its 2D context.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use warp_splash::{SplashConfig, SplashInput, PROTOCOL_VERSION};

pub mod runner;

pub use runner::SplashRunner;

thread_local! {
    static RUNNER: RefCell<Option<SplashRunner>> = const { RefCell::new(None) };
}

fn with_runner<R: Default>(f: impl FnOnce(&mut SplashRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::error!("splash not initialized, call splash_init() first");
            R::default()
        }
    })
}

/// Config from the page. Missing or malformed JSON falls back to the defaults.
fn parse_config(json: Option<&str>) -> SplashConfig {
    match json {
        Some(json) => SplashConfig::from_json(json).unwrap_or_else(|err| {
            log::error!("splash: bad config ({}), using defaults", err);
            SplashConfig::default()
        }),
        None => SplashConfig::default(),
    }
}

/// Create the splash for a canvas of `width x height` device pixels.
/// `config_json` may be omitted; a config that fails to parse falls back to
/// the defaults.
#[wasm_bindgen]
pub fn splash_init(width: f32, height: f32, dpr: f32, config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = parse_config(config_json.as_deref());
    let seed = js_sys::Date::now() as u64;
    let runner = SplashRunner::new(config, seed, width, height, dpr);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("splash: initialized ({}x{} @{})", width, height, dpr);
}

#[wasm_bindgen]
pub fn splash_frame(now_ms: f64) {
    with_runner(|r| r.frame(now_ms));
}

#[wasm_bindgen]
pub fn splash_resize(width: f32, height: f32, dpr: f32) {
    with_runner(|r| r.resize(width, height, dpr));
}

#[wasm_bindgen]
pub fn splash_select_planet(index: u32) {
    with_runner(|r| r.push_input(SplashInput::SelectPlanet(index as usize)));
}

#[wasm_bindgen]
pub fn splash_set_labels_visible(visible: bool) {
    with_runner(|r| r.push_input(SplashInput::SetLabelsVisible(visible)));
}

#[wasm_bindgen]
pub fn splash_set_high_detail(enabled: bool) {
    with_runner(|r| r.push_input(SplashInput::SetHighDetail(enabled)));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_draw_commands_ptr() -> *const f32 {
    with_runner(|r| Some(r.draw_commands_ptr())).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_draw_command_count() -> u32 {
    with_runner(|r| r.draw_command_count())
}

#[wasm_bindgen]
pub fn splash_label(index: u32) -> Option<String> {
    with_runner(|r| r.label(index as usize))
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| Some(r.events_ptr())).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(|r| r.planet_count())
}

#[wasm_bindgen]
pub fn splash_planet_name(index: u32) -> Option<String> {
    with_runner(|r| r.planet_name(index as usize))
}

/// Phase id (0 galaxy, 1 warp transition, 2 warp, 3 menu), or -1 before the
/// first frame.
#[wasm_bindgen]
pub fn get_phase() -> i32 {
    with_runner(|r| Some(r.phase())).unwrap_or(-1)
}

#[wasm_bindgen]
pub fn splash_protocol_version() -> f32 {
    PROTOCOL_VERSION
}
