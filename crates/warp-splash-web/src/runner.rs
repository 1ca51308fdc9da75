use warp_splash::{DrawList, EventRecord, SplashApp, SplashConfig, SplashInput};

/// Owns the splash app and the buffers JavaScript reads after each frame.
///
/// `lib.rs` keeps one runner in a `thread_local!` and forwards the
/// `#[wasm_bindgen]` exports to it.
pub struct SplashRunner {
    app: SplashApp,
    draw_list: DrawList,
    /// Flattened events from the last frame.
    event_buffer: Vec<EventRecord>,
}

impl SplashRunner {
    pub fn new(config: SplashConfig, seed: u64, width: f32, height: f32, dpr: f32) -> Self {
        Self {
            app: SplashApp::new(config, seed),
            draw_list: DrawList::new(width, height, dpr),
            event_buffer: Vec::new(),
        }
    }

    pub fn push_input(&mut self, input: SplashInput) {
        self.app.push_input(input);
    }

    /// New canvas size; picked up (debounced) by the next frames.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.draw_list.resize(width, height, dpr);
    }

    /// Run one animation frame: update the scene, re-record the draw list
    /// and flatten the events it produced.
    pub fn frame(&mut self, now_ms: f64) {
        self.draw_list.reset();
        self.app.frame(now_ms, &mut self.draw_list);

        self.event_buffer.clear();
        self.event_buffer
            .extend(self.app.drain_events().into_iter().map(|e| e.to_record()));
    }

    // ---- Pointer accessors for the JS player ----

    pub fn draw_commands_ptr(&self) -> *const f32 {
        self.draw_list.as_floats().as_ptr()
    }

    pub fn draw_command_count(&self) -> u32 {
        self.draw_list.len() as u32
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.draw_list.label(index).map(str::to_owned)
    }

    pub fn events_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<EventRecord, f32>(&self.event_buffer).as_ptr()
    }

    pub fn event_count(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    // ---- Scene queries ----

    pub fn planet_count(&self) -> u32 {
        self.app.scene().map_or(0, |s| s.planets().len() as u32)
    }

    pub fn planet_name(&self, index: usize) -> Option<String> {
        self.app
            .scene()
            .and_then(|s| s.planet_name(index))
            .map(str::to_owned)
    }

    /// Current phase id, or -1 before the first frame.
    pub fn phase(&self) -> i32 {
        self.app.scene().map_or(-1, |s| s.phase().id() as i32)
    }
}
