use bytemuck::{Pod, Zeroable};

use crate::bridge::protocol::{
    EVENT_CAMERA_LOCKED, EVENT_FLOATS, EVENT_FOCUS_CHANGED, EVENT_MENU_INTERACTIVE,
    EVENT_PHASE_CHANGED, EVENT_PLANETS_LISTED,
};
use crate::core::phase::ScenePhase;

/// Notifications from the scene to the page (button bar, analytics, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashEvent {
    PhaseChanged(ScenePhase),
    /// The menu has `count` bodies; create one button each.
    PlanetsListed { count: usize },
    /// Intro scale-up finished: slide the buttons in, `stagger` seconds apart.
    MenuInteractive { stagger: f32 },
    FocusChanged { index: usize },
    CameraLocked { index: usize },
}

impl SplashEvent {
    /// Flatten for the wire.
    pub fn to_record(self) -> EventRecord {
        let (kind, a) = match self {
            SplashEvent::PhaseChanged(phase) => (EVENT_PHASE_CHANGED, phase.id() as f32),
            SplashEvent::PlanetsListed { count } => (EVENT_PLANETS_LISTED, count as f32),
            SplashEvent::MenuInteractive { stagger } => (EVENT_MENU_INTERACTIVE, stagger),
            SplashEvent::FocusChanged { index } => (EVENT_FOCUS_CHANGED, index as f32),
            SplashEvent::CameraLocked { index } => (EVENT_CAMERA_LOCKED, index as f32),
        };
        EventRecord {
            kind,
            a,
            ..EventRecord::default()
        }
    }
}

/// A splash event as read by JavaScript from WASM memory.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = EVENT_FLOATS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_four_floats() {
        assert_eq!(std::mem::size_of::<EventRecord>(), EventRecord::FLOATS * 4);
    }

    #[test]
    fn events_flatten() {
        let r = SplashEvent::PhaseChanged(ScenePhase::MainMenu).to_record();
        assert_eq!((r.kind, r.a), (EVENT_PHASE_CHANGED, 3.0));

        let r = SplashEvent::MenuInteractive { stagger: 0.2 }.to_record();
        assert_eq!((r.kind, r.a), (EVENT_MENU_INTERACTIVE, 0.2));

        let r = SplashEvent::CameraLocked { index: 3 }.to_record();
        assert_eq!((r.kind, r.a, r.b, r.c), (EVENT_CAMERA_LOCKED, 3.0, 0.0, 0.0));
    }
}
