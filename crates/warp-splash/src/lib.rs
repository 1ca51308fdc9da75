pub mod api;
pub mod bodies;
pub mod bridge;
pub mod camera;
pub mod components;
pub mod core;
pub mod input;
pub mod math;
pub mod surface;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::SplashApp;
pub use api::config::{PlanetConfig, SplashConfig, TimingConfig};
pub use api::types::{EventRecord, SplashEvent};
pub use bridge::protocol::PROTOCOL_VERSION;
pub use camera::controller::{CameraConfig, CameraController, CameraMode, LockTarget};
pub use camera::view::ViewTransform;
pub use components::particle::{AsteroidParticle, StarParticle};
pub use components::planet::{Glow, PlanetDisplay, RingSet};
pub use core::phase::{PhaseDirector, PhaseFlags, ScenePhase};
pub use core::scene::SplashScene;
pub use core::time::FrameClock;
pub use core::viewport::Viewport;
pub use input::queue::{InputQueue, SplashInput};
pub use math::{HexColor, Rgba, Rng};
pub use surface::{CanvasSurface, DrawCommand, DrawList};
pub use systems::belt::{Belt, BeltConfig, DetailTier};
pub use systems::galaxy::GalaxyConfig;
pub use systems::warp::{WarpConfig, WarpField};
