pub mod phase;
pub mod scene;
pub mod time;
pub mod viewport;
