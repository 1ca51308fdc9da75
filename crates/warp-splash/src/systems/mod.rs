pub mod belt;
pub mod galaxy;
pub mod orbit;
pub mod overlay;
pub mod render;
pub mod warp;
