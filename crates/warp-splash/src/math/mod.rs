//! Sampling, geometry and colour helpers used by the field generators and updaters.

mod color;
mod easing;
mod geometry;
mod rng;

pub use color::{HexColor, Rgba};
pub use easing::{ease, lerp, Easing};
pub use geometry::{normalize, rotate_point};
pub use rng::Rng;
