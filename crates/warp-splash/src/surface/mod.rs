//! Drawing seam between the scene and whatever paints pixels.
//!
//! The scene renders through [`CanvasSurface`] only. In the browser the
//! surface is a [`DrawList`] that records commands for the JavaScript player
//! to replay onto a `CanvasRenderingContext2D`; tests use the same recorder.

mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::math::Rgba;

/// Immediate-mode 2D canvas. Coordinates and sizes are device pixels.
pub trait CanvasSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn device_pixel_ratio(&self) -> f32;

    /// Erase the whole canvas to transparent.
    fn clear(&mut self);
    /// Fill the whole canvas.
    fn fill_rect(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32);
    /// Text centred on `position`.
    fn fill_text(&mut self, text: &str, position: Vec2, font_px: f32, color: Rgba);
    /// Halo (shadow blur) applied to the fills and strokes that follow.
    fn set_glow(&mut self, color: Rgba, blur: f32);
    fn clear_glow(&mut self);
}
