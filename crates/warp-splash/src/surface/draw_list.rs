use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::CanvasSurface;
use crate::bridge::protocol::{
    CMD_CLEAR, CMD_CLEAR_GLOW, CMD_FILL_CIRCLE, CMD_FILL_RECT, CMD_FILL_TEXT, CMD_SET_GLOW,
    CMD_STROKE_CIRCLE, DRAW_COMMAND_FLOATS, NO_LABEL,
};
use crate::math::Rgba;

/// One recorded canvas call. Layout matches `bridge::protocol`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub width: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub font_px: f32,
    pub label: f32,
    pub _pad: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = DRAW_COMMAND_FLOATS;

    fn new(kind: f32, color: Rgba) -> Self {
        let [r, g, b, a] = color.to_unit();
        Self {
            kind,
            r,
            g,
            b,
            a,
            label: NO_LABEL,
            ..Self::default()
        }
    }

    fn at(mut self, pos: Vec2) -> Self {
        self.x = pos.x;
        self.y = pos.y;
        self
    }
}

/// Recording [`CanvasSurface`]. Cleared by the host at the start of every frame.
#[derive(Debug, Clone)]
pub struct DrawList {
    width: f32,
    height: f32,
    dpr: f32,
    commands: Vec<DrawCommand>,
    labels: Vec<String>,
}

impl DrawList {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width,
            height,
            dpr,
            commands: Vec::with_capacity(4096),
            labels: Vec::new(),
        }
    }

    /// Record the canvas size reported by the host.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }

    /// Drop the previous frame's commands and labels.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.labels.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Flat view of the command buffer for the wire.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl CanvasSurface for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn clear(&mut self) {
        self.push(DrawCommand {
            kind: CMD_CLEAR,
            label: NO_LABEL,
            ..DrawCommand::default()
        });
    }

    fn fill_rect(&mut self, color: Rgba) {
        self.push(DrawCommand::new(CMD_FILL_RECT, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.push(DrawCommand {
            radius,
            ..DrawCommand::new(CMD_FILL_CIRCLE, color).at(center)
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.push(DrawCommand {
            radius,
            width,
            ..DrawCommand::new(CMD_STROKE_CIRCLE, color).at(center)
        });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, font_px: f32, color: Rgba) {
        let label = self.labels.len() as f32;
        self.labels.push(text.to_owned());
        self.push(DrawCommand {
            font_px,
            label,
            ..DrawCommand::new(CMD_FILL_TEXT, color).at(position)
        });
    }

    fn set_glow(&mut self, color: Rgba, blur: f32) {
        self.push(DrawCommand {
            width: blur,
            ..DrawCommand::new(CMD_SET_GLOW, color)
        });
    }

    fn clear_glow(&mut self) {
        self.push(DrawCommand {
            kind: CMD_CLEAR_GLOW,
            label: NO_LABEL,
            ..DrawCommand::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::HexColor;

    #[test]
    fn command_layout_matches_protocol() {
        assert_eq!(std::mem::size_of::<DrawCommand>(), DRAW_COMMAND_FLOATS * 4);
    }

    #[test]
    fn records_calls_in_order() {
        let mut list = DrawList::new(800.0, 600.0, 1.0);
        list.clear();
        list.fill_rect(Rgba::opaque(HexColor::BLACK));
        list.fill_circle(Vec2::new(10.0, 20.0), 3.0, Rgba::opaque(HexColor::WHITE));
        list.stroke_circle(Vec2::new(1.0, 2.0), 5.0, Rgba::new(HexColor::WHITE, 0.5), 0.25);

        let cmds = list.commands();
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[0].kind, CMD_CLEAR);
        assert_eq!(cmds[1].kind, CMD_FILL_RECT);
        assert_eq!(cmds[1].a, 1.0);
        assert_eq!((cmds[2].x, cmds[2].y, cmds[2].radius), (10.0, 20.0, 3.0));
        assert_eq!(cmds[2].r, 1.0);
        assert_eq!(cmds[3].width, 0.25);
        assert_eq!(cmds[3].a, 0.5);
    }

    #[test]
    fn text_goes_to_label_table() {
        let mut list = DrawList::new(100.0, 100.0, 1.0);
        list.fill_text("Earth", Vec2::new(5.0, 5.0), 12.0, Rgba::opaque(HexColor::WHITE));
        list.fill_text("Mars", Vec2::new(6.0, 6.0), 10.0, Rgba::opaque(HexColor::WHITE));
        assert_eq!(list.label_count(), 2);
        assert_eq!(list.commands()[1].label, 1.0);
        assert_eq!(list.label(1), Some("Mars"));
        assert_eq!(list.label(2), None);
    }

    #[test]
    fn flat_buffer_and_reset() {
        let mut list = DrawList::new(100.0, 100.0, 2.0);
        list.fill_circle(Vec2::new(1.0, 2.0), 3.0, Rgba::opaque(HexColor::WHITE));
        list.fill_text("Sun", Vec2::ZERO, 8.0, Rgba::opaque(HexColor::WHITE));
        let floats = list.as_floats();
        assert_eq!(floats.len(), 2 * DRAW_COMMAND_FLOATS);
        assert_eq!(floats[0], CMD_FILL_CIRCLE);
        assert_eq!(floats[10], NO_LABEL);
        assert_eq!(floats[DRAW_COMMAND_FLOATS + 10], 0.0);

        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.label_count(), 0);
        assert_eq!(list.device_pixel_ratio(), 2.0);
    }
}
