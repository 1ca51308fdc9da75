/// Wire format shared with the JavaScript canvas player.
/// Must stay in sync with the JavaScript canvas player.
///
/// Both buffers are flat `f32` arrays read through a pointer into WASM memory:
/// ```text
/// [Draw commands: count × 12 floats]  kind, x, y, radius, width, r, g, b, a, font_px, label, pad
/// [Events:        count × 4 floats]   kind, a, b, c
/// ```
///
/// Colour channels are in [0, 1]. `label` indexes the per-frame label table
/// (fetched with `splash_label(i)`), -1 when unused.

/// Protocol version reported by `splash_protocol_version()`.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw command (wire format, never changes).
pub const DRAW_COMMAND_FLOATS: usize = 12;

/// Floats per event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Draw command kinds.
pub const CMD_CLEAR: f32 = 0.0;
/// Fill the whole canvas with (r, g, b, a).
pub const CMD_FILL_RECT: f32 = 1.0;
pub const CMD_FILL_CIRCLE: f32 = 2.0;
/// Stroke a circle of `radius` with line width `width`.
pub const CMD_STROKE_CIRCLE: f32 = 3.0;
/// Centred text at (x, y), `font_px` high, string from the label table.
pub const CMD_FILL_TEXT: f32 = 4.0;
/// Set the shadow colour (r, g, b, a) and blur (`width`) for following fills.
pub const CMD_SET_GLOW: f32 = 5.0;
pub const CMD_CLEAR_GLOW: f32 = 6.0;

/// Event kinds.
/// `a` = phase id (0 galaxy, 1 warp-transition, 2 warp, 3 main-menu).
pub const EVENT_PHASE_CHANGED: f32 = 1.0;
/// `a` = number of planet buttons to create.
pub const EVENT_PLANETS_LISTED: f32 = 2.0;
/// `a` = per-button slide-in stagger in seconds.
pub const EVENT_MENU_INTERACTIVE: f32 = 3.0;
/// `a` = focused planet index.
pub const EVENT_FOCUS_CHANGED: f32 = 4.0;
/// `a` = planet index the camera locked onto.
pub const EVENT_CAMERA_LOCKED: f32 = 5.0;

/// Label slot value for commands without text.
pub const NO_LABEL: f32 = -1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_kinds_are_distinct() {
        let kinds = [
            CMD_CLEAR,
            CMD_FILL_RECT,
            CMD_FILL_CIRCLE,
            CMD_STROKE_CIRCLE,
            CMD_FILL_TEXT,
            CMD_SET_GLOW,
            CMD_CLEAR_GLOW,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn event_kinds_skip_zero() {
        // A zeroed record must never read as a real event.
        for kind in [
            EVENT_PHASE_CHANGED,
            EVENT_PLANETS_LISTED,
            EVENT_MENU_INTERACTIVE,
            EVENT_FOCUS_CHANGED,
            EVENT_CAMERA_LOCKED,
        ] {
            assert!(kind > 0.0);
        }
    }
}
