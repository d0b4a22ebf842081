//! G-code text generation for one print group.
//!
//! Emission is pure string building; transport to the machine is out of
//! scope. One image pixel maps to one millimetre, coordinates are absolute.
//! X is mirrored across the two-tile-wide bed (`2 * tile_width - x`) because
//! the gantry's X axis runs opposite to image columns.

use crate::config::GcodeSettings;
use crate::types::LineSegment;

/// Commands per drawn stroke: travel, lower, draw, raise.
pub const COMMANDS_PER_SEGMENT: usize = 4;

/// Per-print setup: absolute positioning, homing, millimetre units, then move
/// to the print origin, zero it, clear the bed and settle the pen just above
/// drawing height.
pub fn preamble(settings: &GcodeSettings) -> Vec<String> {
    vec![
        "G90".to_string(),
        "G28".to_string(),
        "G21".to_string(),
        format!(
            "G0 X{} Y{} Z{}",
            settings.x_start, settings.y_start, settings.z_start
        ),
        "G92 X0 Y0".to_string(),
        format!("G0 Y{}", settings.bed_clear_y),
        format!("G1 Z{} F{}", settings.z_lift, settings.draw_feed),
    ]
}

/// One travel/lower/draw/raise quartet per stroke, in input order.
pub fn draw_commands(
    strokes: &[LineSegment],
    tile_width: u32,
    settings: &GcodeSettings,
) -> Vec<String> {
    let mirror = 2 * tile_width as i32;
    let mut commands = Vec::with_capacity(strokes.len() * COMMANDS_PER_SEGMENT);
    for stroke in strokes {
        let fx_start = mirror - stroke.start.x;
        let fx_end = mirror - stroke.end.x;
        commands.push(format!(
            "G0 X{} Y{} F{}",
            fx_start, stroke.start.y, settings.travel_feed
        ));
        commands.push(format!("G0 Z{} F{}", settings.z_draw, settings.travel_feed));
        commands.push(format!(
            "G1 X{} Y{} F{}",
            fx_end, stroke.end.y, settings.draw_feed
        ));
        commands.push(format!("G0 Z{} F{}", settings.z_lift, settings.travel_feed));
    }
    commands
}

/// Present the bed after a group so the notes can be swapped.
pub fn group_epilogue(tile_height: u32) -> Vec<String> {
    vec![format!("G0 X0 Y{}", 2 * tile_height)]
}
