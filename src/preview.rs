//! Static preview of the hatched layout.
//!
//! Renders every tile's strokes at its logical mosaic position (tile pitch =
//! tile size + spacing) into a grayscale buffer, white background and black
//! strokes. This is the file-output counterpart of holding the finished
//! mosaic of notes next to the source image; there is no windowed preview.

use crate::config::PlotConfig;
use crate::image::GrayImageU8;
use crate::tiles::TileSet;
use crate::types::LineSegment;

const BACKGROUND: u8 = 255;
const STROKE: u8 = 0;

/// Render the tile set onto a mosaic-sized canvas.
pub fn render_layout(tiles: &TileSet, config: &PlotConfig) -> GrayImageU8 {
    let width = config.target_width() as usize;
    let height = config.target_height() as usize;
    let mut canvas = GrayImageU8::filled(width, height, BACKGROUND);

    let pitch_x = (config.tile_width + config.tile_spacing) as i32;
    let pitch_y = (config.tile_height + config.tile_spacing) as i32;
    let tiles_wide = config.tiles_wide.max(1) as usize;
    for tile in tiles.tiles() {
        let dx = (tile.index % tiles_wide) as i32 * pitch_x;
        let dy = (tile.index / tiles_wide) as i32 * pitch_y;
        for seg in &tile.segments {
            draw_stroke(&mut canvas, seg.translated(dx, dy));
        }
    }
    canvas
}

/// Paint one stroke. Synthesized strokes are vertical runs, so a stroke is a
/// single pixel column.
fn draw_stroke(canvas: &mut GrayImageU8, seg: LineSegment) {
    let x = seg.start.x;
    if x < 0 || x as usize >= canvas.width() {
        return;
    }
    let y0 = seg.start.y.min(seg.end.y).max(0);
    let y1 = seg.start.y.max(seg.end.y).min(canvas.height() as i32 - 1);
    for y in y0..=y1 {
        canvas.put(x as usize, y as usize, STROKE);
    }
}
