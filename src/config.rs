//! Run configuration and the configuration error taxonomy.
//!
//! A [`PlotConfig`] is constructed once per run (typically deserialized from a
//! JSON file) and passed read-only into every stage entry point. There is no
//! global mutable state anywhere in the pipeline.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Geometry and quantization parameters for one plot run.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfig {
    /// Raw brightness at or above which a pixel is treated as full white.
    pub white_cutoff: u8,
    /// Tile width in pixels (one pixel = one potential stroke row/column).
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Logical tile grid width, in tiles.
    pub tiles_wide: u32,
    /// Logical tile grid height, in tiles.
    pub tiles_high: u32,
    /// Dead pixels between adjacent tiles in the source mosaic.
    pub tile_spacing: u32,
    /// Tiles per physical print group (the bed fits 4 in a 2x2 layout).
    pub group_size: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            white_cutoff: 180,
            tile_width: 76,
            tile_height: 76,
            tiles_wide: 6,
            tiles_high: 7,
            tile_spacing: 2,
            group_size: 4,
        }
    }
}

impl PlotConfig {
    /// Width in pixels of the full tile mosaic, spacing included.
    pub fn target_width(&self) -> u32 {
        self.tiles_wide * self.tile_width + self.tiles_wide.saturating_sub(1) * self.tile_spacing
    }

    /// Height in pixels of the full tile mosaic, spacing included.
    pub fn target_height(&self) -> u32 {
        self.tiles_high * self.tile_height + self.tiles_high.saturating_sub(1) * self.tile_spacing
    }

    /// Total number of tiles in the logical grid.
    pub fn tile_count(&self) -> usize {
        self.tiles_wide as usize * self.tiles_high as usize
    }
}

/// Machine-side constants for G-code emission. Units are millimetres and
/// mm/min; one image pixel maps to one millimetre on the bed.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GcodeSettings {
    /// Z height at which the pen touches the paper.
    pub z_draw: f32,
    /// Z height for pen-up travel moves.
    pub z_lift: f32,
    /// Feed rate while drawing.
    pub draw_feed: u32,
    /// Feed rate for travel moves.
    pub travel_feed: u32,
    /// X offset from the homing position to the print origin.
    pub x_start: f32,
    /// Y offset from the homing position to the print origin.
    pub y_start: f32,
    /// Z height taken right after homing, clear of the bed.
    pub z_start: f32,
    /// Y position that presents the bed for swapping notes.
    pub bed_clear_y: f32,
}

impl Default for GcodeSettings {
    fn default() -> Self {
        Self {
            z_draw: 97.6,
            z_lift: 99.6,
            draw_feed: 2000,
            travel_feed: 4000,
            x_start: 4.0,
            y_start: 12.0,
            z_start: 120.0,
            bed_clear_y: 130.0,
        }
    }
}

/// Reasons a pipeline run can be rejected before producing any output.
///
/// All variants are fatal for the run: no stage returns partial results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A brightness grid does not match the configured tile dimensions.
    TileSizeMismatch {
        expected: (u32, u32),
        found: (usize, usize),
    },
    /// `group_size` must be at least 1.
    InvalidGroupSize { requested: usize },
    /// `group_size` asks for a slot the physical offset table does not define.
    MissingSlotOffset { slot: usize, table_len: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TileSizeMismatch { expected, found } => write!(
                f,
                "tile size mismatch (configured {}x{}, grid {}x{})",
                expected.0, expected.1, found.0, found.1
            ),
            ConfigError::InvalidGroupSize { requested } => {
                write!(f, "group size must be >= 1 (requested {requested})")
            }
            ConfigError::MissingSlotOffset { slot, table_len } => write!(
                f,
                "no offset defined for slot {slot} (offset table has {table_len} entries)"
            ),
        }
    }
}

/// Load a [`PlotConfig`] from a JSON file.
pub fn load_plot_config(path: &Path) -> Result<PlotConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
