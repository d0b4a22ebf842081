//! Tile construction: one synthesized stroke list per brightness grid.

use crate::brightness::BrightnessGrid;
use crate::config::{ConfigError, PlotConfig};
use crate::hatch::LineSynthesizer;
use crate::types::LineSegment;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Strokes for one tile, in tile-local coordinates.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Row-major position in the logical tile grid.
    pub index: usize,
    pub segments: Vec<LineSegment>,
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// All tiles of one run, in raster order.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Synthesize every grid in input order; position becomes raster index.
    ///
    /// Any synthesis failure voids the whole set.
    pub fn build(grids: &[BrightnessGrid], config: &PlotConfig) -> Result<Self, ConfigError> {
        let mut synth = LineSynthesizer::new(config);
        let tiles = grids
            .iter()
            .enumerate()
            .map(|(index, grid)| {
                Ok(Tile {
                    index,
                    segments: synth.synthesize(grid)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        debug!(
            "TileSet: {} tiles, {} segments total",
            tiles.len(),
            tiles.iter().map(|t| t.segments.len()).sum::<usize>()
        );
        Ok(Self { tiles })
    }

    /// Assemble a set from pre-synthesized tiles, keeping their order.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parallel variant of [`TileSet::build`]; tiles share no state, so the
    /// result is identical to the sequential build.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(
        grids: &[BrightnessGrid],
        config: &PlotConfig,
    ) -> Result<Self, ConfigError> {
        let tiles = grids
            .par_iter()
            .enumerate()
            .map(|(index, grid)| {
                let mut synth = LineSynthesizer::new(config);
                Ok(Tile {
                    index,
                    segments: synth.synthesize(grid)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.tiles.iter().map(|t| t.segments.len()).sum()
    }
}
