use crate::brightness::BrightnessGrid;
use crate::config::{ConfigError, PlotConfig};
use crate::types::{LineSegment, Point};
use log::debug;

/// Rows of draw history a density rule may consult.
const LOOKBACK: usize = 3;
/// Ring depth: the current row plus the lookback window.
const HISTORY_ROWS: usize = LOOKBACK + 1;

/// Converts brightness grids into tile-local strokes.
///
/// One synthesizer can be reused across tiles: the draw-history ring and the
/// per-column run registers are scratch state, fully reset on every call.
pub struct LineSynthesizer {
    tile_width: usize,
    tile_height: usize,
    /// Draw flags for the last `HISTORY_ROWS` rows, ring-indexed by row.
    drawn: Vec<bool>,
    /// Per-column start row of the currently open run, if any.
    open_runs: Vec<Option<i32>>,
    segments: Vec<LineSegment>,
}

impl LineSynthesizer {
    pub fn new(config: &PlotConfig) -> Self {
        let tile_width = config.tile_width as usize;
        let tile_height = config.tile_height as usize;
        Self {
            tile_width,
            tile_height,
            drawn: vec![false; tile_width * HISTORY_ROWS],
            open_runs: vec![None; tile_width],
            segments: Vec::new(),
        }
    }

    /// Run the density rules over one grid and return its strokes, in scan
    /// order of each run's closing pixel.
    pub fn synthesize(&mut self, grid: &BrightnessGrid) -> Result<Vec<LineSegment>, ConfigError> {
        if grid.width() != self.tile_width || grid.height() != self.tile_height {
            return Err(ConfigError::TileSizeMismatch {
                expected: (self.tile_width as u32, self.tile_height as u32),
                found: (grid.width(), grid.height()),
            });
        }
        self.reset();

        for y in 0..self.tile_height {
            for x in 0..self.tile_width {
                let eligible = self.eligible(grid, x, y);
                self.set_drawn(x, y, eligible);
                self.advance_run(x, y, eligible);
            }
        }

        debug!(
            "LineSynthesizer: {}x{} grid -> {} segments",
            self.tile_width,
            self.tile_height,
            self.segments.len()
        );
        Ok(std::mem::take(&mut self.segments))
    }

    fn reset(&mut self) {
        self.drawn.fill(false);
        self.open_runs.fill(None);
        self.segments.clear();
    }

    /// Per-level density rule. Each rule reads only already-decided draw
    /// flags in the same column, at most `LOOKBACK` rows up.
    fn eligible(&self, grid: &BrightnessGrid, x: usize, y: usize) -> bool {
        match grid.get(x, y).value() {
            1 => true,
            // at most 2 drawn level-2 pixels in the 3 rows above
            2 => self.drawn_at_level(grid, x, y, 3, 2) <= 2,
            // at most 1 drawn level-3 pixel in the 2 rows above
            3 => self.drawn_at_level(grid, x, y, 2, 3) <= 1,
            // the row directly above must not be a drawn level-4 pixel
            4 => self.drawn_at_level(grid, x, y, 1, 4) == 0,
            // the 3 rows above must be untouched at any level
            5 => (1..=LOOKBACK).all(|back| !self.was_drawn(x, y, back)),
            _ => false,
        }
    }

    /// Count drawn pixels of `level` among the `depth` rows above `(x, y)`.
    /// Rows above the grid count as not drawn.
    fn drawn_at_level(
        &self,
        grid: &BrightnessGrid,
        x: usize,
        y: usize,
        depth: usize,
        level: u8,
    ) -> usize {
        (1..=depth)
            .filter(|&back| {
                back <= y && self.was_drawn(x, y, back) && grid.get(x, y - back).value() == level
            })
            .count()
    }

    #[inline]
    fn was_drawn(&self, x: usize, y: usize, back: usize) -> bool {
        if back > y {
            return false;
        }
        self.drawn[((y - back) % HISTORY_ROWS) * self.tile_width + x]
    }

    #[inline]
    fn set_drawn(&mut self, x: usize, y: usize, flag: bool) {
        self.drawn[(y % HISTORY_ROWS) * self.tile_width + x] = flag;
    }

    /// Run bookkeeping for one decided pixel.
    fn advance_run(&mut self, x: usize, y: usize, eligible: bool) {
        if eligible {
            if self.open_runs[x].is_none() {
                self.open_runs[x] = Some(y as i32);
            }
            // force-close at the bottom edge so a trailing run still emits,
            // down to a single-pixel stroke
            if y + 1 == self.tile_height {
                self.close_run(x, y);
            }
        } else {
            // the closing stroke ends at the pixel that failed its rule
            self.close_run(x, y);
        }
    }

    fn close_run(&mut self, x: usize, y: usize) {
        if let Some(y_open) = self.open_runs[x].take() {
            self.segments.push(LineSegment::new(
                Point::new(x as i32, y_open),
                Point::new(x as i32, y as i32),
            ));
        }
    }
}
