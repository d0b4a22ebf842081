//! Brightness quantization: raw 0-255 samples into the six hatch levels.
//!
//! Level 1 is darkest (always stroked), level 6 is white (never stroked).
//! The band boundaries use `<=` comparisons against multiples of
//! `white_cutoff / 5`; these thresholds were tuned empirically against real
//! prints, so the boundary behavior is kept bit-for-bit.

use crate::config::PlotConfig;

/// Quantized brightness level in `[1, 6]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    pub const DARKEST: BrightnessLevel = BrightnessLevel(1);
    pub const WHITE: BrightnessLevel = BrightnessLevel(6);

    /// Quantize one raw sample against the configured white cutoff.
    ///
    /// Samples at or above the cutoff are white; the remainder maps onto
    /// levels 1..=5 in equal bands of `white_cutoff / 5`.
    pub fn quantize(raw: u8, white_cutoff: u8) -> Self {
        if raw >= white_cutoff {
            return Self::WHITE;
        }
        let band = f32::from(white_cutoff) / 5.0;
        for level in 1..=5u8 {
            if f32::from(raw) <= f32::from(level) * band {
                return Self(level);
            }
        }
        Self(5)
    }

    /// Construct from an already-quantized value in `[1, 6]`.
    ///
    /// Intended for tests and synthetic inputs; panics outside the range.
    pub fn from_value(value: u8) -> Self {
        assert!((1..=6).contains(&value), "level out of range: {value}");
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_white(self) -> bool {
        self.0 == 6
    }
}

/// Immutable grid of quantized levels for one tile, row-major.
#[derive(Clone, Debug)]
pub struct BrightnessGrid {
    width: usize,
    height: usize,
    levels: Vec<BrightnessLevel>,
}

impl BrightnessGrid {
    /// Quantize a row-major block of raw samples into a grid.
    pub fn from_raw(width: usize, height: usize, samples: &[u8], white_cutoff: u8) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "raw sample block does not match grid dimensions"
        );
        let levels = samples
            .iter()
            .map(|&raw| BrightnessLevel::quantize(raw, white_cutoff))
            .collect();
        Self {
            width,
            height,
            levels,
        }
    }

    /// Build from pre-quantized levels (row-major).
    pub fn from_levels(width: usize, height: usize, levels: Vec<BrightnessLevel>) -> Self {
        assert_eq!(levels.len(), width * height);
        Self {
            width,
            height,
            levels,
        }
    }

    /// Uniform grid at a single level, sized per configuration.
    pub fn uniform(config: &PlotConfig, level: BrightnessLevel) -> Self {
        let width = config.tile_width as usize;
        let height = config.tile_height as usize;
        Self {
            width,
            height,
            levels: vec![level; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> BrightnessLevel {
        self.levels[y * self.width + x]
    }
}
