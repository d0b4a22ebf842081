#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod brightness;
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod pipeline;
pub mod types;

// Stage modules – public for tools and tests, but considered internals.
pub mod gcode;
pub mod hatch;
pub mod layout;
pub mod preview;
pub mod tiles;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + job.
pub use crate::config::{ConfigError, GcodeSettings, PlotConfig};
pub use crate::pipeline::{HatchPipeline, PlotJob};

// High-level diagnostics returned by the pipeline.
pub use crate::diagnostics::{GroupSummary, PipelineTrace};

// Core stage types that show up in the job.
pub use crate::brightness::{BrightnessGrid, BrightnessLevel};
pub use crate::layout::{PrintGroup, PrintSlot};
pub use crate::tiles::{Tile, TileSet};
pub use crate::types::{LineSegment, Point};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hatchplot::prelude::*;
///
/// # fn main() -> Result<(), hatchplot::ConfigError> {
/// let config = PlotConfig::default();
/// let pipeline = HatchPipeline::new(config)?;
///
/// let (w, h) = (466usize, 544usize);
/// let gray = vec![128u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let job = pipeline.process(img)?;
/// println!("groups={} strokes={}", job.groups.len(), job.trace.segments_total);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{GcodeSettings, HatchPipeline, PlotConfig, PlotJob};
}
