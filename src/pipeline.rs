//! Pipeline orchestrator: image (or pre-quantized grids) in, plot job out.
//!
//! [`HatchPipeline`] validates its configuration once at construction and is
//! read-only afterwards. `process` runs the full chain — prep, quantization,
//! stroke synthesis, grouping, flattening — while `process_grids` enters at
//! the core boundary with brightness grids the caller prepared elsewhere.
//! Every stage is timed; the resulting [`PipelineTrace`] rides along in the
//! returned [`PlotJob`].

use crate::brightness::BrightnessGrid;
use crate::config::{ConfigError, PlotConfig};
use crate::diagnostics::{summarize_group, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::image::{extract_tiles, resize_and_crop, ImageU8};
use crate::layout::{self, flatten_group, PrintGroup};
use crate::tiles::TileSet;
use crate::types::LineSegment;
use log::debug;
use std::time::Instant;

/// Everything one run produces: tiles, groups, per-group plot-ordered stroke
/// lists (`flattened[i]` belongs to `groups[i]`) and the run trace.
#[derive(Clone, Debug)]
pub struct PlotJob {
    pub tiles: TileSet,
    pub groups: Vec<PrintGroup>,
    pub flattened: Vec<Vec<LineSegment>>,
    pub trace: PipelineTrace,
}

/// Orchestrates the full image-to-strokes pipeline.
pub struct HatchPipeline {
    config: PlotConfig,
    parallel: bool,
}

impl HatchPipeline {
    /// Validate the configuration and build a pipeline around it.
    pub fn new(config: PlotConfig) -> Result<Self, ConfigError> {
        layout::check_group_size(&config)?;
        Ok(Self {
            config,
            parallel: false,
        })
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Synthesize tiles on the rayon pool instead of sequentially. Results
    /// are identical either way; only throughput changes.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    /// Full run from a grayscale image: prep, slice, then the core stages.
    pub fn process(&self, gray: ImageU8<'_>) -> Result<PlotJob, ConfigError> {
        let total_start = Instant::now();
        let prep_start = Instant::now();
        let mosaic = resize_and_crop(gray, &self.config);
        let grids = extract_tiles(mosaic.as_view(), &self.config);
        let prep_ms = prep_start.elapsed().as_secs_f64() * 1000.0;
        self.run_core(
            &grids,
            Some((gray.w, gray.h)),
            Some(prep_ms),
            total_start,
        )
    }

    /// Core-only run over brightness grids in raster order.
    pub fn process_grids(&self, grids: &[BrightnessGrid]) -> Result<PlotJob, ConfigError> {
        self.run_core(grids, None, None, Instant::now())
    }

    fn run_core(
        &self,
        grids: &[BrightnessGrid],
        image_dims: Option<(usize, usize)>,
        prep_ms: Option<f64>,
        total_start: Instant,
    ) -> Result<PlotJob, ConfigError> {
        let synth_start = Instant::now();
        let tiles = self.build_tiles(grids)?;
        let synthesis_ms = synth_start.elapsed().as_secs_f64() * 1000.0;

        let group_start = Instant::now();
        let groups = layout::group_tiles(&tiles, &self.config)?;
        let grouping_ms = group_start.elapsed().as_secs_f64() * 1000.0;

        let flatten_start = Instant::now();
        let flattened: Vec<Vec<LineSegment>> = groups.iter().map(flatten_group).collect();
        let flatten_ms = flatten_start.elapsed().as_secs_f64() * 1000.0;

        let summaries = groups
            .iter()
            .zip(&flattened)
            .enumerate()
            .map(|(index, (group, strokes))| summarize_group(index, group, strokes))
            .collect();

        let trace = PipelineTrace {
            input: InputDescriptor {
                image_width: image_dims.map(|(w, _)| w),
                image_height: image_dims.map(|(_, h)| h),
                tile_count: tiles.len(),
                tiles_wide: self.config.tiles_wide,
                tiles_high: self.config.tiles_high,
                tile_width: self.config.tile_width,
                tile_height: self.config.tile_height,
            },
            timings: TimingBreakdown {
                prep_ms,
                synthesis_ms,
                grouping_ms,
                flatten_ms,
            },
            groups: summaries,
            segments_total: tiles.segment_count(),
            total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "HatchPipeline: {} tiles, {} groups, {} strokes in {:.3} ms",
            tiles.len(),
            groups.len(),
            trace.segments_total,
            trace.total_ms
        );

        Ok(PlotJob {
            tiles,
            groups,
            flattened,
            trace,
        })
    }

    fn build_tiles(&self, grids: &[BrightnessGrid]) -> Result<TileSet, ConfigError> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return TileSet::build_parallel(grids, &self.config);
        }
        TileSet::build(grids, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::{BrightnessGrid, BrightnessLevel};

    fn config() -> PlotConfig {
        PlotConfig {
            tile_width: 2,
            tile_height: 2,
            tiles_wide: 2,
            tiles_high: 2,
            ..Default::default()
        }
    }

    fn uniform(level: u8) -> BrightnessGrid {
        BrightnessGrid::uniform(&config(), BrightnessLevel::from_value(level))
    }

    #[test]
    fn construction_rejects_unplaceable_group_sizes() {
        let bad = PlotConfig {
            group_size: 0,
            ..config()
        };
        assert!(HatchPipeline::new(bad).is_err());
        let bad = PlotConfig {
            group_size: 9,
            ..config()
        };
        assert!(HatchPipeline::new(bad).is_err());
    }

    #[test]
    fn empty_grid_sequence_yields_an_empty_job() {
        let pipeline = HatchPipeline::new(config()).unwrap();
        let job = pipeline.process_grids(&[]).unwrap();
        assert!(job.tiles.is_empty());
        assert!(job.groups.is_empty());
        assert!(job.flattened.is_empty());
        assert_eq!(job.trace.segments_total, 0);
    }

    #[test]
    fn trace_counts_match_the_job() {
        let pipeline = HatchPipeline::new(config()).unwrap();
        let grids: Vec<_> = (0..5).map(|_| uniform(1)).collect();
        let job = pipeline.process_grids(&grids).unwrap();
        assert_eq!(job.groups.len(), 2);
        assert_eq!(job.flattened.len(), 2);
        assert_eq!(job.trace.groups.len(), 2);
        assert_eq!(job.trace.input.tile_count, 5);
        assert_eq!(job.trace.segments_total, 10);
        assert_eq!(job.trace.groups[1].occupied_slots, 1);
    }
}
