//! Serializable trace of one pipeline run.

use crate::layout::PrintGroup;
use crate::types::LineSegment;
use serde::Serialize;

/// End-to-end trace describing one run of the pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub groups: Vec<GroupSummary>,
    /// Strokes across all tiles.
    pub segments_total: usize,
    pub total_ms: f64,
}

/// What went in: source image size (when the run started from an image) and
/// the configured tile geometry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<usize>,
    pub tile_count: usize,
    pub tiles_wide: u32,
    pub tiles_high: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

/// Per-stage wall-clock timings in milliseconds.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_ms: Option<f64>,
    pub synthesis_ms: f64,
    pub grouping_ms: f64,
    pub flatten_ms: f64,
}

/// Stroke statistics for one print group, computed over its flattened,
/// plot-ordered stroke list.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub index: usize,
    pub occupied_slots: usize,
    pub segment_count: usize,
    /// Total pen-down distance, in bed millimetres.
    pub draw_length_mm: f64,
    /// Pen-up distance between consecutive strokes, in bed millimetres.
    pub travel_length_mm: f64,
}

/// Summarize one group from its flattened stroke list.
pub fn summarize_group(index: usize, group: &PrintGroup, strokes: &[LineSegment]) -> GroupSummary {
    let draw_length_mm = strokes.iter().map(LineSegment::length).sum();
    let travel_length_mm = strokes
        .windows(2)
        .map(|pair| {
            let dx = (pair[1].start.x - pair[0].end.x) as f64;
            let dy = (pair[1].start.y - pair[0].end.y) as f64;
            (dx * dx + dy * dy).sqrt()
        })
        .sum();
    GroupSummary {
        index,
        occupied_slots: group.occupied_slots(),
        segment_count: strokes.len(),
        draw_length_mm,
        travel_length_mm,
    }
}
