use hatchplot::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use hatchplot::preview::render_layout;
use hatchplot::{HatchPipeline, PlotConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub plot: PlotConfig,
    pub output: PreviewOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutputConfig {
    pub preview_png: PathBuf,
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewSummary {
    tile_count: usize,
    segments_total: usize,
    mosaic_width: u32,
    mosaic_height: u32,
    synthesis_ms: f64,
}

pub fn load_config(path: &Path) -> Result<PreviewToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let pipeline = HatchPipeline::new(config.plot).map_err(|e| e.to_string())?;
    let job = pipeline.process(gray.as_view()).map_err(|e| e.to_string())?;

    let canvas = render_layout(&job.tiles, &config.plot);
    save_grayscale_u8(&canvas, &config.output.preview_png)?;

    let summary = PreviewSummary {
        tile_count: job.tiles.len(),
        segments_total: job.trace.segments_total,
        mosaic_width: config.plot.target_width(),
        mosaic_height: config.plot.target_height(),
        synthesis_ms: job.trace.timings.synthesis_ms,
    };
    if let Some(summary_path) = &config.output.summary_json {
        write_json_file(summary_path, &summary)?;
    }

    println!(
        "Saved preview to {} ({} tiles, {} strokes)",
        config.output.preview_png.display(),
        summary.tile_count,
        summary.segments_total
    );

    Ok(())
}

fn usage() -> String {
    "Usage: hatch_preview <config.json>".to_string()
}
