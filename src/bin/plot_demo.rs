use hatchplot::image::io::{
    load_grayscale_image, save_grayscale_u8, write_json_file, write_text_lines,
};
use hatchplot::preview::render_layout;
use hatchplot::{gcode, GcodeSettings, HatchPipeline, PlotConfig};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub gcode: GcodeSettings,
    #[serde(default)]
    pub parallel: bool,
    pub output: PlotOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOutputConfig {
    pub gcode_dir: PathBuf,
    pub report_json: Option<PathBuf>,
    pub preview_png: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PlotToolConfig, String> {
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
    let mut pipeline = HatchPipeline::new(config.plot).map_err(|e| e.to_string())?;
    pipeline.set_parallel(config.parallel);
    let job = pipeline.process(gray.as_view()).map_err(|e| e.to_string())?;

    for (index, strokes) in job.flattened.iter().enumerate() {
        let mut commands = gcode::preamble(&config.gcode);
        commands.extend(gcode::draw_commands(
            strokes,
            config.plot.tile_width,
            &config.gcode,
        ));
        commands.extend(gcode::group_epilogue(config.plot.tile_height));

        let path = config.output.gcode_dir.join(format!("group_{index:03}.gcode"));
        write_text_lines(&path, &commands)?;
    }

    if let Some(preview_path) = &config.output.preview_png {
        let canvas = render_layout(&job.tiles, &config.plot);
        save_grayscale_u8(&canvas, preview_path)?;
        println!("Saved layout preview to {}", preview_path.display());
    }

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &job.trace)?;
        println!("Saved run report to {}", report_path.display());
    }

    println!(
        "Wrote {} G-code files to {} ({} strokes, {:.3} ms)",
        job.flattened.len(),
        config.output.gcode_dir.display(),
        job.trace.segments_total,
        job.trace.total_ms
    );
    for summary in &job.trace.groups {
        println!(
            "  group {:>3}: {} slots, {} strokes, draw {:.0} mm, travel {:.0} mm",
            summary.index,
            summary.occupied_slots,
            summary.segment_count,
            summary.draw_length_mm,
            summary.travel_length_mm
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: plot_demo <config.json>".to_string()
}
