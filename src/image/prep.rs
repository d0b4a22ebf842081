//! Image preparation: shape the source photo onto the tile mosaic and slice
//! it into per-tile brightness grids.
//!
//! The mosaic is `tiles_wide x tiles_high` tiles with `tile_spacing` dead
//! pixels between neighbors. The source is cover-scaled (larger of the two
//! axis ratios, Lanczos resampling), center-cropped to the mosaic size, and
//! then sliced tile by tile in raster order, skipping the dead space.

use super::{GrayImageU8, ImageU8};
use crate::brightness::BrightnessGrid;
use crate::config::PlotConfig;
use image::imageops::{self, FilterType};
use image::GrayImage;
use log::debug;

/// Cover-scale and center-crop the source onto the mosaic dimensions.
pub fn resize_and_crop(img: ImageU8<'_>, config: &PlotConfig) -> GrayImageU8 {
    let target_w = config.target_width();
    let target_h = config.target_height();

    let ratio_w = f64::from(target_w) / img.w as f64;
    let ratio_h = f64::from(target_h) / img.h as f64;
    let scale = ratio_w.max(ratio_h);
    let scaled_w = ((img.w as f64 * scale) as u32).max(target_w);
    let scaled_h = ((img.h as f64 * scale) as u32).max(target_h);

    let mut source = GrayImage::new(img.w as u32, img.h as u32);
    for (x, y, px) in source.enumerate_pixels_mut() {
        px.0[0] = img.get(x as usize, y as usize);
    }
    let scaled = if (scaled_w, scaled_h) == (img.w as u32, img.h as u32) {
        source
    } else {
        imageops::resize(&source, scaled_w, scaled_h, FilterType::Lanczos3)
    };

    let left = (scaled_w - target_w) / 2;
    let top = (scaled_h - target_h) / 2;
    let cropped = imageops::crop_imm(&scaled, left, top, target_w, target_h).to_image();

    debug!(
        "resize_and_crop: {}x{} -> {}x{} (scale {:.4}, crop at {},{})",
        img.w, img.h, target_w, target_h, scale, left, top
    );
    GrayImageU8::new(target_w as usize, target_h as usize, cropped.into_raw())
}

/// Slice a prepared mosaic into quantized per-tile grids, raster order.
///
/// The mosaic must already have the dimensions of
/// [`PlotConfig::target_width`] x [`PlotConfig::target_height`].
pub fn extract_tiles(img: ImageU8<'_>, config: &PlotConfig) -> Vec<BrightnessGrid> {
    let tile_w = config.tile_width as usize;
    let tile_h = config.tile_height as usize;
    let pitch_x = tile_w + config.tile_spacing as usize;
    let pitch_y = tile_h + config.tile_spacing as usize;

    let mut grids = Vec::with_capacity(config.tile_count());
    let mut samples = vec![0u8; tile_w * tile_h];
    for ty in 0..config.tiles_high as usize {
        let y0 = ty * pitch_y;
        for tx in 0..config.tiles_wide as usize {
            let x0 = tx * pitch_x;
            for row in 0..tile_h {
                let src = &img.row(y0 + row)[x0..x0 + tile_w];
                samples[row * tile_w..(row + 1) * tile_w].copy_from_slice(src);
            }
            grids.push(BrightnessGrid::from_raw(
                tile_w,
                tile_h,
                &samples,
                config.white_cutoff,
            ));
        }
    }
    debug!("extract_tiles: {} tiles extracted", grids.len());
    grids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlotConfig {
        PlotConfig {
            tile_width: 2,
            tile_height: 2,
            tiles_wide: 2,
            tiles_high: 2,
            tile_spacing: 1,
            ..Default::default()
        }
    }

    #[test]
    fn target_dimensions_account_for_dead_space() {
        let cfg = config();
        assert_eq!(cfg.target_width(), 5);
        assert_eq!(cfg.target_height(), 5);
    }

    #[test]
    fn exact_size_input_passes_through_untouched() {
        let cfg = config();
        let data: Vec<u8> = (0..25).collect();
        let img = GrayImageU8::new(5, 5, data.clone());
        let out = resize_and_crop(img.as_view(), &cfg);
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 5);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(out.get(x, y), data[y * 5 + x]);
            }
        }
    }

    #[test]
    fn wider_input_is_center_cropped_without_resampling() {
        let cfg = config();
        // 9x5 source, height already matches: scale 1, crop 2 columns per side
        let data: Vec<u8> = (0..45).collect();
        let img = GrayImageU8::new(9, 5, data);
        let out = resize_and_crop(img.as_view(), &cfg);
        assert_eq!((out.width(), out.height()), (5, 5));
        assert_eq!(out.get(0, 0), 2);
        assert_eq!(out.get(4, 0), 6);
        assert_eq!(out.get(0, 4), 38);
    }

    #[test]
    fn small_input_is_scaled_up_to_cover_the_mosaic() {
        let cfg = config();
        let img = GrayImageU8::filled(3, 4, 90);
        let out = resize_and_crop(img.as_view(), &cfg);
        assert_eq!((out.width(), out.height()), (5, 5));
        // uniform input stays uniform through Lanczos resampling, up to
        // rounding in the resampler
        for y in 0..5 {
            for x in 0..5 {
                let v = out.get(x, y);
                assert!((89..=91).contains(&v), "pixel ({x},{y}) = {v}");
            }
        }
    }

    #[test]
    fn tiles_are_sliced_in_raster_order_skipping_dead_space() {
        let cfg = config();
        // distinct value per mosaic region: tile (tx, ty) filled with marker,
        // dead space filled with 255
        let mut data = vec![255u8; 25];
        let markers = [0u8, 60, 100, 255];
        for (i, &(x0, y0)) in [(0usize, 0usize), (3, 0), (0, 3), (3, 3)].iter().enumerate() {
            for dy in 0..2 {
                for dx in 0..2 {
                    data[(y0 + dy) * 5 + x0 + dx] = markers[i];
                }
            }
        }
        let img = GrayImageU8::new(5, 5, data);
        let grids = extract_tiles(img.as_view(), &cfg);
        assert_eq!(grids.len(), 4);
        // cutoff 180: 0 -> level 1, 60 -> level 2, 100 -> level 3, 255 -> white
        assert_eq!(grids[0].get(0, 0).value(), 1);
        assert_eq!(grids[1].get(1, 1).value(), 2);
        assert_eq!(grids[2].get(0, 1).value(), 3);
        assert!(grids[3].get(1, 0).is_white());
    }
}
