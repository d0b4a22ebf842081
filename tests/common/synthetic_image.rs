/// Builds a four-tile mosaic image (2x2 tiles of 2x2 pixels, 1 pixel of dead
/// space) where each tile is a uniform raw brightness. Dead space is white.
pub fn four_tile_mosaic(tile_values: [u8; 4]) -> Vec<u8> {
    let mut img = vec![255u8; 5 * 5];
    let origins = [(0usize, 0usize), (3, 0), (0, 3), (3, 3)];
    for (value, (x0, y0)) in tile_values.into_iter().zip(origins) {
        for dy in 0..2 {
            for dx in 0..2 {
                img[(y0 + dy) * 5 + x0 + dx] = value;
            }
        }
    }
    img
}

/// Top-dark, bottom-white vertical gradient.
pub fn vertical_gradient_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(height > 1, "gradient needs at least two rows");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        let value = (y * 255 / (height - 1)) as u8;
        for x in 0..width {
            img[y * width + x] = value;
        }
    }
    img
}
