//! Grayscale buffers, file I/O and the image-preparation stage.

pub mod io;
pub mod prep;
pub mod u8;

pub use self::io::{load_grayscale_image, save_grayscale_u8, write_json_file, write_text_lines, GrayImageU8};
pub use self::prep::{extract_tiles, resize_and_crop};
pub use self::u8::ImageU8;
