use crate::error::{AppError, Result};
use std::path::Path;

/// Decoded RGB8 pixels of one image.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Load an image from a file path and decode it to RGB8.
/// Blocking; run it on a worker thread so the UI event loop stays responsive.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let io_failure = |e: std::io::Error| AppError::ImageLoad(e.to_string());
    let img = image::ImageReader::open(path)
        .map_err(io_failure)?
        .with_guessed_format()
        .map_err(io_failure)?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(DecodedImage {
        data: rgb.into_raw(),
        width,
        height,
    })
}
