use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};

use crate::error::{CellmetryError, Result};

/// Load an image file as 8-bit RGB, rejecting empty images.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    validate_dimensions(&img)?;
    Ok(img)
}

/// Reject images with zero width or height.
pub fn validate_dimensions(image: &RgbImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CellmetryError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Save an RGB image, downscaled by `scale` when it differs from 1.
///
/// The format follows the file extension; unknown extensions are written as PNG.
pub fn save_rgb(image: &RgbImage, path: &Path, scale: f32) -> Result<()> {
    let resized;
    let out = if (scale - 1.0).abs() > f32::EPSILON {
        let w = ((image.width() as f32 * scale).round() as u32).max(1);
        let h = ((image.height() as f32 * scale).round() as u32).max(1);
        resized = imageops::resize(image, w, h, FilterType::Triangle);
        &resized
    } else {
        image
    };

    match ImageFormat::from_path(path) {
        Ok(format) => out.save_with_format(path, format)?,
        Err(_) => out.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}
