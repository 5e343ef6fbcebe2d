use image::{GrayImage, Luma, RgbImage};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// One color channel of an RGB image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Position of this channel inside an `Rgb<u8>` pixel.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// BT.601 luminance of one RGB pixel, rounded to 8 bits.
pub fn pixel_luminance(rgb: [u8; 3]) -> u8 {
    let y = LUMINANCE_R * rgb[0] as f32 + LUMINANCE_G * rgb[1] as f32 + LUMINANCE_B * rgb[2] as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB image to an 8-bit luminance plane of shape (height, width).
pub fn luminance(image: &RgbImage) -> Array2<u8> {
    let (w, h) = image.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        pixel_luminance(image.get_pixel(col as u32, row as u32).0)
    })
}

/// Extract a single color channel as a plane of shape (height, width).
pub fn channel_plane(image: &RgbImage, channel: Channel) -> Array2<u8> {
    let (w, h) = image.dimensions();
    let c = channel.index();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        image.get_pixel(col as u32, row as u32).0[c]
    })
}

/// Render a binary mask as a GrayImage with foreground = 255, surrounded by
/// `border` pixels of background on every side.
pub fn mask_to_gray(mask: &Array2<bool>, border: u32) -> GrayImage {
    let (h, w) = mask.dim();
    let mut out = GrayImage::new(w as u32 + 2 * border, h as u32 + 2 * border);
    for ((row, col), &m) in mask.indexed_iter() {
        if m {
            out.put_pixel(col as u32 + border, row as u32 + border, Luma([255]));
        }
    }
    out
}
