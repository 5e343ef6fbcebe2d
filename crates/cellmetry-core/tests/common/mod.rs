use image::{Rgb, RgbImage};
use ndarray::Array2;

/// A filled disc: center (x, y) and radius in pixels.
pub struct Disc {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Disc {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = x as f32 - self.cx;
        let dy = y as f32 - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Black RGB canvas.
pub fn black_image(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

/// Draw filled discs of a single color onto a black canvas.
pub fn disc_image(width: u32, height: u32, discs: &[Disc], color: [u8; 3]) -> RgbImage {
    let mut img = black_image(width, height);
    for y in 0..height {
        for x in 0..width {
            if discs.iter().any(|d| d.contains(x, y)) {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
    img
}

/// Fill the inclusive pixel rectangle [x0, x1] x [y0, y1] with `color`.
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

/// Boolean mask with the same disc layout.
pub fn disc_mask(width: usize, height: usize, discs: &[Disc]) -> Array2<bool> {
    Array2::from_shape_fn((height, width), |(row, col)| {
        discs.iter().any(|d| d.contains(col as u32, row as u32))
    })
}

/// Count of pixels covered by a disc on the integer grid.
pub fn disc_pixel_count(disc: &Disc, width: u32, height: u32) -> usize {
    let mut n = 0;
    for y in 0..height {
        for x in 0..width {
            if disc.contains(x, y) {
                n += 1;
            }
        }
    }
    n
}
