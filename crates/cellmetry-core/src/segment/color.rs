use image::RgbImage;
use rayon::prelude::*;

use super::config::{ChannelBoost, ColorRange};

/// Convert one RGB pixel to 8-bit HSV: H in [0, 180), S and V in [0, 255].
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sat = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    // Half-degree hue so the full circle fits into a byte; 360 wraps to 0.
    let h = (hue / 2.0).round() as u32 % 180;
    [h as u8, sat.round() as u8, max as u8]
}

/// Apply `f` to every pixel of a copy of `image`.
fn map_pixels<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn(&mut [u8]) + Sync,
{
    let mut out = image.clone();
    out.par_chunks_exact_mut(3).for_each(|px| f(px));
    out
}

/// Keep only pixels whose HSV lies inside `range`; everything else becomes black.
pub fn isolate_color(image: &RgbImage, range: &ColorRange) -> RgbImage {
    map_pixels(image, |px| {
        if !range.contains(rgb_to_hsv([px[0], px[1], px[2]])) {
            px.fill(0);
        }
    })
}

/// Add `boost.amount` to the boosted channel wherever it is non-zero,
/// clamping at `boost.cap`.
pub fn boost_channel(image: &RgbImage, boost: &ChannelBoost) -> RgbImage {
    let c = boost.channel.index();
    map_pixels(image, |px| {
        if px[c] > 0 {
            px[c] = px[c].saturating_add(boost.amount).min(boost.cap);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
    }

    #[test]
    fn near_red_magenta_wraps_high() {
        // Slightly blue-shifted red sits just below 180, outside the low red window.
        let [h, _, _] = rgb_to_hsv([255, 0, 20]);
        assert!(h > 170, "hue {h}");
    }
}
