use ndarray::Array2;

use crate::consts::OTSU_HISTOGRAM_BINS;

/// Binarize a plane: pixels strictly above `level` become foreground.
pub fn binarize(plane: &Array2<u8>, level: u8) -> Array2<bool> {
    plane.mapv(|v| v > level)
}

/// 256-bin histogram of an 8-bit plane.
pub fn histogram(plane: &Array2<u8>) -> [u64; OTSU_HISTOGRAM_BINS] {
    let mut hist = [0u64; OTSU_HISTOGRAM_BINS];
    for &v in plane.iter() {
        hist[v as usize] += 1;
    }
    hist
}

/// Otsu's thresholding: find the level that minimizes intra-class variance.
///
/// Pixels `<= level` form the background class. Flat or empty histograms
/// have no between-class variance anywhere and yield level 0.
pub fn otsu_level(plane: &Array2<u8>) -> u8 {
    let hist = histogram(plane);

    let total = plane.len() as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in hist.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_level = 0usize;

    for (i, &count) in hist.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_level = i;
        }
    }

    best_level as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_pixel() {
        let plane = Array2::from_shape_fn((4, 4), |(r, _)| r as u8);
        let hist = histogram(&plane);
        assert_eq!(hist.iter().sum::<u64>(), 16);
        assert_eq!(hist[3], 4);
    }

    #[test]
    fn empty_plane_does_not_panic() {
        let plane = Array2::<u8>::zeros((0, 0));
        assert_eq!(otsu_level(&plane), 0);
    }
}
