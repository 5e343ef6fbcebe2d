use ndarray::{s, Array2};
use tracing::debug;

use super::geometry::BoundingBox;

/// Mean of `plane` over `bbox`, clipped to the plane.
///
/// A box that misses the plane entirely samples nothing and reports 0.0.
pub fn mean_intensity(plane: &Array2<u8>, bbox: &BoundingBox) -> f64 {
    let (h, w) = plane.dim();
    let x0 = (bbox.x as i64).clamp(0, w as i64) as usize;
    let y0 = (bbox.y as i64).clamp(0, h as i64) as usize;
    let x1 = bbox.right().clamp(0, w as i64) as usize;
    let y1 = bbox.bottom().clamp(0, h as i64) as usize;

    if x0 >= x1 || y0 >= y1 {
        debug!(?bbox, "Bounding box outside intensity plane; sampled 0");
        return 0.0;
    }

    let crop = plane.slice(s![y0..y1, x0..x1]);
    let sum: u64 = crop.iter().map(|&v| v as u64).sum();
    sum as f64 / crop.len() as f64
}
