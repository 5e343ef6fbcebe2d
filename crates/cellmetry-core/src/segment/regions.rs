use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use ndarray::Array2;

use crate::measure::geometry::polygon_area;
use crate::plane::mask_to_gray;

/// Background frame added around the mask before tracing; the border
/// follower never starts an outer border in column 0.
const TRACE_BORDER: u32 = 1;

/// Outer boundary of one connected foreground component.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Boundary pixels in tracing order; the polygon closes implicitly.
    pub points: Vec<Point<i32>>,
    /// Area enclosed by the boundary polygon (shoelace formula).
    pub area: f64,
}

impl Region {
    pub fn from_points(points: Vec<Point<i32>>) -> Self {
        let area = polygon_area(&points);
        Self { points, area }
    }

    /// Enclosed area truncated to whole pixels.
    pub fn pixel_area(&self) -> u32 {
        self.area as u32
    }

    /// Degenerate boundaries (single pixels, one-pixel-wide lines) enclose
    /// no whole pixel and are not cell candidates.
    pub fn is_cell_candidate(&self) -> bool {
        self.pixel_area() > 0
    }
}

/// Trace the external boundary of every connected foreground component.
///
/// Uses Suzuki-Abe border following, so regions come out in raster order of
/// each component's first pixel and the result is identical for identical
/// masks. Holes and components nested inside holes are not reported.
///
/// Everything outside the mask counts as background: the mask is traced
/// inside a one-pixel frame, so components touching the image edge are
/// reported like any other.
pub fn extract_regions(mask: &Array2<bool>) -> Vec<Region> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let framed = mask_to_gray(mask, TRACE_BORDER);
    let offset = TRACE_BORDER as i32;
    find_contours::<i32>(&framed)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let points = c
                .points
                .into_iter()
                .map(|p| Point::new(p.x - offset, p.y - offset))
                .collect();
            Region::from_points(points)
        })
        .filter(Region::is_cell_candidate)
        .collect()
}
