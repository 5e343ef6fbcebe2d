use imageproc::geometry::min_area_rect;
use imageproc::point::Point;
use num_traits::NumCast;

/// Axis-aligned rectangle in pixel coordinates, inclusive of its edge pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

/// Area enclosed by a closed polygon (shoelace formula), always non-negative.
pub fn polygon_area<T>(points: &[Point<T>]) -> f64
where
    T: NumCast + Copy,
{
    if points.len() < 3 {
        return 0.0;
    }
    let coords: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            (
                <f64 as NumCast>::from(p.x).unwrap_or(0.0),
                <f64 as NumCast>::from(p.y).unwrap_or(0.0),
            )
        })
        .collect();

    let mut twice_area = 0.0;
    for (i, &(x0, y0)) in coords.iter().enumerate() {
        let (x1, y1) = coords[(i + 1) % coords.len()];
        twice_area += x0 * y1 - x1 * y0;
    }
    twice_area.abs() / 2.0
}

/// Smallest axis-aligned box containing every point.
pub fn bounding_box(points: &[Point<i32>]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: (max_x - min_x) as u32 + 1,
        height: (max_y - min_y) as u32 + 1,
    })
}

/// Minimum-area enclosing rectangle at any orientation (rotating calipers
/// over the convex hull). Consecutive corners share an edge.
///
/// Returns `None` for fewer than three points, which cannot enclose area.
pub fn rotated_rect(points: &[Point<i32>]) -> Option<[Point<i32>; 4]> {
    if points.len() < 3 {
        return None;
    }
    Some(min_area_rect(points))
}

/// Diameter of the circle whose area equals `area`.
///
/// This ignores elongation entirely: a 1x100 bar and a disc of the same area
/// report the same diameter.
pub fn equivalent_diameter(area: f64) -> f64 {
    (4.0 * area / std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoelace_is_orientation_independent() {
        let cw = [Point::new(0, 0), Point::new(0, 4), Point::new(3, 4), Point::new(3, 0)];
        let mut ccw = cw;
        ccw.reverse();
        assert_eq!(polygon_area(&cw), 12.0);
        assert_eq!(polygon_area(&ccw), 12.0);
    }

    #[test]
    fn two_points_enclose_nothing() {
        assert_eq!(polygon_area(&[Point::new(0, 0), Point::new(5, 5)]), 0.0);
    }
}
