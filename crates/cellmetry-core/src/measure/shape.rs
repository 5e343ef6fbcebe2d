use std::collections::HashSet;
use std::f64::consts::PI;

use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;
use tracing::debug;

use crate::consts::DEGENERATE_CIRCULARITY;

use super::geometry::polygon_area;

/// Isoperimetric circularity of a boundary after Douglas-Peucker simplification.
///
/// The simplification tolerance is `simplify_fraction` times the boundary's
/// closed arc length, so larger objects are simplified proportionally. A
/// digitized disc scores close to 1.0; elongated or ragged shapes score lower.
///
/// Returns [`DEGENERATE_CIRCULARITY`] when the boundary or its simplification
/// has no usable perimeter.
pub fn circularity(boundary: &[Point<i32>], simplify_fraction: f64) -> f64 {
    if boundary.len() < 3 {
        debug!(points = boundary.len(), "Boundary too short for circularity");
        return DEGENERATE_CIRCULARITY;
    }

    let epsilon = simplify_fraction * arc_length(boundary, true);
    let simplified = if epsilon > 0.0 {
        approximate_polygon_dp(boundary, epsilon, true)
    } else {
        boundary.to_vec()
    };

    isoperimetric_ratio(&simplified)
}

/// `4 * PI * area / perimeter^2` of a closed polygon.
///
/// Fewer than three distinct vertices, or a zero perimeter, yields
/// [`DEGENERATE_CIRCULARITY`].
pub fn isoperimetric_ratio(polygon: &[Point<i32>]) -> f64 {
    let distinct: HashSet<(i32, i32)> = polygon.iter().map(|p| (p.x, p.y)).collect();
    if distinct.len() < 3 {
        debug!(
            vertices = distinct.len(),
            "Simplified boundary collapsed; circularity not computable"
        );
        return DEGENERATE_CIRCULARITY;
    }

    let perimeter = arc_length(polygon, true);
    if perimeter <= 0.0 {
        debug!("Zero perimeter; circularity not computable");
        return DEGENERATE_CIRCULARITY;
    }

    4.0 * PI * polygon_area(polygon) / (perimeter * perimeter)
}
