#[allow(dead_code)]
mod common;

use std::f64::consts::PI;

use approx::assert_relative_eq;
use imageproc::point::Point;
use ndarray::Array2;

use cellmetry_core::consts::{DEFAULT_SIMPLIFY_FRACTION, DEGENERATE_CIRCULARITY};
use cellmetry_core::measure::geometry::{
    bounding_box, equivalent_diameter, polygon_area, rotated_rect, BoundingBox,
};
use cellmetry_core::measure::intensity::mean_intensity;
use cellmetry_core::measure::shape::{circularity, isoperimetric_ratio};
use cellmetry_core::segment::regions::{extract_regions, Region};

use common::{disc_mask, Disc};

fn single_region(mask: &Array2<bool>) -> Region {
    let mut regions = extract_regions(mask);
    assert_eq!(regions.len(), 1, "expected exactly one region");
    regions.remove(0)
}

fn disc_region(radius: f32) -> Region {
    let size = (radius as usize + 10) * 2;
    let c = size as f32 / 2.0;
    single_region(&disc_mask(size, size, &[Disc::new(c, c, radius)]))
}

fn dist(a: Point<i32>, b: Point<i32>) -> f64 {
    (((a.x - b.x).pow(2) + (a.y - b.y).pow(2)) as f64).sqrt()
}

// ---------------------------------------------------------------------------
// Circularity
// ---------------------------------------------------------------------------

#[test]
fn test_digitized_circles_are_nearly_round() {
    for radius in [10.0, 15.0, 30.0, 50.0] {
        let region = disc_region(radius);
        let c = circularity(&region.points, DEFAULT_SIMPLIFY_FRACTION);
        assert!((0.85..=1.05).contains(&c), "radius {radius}: circularity {c}");
    }
}

#[test]
fn test_square_circularity_is_pi_over_four() {
    let mask = Array2::from_shape_fn((60, 60), |(r, c)| (10..50).contains(&r) && (10..50).contains(&c));
    let region = single_region(&mask);
    let c = circularity(&region.points, DEFAULT_SIMPLIFY_FRACTION);
    assert_relative_eq!(c, PI / 4.0, epsilon = 0.01);
}

#[test]
fn test_elongated_shape_scores_below_square() {
    let mask = Array2::from_shape_fn((60, 120), |(r, c)| (20..30).contains(&r) && (10..110).contains(&c));
    let region = single_region(&mask);
    let c = circularity(&region.points, DEFAULT_SIMPLIFY_FRACTION);
    assert!(c > 0.0 && c < 0.5, "circularity {c}");
}

#[test]
fn test_two_vertex_polygon_reports_sentinel() {
    let polygon = [Point::new(0, 0), Point::new(40, 0)];
    assert_eq!(isoperimetric_ratio(&polygon), DEGENERATE_CIRCULARITY);
}

#[test]
fn test_repeated_vertex_polygon_reports_sentinel() {
    let polygon = [Point::new(3, 3), Point::new(3, 3), Point::new(3, 3)];
    assert_eq!(isoperimetric_ratio(&polygon), DEGENERATE_CIRCULARITY);
}

#[test]
fn test_over_simplified_boundary_reports_sentinel() {
    // A tolerance of half the perimeter collapses any closed boundary.
    let region = disc_region(20.0);
    assert_eq!(circularity(&region.points, 0.5), DEGENERATE_CIRCULARITY);
}

#[test]
fn test_short_boundary_reports_sentinel() {
    assert_eq!(circularity(&[Point::new(1, 1)], DEFAULT_SIMPLIFY_FRACTION), DEGENERATE_CIRCULARITY);
    assert_eq!(circularity(&[], DEFAULT_SIMPLIFY_FRACTION), DEGENERATE_CIRCULARITY);
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn test_equivalent_diameter_of_circle_area() {
    assert_relative_eq!(equivalent_diameter(PI * 900.0), 60.0, epsilon = 1e-9);
    assert_eq!(equivalent_diameter(0.0), 0.0);
}

#[test]
fn test_equivalent_diameter_ignores_elongation() {
    // A 10x10 square and a 1x100 bar share an area and therefore a diameter.
    let square = equivalent_diameter(10.0 * 10.0);
    let bar = equivalent_diameter(1.0 * 100.0);
    assert_eq!(square, bar);
    assert_relative_eq!(square, (400.0 / PI).sqrt(), epsilon = 1e-12);
}

#[test]
fn test_bounding_box_of_disc() {
    let region = single_region(&disc_mask(200, 200, &[Disc::new(100.0, 100.0, 30.0)]));
    let bbox = bounding_box(&region.points).unwrap();
    assert_eq!(
        bbox,
        BoundingBox {
            x: 70,
            y: 70,
            width: 61,
            height: 61
        }
    );
}

#[test]
fn test_bounding_box_of_nothing() {
    assert!(bounding_box(&[]).is_none());
    let single = bounding_box(&[Point::new(4, 9)]).unwrap();
    assert_eq!((single.width, single.height), (1, 1));
}

#[test]
fn test_rotated_rect_of_axis_aligned_block_matches_corners() {
    let mask = Array2::from_shape_fn((80, 100), |(r, c)| (30..50).contains(&r) && (20..80).contains(&c));
    let region = single_region(&mask);
    let corners = rotated_rect(&region.points).unwrap();

    let expected = [
        Point::new(20, 30),
        Point::new(79, 30),
        Point::new(79, 49),
        Point::new(20, 49),
    ];
    for e in expected {
        assert!(
            corners.iter().any(|&c| dist(c, e) <= 1.0),
            "corner {e:?} missing from {corners:?}"
        );
    }
}

#[test]
fn test_rotated_rect_hugs_diagonal_band() {
    let mask = Array2::from_shape_fn((100, 100), |(r, c)| {
        let (x, y) = (c as i32, r as i32);
        (x - y).abs() <= 3 && (20..=160).contains(&(x + y))
    });
    let region = single_region(&mask);
    let corners = rotated_rect(&region.points).unwrap();
    let rect_area = dist(corners[0], corners[1]) * dist(corners[1], corners[2]);

    let bbox = bounding_box(&region.points).unwrap();
    let bbox_area = (bbox.width * bbox.height) as f64;
    assert!(rect_area < 0.3 * bbox_area, "rect {rect_area} vs bbox {bbox_area}");
    assert!(rect_area > 0.0);
}

#[test]
fn test_rotated_rect_needs_three_points() {
    assert!(rotated_rect(&[Point::new(0, 0), Point::new(5, 5)]).is_none());
}

#[test]
fn test_polygon_area_of_triangle() {
    let tri = [Point::new(0, 0), Point::new(10, 0), Point::new(0, 6)];
    assert_eq!(polygon_area(&tri), 30.0);
}

// ---------------------------------------------------------------------------
// Intensity sampling
// ---------------------------------------------------------------------------

fn patch_plane() -> Array2<u8> {
    // 100 inside rows 3..7, cols 2..6; 0 elsewhere.
    Array2::from_shape_fn((10, 10), |(r, c)| {
        if (3..7).contains(&r) && (2..6).contains(&c) {
            100
        } else {
            0
        }
    })
}

#[test]
fn test_mean_intensity_over_exact_box() {
    let bbox = BoundingBox {
        x: 2,
        y: 3,
        width: 4,
        height: 4,
    };
    assert_eq!(mean_intensity(&patch_plane(), &bbox), 100.0);
}

#[test]
fn test_mean_intensity_includes_background_in_box() {
    let bbox = BoundingBox {
        x: 0,
        y: 3,
        width: 8,
        height: 4,
    };
    // 16 bright pixels out of 32.
    assert_eq!(mean_intensity(&patch_plane(), &bbox), 50.0);
}

#[test]
fn test_mean_intensity_clips_box_to_plane() {
    let plane = Array2::from_elem((10, 10), 80u8);
    let bbox = BoundingBox {
        x: -5,
        y: 7,
        width: 8,
        height: 10,
    };
    assert_eq!(mean_intensity(&plane, &bbox), 80.0);
}

#[test]
fn test_mean_intensity_outside_plane_is_zero() {
    let plane = Array2::from_elem((10, 10), 80u8);
    let bbox = BoundingBox {
        x: 20,
        y: 20,
        width: 5,
        height: 5,
    };
    assert_eq!(mean_intensity(&plane, &bbox), 0.0);
}
