use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::pipeline::CellObject;
use crate::segment::regions::Region;

const OUTLINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BOX_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const ROTATED_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Annotated copy of `image`: region outlines in red, bounding boxes in blue
/// and rotated rectangles (when measured) in green.
pub fn render_overlay(image: &RgbImage, regions: &[Region], cells: &[CellObject]) -> RgbImage {
    let mut canvas = image.clone();

    for region in regions {
        draw_closed_polyline(&mut canvas, &region.points, OUTLINE_COLOR);
    }

    for cell in cells {
        let b = cell.bounding_box;
        if b.width > 0 && b.height > 0 {
            draw_hollow_rect_mut(&mut canvas, Rect::at(b.x, b.y).of_size(b.width, b.height), BOX_COLOR);
        }
        if let Some(corners) = cell.rotated_rect {
            draw_closed_polyline(&mut canvas, &corners, ROTATED_COLOR);
        }
    }

    canvas
}

fn draw_closed_polyline(canvas: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        draw_line_segment_mut(canvas, (p.x as f32, p.y as f32), (q.x as f32, q.y as f32), color);
    }
}
