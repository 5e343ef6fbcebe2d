pub mod geometry;
pub mod intensity;
pub mod shape;

pub use geometry::{bounding_box, equivalent_diameter, rotated_rect, BoundingBox};
pub use intensity::mean_intensity;
pub use shape::circularity;
