pub mod image_io;
pub mod report;

pub use image_io::{load_image, save_rgb, validate_dimensions};
pub use report::{write_report, write_report_file, ReportLayout};
