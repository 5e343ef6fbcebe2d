use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellmetryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid analysis config: {0}")]
    InvalidConfig(String),

    #[error("CSV report error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CellmetryError>;
