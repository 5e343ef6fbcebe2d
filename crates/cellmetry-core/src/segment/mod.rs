pub mod color;
pub mod config;
pub mod preprocess;
pub mod regions;
pub mod threshold;

pub use config::{ChannelBoost, ColorRange, IntensityChannel, PreprocessConfig, ThresholdStrategy};
pub use preprocess::{preprocess, Preprocessed};
pub use regions::{extract_regions, Region};
