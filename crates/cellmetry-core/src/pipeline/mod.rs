pub mod assemble;
pub mod config;
mod orchestrator;
mod types;

pub use assemble::assemble_cells;
pub use config::{AnalysisConfig, MeasureConfig, Variant};
pub use orchestrator::{analyze_image, analyze_image_reported, run_analysis, run_analysis_reported};
pub use types::{Analysis, AnalysisStage, CellObject, ProgressReporter};
