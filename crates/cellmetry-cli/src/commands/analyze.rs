use std::path::PathBuf;

use anyhow::{Context, Result};
use cellmetry_core::pipeline::{
    run_analysis_reported, AnalysisConfig, AnalysisStage, ProgressReporter,
};
use cellmetry_core::segment::config::PreprocessConfig;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use super::VariantArg;
use crate::summary::{print_analysis_summary, print_cell_table};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image (any format the image crate decodes)
    pub file: PathBuf,

    /// Acquisition preset
    #[arg(long, value_enum, default_value = "brightfield")]
    pub variant: VariantArg,

    /// Analysis config file (TOML); replaces the preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed luminance threshold (0-255); pixels strictly above are cells
    #[arg(long, conflicts_with = "otsu")]
    pub threshold: Option<u8>,

    /// Pick the threshold automatically with Otsu's method
    #[arg(long)]
    pub otsu: bool,

    /// Boundary simplification tolerance as a fraction of the perimeter
    #[arg(long)]
    pub simplify: Option<f64>,

    /// CSV report path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save an annotated overlay image
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Downscale factor for the saved overlay
    #[arg(long)]
    pub overlay_scale: Option<f32>,

    /// Print every measured cell
    #[arg(long)]
    pub table: bool,
}

/// Stage-per-tick progress bar.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: AnalysisStage) {
        self.pb.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.pb.inc(1);
    }
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = build_config(args)?;
    config.validate()?;

    print_analysis_summary(&config);

    let stages = if config.overlay.is_some() { 6 } else { 5 };
    let pb = ProgressBar::new(stages);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { pb };

    let analysis = run_analysis_reported(&config, &reporter)
        .with_context(|| format!("Analysis of {} failed", config.input.display()))?;
    reporter.pb.finish_with_message("Done");

    print_cell_table(&analysis, args.table);

    println!("\nReport saved to {}", config.output.display());
    if let Some(ref overlay) = config.overlay {
        println!("Overlay saved to {}", overlay.display());
    }

    Ok(())
}

fn build_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: AnalysisConfig =
            toml::from_str(&contents).context("Invalid analysis config")?;
        config.input = args.file.clone();
        config
    } else {
        AnalysisConfig::for_variant(args.variant.into(), &args.file)
    };

    if let Some(level) = args.threshold {
        config.preprocess = PreprocessConfig::fixed(level);
    } else if args.otsu {
        config.preprocess = PreprocessConfig::otsu();
    }
    if let Some(fraction) = args.simplify {
        config.measure.simplify_fraction = fraction;
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if let Some(ref overlay) = args.overlay {
        config.overlay = Some(overlay.clone());
    }
    if let Some(scale) = args.overlay_scale {
        config.overlay_scale = scale;
    }

    Ok(config)
}
