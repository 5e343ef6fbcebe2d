use image::RgbImage;
use tracing::info;

use crate::error::Result;
use crate::io::image_io::{load_image, save_rgb, validate_dimensions};
use crate::io::report::write_report_file;
use crate::render::overlay::render_overlay;
use crate::segment::preprocess::preprocess;
use crate::segment::regions::extract_regions;

use super::assemble::assemble_cells;
use super::config::AnalysisConfig;
use super::types::{Analysis, AnalysisStage, NoOpReporter, ProgressReporter};

/// Measure every cell in an already decoded image. Performs no I/O.
pub fn analyze_image(image: &RgbImage, config: &AnalysisConfig) -> Result<Analysis> {
    analyze_image_reported(image, config, &NoOpReporter)
}

/// [`analyze_image`] with stage notifications.
pub fn analyze_image_reported(
    image: &RgbImage,
    config: &AnalysisConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Analysis> {
    validate_dimensions(image)?;
    config.validate()?;

    reporter.begin_stage(AnalysisStage::Preprocessing);
    let pre = preprocess(image, &config.preprocess, config.measure.intensity_channel)?;
    reporter.finish_stage();

    reporter.begin_stage(AnalysisStage::Tracing);
    let regions = extract_regions(&pre.mask);
    reporter.finish_stage();

    reporter.begin_stage(AnalysisStage::Measuring);
    let cells = assemble_cells(&regions, pre.intensity.as_ref(), &config.measure);
    reporter.finish_stage();

    info!(
        width = image.width(),
        height = image.height(),
        level = pre.level,
        cells = cells.len(),
        "Analysis complete"
    );

    Ok(Analysis {
        cells,
        regions,
        threshold_level: pre.level,
        layout: config.layout(),
    })
}

/// Run a full pass: load the input, analyze it, write the CSV report and,
/// when configured, the annotated overlay.
pub fn run_analysis(config: &AnalysisConfig) -> Result<Analysis> {
    run_analysis_reported(config, &NoOpReporter)
}

/// [`run_analysis`] with stage notifications.
pub fn run_analysis_reported(
    config: &AnalysisConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Analysis> {
    config.validate()?;

    reporter.begin_stage(AnalysisStage::Loading);
    let image = load_image(&config.input)?;
    info!(
        path = %config.input.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    reporter.finish_stage();

    let analysis = analyze_image_reported(&image, config, reporter)?;

    reporter.begin_stage(AnalysisStage::Writing);
    write_report_file(&config.output, &analysis.cells, analysis.layout)?;
    reporter.finish_stage();

    if let Some(ref overlay_path) = config.overlay {
        reporter.begin_stage(AnalysisStage::Rendering);
        let overlay = render_overlay(&image, &analysis.regions, &analysis.cells);
        save_rgb(&overlay, overlay_path, config.overlay_scale)?;
        info!(path = %overlay_path.display(), "Overlay saved");
        reporter.finish_stage();
    }

    Ok(analysis)
}
