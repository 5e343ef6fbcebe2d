use cellmetry_core::pipeline::{Analysis, AnalysisConfig};
use cellmetry_core::segment::config::ThresholdStrategy;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_analysis_summary(config: &AnalysisConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Cellmetry Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Report"),
        s.path.apply_to(config.output.display())
    );
    match config.overlay {
        Some(ref overlay) => println!(
            "  {:<14}{} {}",
            s.label.apply_to("Overlay"),
            s.path.apply_to(overlay.display()),
            s.label.apply_to(format!("(x{})", config.overlay_scale))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Overlay"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!();

    // Segmentation
    let pre = &config.preprocess;
    println!("  {}", s.header.apply_to("Segmentation"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(pre.strategy)
    );
    if pre.strategy == ThresholdStrategy::Fixed {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Level"),
            s.value.apply_to(pre.fixed_threshold)
        );
    }
    if pre.strategy == ThresholdStrategy::ColorIsolatedAuto {
        if let Some(range) = pre.color_range {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Hue"),
                s.value.apply_to(format!("{}..={}", range.hue_low, range.hue_high))
            );
        }
        if let Some(boost) = pre.channel_boost {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Boost"),
                s.value
                    .apply_to(format!("{} +{} (cap {})", boost.channel, boost.amount, boost.cap))
            );
        }
    }
    println!();

    // Measurement
    let m = &config.measure;
    println!("  {}", s.header.apply_to("Measurement"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Simplify"),
        s.value.apply_to(format!("{:.1}% of perimeter", m.simplify_fraction * 100.0))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rect"),
        if m.rotated_rect {
            s.method.apply_to("enabled".to_string())
        } else {
            s.disabled.apply_to("disabled".to_string())
        }
    );
    match m.intensity_channel {
        Some(channel) => println!(
            "    {:<12}{}",
            s.label.apply_to("Intensity"),
            s.method.apply_to(channel)
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Intensity"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!();
}

/// Totals for a finished analysis, optionally followed by one line per cell.
pub fn print_cell_table(analysis: &Analysis, per_cell: bool) {
    let s = Styles::new();
    let cells = &analysis.cells;

    println!();
    println!("  {}", s.header.apply_to("Results"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Level"),
        s.value.apply_to(analysis.threshold_level)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Cells"),
        s.value.apply_to(cells.len())
    );
    if cells.is_empty() {
        return;
    }

    let n = cells.len() as f64;
    let mean_area = cells.iter().map(|c| c.area as f64).sum::<f64>() / n;
    let mean_circ = cells.iter().map(|c| c.circularity).sum::<f64>() / n;
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mean area"),
        s.value.apply_to(format!("{mean_area:.1} px"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mean circ."),
        s.value.apply_to(format!("{mean_circ:.3}"))
    );

    if !per_cell {
        return;
    }
    println!();
    println!(
        "    {}",
        s.label.apply_to(format!(
            "{:>5} {:>8} {:>9} {:>7} {:>8}",
            "#", "area", "diameter", "circ.", "fluor."
        ))
    );
    for cell in cells {
        let fluor = cell
            .fluorescence
            .map(|f| format!("{f:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    {:>5} {:>8} {:>9.2} {:>7.3} {:>8}",
            cell.index, cell.area, cell.diameter, cell.circularity, fluor
        );
    }
}
