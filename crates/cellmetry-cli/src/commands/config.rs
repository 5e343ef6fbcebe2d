use std::path::PathBuf;

use anyhow::{Context, Result};
use cellmetry_core::pipeline::AnalysisConfig;
use clap::Args;

use super::VariantArg;

#[derive(Args)]
pub struct ConfigArgs {
    /// Preset to print
    #[arg(long, value_enum, default_value = "brightfield")]
    pub variant: VariantArg,

    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a preset AnalysisConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = AnalysisConfig::for_variant(args.variant.into(), "input.png");
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Preset config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
