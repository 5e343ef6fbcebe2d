use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Color type:  {:?}", img.color());

    let bytes = img.as_bytes().len() as f64;
    println!("Data size:   {:.1} MB", bytes / (1024.0 * 1024.0));

    Ok(())
}
