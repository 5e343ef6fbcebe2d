use std::borrow::Cow;

use image::RgbImage;
use ndarray::Array2;
use tracing::debug;

use crate::error::{CellmetryError, Result};
use crate::plane::{channel_plane, luminance};

use super::color::{boost_channel, isolate_color};
use super::config::{IntensityChannel, PreprocessConfig, ThresholdStrategy};
use super::threshold::{binarize, otsu_level};

/// Output of the preprocessing stage.
#[derive(Clone, Debug)]
pub struct Preprocessed {
    /// Foreground mask, shape (height, width).
    pub mask: Array2<bool>,
    /// Plane sampled by the intensity stage, when one was requested.
    pub intensity: Option<Array2<u8>>,
    /// Level the analysis plane was binarized at.
    pub level: u8,
}

/// Turn a color frame into a binary mask using the configured strategy.
///
/// Fixed and Auto binarize the luminance plane. ColorIsolatedAuto first
/// blacks out every pixel outside the color range, optionally boosts the
/// isolated channel, and binarizes the luminance of that result. Color
/// intensity channels are read from the isolated (pre-boost) image in that
/// mode and from the source image otherwise.
pub fn preprocess(
    image: &RgbImage,
    config: &PreprocessConfig,
    intensity: Option<IntensityChannel>,
) -> Result<Preprocessed> {
    let (gray, source) = match config.strategy {
        ThresholdStrategy::Fixed | ThresholdStrategy::Auto => (luminance(image), Cow::Borrowed(image)),
        ThresholdStrategy::ColorIsolatedAuto => {
            let range = config.color_range.as_ref().ok_or_else(|| {
                CellmetryError::InvalidConfig(
                    "ColorIsolatedAuto requires a color_range".to_string(),
                )
            })?;
            let isolated = isolate_color(image, range);
            let gray = match config.channel_boost {
                Some(ref boost) => luminance(&boost_channel(&isolated, boost)),
                None => luminance(&isolated),
            };
            (gray, Cow::Owned(isolated))
        }
    };

    let level = match config.strategy {
        ThresholdStrategy::Fixed => config.fixed_threshold,
        ThresholdStrategy::Auto | ThresholdStrategy::ColorIsolatedAuto => otsu_level(&gray),
    };
    let mask = binarize(&gray, level);

    debug!(
        strategy = %config.strategy,
        level,
        foreground = mask.iter().filter(|&&m| m).count(),
        "Binarized analysis plane"
    );

    let intensity = intensity.map(|channel| match channel.color() {
        Some(c) => channel_plane(&source, c),
        None => gray,
    });

    Ok(Preprocessed {
        mask,
        intensity,
        level,
    })
}
