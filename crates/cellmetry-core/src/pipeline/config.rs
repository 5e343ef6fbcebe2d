use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FIXED_THRESHOLD, DEFAULT_OVERLAY_SCALE, DEFAULT_SIMPLIFY_FRACTION};
use crate::error::{CellmetryError, Result};
use crate::io::report::ReportLayout;
use crate::segment::config::{
    ChannelBoost, ColorRange, IntensityChannel, PreprocessConfig, ThresholdStrategy,
};

/// Acquisition modality; each maps to a preset [`AnalysisConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Fixed luminance cutoff, rotated rectangles, no intensity.
    #[default]
    Brightfield,
    /// Otsu on luminance, luminance intensity, rotated rectangles.
    Darkfield,
    /// Red-isolated and boosted Otsu, red-channel intensity.
    DarkfieldRed,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brightfield => write!(f, "Brightfield"),
            Self::Darkfield => write!(f, "Darkfield"),
            Self::DarkfieldRed => write!(f, "Darkfield (red)"),
        }
    }
}

/// Per-region measurement options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Douglas-Peucker tolerance as a fraction of the boundary arc length.
    #[serde(default = "default_simplify_fraction")]
    pub simplify_fraction: f64,
    /// Compute the minimum-area rotated rectangle of each region.
    #[serde(default = "default_rotated_rect")]
    pub rotated_rect: bool,
    /// Plane sampled for the fluorescence proxy; `None` skips sampling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_channel: Option<IntensityChannel>,
}

fn default_simplify_fraction() -> f64 {
    DEFAULT_SIMPLIFY_FRACTION
}

fn default_rotated_rect() -> bool {
    true
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            simplify_fraction: DEFAULT_SIMPLIFY_FRACTION,
            rotated_rect: true,
            intensity_channel: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    /// CSV report path.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Annotated image path; no overlay is rendered when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<PathBuf>,
    /// Downscale factor applied when saving the overlay.
    #[serde(default = "default_overlay_scale")]
    pub overlay_scale: f32,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub measure: MeasureConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("cell_data.csv")
}

fn default_overlay_scale() -> f32 {
    DEFAULT_OVERLAY_SCALE
}

impl AnalysisConfig {
    /// Preset configuration for an acquisition modality.
    pub fn for_variant(variant: Variant, input: impl Into<PathBuf>) -> Self {
        let (preprocess, measure) = match variant {
            Variant::Brightfield => (
                PreprocessConfig::fixed(DEFAULT_FIXED_THRESHOLD),
                MeasureConfig {
                    rotated_rect: true,
                    intensity_channel: None,
                    ..Default::default()
                },
            ),
            Variant::Darkfield => (
                PreprocessConfig::otsu(),
                MeasureConfig {
                    rotated_rect: true,
                    intensity_channel: Some(IntensityChannel::Luminance),
                    ..Default::default()
                },
            ),
            Variant::DarkfieldRed => (
                PreprocessConfig::color_isolated(ColorRange::red(), Some(ChannelBoost::default())),
                MeasureConfig {
                    rotated_rect: false,
                    intensity_channel: Some(IntensityChannel::Red),
                    ..Default::default()
                },
            ),
        };

        Self {
            input: input.into(),
            output: default_output(),
            overlay: None,
            overlay_scale: DEFAULT_OVERLAY_SCALE,
            preprocess,
            measure,
        }
    }

    /// Report columns implied by the measurement options.
    pub fn layout(&self) -> ReportLayout {
        ReportLayout {
            fluorescence: self.measure.intensity_channel.is_some(),
            rect: self.measure.rotated_rect,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fraction = self.measure.simplify_fraction;
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(CellmetryError::InvalidConfig(format!(
                "simplify_fraction must be a positive number, got {fraction}"
            )));
        }
        if !self.overlay_scale.is_finite() || self.overlay_scale <= 0.0 {
            return Err(CellmetryError::InvalidConfig(format!(
                "overlay_scale must be positive, got {}",
                self.overlay_scale
            )));
        }
        match (&self.preprocess.strategy, &self.preprocess.color_range) {
            (ThresholdStrategy::ColorIsolatedAuto, None) => {
                return Err(CellmetryError::InvalidConfig(
                    "ColorIsolatedAuto requires a color_range".to_string(),
                ));
            }
            (_, Some(range)) if range.is_empty() => {
                return Err(CellmetryError::InvalidConfig(format!(
                    "color_range selects nothing: {range:?}"
                )));
            }
            _ => {}
        }
        Ok(())
    }
}
