use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CHANNEL_BOOST, DEFAULT_CHANNEL_BOOST_CAP, DEFAULT_FIXED_THRESHOLD, RED_HUE_RANGE,
    RED_SAT_LOW, RED_VAL_LOW,
};
use crate::plane::Channel;

/// Method used to separate cells from the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdStrategy {
    /// Luminance plane binarized at `fixed_threshold`.
    Fixed,
    /// Otsu's method: minimizes intra-class variance on a bimodal histogram.
    #[default]
    Auto,
    /// Keep only pixels inside `color_range`, boost the isolated channel,
    /// then binarize the luminance of the result with Otsu's method.
    ColorIsolatedAuto,
}

impl std::fmt::Display for ThresholdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Auto => write!(f, "Otsu"),
            Self::ColorIsolatedAuto => write!(f, "Color-isolated Otsu"),
        }
    }
}

/// Inclusive HSV window in the 8-bit convention (H in [0, 180), S and V in [0, 255]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub hue_low: u8,
    pub hue_high: u8,
    pub sat_low: u8,
    #[serde(default = "max_u8")]
    pub sat_high: u8,
    pub val_low: u8,
    #[serde(default = "max_u8")]
    pub val_high: u8,
}

fn max_u8() -> u8 {
    u8::MAX
}

impl ColorRange {
    /// Hue/saturation/value window of red-labeled cells.
    pub fn red() -> Self {
        Self {
            hue_low: RED_HUE_RANGE.0,
            hue_high: RED_HUE_RANGE.1,
            sat_low: RED_SAT_LOW,
            sat_high: u8::MAX,
            val_low: RED_VAL_LOW,
            val_high: u8::MAX,
        }
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        let [h, s, v] = hsv;
        (self.hue_low..=self.hue_high).contains(&h)
            && (self.sat_low..=self.sat_high).contains(&s)
            && (self.val_low..=self.val_high).contains(&v)
    }

    pub fn is_empty(&self) -> bool {
        self.hue_low > self.hue_high || self.sat_low > self.sat_high || self.val_low > self.val_high
    }
}

/// Additive brightness boost for a weak color channel, clamped to `cap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBoost {
    pub channel: Channel,
    pub amount: u8,
    #[serde(default = "max_u8")]
    pub cap: u8,
}

impl Default for ChannelBoost {
    fn default() -> Self {
        Self {
            channel: Channel::Red,
            amount: DEFAULT_CHANNEL_BOOST,
            cap: DEFAULT_CHANNEL_BOOST_CAP,
        }
    }
}

/// Plane sampled for the per-object intensity ("fluorescence") proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityChannel {
    /// The luminance plane that was thresholded.
    Luminance,
    Red,
    Green,
    Blue,
}

impl IntensityChannel {
    /// The color channel to sample, or `None` for luminance.
    pub fn color(self) -> Option<Channel> {
        match self {
            Self::Luminance => None,
            Self::Red => Some(Channel::Red),
            Self::Green => Some(Channel::Green),
            Self::Blue => Some(Channel::Blue),
        }
    }
}

impl std::fmt::Display for IntensityChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "Luminance"),
        }
    }
}

/// Configuration for turning a color frame into a binary mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Thresholding strategy.
    #[serde(default)]
    pub strategy: ThresholdStrategy,
    /// Luminance cutoff for the Fixed strategy; pixels strictly above are foreground.
    #[serde(default = "default_fixed_threshold")]
    pub fixed_threshold: u8,
    /// Color of interest for ColorIsolatedAuto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_range: Option<ColorRange>,
    /// Boost applied to the isolated image before binarization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_boost: Option<ChannelBoost>,
}

fn default_fixed_threshold() -> u8 {
    DEFAULT_FIXED_THRESHOLD
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            strategy: ThresholdStrategy::default(),
            fixed_threshold: DEFAULT_FIXED_THRESHOLD,
            color_range: None,
            channel_boost: None,
        }
    }
}

impl PreprocessConfig {
    pub fn fixed(level: u8) -> Self {
        Self {
            strategy: ThresholdStrategy::Fixed,
            fixed_threshold: level,
            ..Default::default()
        }
    }

    pub fn otsu() -> Self {
        Self::default()
    }

    pub fn color_isolated(range: ColorRange, boost: Option<ChannelBoost>) -> Self {
        Self {
            strategy: ThresholdStrategy::ColorIsolatedAuto,
            color_range: Some(range),
            channel_boost: boost,
            ..Default::default()
        }
    }
}
