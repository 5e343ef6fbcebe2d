/// Minimum region count to measure regions on the Rayon pool.
pub const PARALLEL_REGION_THRESHOLD: usize = 16;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of histogram bins for Otsu's thresholding (one per 8-bit level).
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Fixed luminance cutoff used for brightfield acquisitions.
pub const DEFAULT_FIXED_THRESHOLD: u8 = 187;

/// Douglas-Peucker tolerance as a fraction of the boundary's arc length.
pub const DEFAULT_SIMPLIFY_FRACTION: f64 = 0.02;

/// Circularity reported when the simplified boundary has no usable perimeter.
pub const DEGENERATE_CIRCULARITY: f64 = 0.0;

/// Additive brightness boost applied to the isolated color channel.
pub const DEFAULT_CHANNEL_BOOST: u8 = 50;

/// Upper clamp for the boosted channel.
pub const DEFAULT_CHANNEL_BOOST_CAP: u8 = 255;

/// Hue range of red-labeled cells (8-bit HSV convention, H in [0, 180)).
pub const RED_HUE_RANGE: (u8, u8) = (0, 10);

/// Minimum saturation of red-labeled cells.
pub const RED_SAT_LOW: u8 = 150;

/// Minimum value (brightness) of red-labeled cells.
pub const RED_VAL_LOW: u8 = 60;

/// Default downscale factor for saved overlays.
pub const DEFAULT_OVERLAY_SCALE: f32 = 0.5;
