use imageproc::point::Point;

use crate::io::report::ReportLayout;
use crate::measure::geometry::BoundingBox;
use crate::segment::regions::Region;

/// Measurement record for one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellObject {
    /// 1-based rank in region discovery order.
    pub index: usize,
    /// Whole pixels enclosed by the boundary.
    pub area: u32,
    /// Equivalent-circle diameter derived from `area`.
    pub diameter: f64,
    /// Isoperimetric ratio of the simplified boundary.
    pub circularity: f64,
    /// Mean intensity over the bounding box, when sampled.
    pub fluorescence: Option<f64>,
    pub bounding_box: BoundingBox,
    /// Minimum-area rectangle corners, when computed.
    pub rotated_rect: Option<[Point<i32>; 4]>,
}

/// Result of one analysis pass over one image.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub cells: Vec<CellObject>,
    /// Traced regions, in discovery order.
    pub regions: Vec<Region>,
    /// Level the analysis plane was binarized at.
    pub threshold_level: u8,
    pub layout: ReportLayout,
}

/// Analysis stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisStage {
    Loading,
    Preprocessing,
    Tracing,
    Measuring,
    Writing,
    Rendering,
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::Preprocessing => write!(f, "Binarizing"),
            Self::Tracing => write!(f, "Tracing regions"),
            Self::Measuring => write!(f, "Measuring cells"),
            Self::Writing => write!(f, "Writing report"),
            Self::Rendering => write!(f, "Rendering overlay"),
        }
    }
}

/// Thread-safe progress reporting for an analysis pass.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started.
    fn begin_stage(&self, _stage: AnalysisStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when the unreported entry points delegate.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
