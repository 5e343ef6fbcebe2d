use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_REGION_THRESHOLD;
use crate::measure::geometry::{bounding_box, equivalent_diameter, rotated_rect};
use crate::measure::intensity::mean_intensity;
use crate::measure::shape::circularity;
use crate::segment::regions::Region;

use super::config::MeasureConfig;
use super::types::CellObject;

/// Build one [`CellObject`] per cell-candidate region, indexed from 1 in
/// the order the regions were discovered.
///
/// Regions are measured independently; above a size threshold the work is
/// spread over the Rayon pool and collected back in discovery order.
pub fn assemble_cells(
    regions: &[Region],
    intensity: Option<&Array2<u8>>,
    config: &MeasureConfig,
) -> Vec<CellObject> {
    let candidates: Vec<&Region> = regions.iter().filter(|r| r.is_cell_candidate()).collect();

    let measure = |(i, region): (usize, &&Region)| measure_region(i + 1, region, intensity, config);

    if candidates.len() >= PARALLEL_REGION_THRESHOLD {
        candidates.par_iter().enumerate().map(measure).collect()
    } else {
        candidates.iter().enumerate().map(measure).collect()
    }
}

fn measure_region(
    index: usize,
    region: &Region,
    intensity: Option<&Array2<u8>>,
    config: &MeasureConfig,
) -> CellObject {
    let area = region.pixel_area();
    let bbox = bounding_box(&region.points).unwrap_or_default();

    CellObject {
        index,
        area,
        diameter: equivalent_diameter(area as f64),
        circularity: circularity(&region.points, config.simplify_fraction),
        fluorescence: intensity.map(|plane| mean_intensity(plane, &bbox)),
        bounding_box: bbox,
        rotated_rect: if config.rotated_rect {
            rotated_rect(&region.points)
        } else {
            None
        },
    }
}
