use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::pipeline::CellObject;

/// Which optional column groups a report carries.
///
/// Column names and order are fixed for downstream spreadsheet tooling:
/// `Cell Index, Area, Diameter, Circularity`, then `Fluorescence` when
/// intensity is sampled, then `Rect X, Rect Y, Rect Width, Rect Height`
/// when rectangles are computed.
///
/// The rect columns always hold the axis-aligned box of the traced boundary
/// (`CellObject::bounding_box`). Brightfield reports therefore differ from
/// legacy tooling that boxed the rotated rectangle instead; the rotated
/// corners stay available on `CellObject::rotated_rect`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportLayout {
    pub fluorescence: bool,
    pub rect: bool,
}

impl ReportLayout {
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Cell Index", "Area", "Diameter", "Circularity"];
        if self.fluorescence {
            headers.push("Fluorescence");
        }
        if self.rect {
            headers.extend(["Rect X", "Rect Y", "Rect Width", "Rect Height"]);
        }
        headers
    }

    pub fn record(&self, cell: &CellObject) -> Vec<String> {
        let mut row = vec![
            cell.index.to_string(),
            cell.area.to_string(),
            cell.diameter.to_string(),
            cell.circularity.to_string(),
        ];
        if self.fluorescence {
            row.push(cell.fluorescence.unwrap_or(0.0).to_string());
        }
        if self.rect {
            let b = &cell.bounding_box;
            row.extend([
                b.x.to_string(),
                b.y.to_string(),
                b.width.to_string(),
                b.height.to_string(),
            ]);
        }
        row
    }
}

/// Write one header row plus one row per cell, in the given order.
pub fn write_report<W: Write>(writer: W, cells: &[CellObject], layout: ReportLayout) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(layout.headers())?;
    for cell in cells {
        wtr.write_record(layout.record(cell))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report_file(path: &Path, cells: &[CellObject], layout: ReportLayout) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_report(file, cells, layout)?;
    info!(path = %path.display(), rows = cells.len(), "Cell report written");
    Ok(())
}
