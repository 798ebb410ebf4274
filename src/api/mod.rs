//! High-level, ergonomic library API: normalize one sheet to disk or to an
//! in-memory buffer, or run the whole fail-fast batch. Prefer these
//! entrypoints over the low-level processing modules when embedding sheetnorm.
use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::{normalize_sheet_pipeline, normalize_sheet_to_dir};
use crate::error::Result;
use crate::types::{BatchReport, SheetReport};

pub use crate::core::processing::pipeline::output_path_for;

/// Decode, convert and resize one sheet in memory (no disk output)
pub fn normalize_sheet_to_buffer(input: &Path, params: &NormalizeParams) -> Result<RgbaImage> {
    params.validate()?;
    normalize_sheet_pipeline(input, params)
}

/// Normalize one sheet into `params.output_dir`
pub fn normalize_sheet(input: &Path, params: &NormalizeParams) -> Result<SheetReport> {
    params.validate()?;
    normalize_sheet_to_dir(input, params)
}

/// Normalize every input in order, stopping at the first failure.
///
/// `on_sheet` runs after each sheet is written, before the next one is read.
/// Sheets written before a failure stay on disk; later inputs are not touched.
pub fn normalize_sheets<F>(params: &NormalizeParams, mut on_sheet: F) -> Result<BatchReport>
where
    F: FnMut(&SheetReport),
{
    params.validate()?;

    let (cols, rows) = params.target_size();
    info!(
        "Normalizing {} sheet(s) to {}x{} into {:?}",
        params.inputs.len(),
        cols,
        rows,
        params.output_dir
    );

    let mut report = BatchReport::default();
    for input in &params.inputs {
        let sheet = normalize_sheet_to_dir(input, params)?;
        on_sheet(&sheet);
        report.sheets.push(sheet);
    }

    info!("Batch complete: {} sheet(s) written", report.sheets.len());
    Ok(report)
}
