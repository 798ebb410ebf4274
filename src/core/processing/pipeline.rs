use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::params::NormalizeParams;
use crate::core::processing::convert::to_rgba8;
use crate::core::processing::resize::resize_rgba_exact;
use crate::error::{Error, Result};
use crate::io::reader::read_image;
use crate::io::writers::sheet::write_rgba_sheet;
use crate::types::SheetReport;

/// Destination for `input` inside `output_dir`, keeping only its base name
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    Ok(output_dir.join(name))
}

/// Decode, convert to RGBA and resize one sheet without touching the output
pub(crate) fn normalize_sheet_pipeline(input: &Path, params: &NormalizeParams) -> Result<RgbaImage> {
    let (target_cols, target_rows) = params.target_size();
    let decoded = read_image(input)?;
    let rgba = to_rgba8(decoded);
    resize_rgba_exact(&rgba, target_cols, target_rows, params.filter)
}

/// Full single-sheet pass: normalize in memory then write into the output dir
pub(crate) fn normalize_sheet_to_dir(input: &Path, params: &NormalizeParams) -> Result<SheetReport> {
    let resized = normalize_sheet_pipeline(input, params)?;
    let destination = output_path_for(input, &params.output_dir)?;

    fs::create_dir_all(&params.output_dir)?;
    write_rgba_sheet(&destination, &resized)?;
    info!("Normalized {:?} -> {:?}", input, destination);

    Ok(SheetReport {
        source: input.to_path_buf(),
        destination,
        width: resized.width(),
        height: resized.height(),
    })
}
