use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Write an RGBA sheet in the format implied by the path's extension,
/// replacing any existing file.
pub fn write_rgba_sheet(output: &Path, sheet: &RgbaImage) -> Result<()> {
    let format = ImageFormat::from_path(output).map_err(|_| Error::UnsupportedFormat {
        path: output.to_path_buf(),
    })?;
    if !format.writing_enabled() {
        return Err(Error::UnsupportedFormat {
            path: output.to_path_buf(),
        });
    }

    sheet
        .save_with_format(output, format)
        .map_err(|e| Error::encode(output, e))?;
    info!("Saved {:?} as {:?}", output, format);
    Ok(())
}
