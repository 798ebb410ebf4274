use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Open and decode an image file, guessing the format from its content.
///
/// A missing file and an undecodable one both surface as `Error::Decode`.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::decode(path, ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| Error::decode(path, ImageError::IoError(e)))?;

    let img = reader.decode().map_err(|e| Error::decode(path, e))?;
    info!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}
