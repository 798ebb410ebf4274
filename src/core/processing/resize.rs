use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Resize an RGBA image to exactly `target_cols`x`target_rows`.
///
/// Aspect ratio is not preserved: the source is stretched or squeezed to fill
/// the target box. Alpha is premultiplied during convolution so fully
/// transparent pixels do not bleed their colour into neighbours. A fully
/// opaque source stays fully opaque.
pub fn resize_rgba_exact(
    src: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    if target_cols == 0 {
        return Err(Error::ZeroSize { arg: "target_cols" });
    }
    if target_rows == 0 {
        return Err(Error::ZeroSize { arg: "target_rows" });
    }

    let (original_cols, original_rows) = src.dimensions();
    info!(
        "Original size: {}x{}, New size: {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, filter
    );

    let opaque = src.pixels().all(|p| p[3] == u8::MAX);
    let resize_options = ResizeOptions::new()
        .resize_alg(filter.resize_alg())
        .use_alpha(!opaque);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        src.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    let mut resized = RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or(Error::InvalidArgument {
            arg: "resized_buffer",
            value: format!("{}x{}", target_cols, target_rows),
        })?;

    // Convolution rounding can pull a constant 255 channel down to 254
    if opaque {
        for pixel in resized.pixels_mut() {
            pixel[3] = u8::MAX;
        }
    }
    Ok(resized)
}
