use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Convert any decoded image to 8-bit RGBA.
///
/// Sources without an alpha channel come out fully opaque; 16-bit and float
/// sources are scaled down to 8 bits per channel.
pub fn to_rgba8(img: DynamicImage) -> RgbaImage {
    let color = img.color();
    if !color.has_alpha() {
        debug!("Source {:?} has no alpha channel, synthesizing opaque alpha", color);
    }
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}
