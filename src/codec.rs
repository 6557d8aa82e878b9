use std::io::Cursor;

use crate::foundation::error::{ZorroError, ZorroResult};
use crate::foundation::raster::RasterImage;

/// Decode encoded image bytes (PNG, JPEG) into a raster.
///
/// Images with an alpha channel come back as RGBA8, everything else as RGB8.
pub fn decode_image(bytes: &[u8]) -> ZorroResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| ZorroError::decode(e.to_string()))?;
    let (width, height) = (dyn_img.width(), dyn_img.height());
    if dyn_img.color().has_alpha() {
        RasterImage::rgba(width, height, dyn_img.into_rgba8().into_raw())
    } else {
        RasterImage::rgb(width, height, dyn_img.into_rgb8().into_raw())
    }
}

/// Losslessly encode a raster as PNG.
pub fn encode_png(raster: &RasterImage) -> ZorroResult<Vec<u8>> {
    let color = match raster.channels() {
        4 => image::ExtendedColorType::Rgba8,
        _ => image::ExtendedColorType::Rgb8,
    };
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        raster.data(),
        raster.width(),
        raster.height(),
        color,
        image::ImageFormat::Png,
    )
    .map_err(|source| ZorroError::Compress {
        format: "png",
        source,
    })?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../tests/unit/codec.rs"]
mod tests;
