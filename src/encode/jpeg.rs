use image::codecs::jpeg::JpegEncoder;

use crate::encode::composite::CompositeRaster;
use crate::foundation::error::{ZorroError, ZorroResult};
use crate::foundation::raster::RasterImage;

/// Quality used when nothing else is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Compressed composite plus the dimensions needed to rebuild the SVG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedAsset {
    bytes: Vec<u8>,
    width: u32,
    original_height: u32,
}

impl EncodedAsset {
    /// JPEG bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source image (half the JPEG height).
    pub fn original_height(&self) -> u32 {
        self.original_height
    }

    /// Height of the embedded JPEG.
    pub fn stacked_height(&self) -> u32 {
        self.original_height * 2
    }
}

/// JPEG-compress a composite raster.
///
/// The codec takes RGB input; the composite's forced-opaque alpha byte is dropped while packing
/// rows (input stride `W * 4`, output stride `W * 3`).
pub fn compress(raster: CompositeRaster, quality: u8) -> ZorroResult<EncodedAsset> {
    if !(1..=100).contains(&quality) {
        return Err(ZorroError::validation(format!(
            "jpeg quality must be in 1..=100, got {quality}"
        )));
    }

    let width = raster.width();
    let stacked_height = raster.height();
    let original_height = raster.original_height();

    let rgb: Vec<u8> = raster
        .raster()
        .pixels()
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    drop(raster);

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode(&rgb, width, stacked_height, image::ExtendedColorType::Rgb8)
        .map_err(|source| ZorroError::Compress {
            format: "jpeg",
            source,
        })?;

    tracing::debug!(
        width,
        stacked_height,
        quality,
        jpeg_bytes = bytes.len(),
        "compressed composite"
    );

    Ok(EncodedAsset {
        bytes,
        width,
        original_height,
    })
}

/// Decode an asset's JPEG back into a composite raster.
pub fn decompress(asset: &EncodedAsset) -> ZorroResult<CompositeRaster> {
    let img = image::load_from_memory_with_format(&asset.bytes, image::ImageFormat::Jpeg)
        .map_err(|e| ZorroError::decode(format!("embedded jpeg: {e}")))?
        .to_rgb8();
    let (w, h) = img.dimensions();
    if w != asset.width || h != asset.stacked_height() {
        return Err(ZorroError::decode(format!(
            "embedded jpeg is {w}x{h}, expected {}x{}",
            asset.width,
            asset.stacked_height()
        )));
    }
    CompositeRaster::from_stacked(RasterImage::rgb(w, h, img.into_raw())?)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
