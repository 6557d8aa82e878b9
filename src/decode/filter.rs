use crate::encode::composite::CompositeRaster;
use crate::encode::jpeg::{EncodedAsset, decompress};
use crate::encode::pipeline::EncodeOptions;
use crate::encode::svg::ColorMatrix;
use crate::foundation::error::ZorroResult;
use crate::foundation::raster::RasterImage;

/// Evaluate the decode filter against a composite in software.
///
/// Each output pixel takes its color from the top half unchanged, so a gamma-encoded color half
/// stays gamma-encoded, and its alpha from the `feColorMatrix` alpha row evaluated on the bottom-half pixel in the same column, after
/// undoing the mask-half curve. The source is opaque, so `feComposite in` reduces to taking the
/// mask alpha.
pub fn reconstruct(composite: &CompositeRaster, opts: &EncodeOptions) -> ZorroResult<RasterImage> {
    opts.validate()?;
    let gamma = opts.gamma()?;
    let matrix = ColorMatrix::alpha_from(opts.channel);

    let mut mask_unit = [0.0f32; 256];
    for (i, slot) in mask_unit.iter_mut().enumerate() {
        *slot = if opts.gamma_target.mask() {
            gamma.decode_unit(i as u8) as f32
        } else {
            i as f32 / 255.0
        };
    }

    let mut out = Vec::with_capacity(composite.color_half().len());
    for (top, bottom) in composite
        .color_half()
        .chunks_exact(4)
        .zip(composite.mask_half().chunks_exact(4))
    {
        let shifted = [
            mask_unit[bottom[0] as usize],
            mask_unit[bottom[1] as usize],
            mask_unit[bottom[2] as usize],
            1.0,
        ];
        let mask_alpha = matrix.apply(shifted)[3];
        let source_alpha = f32::from(top[3]) / 255.0;
        let alpha = (source_alpha * mask_alpha * 255.0).round() as u8;
        out.extend_from_slice(&[top[0], top[1], top[2], alpha]);
    }

    RasterImage::rgba(composite.width(), composite.original_height(), out)
}

/// Decompress an asset and [`reconstruct`] it.
pub fn reconstruct_asset(asset: &EncodedAsset, opts: &EncodeOptions) -> ZorroResult<RasterImage> {
    reconstruct(&decompress(asset)?, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/decode/filter.rs"]
mod tests;
