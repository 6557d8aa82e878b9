use crate::encode::alpha::{MaskMode, extract_alpha};
use crate::encode::gamma::{Gamma, GammaTarget};
use crate::foundation::error::{ZorroError, ZorroResult};
use crate::foundation::raster::{RasterImage, byte_len};

/// Knobs for [`build`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompositeOptions {
    /// Gamma curve.
    pub gamma: Gamma,
    /// Halves the curve is applied to.
    pub target: GammaTarget,
    /// Alpha-to-mask mapping.
    pub mask: MaskMode,
}

/// Double-height opaque raster: rows `[0, H)` carry color, rows `[H, 2H)` carry the mask as
/// `R = G = B`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeRaster {
    raster: RasterImage,
    original_height: u32,
}

impl CompositeRaster {
    /// Reassemble a composite from a 4-channel, even-height raster (e.g. a decoded JPEG).
    ///
    /// Alpha is forced back to 255.
    pub fn from_stacked(raster: RasterImage) -> ZorroResult<Self> {
        if raster.height() % 2 != 0 {
            return Err(ZorroError::validation(format!(
                "composite height must be even, got {}",
                raster.height()
            )));
        }
        let (w, h) = (raster.width(), raster.height());
        let mut data = match raster.channels() {
            4 => raster.into_data(),
            _ => raster
                .pixels()
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
        };
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            raster: RasterImage::rgba(w, h, data)?,
            original_height: h / 2,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Full stacked height (`2 * original_height`).
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Height of the source image.
    pub fn original_height(&self) -> u32 {
        self.original_height
    }

    /// Borrow the underlying 4-channel raster.
    pub fn raster(&self) -> &RasterImage {
        &self.raster
    }

    /// Give up the underlying raster.
    pub fn into_raster(self) -> RasterImage {
        self.raster
    }

    /// Color half, RGBA rows `[0, H)`.
    pub fn color_half(&self) -> &[u8] {
        let (top, _) = self.raster.data().split_at(self.half_len());
        top
    }

    /// Mask half, RGBA rows `[H, 2H)`.
    pub fn mask_half(&self) -> &[u8] {
        let (_, bottom) = self.raster.data().split_at(self.half_len());
        bottom
    }

    fn half_len(&self) -> usize {
        self.raster.stride() * self.original_height as usize
    }
}

/// Stack `src` over its alpha mask.
///
/// Consumes the source; the composite owns a freshly allocated buffer.
pub fn build(src: RasterImage, opts: &CompositeOptions) -> ZorroResult<CompositeRaster> {
    let (w, h) = (src.width(), src.height());
    let stacked_h = h
        .checked_mul(2)
        .ok_or_else(|| ZorroError::validation(format!("image height {h} is too large")))?;
    let half = byte_len(w, h, 4)?;
    let total = byte_len(w, stacked_h, 4)?;

    let identity = Gamma::IDENTITY.lut();
    let color_lut = if opts.target.color() {
        opts.gamma.lut()
    } else {
        identity
    };
    let mask_lut = if opts.target.mask() {
        opts.gamma.lut()
    } else {
        identity
    };

    let alpha = extract_alpha(&src, opts.mask);

    let mut out = vec![0u8; total];
    let (top, bottom) = out.split_at_mut(half);

    for (dst, px) in top.chunks_exact_mut(4).zip(src.pixels()) {
        dst[0] = color_lut[px[0] as usize];
        dst[1] = color_lut[px[1] as usize];
        dst[2] = color_lut[px[2] as usize];
        dst[3] = 255;
    }

    for (dst, &a) in bottom.chunks_exact_mut(4).zip(alpha.iter()) {
        let v = mask_lut[a as usize];
        dst[0] = v;
        dst[1] = v;
        dst[2] = v;
        dst[3] = 255;
    }

    Ok(CompositeRaster {
        raster: RasterImage::rgba(w, stacked_h, out)?,
        original_height: h,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/composite.rs"]
mod tests;
