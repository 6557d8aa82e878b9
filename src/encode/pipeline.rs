use crate::codec::decode_image;
use crate::encode::alpha::MaskMode;
use crate::encode::composite::{self, CompositeOptions};
use crate::encode::gamma::{DEFAULT_GAMMA_EXPONENT, Gamma, GammaTarget};
use crate::encode::jpeg::{self, DEFAULT_JPEG_QUALITY};
use crate::encode::svg::{self, LumaChannel, SvgDocument};
use crate::foundation::error::{ZorroError, ZorroResult};
use crate::foundation::raster::RasterImage;

/// Encoder options.
///
/// Every historical variant of the encoding is reachable from here: gamma on neither, one or both
/// halves; continuous or thresholded mask; red, green or blue carrying the decoded alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EncodeOptions {
    /// Gamma curve exponent.
    pub gamma_exponent: f64,
    /// Composite halves that receive the curve.
    pub gamma_target: GammaTarget,
    /// Alpha-to-mask mapping.
    pub mask_mode: MaskMode,
    /// Channel the filter reads alpha from.
    pub channel: LumaChannel,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            gamma_exponent: DEFAULT_GAMMA_EXPONENT,
            gamma_target: GammaTarget::Both,
            mask_mode: MaskMode::Continuous,
            channel: LumaChannel::Blue,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    /// Check option ranges.
    pub fn validate(&self) -> ZorroResult<()> {
        Gamma::new(self.gamma_exponent)?;
        if !(1..=100).contains(&self.quality) {
            return Err(ZorroError::validation(format!(
                "jpeg quality must be in 1..=100, got {}",
                self.quality
            )));
        }
        if self.mask_mode == MaskMode::Threshold(0) {
            return Err(ZorroError::validation("mask threshold must be > 0"));
        }
        Ok(())
    }

    /// Validated gamma curve.
    pub fn gamma(&self) -> ZorroResult<Gamma> {
        Gamma::new(self.gamma_exponent)
    }

    /// Composite-stage subset of the options.
    pub fn composite(&self) -> ZorroResult<CompositeOptions> {
        Ok(CompositeOptions {
            gamma: self.gamma()?,
            target: self.gamma_target,
            mask: self.mask_mode,
        })
    }
}

/// Encode a decoded raster into a ZorroSVG document.
#[tracing::instrument(skip(raster), fields(width = raster.width(), height = raster.height(), channels = raster.channels()))]
pub fn encode_raster(raster: RasterImage, opts: &EncodeOptions) -> ZorroResult<SvgDocument> {
    opts.validate()?;
    let composite = composite::build(raster, &opts.composite()?)?;
    let asset = jpeg::compress(composite, opts.quality)?;
    let doc = svg::wrap(&asset, opts.channel);
    tracing::debug!(svg_bytes = doc.as_bytes().len(), "encoded document");
    Ok(doc)
}

/// Decode image bytes through the raster codec, then [`encode_raster`].
pub fn encode_bytes(bytes: &[u8], opts: &EncodeOptions) -> ZorroResult<SvgDocument> {
    encode_raster(decode_image(bytes)?, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/pipeline.rs"]
mod tests;
