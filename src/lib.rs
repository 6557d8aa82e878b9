//! zorrosvg encodes transparent rasters as SVG documents that embed a single opaque JPEG.
//!
//! The JPEG holds a double-height composite: the color image on top and the alpha channel,
//! written as gamma-corrected luminance, underneath. A three-primitive SVG filter
//! (`feOffset` → `feColorMatrix` → `feComposite in`) moves the luminance back into alpha at render
//! time, so any SVG renderer reconstructs the transparency.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes → [`RasterImage`] ([`decode_image`])
//! 2. **Composite**: [`RasterImage`] → [`CompositeRaster`] ([`build_composite`])
//! 3. **Compress**: [`CompositeRaster`] → [`EncodedAsset`] ([`compress`])
//! 4. **Wrap**: [`EncodedAsset`] → [`SvgDocument`] ([`wrap`])
//!
//! [`encode_raster`] runs steps 2-4; [`run_batch`] processes many files in parallel.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Many-file processing with passthrough of unsupported inputs.
pub mod batch;
/// Raster codec boundary (decode / PNG encode).
pub mod codec;
/// Filter evaluation and SVG rasterization.
pub mod decode;
/// Encoding stages.
pub mod encode;

pub use crate::batch::{
    BatchOptions, BatchReport, FileOutcome, SourceFile, output_path, process_file, run_batch,
};
pub use crate::codec::{decode_image, encode_png};
pub use crate::decode::filter::{reconstruct, reconstruct_asset};
pub use crate::decode::render::rasterize_svg;
pub use crate::encode::alpha::{MaskMode, extract_alpha, has_alpha};
pub use crate::encode::composite::{
    CompositeOptions, CompositeRaster, build as build_composite,
};
pub use crate::encode::gamma::{DEFAULT_GAMMA_EXPONENT, Gamma, GammaTarget};
pub use crate::encode::jpeg::{DEFAULT_JPEG_QUALITY, EncodedAsset, compress, decompress};
pub use crate::encode::pipeline::{EncodeOptions, encode_bytes, encode_raster};
pub use crate::encode::svg::{ColorMatrix, FILTER_ID, LumaChannel, SvgDocument, wrap};
pub use crate::foundation::error::{ZorroError, ZorroResult};
pub use crate::foundation::raster::RasterImage;
