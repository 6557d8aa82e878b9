//! Encoding stages, leaves first.
//!
//! `gamma` and `alpha` feed `composite`, which `jpeg` compresses and `svg` wraps. `pipeline` runs
//! them in order for one image.

/// Alpha extraction and mask modes.
pub mod alpha;
/// Double-height composite construction.
pub mod composite;
/// Power-law gamma curve.
pub mod gamma;
/// JPEG bridge.
pub mod jpeg;
/// Single-image orchestration and options.
pub mod pipeline;
/// SVG document and decode filter generation.
pub mod svg;
