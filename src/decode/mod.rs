//! Decoding side: the filter graph evaluated in software, and full SVG rasterization.

/// Software evaluation of the decode filter.
pub mod filter;
/// SVG rasterization through resvg.
pub mod render;
