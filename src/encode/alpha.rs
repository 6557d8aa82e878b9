use crate::foundation::raster::RasterImage;

/// How source alpha becomes the mask signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskMode {
    /// Alpha is carried through as-is.
    #[default]
    Continuous,
    /// Alpha `>= t` becomes 255, everything else 0.
    Threshold(u8),
}

impl MaskMode {
    /// Map one source alpha byte to a mask byte.
    pub fn apply(self, alpha: u8) -> u8 {
        match self {
            Self::Continuous => alpha,
            Self::Threshold(t) => {
                if alpha >= t {
                    255
                } else {
                    0
                }
            }
        }
    }
}

/// Return `true` when the raster carries an alpha channel.
pub fn has_alpha(src: &RasterImage) -> bool {
    src.channels() == 4
}

/// Alpha plane of `src`, one byte per pixel, after `mode`.
///
/// Rasters without alpha yield a uniform 255 plane.
pub fn extract_alpha(src: &RasterImage, mode: MaskMode) -> Vec<u8> {
    if !has_alpha(src) {
        return vec![255; src.pixel_count()];
    }
    src.pixels().map(|px| mode.apply(px[3])).collect()
}

/// Return `true` when every alpha byte is 255.
pub fn is_fully_opaque(plane: &[u8]) -> bool {
    plane.iter().all(|&a| a == 255)
}

/// Return `true` when every alpha byte is 0.
pub fn is_fully_transparent(plane: &[u8]) -> bool {
    plane.iter().all(|&a| a == 0)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/alpha.rs"]
mod tests;
