use crate::foundation::error::{ZorroError, ZorroResult};

/// Decoded raster in row-major `[R, G, B, (A)]` order, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap a pixel buffer after checking it holds exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> ZorroResult<Self> {
        if channels != 3 && channels != 4 {
            return Err(ZorroError::UnsupportedChannels(channels));
        }
        let expected = byte_len(width, height, channels)?;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(ZorroError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// 4-channel raster.
    pub fn rgba(width: u32, height: u32, data: Vec<u8>) -> ZorroResult<Self> {
        Self::new(width, height, 4, data)
    }

    /// 3-channel raster.
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> ZorroResult<Self> {
        Self::new(width, height, 3, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel count, 3 or 4.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Borrow the pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Give up ownership of the pixel bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `channels`-sized slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// `[R, G, B, A]` at `(x, y)`; 3-channel rasters report alpha 255.
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        let i = (y as usize * self.width as usize + x as usize) * c;
        let px = &self.data[i..i + c];
        Some([px[0], px[1], px[2], if c == 4 { px[3] } else { 255 }])
    }
}

/// Checked `width * height * channels`.
pub(crate) fn byte_len(width: u32, height: u32, channels: u8) -> ZorroResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or_else(|| {
            ZorroError::validation(format!(
                "raster size {width}x{height}x{channels} overflows usize"
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/raster.rs"]
mod tests;
