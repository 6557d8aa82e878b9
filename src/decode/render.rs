use crate::foundation::error::{ZorroError, ZorroResult};
use crate::foundation::raster::RasterImage;

// Avoid pathological allocations from hostile documents.
const MAX_DIM: u32 = 16_384;

/// Render an SVG document at its intrinsic size into straight-alpha RGBA8.
pub fn rasterize_svg(bytes: &[u8]) -> ZorroResult<RasterImage> {
    let opts = usvg::Options::default();
    let tree =
        usvg::Tree::from_data(bytes, &opts).map_err(|e| ZorroError::decode(format!("svg: {e}")))?;

    fn to_px(v: f32) -> ZorroResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ZorroError::decode("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(ZorroError::decode(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ZorroError::decode("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    demultiply_rgba8_in_place(&mut data);
    RasterImage::rgba(width, height, data)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/render.rs"]
mod tests;
