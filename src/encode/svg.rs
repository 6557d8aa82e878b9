use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::encode::jpeg::EncodedAsset;

/// `id` of the decode filter inside every generated document.
pub const FILTER_ID: &str = "zorrosvg";

/// Color channel of the mask half that the filter reads the alpha from.
///
/// The mask is written with `R = G = B`, so any channel decodes; the choice only selects the
/// column of the `feColorMatrix` alpha row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LumaChannel {
    /// Red, matrix column 0.
    Red,
    /// Green, matrix column 1.
    Green,
    /// Blue, matrix column 2.
    #[default]
    Blue,
}

impl LumaChannel {
    /// Column index in an RGBA pixel and in the color matrix.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// 4x5 `feColorMatrix` in row-major order (`R' G' B' A'` rows, `R G B A 1` columns).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(
    /// Matrix rows.
    pub [[f32; 5]; 4],
);

impl ColorMatrix {
    /// Matrix that zeroes RGB and copies `channel` into alpha.
    pub fn alpha_from(channel: LumaChannel) -> Self {
        let mut rows = [[0.0f32; 5]; 4];
        rows[3][channel.index()] = 1.0;
        Self(rows)
    }

    /// Evaluate on unit-scale RGBA.
    pub fn apply(&self, rgba: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (o, row) in out.iter_mut().zip(self.0.iter()) {
            let v = row[0] * rgba[0]
                + row[1] * rgba[1]
                + row[2] * rgba[2]
                + row[3] * rgba[3]
                + row[4];
            *o = v.clamp(0.0, 1.0);
        }
        out
    }

    /// Space-separated `values` attribute.
    pub fn values_attr(&self) -> String {
        self.0
            .iter()
            .flatten()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Generated SVG text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    text: String,
    width: u32,
    height: u32,
}

impl SvgDocument {
    /// Declared width (source width).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Declared height (source height).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Borrow the document as UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Give up the document as UTF-8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}

/// `<filter>` element that decodes the stacked mask.
///
/// 1. `feOffset` moves the source up by half its bounding box, laying the mask over the color.
/// 2. `feColorMatrix` moves the luminance channel into alpha.
/// 3. `feComposite in` clips the untouched source by that alpha.
pub fn filter_element(channel: LumaChannel) -> String {
    format!(
        concat!(
            r#"<filter id="{id}" primitiveUnits="objectBoundingBox">"#,
            r#"<feOffset in="SourceGraphic" result="bottom-half" dy="-0.5"/>"#,
            r#"<feColorMatrix type="matrix" in="bottom-half" result="alpha-mask" values="{values}"/>"#,
            r#"<feComposite in="SourceGraphic" in2="alpha-mask" operator="in"/>"#,
            r#"</filter>"#
        ),
        id = FILTER_ID,
        values = ColorMatrix::alpha_from(channel).values_attr(),
    )
}

/// Wrap a compressed composite into an SVG document.
pub fn wrap(asset: &EncodedAsset, channel: LumaChannel) -> SvgDocument {
    let (w, h) = (asset.width(), asset.original_height());
    let payload = STANDARD.encode(asset.bytes());

    let mut text = String::with_capacity(payload.len() + 768);
    text.push_str(&format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        w = w,
        h = h,
    ));
    text.push_str(&filter_element(channel));
    text.push_str(&format!(
        r#"<image width="100%" height="200%" filter="url(#{FILTER_ID})" xlink:href="data:image/jpeg;base64,{payload}"/>"#
    ));
    text.push_str("</svg>");

    SvgDocument {
        text,
        width: w,
        height: h,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/svg.rs"]
mod tests;
