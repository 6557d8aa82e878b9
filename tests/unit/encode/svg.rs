use super::*;
use base64::Engine as _;
use crate::encode::composite::{CompositeOptions, build};
use crate::encode::jpeg::compress;
use crate::foundation::raster::RasterImage;

fn asset(w: u32, h: u32) -> EncodedAsset {
    let src = RasterImage::rgba(w, h, vec![128; (w * h * 4) as usize]).unwrap();
    compress(build(src, &CompositeOptions::default()).unwrap(), 80).unwrap()
}

#[test]
fn blue_matrix_selects_third_column_of_alpha_row() {
    assert_eq!(
        ColorMatrix::alpha_from(LumaChannel::Blue).values_attr(),
        "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0"
    );
    assert_eq!(
        ColorMatrix::alpha_from(LumaChannel::Red).values_attr(),
        "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0"
    );
    assert_eq!(
        ColorMatrix::alpha_from(LumaChannel::Green).values_attr(),
        "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0"
    );
}

#[test]
fn matrix_apply_moves_channel_into_alpha() {
    let m = ColorMatrix::alpha_from(LumaChannel::Blue);
    assert_eq!(m.apply([0.9, 0.8, 0.25, 1.0]), [0.0, 0.0, 0.0, 0.25]);
    let m = ColorMatrix::alpha_from(LumaChannel::Red);
    assert_eq!(m.apply([0.9, 0.8, 0.25, 1.0]), [0.0, 0.0, 0.0, 0.9]);
}

#[test]
fn document_declares_source_dimensions() {
    let doc = wrap(&asset(7, 3), LumaChannel::Blue);
    assert_eq!(doc.width(), 7);
    assert_eq!(doc.height(), 3);
    let text = doc.as_str();
    assert!(text.starts_with("<svg "));
    assert!(text.ends_with("</svg>"));
    assert!(text.contains(r#"width="7" height="3" viewBox="0 0 7 3""#));
    assert!(text.contains(r#"<image width="100%" height="200%""#));
}

#[test]
fn filter_primitives_are_chained_in_order() {
    let text = wrap(&asset(2, 2), LumaChannel::Blue).as_str().to_string();
    let offset = text.find("<feOffset").unwrap();
    let matrix = text.find("<feColorMatrix").unwrap();
    let composite = text.find("<feComposite").unwrap();
    assert!(offset < matrix && matrix < composite);
    assert!(text.contains(r#"<filter id="zorrosvg" primitiveUnits="objectBoundingBox">"#));
    assert!(text.contains(r#"dy="-0.5""#));
    assert!(text.contains(r#"in2="alpha-mask" operator="in""#));
    assert!(text.contains(r#"filter="url(#zorrosvg)""#));
}

#[test]
fn payload_is_base64_of_the_jpeg() {
    let a = asset(4, 4);
    let text = wrap(&a, LumaChannel::Blue).into_bytes();
    let text = String::from_utf8(text).unwrap();
    let marker = "data:image/jpeg;base64,";
    let start = text.find(marker).unwrap() + marker.len();
    let end = start + text[start..].find('"').unwrap();
    let decoded = STANDARD.decode(&text[start..end]).unwrap();
    assert_eq!(decoded, a.bytes());
}

#[test]
fn filter_is_independent_of_image_size() {
    let small = wrap(&asset(1, 1), LumaChannel::Blue);
    let large = wrap(&asset(33, 17), LumaChannel::Blue);
    let filter = filter_element(LumaChannel::Blue);
    assert!(small.as_str().contains(&filter));
    assert!(large.as_str().contains(&filter));
}

#[test]
fn wrap_is_deterministic() {
    let a = asset(3, 5);
    assert_eq!(wrap(&a, LumaChannel::Green), wrap(&a, LumaChannel::Green));
}
