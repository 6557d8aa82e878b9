use super::*;

#[test]
fn defaults_are_canonical_variant() {
    let opts = EncodeOptions::default();
    assert_eq!(opts.gamma_exponent, 0.45);
    assert_eq!(opts.gamma_target, GammaTarget::Both);
    assert_eq!(opts.mask_mode, MaskMode::Continuous);
    assert_eq!(opts.channel, LumaChannel::Blue);
    assert_eq!(opts.quality, 80);
    opts.validate().unwrap();
}

#[test]
fn validate_rejects_bad_values() {
    let bad_gamma = EncodeOptions {
        gamma_exponent: 0.0,
        ..EncodeOptions::default()
    };
    assert!(bad_gamma.validate().is_err());

    let bad_quality = EncodeOptions {
        quality: 0,
        ..EncodeOptions::default()
    };
    assert!(bad_quality.validate().is_err());

    let bad_threshold = EncodeOptions {
        mask_mode: MaskMode::Threshold(0),
        ..EncodeOptions::default()
    };
    assert!(bad_threshold.validate().is_err());
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: EncodeOptions =
        serde_json::from_str(r#"{ "channel": "red", "maskMode": { "threshold": 1 } }"#).unwrap();
    assert_eq!(opts.channel, LumaChannel::Red);
    assert_eq!(opts.mask_mode, MaskMode::Threshold(1));
    assert_eq!(opts.quality, 80);
    assert_eq!(opts.gamma_target, GammaTarget::Both);
}

#[test]
fn options_reject_unknown_fields() {
    assert!(serde_json::from_str::<EncodeOptions>(r#"{ "qualty": 10 }"#).is_err());
}

#[test]
fn encode_raster_produces_svg_with_source_height() {
    let src = RasterImage::rgba(6, 4, vec![90; 6 * 4 * 4]).unwrap();
    let doc = encode_raster(src, &EncodeOptions::default()).unwrap();
    assert_eq!(doc.width(), 6);
    assert_eq!(doc.height(), 4);
    assert!(doc.as_str().contains(r#"viewBox="0 0 6 4""#));
}

#[test]
fn encode_raster_accepts_rgb() {
    let src = RasterImage::rgb(3, 3, vec![200; 27]).unwrap();
    let doc = encode_raster(src, &EncodeOptions::default()).unwrap();
    assert_eq!(doc.height(), 3);
}

#[test]
fn encode_bytes_rejects_garbage() {
    let err = encode_bytes(b"definitely not an image", &EncodeOptions::default()).unwrap_err();
    assert!(matches!(err, ZorroError::Decode(_)));
}
