use super::*;

#[test]
fn png_rgba_round_trips() {
    let src = RasterImage::rgba(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 0]).unwrap();
    let png = encode_png(&src).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(decode_image(&png).unwrap(), src);
}

#[test]
fn png_rgb_stays_three_channel() {
    let src = RasterImage::rgb(1, 2, vec![9, 8, 7, 6, 5, 4]).unwrap();
    let back = decode_image(&encode_png(&src).unwrap()).unwrap();
    assert_eq!(back.channels(), 3);
    assert_eq!(back, src);
}

#[test]
fn decode_rejects_garbage() {
    assert!(matches!(
        decode_image(b"<svg"),
        Err(ZorroError::Decode(_))
    ));
}
