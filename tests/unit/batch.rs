use super::*;
use crate::codec::encode_png;
use crate::foundation::raster::RasterImage;

fn png_bytes(w: u32, h: u32, alpha: u8) -> Vec<u8> {
    let data = [30, 60, 90, alpha].repeat((w * h) as usize);
    encode_png(&RasterImage::rgba(w, h, data).unwrap()).unwrap()
}

#[test]
fn output_path_swaps_extension() {
    assert_eq!(output_path(Path::new("a/foo.png")), PathBuf::from("a/foo.svg"));
    assert_eq!(output_path(Path::new("foo.PNG")), PathBuf::from("foo.svg"));
}

#[test]
fn accepts_is_case_insensitive() {
    let opts = BatchOptions::default();
    assert!(opts.accepts(Path::new("x/Water.PNG")));
    assert!(!opts.accepts(Path::new("x/water.jpg")));
    assert!(!opts.accepts(Path::new("x/noext")));
}

#[test]
fn null_contents_pass_through() {
    let file = SourceFile::empty("test/water.png");
    let out = process_file(file.clone(), &BatchOptions::default()).unwrap();
    assert_eq!(out, FileOutcome::Passthrough(file));
}

#[test]
fn unsupported_extension_passes_through_unchanged() {
    let file = SourceFile::new("test/water.jpg", vec![1, 2, 3]);
    let out = process_file(file.clone(), &BatchOptions::default()).unwrap();
    assert_eq!(out, FileOutcome::Passthrough(file));
}

#[test]
fn png_is_encoded_to_svg_path() {
    let file = SourceFile::new("img/logo.png", png_bytes(4, 2, 128));
    let FileOutcome::Encoded { source, path, svg } =
        process_file(file, &BatchOptions::default()).unwrap()
    else {
        panic!("expected an encoded outcome");
    };
    assert_eq!(source, PathBuf::from("img/logo.png"));
    assert_eq!(path, PathBuf::from("img/logo.svg"));
    assert_eq!(svg.height(), 2);
}

#[test]
fn broken_png_error_names_the_file() {
    let file = SourceFile::new("img/broken.png", b"nope".to_vec());
    let err = process_file(file, &BatchOptions::default()).unwrap_err();
    assert_eq!(err.file(), Some(Path::new("img/broken.png")));
}

#[test]
fn batch_isolates_failures_and_counts() {
    let files = vec![
        SourceFile::new("a.png", png_bytes(2, 2, 0)),
        SourceFile::new("b.png", b"garbage".to_vec()),
        SourceFile::new("c.jpg", vec![0xFF, 0xD8]),
        SourceFile::new("d.png", png_bytes(3, 1, 255)),
    ];
    let report = run_batch(files, &BatchOptions::default());
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.encoded(), 2);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 1);
    assert!(report.outcomes[1].is_err());
    assert!(matches!(
        report.outcomes[3],
        Ok(FileOutcome::Encoded { .. })
    ));
    assert_eq!(report.summary(), "Generated 2 alpha masks.");
}

#[test]
fn summary_uses_singular_for_one() {
    let report = run_batch(
        vec![SourceFile::new("a.png", png_bytes(1, 1, 9))],
        &BatchOptions::default(),
    );
    assert_eq!(report.summary(), "Generated 1 alpha mask.");
}

#[test]
fn batch_options_deserialize() {
    let opts: BatchOptions =
        serde_json::from_str(r#"{ "extensions": ["png", "webp"], "encode": { "quality": 60 } }"#)
            .unwrap();
    assert_eq!(opts.extensions, vec!["png", "webp"]);
    assert_eq!(opts.encode.quality, 60);
}
