use super::*;

#[test]
fn endpoints_are_fixed() {
    let g = Gamma::default();
    assert_eq!(g.encode(0), 0);
    assert_eq!(g.encode(255), 255);
    assert_eq!(g.decode(0), 0);
    assert_eq!(g.decode(255), 255);
}

#[test]
fn encode_matches_reference_values() {
    let g = Gamma::default();
    // round(255 * (1/255)^0.45) and round(255 * (128/255)^0.45)
    assert_eq!(g.encode(1), 21);
    assert_eq!(g.encode(128), 187);
}

#[test]
fn encode_is_monotonic_and_brightens() {
    let g = Gamma::default();
    let lut = g.lut();
    for i in 1..256 {
        assert!(lut[i] >= lut[i - 1]);
        assert!(lut[i] >= i as u8);
    }
}

#[test]
fn decode_inverts_encode_within_one_step() {
    let g = Gamma::default();
    for v in 0..=255u8 {
        let back = g.decode(g.encode(v));
        assert!(
            (i16::from(back) - i16::from(v)).abs() <= 1,
            "value {v} came back as {back}"
        );
    }
}

#[test]
fn identity_is_noop() {
    let g = Gamma::IDENTITY;
    assert!(g.is_identity());
    for v in 0..=255u8 {
        assert_eq!(g.encode(v), v);
        assert_eq!(g.decode(v), v);
    }
}

#[test]
fn inverse_lut_matches_decode() {
    let g = Gamma::new(0.5).unwrap();
    let inv = g.inverse_lut();
    for v in 0..=255u8 {
        assert_eq!(inv[v as usize], g.decode(v));
    }
}

#[test]
fn new_rejects_bad_exponents() {
    assert!(Gamma::new(0.0).is_err());
    assert!(Gamma::new(-1.0).is_err());
    assert!(Gamma::new(f64::NAN).is_err());
    assert!(Gamma::new(2.2).is_ok());
}

#[test]
fn target_flags() {
    assert!(GammaTarget::Both.color() && GammaTarget::Both.mask());
    assert!(GammaTarget::Color.color() && !GammaTarget::Color.mask());
    assert!(!GammaTarget::Mask.color() && GammaTarget::Mask.mask());
    assert!(!GammaTarget::None.color() && !GammaTarget::None.mask());
    assert_eq!(GammaTarget::default(), GammaTarget::Both);
}
