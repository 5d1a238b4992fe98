use super::*;

#[test]
fn rgb8_parses_hash_and_0x_forms() {
    assert_eq!("#ff8000".parse::<Rgb8>().unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!("0x00FF10".parse::<Rgb8>().unwrap(), Rgb8::new(0, 255, 16));
    assert_eq!("000000".parse::<Rgb8>().unwrap(), Rgb8::BLACK);
}

#[test]
fn rgb8_rejects_malformed() {
    for bad in ["", "#fff", "#gggggg", "#1234567", "red"] {
        assert!(bad.parse::<Rgb8>().is_err(), "{bad} should be rejected");
    }
}

#[test]
fn rgb8_packed_and_display_agree() {
    let c = Rgb8::from_u32(0x12_34_56);
    assert_eq!(c, Rgb8::new(0x12, 0x34, 0x56));
    assert_eq!(c.to_string(), "#123456");
    assert_eq!(Rgb8::from_u32(0xff_00_00_01), Rgb8::new(0, 0, 1));
}

#[test]
fn rgb8_matches_ignores_alpha() {
    let key = Rgb8::new(1, 2, 3);
    assert!(key.matches(&[1, 2, 3, 0]));
    assert!(key.matches(&[1, 2, 3, 255]));
    assert!(!key.matches(&[1, 2, 4, 255]));
    assert!(!key.matches(&[1, 2]));
}

#[test]
fn rgb8_serde_uses_hex_string() {
    let json = serde_json::to_string(&Rgb8::new(0, 16, 255)).unwrap();
    assert_eq!(json, "\"#0010ff\"");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgb8::new(0, 16, 255));
    assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
}
