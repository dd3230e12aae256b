use super::*;

#[test]
fn garbage_bytes_are_rejected() {
    assert!(CaptionFont::from_bytes(b"definitely not a font".to_vec()).is_err());
    assert!(CaptionFont::from_bytes(Vec::new()).is_err());
}

#[test]
fn missing_file_is_an_error_not_a_fallback() {
    let src = FontSource::File(PathBuf::from("/nonexistent/cursed/font.ttf"));
    assert!(CaptionFont::resolve(&src).is_err());
    assert_eq!(FontSource::default(), FontSource::System);
}

#[test]
fn system_face_round_trips_through_bytes() {
    let Some(font) = CaptionFont::system() else {
        eprintln!("skipping: no system fonts available");
        return;
    };
    assert!(!font.bytes().is_empty());
    let sha = font.sha256_hex();
    assert_eq!(sha.len(), 64);
    assert!(sha.chars().all(|c| c.is_ascii_hexdigit()));

    if font.index() == 0 {
        let again = CaptionFont::from_bytes(font.bytes().to_vec()).unwrap();
        assert_eq!(again.family(), font.family());
        assert_eq!(again.key(), font.key());
    }
}
