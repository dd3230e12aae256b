use super::*;

#[test]
fn empty_object_is_default_project() {
    let p = Project::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(p, Project::default());
}

#[test]
fn full_project_parses() {
    let json = r#"{
        "image": "cat.png",
        "captions": { "top": "HELLO", "bottom": "WORLD" },
        "glitch": { "rgbChaos": 40, "jpegCrunch": 60 },
        "seed": 7,
        "font": "/fonts/Anton.ttf"
    }"#;
    let p = Project::from_reader(json.as_bytes()).unwrap();
    assert_eq!(p.captions, CaptionPair::new("HELLO", "WORLD"));
    assert_eq!(p.glitch.rgb_chaos, 40);
    assert_eq!(p.glitch.jpeg_crunch, 60);
    assert_eq!(p.glitch.scanlines, 0);
    assert_eq!(p.seed, Some(7));
    assert_eq!(p.effective_seed(None), 7);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Project::from_reader(r#"{ "captionz": {} }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, MemeError::Serde(_)));
}

#[test]
fn relative_paths_rebase_absolute_paths_stay() {
    let mut p = Project {
        image: Some(PathBuf::from("img/cat.png")),
        font: Some(PathBuf::from("/abs/font.ttf")),
        ..Project::default()
    };
    p.resolve_relative_to(Path::new("/projects/demo"));
    assert_eq!(p.image, Some(PathBuf::from("/projects/demo/img/cat.png")));
    assert_eq!(p.font, Some(PathBuf::from("/abs/font.ttf")));
}

#[test]
fn from_path_reads_file_and_resolves() {
    let dir = std::env::temp_dir().join(format!("cursed-meme-project-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("meme.json");
    std::fs::write(&file, r#"{ "image": "cat.png", "captions": { "top": "A" } }"#).unwrap();

    let p = Project::from_path(&file).unwrap();
    assert_eq!(p.image, Some(dir.join("cat.png")));
    assert_eq!(p.captions.top, "A");

    assert!(Project::from_path(dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn derived_seed_is_stable_and_input_sensitive() {
    let p = Project {
        captions: CaptionPair::new("TOP", "BOTTOM"),
        ..Project::default()
    };
    let a = p.effective_seed(Some(b"image"));
    assert_eq!(a, p.effective_seed(Some(b"image")));
    assert_ne!(a, p.effective_seed(Some(b"imagf")));
    assert_ne!(a, p.effective_seed(None));

    let mut q = p.clone();
    q.glitch.saturation = 5;
    assert_ne!(a, q.effective_seed(Some(b"image")));

    // Out-of-range values hash like their clamped form.
    let mut r = p.clone();
    r.glitch.saturation = -20;
    assert_eq!(a, r.effective_seed(Some(b"image")));
}
