use std::time::Duration;

use super::*;
use crate::foundation::core::{Canvas, Rgba8};

fn frame() -> Frame {
    let mut f = Frame::filled(Canvas::new(5, 3).unwrap(), Rgba8::opaque(9, 8, 7)).unwrap();
    f.row_mut(2)[0..4].copy_from_slice(&[255, 0, 128, 64]);
    f
}

#[test]
fn png_decodes_back_to_the_same_pixels() {
    let png = encode_png(&frame()).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (5, 3));
    assert_eq!(back.as_raw().as_slice(), frame().data());
}

#[test]
fn data_uri_round_trips_through_the_decoder() {
    let uri = to_data_uri(&frame()).unwrap();
    assert!(uri.starts_with(PNG_DATA_URI_PREFIX));
    let img = crate::assets::decode::decode_data_uri(&uri).unwrap();
    assert_eq!(img.rgba8(), frame().data());
}

#[test]
fn save_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("cursed-meme-export-{}", std::process::id()));
    let path = dir.join("nested/deeper/out.png");
    save_png(&frame(), &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (5, 3));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_names_use_unix_millis() {
    let t = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
    assert_eq!(export_name_at(t), "cursed-meme-1700000000123.png");
    let now = default_export_name();
    assert!(now.starts_with("cursed-meme-") && now.ends_with(".png"));
}
