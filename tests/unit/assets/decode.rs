use std::io::Cursor;

use base64::Engine as _;

use super::*;

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_straight_alpha() {
    let buf = png_bytes(3, 2, [100, 50, 200, 128]);
    let img = decode_image(&buf).unwrap();
    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    assert!(!img.is_empty());
    assert_eq!(&img.rgba8()[0..4], &[100, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_decode_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, MemeError::Decode(_)));
}

#[test]
fn data_uri_decodes_and_rejects_bad_prefix() {
    let buf = png_bytes(1, 1, [1, 2, 3, 255]);
    let uri = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&buf)
    );
    let img = decode_data_uri(&uri).unwrap();
    assert_eq!(img.rgba8(), &[1, 2, 3, 255]);

    assert!(decode_data_uri("data:text/plain;base64,AAAA").is_err());
    assert!(decode_data_uri("data:image/png,rawbytes").is_err());
}

#[test]
fn source_image_rejects_wrong_length() {
    assert!(SourceImage::from_rgba(2, 2, vec![0u8; 4]).is_err());
    let empty = SourceImage::from_rgba(0, 5, vec![]).unwrap();
    assert!(empty.is_empty());
}
