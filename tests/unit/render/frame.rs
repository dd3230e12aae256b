use super::*;

#[test]
fn from_rgba_rejects_length_mismatch() {
    assert!(Frame::from_rgba(2, 2, vec![0u8; 15]).is_err());
    assert!(Frame::from_rgba(0, 2, vec![]).is_err());
    let f = Frame::from_rgba(2, 2, vec![7u8; 16]).unwrap();
    assert_eq!(f.pixel(1, 1), Some([7, 7, 7, 7]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn filled_rows_and_image_view() {
    let canvas = Canvas::new(3, 2).unwrap();
    let mut f = Frame::filled(canvas, Rgba8::opaque(10, 20, 30)).unwrap();
    f.row_mut(1)[0..4].copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(f.row(0).len(), 12);
    assert_eq!(f.pixel(0, 1), Some([1, 2, 3, 4]));
    assert_eq!(f.pixel(2, 0), Some([10, 20, 30, 255]));

    let view = f.as_image_view().unwrap();
    assert_eq!(view.dimensions(), (3, 2));
    assert_eq!(view.get_pixel(2, 0).0, [10, 20, 30, 255]);
}
