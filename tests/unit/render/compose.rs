use super::*;
use crate::foundation::core::Canvas;

fn solid_source(w: u32, h: u32, px: [u8; 4]) -> SourceImage {
    SourceImage::from_rgba(w, h, px.repeat((w * h) as usize)).unwrap()
}

fn meme_frame() -> Frame {
    Frame::new(Canvas::MEME).unwrap()
}

#[test]
fn landscape_fills_width_and_centers_vertically() {
    assert_eq!(
        fit_placement(400, 200, 800, 600),
        Placement {
            x: 0,
            y: 100,
            width: 800,
            height: 400
        }
    );
}

#[test]
fn tall_and_square_fall_back_to_height() {
    assert_eq!(
        fit_placement(300, 600, 800, 600),
        Placement {
            x: 250,
            y: 0,
            width: 300,
            height: 600
        }
    );
    assert_eq!(fit_placement(100, 100, 800, 600).x, 100);
    assert_eq!(fit_placement(100, 100, 800, 600).width, 600);
}

#[test]
fn degenerate_aspect_keeps_one_pixel() {
    let p = fit_placement(10_000, 1, 800, 600);
    assert_eq!((p.width, p.height), (800, 1));
    assert_eq!(p.y, 299);
}

#[test]
fn wide_images_get_equal_margins() {
    for (w, h) in [(1920, 1080), (1000, 100), (801, 600), (4000, 2999)] {
        let p = fit_placement(w, h, 800, 600);
        let bottom = 600 - (p.y + p.height);
        assert!(p.y.abs_diff(bottom) <= 1, "{w}x{h}: {p:?}");
        assert_eq!(p.width, 800);
    }
}

#[test]
fn placement_rect_matches_fields() {
    let r = fit_placement(400, 200, 800, 600).rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (0.0, 100.0, 800.0, 500.0));
}

#[test]
fn no_source_is_black_background() {
    let out = compose(meme_frame(), None);
    assert!(out.data().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));

    let empty = SourceImage::from_rgba(0, 0, Vec::new()).unwrap();
    assert_eq!(compose(meme_frame(), Some(&empty)), out);
}

#[test]
fn letterboxed_source_scenario() {
    let src = solid_source(400, 200, [220, 10, 10, 255]);
    let out = compose(meme_frame(), Some(&src));
    assert_eq!(out.pixel(400, 50), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(400, 99), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(400, 300), Some([220, 10, 10, 255]));
    assert_eq!(out.pixel(10, 450), Some([220, 10, 10, 255]));
    assert_eq!(out.pixel(400, 500), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(400, 599), Some([0, 0, 0, 255]));
}

#[test]
fn translucent_source_blends_over_background() {
    let src = solid_source(8, 6, [255, 255, 255, 128]);
    let out = compose(meme_frame(), Some(&src));
    assert_eq!(out.pixel(400, 300), Some([128, 128, 128, 255]));
}
