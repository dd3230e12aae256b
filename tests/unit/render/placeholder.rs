use super::*;
use crate::foundation::core::Canvas;
use crate::text::font::CaptionFont;

fn frame() -> Frame {
    Frame::new(Canvas::MEME).unwrap()
}

#[test]
fn gradient_runs_top_to_bottom() {
    let g = vertical_gradient(frame(), GRADIENT_TOP, GRADIENT_BOTTOM);
    assert_eq!(g.pixel(0, 0), Some([0x1a, 0x1a, 0x1a, 255]));
    assert_eq!(g.pixel(799, 599), Some([0x33, 0x33, 0x33, 255]));
    let mut prev = 0;
    for y in 0..600 {
        let v = g.pixel(400, y).unwrap()[0];
        assert!(v >= prev);
        prev = v;
        assert!(g.row(y).chunks_exact(4).all(|px| px[0] == v));
    }
}

#[test]
fn single_row_gradient_uses_top_color() {
    let f = Frame::new(Canvas::new(4, 1).unwrap()).unwrap();
    let g = vertical_gradient(f, GRADIENT_TOP, GRADIENT_BOTTOM);
    assert_eq!(g.pixel(3, 0), Some([0x1a, 0x1a, 0x1a, 255]));
}

#[test]
fn fontless_placeholder_is_plain_gradient() {
    let mut painter = TextPainter::new(None);
    let out = render_placeholder(frame(), &mut painter).unwrap();
    assert_eq!(out, vertical_gradient(frame(), GRADIENT_TOP, GRADIENT_BOTTOM));
}

#[test]
fn placeholder_text_sits_mid_frame() {
    let Some(font) = CaptionFont::system() else {
        eprintln!("skipping: no system fonts available");
        return;
    };
    let mut painter = TextPainter::new(Some(font));
    let out = render_placeholder(frame(), &mut painter).unwrap();
    let plain = vertical_gradient(frame(), GRADIENT_TOP, GRADIENT_BOTTOM);

    for y in (0..240).chain(360..600) {
        assert_eq!(out.row(y), plain.row(y), "row {y}");
    }
    let lit = (240..360).any(|y| out.row(y).chunks_exact(4).any(|px| px[0] > 200));
    assert!(lit);
}
