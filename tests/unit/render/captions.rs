use super::*;
use crate::foundation::core::{Canvas, Rgba8};
use crate::text::font::CaptionFont;

fn grey() -> Frame {
    Frame::filled(Canvas::MEME, Rgba8::opaque(90, 90, 90)).unwrap()
}

fn rows_equal(a: &Frame, b: &Frame, ys: std::ops::Range<u32>) -> bool {
    ys.into_iter().all(|y| a.row(y) == b.row(y))
}

#[test]
fn empty_pair_is_a_no_op() {
    let mut painter = TextPainter::new(CaptionFont::system());
    let out = render_captions(grey(), &CaptionPair::default(), &mut painter).unwrap();
    assert_eq!(out, grey());
}

#[test]
fn missing_top_leaves_top_band_untouched() {
    let Some(font) = CaptionFont::system() else {
        eprintln!("skipping: no system fonts available");
        return;
    };
    let mut painter = TextPainter::new(Some(font));

    let bottom_only = render_captions(grey(), &CaptionPair::new("", "WORLD"), &mut painter).unwrap();
    assert!(rows_equal(&bottom_only, &grey(), 0..300));
    assert!(!rows_equal(&bottom_only, &grey(), 500..600));

    let both = render_captions(grey(), &CaptionPair::new("HELLO", "WORLD"), &mut painter).unwrap();
    assert!(!rows_equal(&both, &grey(), 0..100));
    assert!(rows_equal(&both, &bottom_only, 300..600));
}

#[test]
fn caption_ink_hugs_the_baselines() {
    let Some(font) = CaptionFont::system() else {
        eprintln!("skipping: no system fonts available");
        return;
    };
    let mut painter = TextPainter::new(Some(font));
    let out = render_captions(grey(), &CaptionPair::new("HELLO", "WORLD"), &mut painter).unwrap();

    let white_rows: Vec<u32> = (0..600)
        .filter(|&y| out.row(y).chunks_exact(4).any(|px| px[0] > 200))
        .collect();
    assert!(white_rows.iter().any(|&y| (40..=80).contains(&y)));
    assert!(white_rows.iter().any(|&y| (520..=560).contains(&y)));
    assert!(white_rows.iter().all(|&y| y <= 84 || y >= 500), "{white_rows:?}");
}
