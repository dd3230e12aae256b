use image::imageops::{self, FilterType};

use crate::assets::source::SourceImage;
use crate::foundation::core::{Rect, Rgba8};
use crate::render::composite::over_straight;
use crate::render::frame::Frame;

/// Fill behind the source image, visible as letter/pillar boxes.
pub const BACKGROUND: Rgba8 = Rgba8::BLACK;

/// Where a source image lands inside the frame, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Drawn width, at least 1.
    pub width: u32,
    /// Drawn height, at least 1.
    pub height: u32,
}

impl Placement {
    /// Placement as a `kurbo` rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.width),
            f64::from(self.y + self.height),
        )
    }
}

/// Aspect-preserving fit of an `img_w x img_h` image into a `frame_w x frame_h` frame.
///
/// Fills the frame width first and only falls back to fitting the height when the image would
/// otherwise overflow vertically. The result is centered with integer division.
pub fn fit_placement(img_w: u32, img_h: u32, frame_w: u32, frame_h: u32) -> Placement {
    let aspect = f64::from(img_w.max(1)) / f64::from(img_h.max(1));
    let (fw, fh) = (f64::from(frame_w), f64::from(frame_h));

    let (mut draw_w, mut draw_h) = (fw, fw / aspect);
    if draw_h > fh {
        draw_h = fh;
        draw_w = fh * aspect;
    }

    let width = (draw_w.round() as u32).clamp(1, frame_w.max(1));
    let height = (draw_h.round() as u32).clamp(1, frame_h.max(1));
    Placement {
        x: (frame_w - width) / 2,
        y: (frame_h - height) / 2,
        width,
        height,
    }
}

/// Fill `frame` with [`BACKGROUND`] and draw `source` (if any) fitted and centered on top.
///
/// `None` and zero-sized sources leave just the background.
#[tracing::instrument(skip_all, fields(has_source = source.is_some()))]
pub fn compose(mut frame: Frame, source: Option<&SourceImage>) -> Frame {
    frame.fill(BACKGROUND);

    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return frame;
    };
    let Some(view) = source.as_image_view() else {
        return frame;
    };

    let placement = fit_placement(source.width(), source.height(), frame.width(), frame.height());
    tracing::debug!(?placement, "fit source image");
    let scaled = imageops::resize(&view, placement.width, placement.height, FilterType::Triangle);

    let x0 = placement.x as usize;
    for (sy, src_row) in scaled.rows().enumerate() {
        let dst_row = frame.row_mut(placement.y + sy as u32);
        for (sx, src) in src_row.enumerate() {
            let i = (x0 + sx) * 4;
            let dst = [dst_row[i], dst_row[i + 1], dst_row[i + 2], dst_row[i + 3]];
            dst_row[i..i + 4].copy_from_slice(&over_straight(dst, src.0));
        }
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
