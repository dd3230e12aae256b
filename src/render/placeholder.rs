use crate::foundation::core::Rgba8;
use crate::foundation::error::MemeResult;
use crate::render::frame::Frame;
use crate::text::painter::{CenteredLine, TextPainter, TextStyle};

/// Gradient color at the top row.
pub const GRADIENT_TOP: Rgba8 = Rgba8::opaque(0x1a, 0x1a, 0x1a);
/// Gradient color at the bottom row.
pub const GRADIENT_BOTTOM: Rgba8 = Rgba8::opaque(0x33, 0x33, 0x33);
/// The two centered prompt lines.
pub const PLACEHOLDER_LINES: [&str; 2] = ["UPLOAD IMAGE", "TO BEGIN CORRUPTION"];

/// Fill `frame` with a vertical two-stop gradient.
pub fn vertical_gradient(mut frame: Frame, top: Rgba8, bottom: Rgba8) -> Frame {
    let last = frame.height().saturating_sub(1).max(1) as f32;
    for y in 0..frame.height() {
        let t = y as f32 / last;
        let lerp = |a: u8, b: u8| -> u8 {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        let px = [
            lerp(top.r, bottom.r),
            lerp(top.g, bottom.g),
            lerp(top.b, bottom.b),
            lerp(top.a, bottom.a),
        ];
        for c in frame.row_mut(y).chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
    }
    frame
}

/// The "no image" frame: dark gradient plus a two-line prompt.
#[tracing::instrument(skip_all)]
pub fn render_placeholder(frame: Frame, painter: &mut TextPainter) -> MemeResult<Frame> {
    let frame = vertical_gradient(frame, GRADIENT_TOP, GRADIENT_BOTTOM);
    let style = TextStyle::placeholder(frame.height());
    let mid = frame.height() as f32 / 2.0;
    let lines = [
        CenteredLine {
            text: PLACEHOLDER_LINES[0],
            baseline_y: mid - style.size_px * 0.25,
        },
        CenteredLine {
            text: PLACEHOLDER_LINES[1],
            baseline_y: mid + style.size_px,
        },
    ];
    painter.draw_centered(frame, &lines, style)
}

#[cfg(test)]
#[path = "../../tests/unit/render/placeholder.rs"]
mod tests;
