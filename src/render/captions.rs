use crate::captions::CaptionPair;
use crate::foundation::error::MemeResult;
use crate::render::frame::Frame;
use crate::text::painter::{CenteredLine, TextPainter, TextStyle};

/// Baseline of the top caption, in pixels from the top edge.
pub const TOP_BASELINE: f32 = 80.0;
/// Distance from the bottom edge to the bottom caption's baseline.
pub const BOTTOM_BASELINE_INSET: f32 = 40.0;

/// Draw the non-empty captions of `captions` in outlined caption style.
#[tracing::instrument(skip_all, fields(top = !captions.top.is_empty(), bottom = !captions.bottom.is_empty()))]
pub fn render_captions(
    frame: Frame,
    captions: &CaptionPair,
    painter: &mut TextPainter,
) -> MemeResult<Frame> {
    if captions.is_empty() {
        return Ok(frame);
    }
    let h = frame.height();
    let lines = [
        CenteredLine {
            text: &captions.top,
            baseline_y: TOP_BASELINE,
        },
        CenteredLine {
            text: &captions.bottom,
            baseline_y: h as f32 - BOTTOM_BASELINE_INSET,
        },
    ];
    painter.draw_centered(frame, &lines, TextStyle::caption(h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/captions.rs"]
mod tests;
