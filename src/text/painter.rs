use std::collections::HashMap;

use crate::foundation::core::Rgba8;
use crate::foundation::error::MemeResult;
use crate::render::composite::over_premul_in_place;
use crate::render::frame::Frame;
use crate::text::font::{CaptionFont, FontSource};
use crate::text::layout::{CaptionLayout, TextLayoutEngine};

/// Outlined text style: a stroke pass in `outline` followed by a fill pass in `fill`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Stroke width in pixels.
    pub outline_px: f32,
    /// Glyph fill.
    pub fill: Rgba8,
    /// Glyph outline.
    pub outline: Rgba8,
}

impl TextStyle {
    /// Caption style for a frame `frame_height` pixels tall (48px text at 600).
    pub fn caption(frame_height: u32) -> Self {
        Self {
            size_px: frame_height as f32 * 0.08,
            outline_px: 8.0,
            fill: Rgba8::WHITE,
            outline: Rgba8::BLACK,
        }
    }

    /// Smaller style used by the "no image" placeholder.
    pub fn placeholder(frame_height: u32) -> Self {
        Self {
            size_px: frame_height as f32 * 0.04,
            outline_px: 4.0,
            ..Self::caption(frame_height)
        }
    }
}

/// One horizontally centered line of text, anchored on its baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredLine<'a> {
    /// Text to draw; empty lines are skipped.
    pub text: &'a str,
    /// Baseline y in frame pixels.
    pub baseline_y: f32,
}

/// Horizontal metrics of a laid-out line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineExtent {
    /// Advance width in pixels.
    pub width: f32,
    /// Distance from baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from baseline to the bottom of the line box.
    pub descent: f32,
}

/// Rasteriser font handles for the faces parley shaped with, keyed by blob id and face index.
///
/// Runs that fell back to another face carry glyph ids of that face, so every run is drawn with
/// its own font rather than the caption font.
#[derive(Default)]
struct RunFonts {
    cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl RunFonts {
    fn resolve(&mut self, blob_id: u64, index: u32, bytes: &[u8]) -> vello_cpu::peniko::FontData {
        self.cache
            .entry((blob_id, index))
            .or_insert_with(|| {
                let blob = vello_cpu::peniko::Blob::from(bytes.to_vec());
                vello_cpu::peniko::FontData::new(blob, index)
            })
            .clone()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.cache.len()
    }
}

/// Lays out and rasterises outlined text onto frames.
///
/// Holds the resolved font and the shaping contexts, so it is meant to be built once and reused
/// across renders. Without a font every draw is a no-op.
pub struct TextPainter {
    engine: TextLayoutEngine,
    font: Option<CaptionFont>,
    run_fonts: RunFonts,
}

impl std::fmt::Debug for TextPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPainter")
            .field("family", &self.font.as_ref().map(CaptionFont::family))
            .finish_non_exhaustive()
    }
}

impl TextPainter {
    /// Painter drawing with `font`; `None` disables text.
    pub fn new(font: Option<CaptionFont>) -> Self {
        Self {
            engine: TextLayoutEngine::new(),
            font,
            run_fonts: RunFonts::default(),
        }
    }

    /// Resolve `source` and build a painter. Warns when no font could be found.
    pub fn from_source(source: &FontSource) -> MemeResult<Self> {
        let font = CaptionFont::resolve(source)?;
        match &font {
            Some(f) => tracing::debug!(family = f.family(), "caption font resolved"),
            None => tracing::warn!("no usable font found; text will not be drawn"),
        }
        Ok(Self::new(font))
    }

    /// The font in use, if any.
    pub fn font(&self) -> Option<&CaptionFont> {
        self.font.as_ref()
    }

    /// Measure `text` at `size_px`. `None` without a font or for empty text.
    pub fn measure(&mut self, text: &str, size_px: f32) -> MemeResult<Option<LineExtent>> {
        let Some(font) = &self.font else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }
        let layout = self.engine.layout_line(text, font, size_px)?;
        Ok(layout.lines().next().map(|line| {
            let m = line.metrics();
            LineExtent {
                width: layout.width(),
                ascent: m.ascent,
                descent: m.descent,
            }
        }))
    }

    /// Draw each line centered on the frame width, outline first then fill.
    ///
    /// All lines go into one transparent overlay which is composited source-over at the end.
    pub fn draw_centered(
        &mut self,
        mut frame: Frame,
        lines: &[CenteredLine<'_>],
        style: TextStyle,
    ) -> MemeResult<Frame> {
        let Some(font) = &self.font else {
            return Ok(frame);
        };
        if lines.iter().all(|l| l.text.is_empty()) {
            return Ok(frame);
        }

        // Canvas dimensions are validated to fit in u16.
        let (w, h) = (frame.width() as u16, frame.height() as u16);
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let center_x = frame.width() as f32 / 2.0;

        for line in lines.iter().filter(|l| !l.text.is_empty()) {
            let layout = self.engine.layout_line(line.text, font, style.size_px)?;
            let Some(first) = layout.lines().next() else {
                continue;
            };
            let x = center_x - layout.width() / 2.0;
            let y = line.baseline_y - first.metrics().baseline;
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(x),
                f64::from(y),
            )));

            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(f64::from(style.outline_px))
                    .with_join(vello_cpu::kurbo::Join::Round),
            );
            ctx.set_paint(color(style.outline));
            draw_runs(&mut ctx, &layout, &mut self.run_fonts, Pass::Stroke);

            ctx.set_paint(color(style.fill));
            draw_runs(&mut ctx, &layout, &mut self.run_fonts, Pass::Fill);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        over_premul_in_place(frame.data_mut(), pixmap.data_as_u8_slice())?;
        Ok(frame)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pass {
    Stroke,
    Fill,
}

fn color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn draw_runs(
    ctx: &mut vello_cpu::RenderContext,
    layout: &CaptionLayout,
    fonts: &mut RunFonts,
    pass: Pass,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let font = run_font(fonts, &run);
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            let builder = ctx.glyph_run(&font).font_size(run.run().font_size());
            match pass {
                Pass::Stroke => builder.stroke_glyphs(glyphs),
                Pass::Fill => builder.fill_glyphs(glyphs),
            }
        }
    }
}

fn run_font(
    fonts: &mut RunFonts,
    run: &parley::layout::GlyphRun<'_, ()>,
) -> vello_cpu::peniko::FontData {
    let shaped = run.run().font();
    fonts.resolve(shaped.data.id(), shaped.index, shaped.data.data())
}

#[cfg(test)]
#[path = "../../tests/unit/text/painter.rs"]
mod tests;
