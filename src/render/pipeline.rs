use crate::assets::source::SourceImage;
use crate::captions::CaptionPair;
use crate::effects::glitch::apply_stack;
use crate::effects::random::RandomSource;
use crate::effects::settings::GlitchSettings;
use crate::foundation::core::Canvas;
use crate::foundation::error::MemeResult;
use crate::render::captions::render_captions;
use crate::render::compose::compose;
use crate::render::frame::Frame;
use crate::render::placeholder::render_placeholder;
use crate::text::font::FontSource;
use crate::text::painter::TextPainter;

/// Runs the full meme pipeline.
///
/// With a source image:
/// 1. [`compose`] the image onto a black frame
/// 2. [`apply_stack`] the glitch stages
/// 3. [`render_captions`]
///
/// Without one, [`render_placeholder`] replaces the first two steps and glitches are not applied.
///
/// A `Renderer` owns the [`TextPainter`] and is meant to be reused across renders.
#[derive(Debug)]
pub struct Renderer {
    painter: TextPainter,
}

impl Renderer {
    /// Renderer drawing text with `painter`.
    pub fn new(painter: TextPainter) -> Self {
        Self { painter }
    }

    /// Resolve `source` into a painter and wrap it.
    pub fn from_font_source(source: &FontSource) -> MemeResult<Self> {
        Ok(Self::new(TextPainter::from_source(source)?))
    }

    /// Shared access to the text painter.
    pub fn painter(&self) -> &TextPainter {
        &self.painter
    }

    /// Render into `frame`, whose size is kept. Empty sources take the placeholder path.
    #[tracing::instrument(
        skip(self, frame, source, captions, rng),
        fields(width = frame.width(), height = frame.height(), has_source = source.is_some())
    )]
    pub fn render(
        &mut self,
        frame: Frame,
        source: Option<&SourceImage>,
        captions: &CaptionPair,
        settings: &GlitchSettings,
        rng: &mut dyn RandomSource,
    ) -> MemeResult<Frame> {
        let frame = match source.filter(|s| !s.is_empty()) {
            Some(src) => {
                let frame = compose(frame, Some(src));
                apply_stack(frame, settings, rng)
            }
            None => render_placeholder(frame, &mut self.painter)?,
        };
        render_captions(frame, captions, &mut self.painter)
    }

    /// Allocate an 800x600 frame and [`render`](Self::render) into it.
    pub fn render_new(
        &mut self,
        source: Option<&SourceImage>,
        captions: &CaptionPair,
        settings: &GlitchSettings,
        rng: &mut dyn RandomSource,
    ) -> MemeResult<Frame> {
        let frame = Frame::new(Canvas::MEME)?;
        self.render(frame, source, captions, settings, rng)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
