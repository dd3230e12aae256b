use std::borrow::Cow;
use std::collections::HashMap;

use crate::foundation::error::{MemeError, MemeResult};
use crate::text::font::CaptionFont;

/// Single-line caption layout.
pub(crate) type CaptionLayout = parley::Layout<()>;

/// Stateful helper for shaping captions with Parley.
///
/// Each distinct font is registered with the font collection once and looked up by family name
/// afterwards.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<u64, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    fn family_for(&mut self, font: &CaptionFont) -> MemeResult<String> {
        if let Some(name) = self.families.get(&font.key()) {
            return Ok(name.clone());
        }

        let registered = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
        let mut names = Vec::with_capacity(registered.len());
        for (id, _) in &registered {
            if let Some(name) = self.font_ctx.collection.family_name(*id) {
                names.push(name.to_owned());
            }
        }
        let name = match names.iter().position(|n| n == font.family()) {
            Some(i) => names.swap_remove(i),
            None => names
                .into_iter()
                .next()
                .ok_or_else(|| MemeError::render("no font families registered from font bytes"))?,
        };

        tracing::debug!(family = %name, "registered caption font");
        self.families.insert(font.key(), name.clone());
        Ok(name)
    }

    /// Shape `text` as one unwrapped bold line at `size_px`.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font: &CaptionFont,
        size_px: f32,
    ) -> MemeResult<CaptionLayout> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MemeError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family = self.family_for(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));

        let mut layout: CaptionLayout = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}
