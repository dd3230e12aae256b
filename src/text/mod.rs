//! Outlined caption text: font discovery, Parley shaping and `vello_cpu` rasterisation.

/// Font discovery and loading.
pub mod font;
pub(crate) mod layout;
/// Outlined, centered text drawing.
pub mod painter;

pub use font::{CaptionFont, FONT_ENV, FontSource, PREFERRED_FAMILIES};
pub use painter::{CenteredLine, LineExtent, TextPainter, TextStyle};
