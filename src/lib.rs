//! `cursed-meme` turns an image and two captions into a deliberately degraded image macro.
//!
//! The pipeline is a plain function of its inputs plus a seeded random source:
//!
//! - [`compose`] fits the source image into an 800x600 black frame
//! - [`apply_stack`] runs the glitch stages ([`Stage::ORDER`])
//! - [`render_captions`] draws outlined top/bottom text
//!
//! [`Renderer`] ties these together, [`RenderDriver`] runs renders on worker threads with
//! last-write-wins commits, and the [`export`] module writes PNG files or data URIs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image decoding.
pub mod assets;
/// Caption pairs and where they come from.
pub mod captions;
/// Project files.
pub mod config;
/// The glitch effect stack.
pub mod effects;
/// PNG and data-URI export.
pub mod export;
/// Frame buffer and drawing stages.
pub mod render;
/// Background rendering.
pub mod session;
/// Caption text rendering.
pub mod text;

pub use crate::foundation::core::{Canvas, FRAME_HEIGHT, FRAME_WIDTH, Rect, Rgba8};
pub use crate::foundation::error::{MemeError, MemeResult};

pub use crate::assets::{SourceImage, decode_data_uri, decode_image, load_image};
pub use crate::captions::{
    CaptionMode, CaptionPair, CaptionSource, FallbackCaptions, PresetCaptions, fallback_pair,
    parse_generated,
};
pub use crate::config::Project;
pub use crate::effects::{
    FloatSequence, GlitchSettings, RandomSource, SeededRandom, Stage, apply_stack,
};
pub use crate::export::{default_export_name, encode_png, save_png, to_data_uri};
pub use crate::render::{Frame, Placement, Renderer, compose, fit_placement, render_captions};
pub use crate::render::{render_placeholder, vertical_gradient};
pub use crate::session::{ImageInput, PendingRender, RenderDriver, RenderOutcome, RenderRequest};
pub use crate::text::{CaptionFont, FontSource, TextPainter, TextStyle};
