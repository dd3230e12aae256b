//! Frame type and the pipeline stages that draw into it.

/// Caption drawing.
pub mod captions;
/// Source-image fitting and letterboxing.
pub mod compose;
/// Pixel blending helpers.
pub mod composite;
/// The RGBA8 frame buffer.
pub mod frame;
/// Pipeline entry point.
pub mod pipeline;
/// "No image" frame.
pub mod placeholder;

pub use captions::{BOTTOM_BASELINE_INSET, TOP_BASELINE, render_captions};
pub use compose::{BACKGROUND, Placement, compose, fit_placement};
pub use frame::Frame;
pub use pipeline::Renderer;
pub use placeholder::{render_placeholder, vertical_gradient};
