//! Background rendering with last-write-wins commits.

/// Generation-checked render driver.
pub mod driver;

pub use driver::{ImageInput, PendingRender, RenderDriver, RenderOutcome, RenderRequest};
