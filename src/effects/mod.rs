//! The glitch effect stack.
//!
//! Five stages run in a fixed order over a composited frame. RGB chaos and VHS corruption draw
//! from an injected [`RandomSource`]; the other three are deterministic.

/// Stage implementations and the ordered stack.
pub mod glitch;
/// Random sources for the stochastic stages.
pub mod random;
/// Intensity settings.
pub mod settings;

pub use glitch::{Stage, apply_stack};
pub use random::{FloatSequence, RandomSource, SeededRandom};
pub use settings::{GlitchSettings, MAX_INTENSITY};
