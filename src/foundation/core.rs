use crate::foundation::error::{MemeError, MemeResult};

pub use kurbo::Rect;

/// Output frame width used by the meme pipeline.
pub const FRAME_WIDTH: u32 = 800;
/// Output frame height used by the meme pipeline.
pub const FRAME_HEIGHT: u32 = 600;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The fixed 800x600 meme frame.
    pub const MEME: Self = Self {
        width: FRAME_WIDTH,
        height: FRAME_HEIGHT,
    };

    /// Create a validated canvas.
    ///
    /// Both axes must be in `1..=u16::MAX`; the text rasteriser addresses pixels with `u16`.
    pub fn new(width: u32, height: u32) -> MemeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MemeError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(MemeError::validation(format!(
                "canvas {width}x{height} exceeds {}x{}",
                u16::MAX,
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn area_px(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        self.area_px() * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::MEME
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, the letterbox fill.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white, the caption fill.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
