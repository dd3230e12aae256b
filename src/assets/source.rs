use std::sync::Arc;

use crate::foundation::error::{MemeError, MemeResult};

/// Decoded source bitmap in straight RGBA8 form.
///
/// The pixel buffer is shared behind an [`Arc`]; cloning a `SourceImage` is cheap and the
/// pipeline only ever reads from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap a tightly packed straight RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, rgba8: Vec<u8>) -> MemeResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| MemeError::validation("source image size overflow"))?;
        if rgba8.len() != expected {
            return Err(MemeError::validation(format!(
                "source image buffer is {} bytes, expected {expected}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major straight RGBA8.
    pub fn rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// A zero-dimension image carries no pixels and is rendered as "no image".
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub(crate) fn as_image_view(&self) -> Option<image::ImageBuffer<image::Rgba<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.rgba8.as_slice())
    }
}
