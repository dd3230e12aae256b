use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{MemeError, MemeResult};

/// A frame as straight-alpha RGBA8 pixels.
///
/// A frame is owned by exactly one pipeline invocation and is moved by value through the
/// compositor, every effect stage and the caption renderer. Nothing else holds a handle to it
/// while a render is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    canvas: Canvas,
    /// RGBA8 bytes, tightly packed, row-major.
    data: Vec<u8>,
}

impl Frame {
    /// Allocate a transparent frame.
    pub fn new(canvas: Canvas) -> MemeResult<Self> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        Ok(Self {
            canvas,
            data: vec![0u8; canvas.rgba_len()],
        })
    }

    /// Allocate a frame filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgba8) -> MemeResult<Self> {
        let mut frame = Self::new(canvas)?;
        frame.fill(color);
        Ok(frame)
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> MemeResult<Self> {
        let canvas = Canvas::new(width, height)?;
        if data.len() != canvas.rgba_len() {
            return Err(MemeError::validation(format!(
                "frame buffer is {} bytes, expected {} for {width}x{height}",
                data.len(),
                canvas.rgba_len()
            )));
        }
        Ok(Self { canvas, data })
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Borrow the raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the frame and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one pixel; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.to_array();
        for c in self.data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
    }

    /// Borrow one row of pixels.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = (y as usize) * stride;
        &self.data[start..start + stride]
    }

    /// Mutably borrow one row of pixels.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = (y as usize) * stride;
        &mut self.data[start..start + stride]
    }

    pub(crate) fn stride(&self) -> usize {
        (self.canvas.width as usize) * 4
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }

    /// Borrow the pixels as an `image` buffer view.
    pub(crate) fn as_image_view(&self) -> Option<image::ImageBuffer<image::Rgba<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.canvas.width, self.canvas.height, self.data.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
