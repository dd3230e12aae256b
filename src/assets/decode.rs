use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

use crate::assets::source::SourceImage;
use crate::foundation::error::{MemeError, MemeResult};

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into straight RGBA8.
///
/// Only the first frame of animated formats is kept.
pub fn decode_image(bytes: &[u8]) -> MemeResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| MemeError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_rgba(width, height, rgba.into_raw())
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> MemeResult<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Decode a `data:image/...;base64,` URI.
pub fn decode_data_uri(uri: &str) -> MemeResult<SourceImage> {
    decode_image(&data_uri_bytes(uri)?)
}

pub(crate) fn data_uri_bytes(uri: &str) -> MemeResult<Vec<u8>> {
    let uri = uri.trim();
    if !uri.starts_with("data:image/") {
        return Err(MemeError::decode("data uri must start with 'data:image/'"));
    }
    let start = uri
        .find(";base64,")
        .ok_or_else(|| MemeError::decode("data uri is missing the ';base64,' marker"))?;
    base64::engine::general_purpose::STANDARD
        .decode(&uri[start + ";base64,".len()..])
        .map_err(|e| MemeError::decode(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
