use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use base64::Engine as _;
use image::ImageEncoder as _;

use crate::foundation::error::{MemeError, MemeResult};
use crate::render::frame::Frame;

/// Prefix of the URIs produced by [`to_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode `frame` as a PNG file in memory.
pub fn encode_png(frame: &Frame) -> MemeResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            frame.data(),
            frame.width(),
            frame.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| MemeError::export(format!("encode png: {e}")))?;
    Ok(out)
}

/// `data:image/png;base64,...` URI of `frame`.
pub fn to_data_uri(frame: &Frame) -> MemeResult<String> {
    let png = encode_png(frame)?;
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(&png, &mut uri);
    Ok(uri)
}

/// Write `frame` as a PNG to `path`, creating missing parent directories.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_png(frame: &Frame, path: impl AsRef<Path>) -> MemeResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = encode_png(frame)?;
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!("png written");
    Ok(())
}

/// `cursed-meme-<millis>.png` for the given instant.
pub fn export_name_at(time: SystemTime) -> String {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("cursed-meme-{millis}.png")
}

/// File name for an export made right now.
pub fn default_export_name() -> String {
    export_name_at(SystemTime::now())
}

#[cfg(test)]
#[path = "../tests/unit/export/export.rs"]
mod tests;
