use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::captions::CaptionPair;
use crate::effects::settings::GlitchSettings;
use crate::foundation::error::{MemeError, MemeResult};
use crate::foundation::math::Fnv1a64;
use crate::text::font::FontSource;

/// A saved render setup.
///
/// ```json
/// {
///   "image": "cat.png",
///   "captions": { "top": "WHEN THE VOID STARES BACK", "bottom": "BOTTOM TEXT" },
///   "glitch": { "rgbChaos": 40, "scanlines": 20, "vhsCorruption": 0, "jpegCrunch": 60, "saturation": 10 },
///   "seed": 7,
///   "font": "fonts/Anton-Regular.ttf"
/// }
/// ```
///
/// Every field is optional. Relative paths are resolved against the project file's directory
/// by [`Project::from_path`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Project {
    /// Source image file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    /// Caption text.
    pub captions: CaptionPair,
    /// Glitch intensities.
    pub glitch: GlitchSettings,
    /// Fixed seed; derived from the other inputs when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Font file overriding system discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Project {
    /// Parse a project from JSON. Paths are kept as written.
    pub fn from_reader<R: std::io::Read>(r: R) -> MemeResult<Self> {
        serde_json::from_reader(r).map_err(|e| MemeError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project file and resolve its relative paths against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> MemeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MemeError::validation(format!("open project JSON '{}': {e}", path.display()))
        })?;
        let mut project = Self::from_reader(BufReader::new(f))?;
        if let Some(base) = path.parent() {
            project.resolve_relative_to(base);
        }
        Ok(project)
    }

    /// Rebase relative `image` and `font` paths onto `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for p in [&mut self.image, &mut self.font].into_iter().flatten() {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }

    /// Font to use: the `CURSED_MEME_FONT` environment variable wins over the project's `font`.
    pub fn font_source(&self) -> FontSource {
        let fallback = self
            .font
            .clone()
            .map_or(FontSource::System, FontSource::File);
        FontSource::from_env_or(fallback)
    }

    /// `seed` if set, otherwise a stable hash of the captions, settings and image bytes.
    ///
    /// Identical inputs therefore always render identically.
    pub fn effective_seed(&self, image_bytes: Option<&[u8]>) -> u64 {
        if let Some(seed) = self.seed {
            return seed;
        }
        let g = self.glitch.clamped();
        let mut h = Fnv1a64::new_default();
        h.write_str(&self.captions.top);
        h.write_str(&self.captions.bottom);
        for v in [
            g.rgb_chaos,
            g.scanlines,
            g.vhs_corruption,
            g.jpeg_crunch,
            g.saturation,
        ] {
            h.write_u64(v as u64);
        }
        match image_bytes {
            Some(bytes) => {
                h.write_u64(bytes.len() as u64);
                h.write_bytes(bytes);
            }
            None => h.write_u64(u64::MAX),
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/project.rs"]
mod tests;
