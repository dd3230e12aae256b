use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use sha2::Digest as _;
use usvg::fontdb;

use crate::foundation::error::{MemeError, MemeResult};
use crate::foundation::math::Fnv1a64;

/// Environment variable naming a font file that overrides system discovery.
pub const FONT_ENV: &str = "CURSED_MEME_FONT";

/// Display faces tried in order before falling back to any sans-serif.
pub const PREFERRED_FAMILIES: [&str; 5] = [
    "Impact",
    "Arial Black",
    "Anton",
    "Liberation Sans",
    "DejaVu Sans",
];

/// Where caption glyphs come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// Query the system font database for a bold display face.
    #[default]
    System,
    /// Load a specific font file (`.ttf`, `.otf`, `.ttc`).
    File(PathBuf),
}

impl FontSource {
    /// `File` when [`FONT_ENV`] is set and non-empty, otherwise `fallback`.
    pub fn from_env_or(fallback: FontSource) -> FontSource {
        match std::env::var_os(FONT_ENV) {
            Some(p) if !p.is_empty() => FontSource::File(PathBuf::from(p)),
            _ => fallback,
        }
    }
}

/// A resolved font face: family name plus the raw bytes of its file.
#[derive(Clone, Debug)]
pub struct CaptionFont {
    family: String,
    bytes: Arc<Vec<u8>>,
    index: u32,
    key: u64,
}

impl CaptionFont {
    /// Parse `bytes` and take the first face.
    pub fn from_bytes(bytes: Vec<u8>) -> MemeResult<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_data(bytes);
        let id = db
            .faces()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| MemeError::validation("font data contains no usable faces"))?;
        face_from_db(&db, id).ok_or_else(|| MemeError::validation("font face has no data"))
    }

    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>) -> MemeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    /// Best bold display face installed on this machine, if any.
    pub fn system() -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        pick_display_face(&db)
    }

    /// Resolve `source`. A missing system font is `Ok(None)`; an unreadable file is an error.
    pub fn resolve(source: &FontSource) -> MemeResult<Option<Self>> {
        match source {
            FontSource::System => Ok(Self::system()),
            FontSource::File(path) => Self::load(path).map(Some),
        }
    }

    /// Family name as reported by the font.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Face index inside a collection file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Hex SHA-256 of the font bytes.
    pub fn sha256_hex(&self) -> String {
        let digest = sha2::Sha256::digest(self.bytes.as_slice());
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{b:02x}"));
        }
        out
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }
}

fn pick_display_face(db: &fontdb::Database) -> Option<CaptionFont> {
    let mut families: Vec<fontdb::Family<'_>> =
        PREFERRED_FAMILIES.iter().map(|f| fontdb::Family::Name(*f)).collect();
    families.push(fontdb::Family::SansSerif);

    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::BOLD,
        ..fontdb::Query::default()
    };
    let id = match db.query(&query) {
        Some(id) => id,
        None => {
            let first = db.faces().next()?.id;
            tracing::warn!("no preferred caption face installed; using first available font");
            first
        }
    };
    face_from_db(db, id)
}

fn face_from_db(db: &fontdb::Database, id: fontdb::ID) -> Option<CaptionFont> {
    let family = db
        .face(id)?
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_default();
    db.with_face_data(id, |data, index| {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(data);
        h.write_u64(u64::from(index));
        CaptionFont {
            family,
            bytes: Arc::new(data.to_vec()),
            index,
            key: h.finish(),
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
