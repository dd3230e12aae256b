use std::fmt;
use std::str::FromStr;

use crate::effects::random::RandomSource;
use crate::foundation::error::MemeError;

/// Top and bottom caption text. An empty string means "no caption".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptionPair {
    /// Text drawn near the top edge.
    pub top: String,
    /// Text drawn near the bottom edge.
    pub bottom: String,
}

impl CaptionPair {
    /// Build a pair from anything string-like.
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// `true` when neither caption would be drawn.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

/// Anything that can come up with a caption pair.
pub trait CaptionSource {
    /// Produce the next pair, drawing any randomness from `rng`.
    fn captions(&mut self, rng: &mut dyn RandomSource) -> CaptionPair;
}

/// Flavour of the preset phrase tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionMode {
    /// Unhinged internet nonsense.
    #[default]
    Delusional,
    /// Conspiratorial pseudo-depth.
    #[serde(alias = "woke")]
    Shadow,
    /// Out of touch.
    Boomer,
}

impl CaptionMode {
    /// Every mode, in menu order.
    pub const ALL: [CaptionMode; 3] = [
        CaptionMode::Delusional,
        CaptionMode::Shadow,
        CaptionMode::Boomer,
    ];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            CaptionMode::Delusional => "delusional",
            CaptionMode::Shadow => "shadow",
            CaptionMode::Boomer => "boomer",
        }
    }

    /// `(top, bottom)` phrase tables for this mode.
    pub fn tables(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            CaptionMode::Delusional => (&DELUSIONAL_TOP, &DELUSIONAL_BOTTOM),
            CaptionMode::Shadow => (&SHADOW_TOP, &SHADOW_BOTTOM),
            CaptionMode::Boomer => (&BOOMER_TOP, &BOOMER_BOTTOM),
        }
    }
}

impl fmt::Display for CaptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptionMode {
    type Err = MemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delusional" => Ok(CaptionMode::Delusional),
            "shadow" | "woke" => Ok(CaptionMode::Shadow),
            "boomer" => Ok(CaptionMode::Boomer),
            other => Err(MemeError::validation(format!(
                "unknown caption mode '{other}' (expected delusional, shadow or boomer)"
            ))),
        }
    }
}

const DELUSIONAL_TOP: [&str; 6] = [
    "WHEN THE VOID STARES BACK",
    "POV: YOU'RE THE MAIN CHARACTER",
    "NOBODY ASKED BUT HERE WE ARE",
    "THIS IS FINE (IT'S NOT FINE)",
    "EXISTENCE IS OPTIONAL",
    "REALITY.EXE HAS STOPPED WORKING",
];
const DELUSIONAL_BOTTOM: [&str; 6] = [
    "AND THAT'S ON PERIODT",
    "...OR IS IT?",
    "BOTTOM TEXT BOTTOM TEXT",
    "SOCIETY MOMENT",
    "SKILL ISSUE TBH",
    "EMOTIONAL DAMAGE UNLOCKED",
];
const SHADOW_TOP: [&str; 6] = [
    "THEY DON'T WANT YOU TO KNOW",
    "THE TRUTH THEY'RE HIDING",
    "WAKE UP SHEEPLE",
    "IT'S DEEPER THAN YOU THINK",
    "THEY'RE WATCHING",
    "THE SIMULATION GLITCHES",
];
const SHADOW_BOTTOM: [&str; 6] = [
    "BUT THE MATRIX HAS YOU",
    "STAY WOKE BESTIE",
    "CONSPIRACY CONFIRMED",
    "THE RABBIT HOLE GOES DEEPER",
    "QUESTION EVERYTHING",
    "TRUST NO ONE",
];
const BOOMER_TOP: [&str; 6] = [
    "BACK IN MY DAY",
    "KIDS THESE DAYS",
    "I DON'T UNDERSTAND",
    "WHEN I WAS YOUNG",
    "TECHNOLOGY BAD",
    "PHONES EVIL",
];
const BOOMER_BOTTOM: [&str; 6] = [
    "GOOGLE HOW TO DELETE",
    "SEND HELP PLZ",
    "LOVE GRANDMA",
    "IS THIS FACEBOOK?",
    "PRINTER NOT WORKING",
    "CALL ME HONEY",
];

/// Top used when generated text has no usable `TOP:` value.
pub const DEFAULT_GENERATED_TOP: &str = "WHEN THE VOID STARES BACK";
/// Bottom used when generated text has no usable `BOTTOM:` value.
pub const DEFAULT_GENERATED_BOTTOM: &str = "BOTTOM TEXT";

const FALLBACK_TOP: [&str; 3] = [
    "WHEN THE VOID STARES BACK",
    "REALITY.EXE HAS STOPPED WORKING",
    "POV: YOU'RE THE PROBLEM",
];
const FALLBACK_BOTTOM: [&str; 3] = ["AND THAT'S ON PERIOD", "BOTTOM TEXT", "THIS IS FINE"];

/// Uniform picks from the preset tables of one mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresetCaptions {
    /// Which tables to draw from.
    pub mode: CaptionMode,
}

impl PresetCaptions {
    /// Source for `mode`.
    pub fn new(mode: CaptionMode) -> Self {
        Self { mode }
    }
}

impl CaptionSource for PresetCaptions {
    fn captions(&mut self, rng: &mut dyn RandomSource) -> CaptionPair {
        let (top, bottom) = self.mode.tables();
        pick_pair(top, bottom, rng)
    }
}

/// Local stand-in for a failed text-generation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FallbackCaptions;

impl CaptionSource for FallbackCaptions {
    fn captions(&mut self, rng: &mut dyn RandomSource) -> CaptionPair {
        fallback_pair(rng)
    }
}

/// One uniform pick from each of the small fallback tables.
pub fn fallback_pair(rng: &mut dyn RandomSource) -> CaptionPair {
    pick_pair(&FALLBACK_TOP, &FALLBACK_BOTTOM, rng)
}

fn pick_pair(top: &[&str], bottom: &[&str], rng: &mut dyn RandomSource) -> CaptionPair {
    let t = top[rng.next_index(top.len())];
    let b = bottom[rng.next_index(bottom.len())];
    CaptionPair::new(t, b)
}

/// Extract captions from free-form generated text of the shape `TOP: ... BOTTOM: ...`.
///
/// Markers match case-insensitively. Whitespace after a marker, newlines included, is skipped.
/// The top value then ends at `BOTTOM:` or the end of its line; the bottom value ends at the end
/// of its line. Missing or blank values fall back to
/// [`DEFAULT_GENERATED_TOP`] and [`DEFAULT_GENERATED_BOTTOM`].
pub fn parse_generated(content: &str) -> CaptionPair {
    // ASCII uppercasing keeps byte offsets aligned with `content`.
    let upper = content.to_ascii_uppercase();

    let top = marker_value(content, &upper, "TOP:", Some("BOTTOM:"))
        .unwrap_or(DEFAULT_GENERATED_TOP);
    let bottom =
        marker_value(content, &upper, "BOTTOM:", None).unwrap_or(DEFAULT_GENERATED_BOTTOM);
    CaptionPair::new(top, bottom)
}

fn marker_value<'a>(
    content: &'a str,
    upper: &str,
    marker: &str,
    stop: Option<&str>,
) -> Option<&'a str> {
    let after = upper.find(marker)? + marker.len();
    // The value may start on a later line than its marker.
    let rest = &upper[after..];
    let start = after + (rest.len() - rest.trim_start().len());
    let line_end = upper[start..].find('\n').map_or(upper.len(), |i| start + i);
    let end = stop
        .and_then(|s| upper[start..line_end].find(s))
        .map_or(line_end, |i| start + i);
    let value = content[start..end].trim();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
#[path = "../tests/unit/captions/captions.rs"]
mod tests;
