use crate::effects::random::RandomSource;

/// Upper bound of every glitch intensity.
pub const MAX_INTENSITY: i32 = 100;

/// The five glitch intensities, each meaningful in `0..=100`.
///
/// Values outside that range are accepted here and clamped by [`GlitchSettings::clamped`] before
/// any stage reads them. `0` always means "leave the frame alone".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlitchSettings {
    /// Red/blue channel perturbation.
    pub rgb_chaos: i32,
    /// Dark horizontal bands.
    pub scanlines: i32,
    /// Horizontally shifted strips.
    pub vhs_corruption: i32,
    /// Nearest-neighbour resolution crunch.
    pub jpeg_crunch: i32,
    /// Saturation boost away from luma.
    pub saturation: i32,
}

impl GlitchSettings {
    /// Copy with every field clamped into `0..=100`.
    pub fn clamped(self) -> Self {
        let c = |v: i32| v.clamp(0, MAX_INTENSITY);
        Self {
            rgb_chaos: c(self.rgb_chaos),
            scanlines: c(self.scanlines),
            vhs_corruption: c(self.vhs_corruption),
            jpeg_crunch: c(self.jpeg_crunch),
            saturation: c(self.saturation),
        }
    }

    /// `true` when every stage would be a no-op.
    pub fn is_identity(self) -> bool {
        self.clamped() == Self::default()
    }

    /// Independent `floor(u * 100)` draw for every field.
    pub fn randomized(rng: &mut dyn RandomSource) -> Self {
        let mut draw = || (rng.next_unit() * MAX_INTENSITY as f32).floor() as i32;
        Self {
            rgb_chaos: draw(),
            scanlines: draw(),
            vhs_corruption: draw(),
            jpeg_crunch: draw(),
            saturation: draw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/settings.rs"]
mod tests;
