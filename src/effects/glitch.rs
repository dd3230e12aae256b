use image::imageops::{self, FilterType};

use crate::effects::random::RandomSource;
use crate::effects::settings::{GlitchSettings, MAX_INTENSITY};
use crate::foundation::math::{luma_bt601, mul_div255_u8, round_clamp_u8};
use crate::render::frame::Frame;

/// Per-pixel chance of a chaos hit at full intensity.
pub const RGB_CHAOS_PROBABILITY: f32 = 0.3;
/// Red/blue offset at full intensity.
pub const RGB_CHAOS_MAX_SHIFT: i32 = 20;
/// Scanline opacity is `intensity / SCANLINE_OPACITY_DIVISOR`.
pub const SCANLINE_OPACITY_DIVISOR: f32 = 300.0;
/// Strips at full VHS intensity.
pub const VHS_MAX_STRIPS: i32 = 10;
/// Strip heights are drawn from `MIN..MIN + JITTER`.
pub const VHS_MIN_STRIP_PX: f32 = 5.0;
/// See [`VHS_MIN_STRIP_PX`].
pub const VHS_STRIP_JITTER_PX: f32 = 20.0;
/// Total shift span at full intensity (`±SPAN/2` px).
pub const VHS_MAX_SHIFT_SPAN_PX: f32 = 40.0;
/// Smallest axis the resolution crunch will scale down to.
pub const CRUNCH_MIN_DIM: u32 = 50;
/// Lower bound of the crunch scale factor.
pub const CRUNCH_MIN_SCALE: f32 = 0.1;

/// One transformation of the effect stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Bernoulli red-up/blue-down channel perturbation.
    RgbChaos,
    /// Translucent black rows at a fixed stride.
    Scanlines,
    /// Horizontally displaced strips.
    VhsCorruption,
    /// Nearest-neighbour down/up scale.
    ResolutionCrunch,
    /// Push channels away from luma.
    Saturation,
}

impl Stage {
    /// Application order. Later stages see earlier stages' output.
    pub const ORDER: [Stage; 5] = [
        Stage::RgbChaos,
        Stage::Scanlines,
        Stage::VhsCorruption,
        Stage::ResolutionCrunch,
        Stage::Saturation,
    ];

    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Stage::RgbChaos => "rgb_chaos",
            Stage::Scanlines => "scanlines",
            Stage::VhsCorruption => "vhs_corruption",
            Stage::ResolutionCrunch => "resolution_crunch",
            Stage::Saturation => "saturation",
        }
    }

    /// The intensity this stage reads from `settings` (unclamped).
    pub fn intensity(self, settings: &GlitchSettings) -> i32 {
        match self {
            Stage::RgbChaos => settings.rgb_chaos,
            Stage::Scanlines => settings.scanlines,
            Stage::VhsCorruption => settings.vhs_corruption,
            Stage::ResolutionCrunch => settings.jpeg_crunch,
            Stage::Saturation => settings.saturation,
        }
    }

    /// Run this stage at `intensity` (clamped into `0..=100`).
    pub fn apply(self, frame: Frame, intensity: i32, rng: &mut dyn RandomSource) -> Frame {
        match self {
            Stage::RgbChaos => rgb_chaos(frame, intensity, rng),
            Stage::Scanlines => scanlines(frame, intensity),
            Stage::VhsCorruption => vhs_corruption(frame, intensity, rng),
            Stage::ResolutionCrunch => resolution_crunch(frame, intensity),
            Stage::Saturation => saturation(frame, intensity),
        }
    }
}

/// Run every non-zero stage in [`Stage::ORDER`].
///
/// Zero stages are skipped outright, so they neither touch pixels nor consume random samples.
#[tracing::instrument(skip(frame, rng), fields(width = frame.width(), height = frame.height()))]
pub fn apply_stack(frame: Frame, settings: &GlitchSettings, rng: &mut dyn RandomSource) -> Frame {
    let settings = settings.clamped();
    Stage::ORDER.iter().fold(frame, |frame, stage| {
        let intensity = stage.intensity(&settings);
        if intensity == 0 {
            return frame;
        }
        tracing::debug!(stage = stage.name(), intensity, "apply glitch stage");
        stage.apply(frame, intensity, rng)
    })
}

fn clamp_intensity(intensity: i32) -> i32 {
    intensity.clamp(0, MAX_INTENSITY)
}

fn unit(intensity: i32) -> f32 {
    clamp_intensity(intensity) as f32 / MAX_INTENSITY as f32
}

/// Randomly push red up and blue down; green and alpha are never touched.
pub fn rgb_chaos(mut frame: Frame, intensity: i32, rng: &mut dyn RandomSource) -> Frame {
    let intensity = clamp_intensity(intensity);
    if intensity == 0 {
        return frame;
    }
    let p = RGB_CHAOS_PROBABILITY * unit(intensity);
    let shift = (RGB_CHAOS_MAX_SHIFT * intensity / MAX_INTENSITY) as u8;

    for px in frame.data_mut().chunks_exact_mut(4) {
        if rng.next_unit() < p {
            px[0] = px[0].saturating_add(shift);
            px[2] = px[2].saturating_sub(shift);
        }
    }
    frame
}

/// Row stride between scanlines; tighter as intensity rises.
pub fn scanline_stride(intensity: i32) -> u32 {
    (6 - clamp_intensity(intensity) / 25).max(2) as u32
}

/// Scanline opacity in `[0, 1/3]`.
pub fn scanline_opacity(intensity: i32) -> f32 {
    clamp_intensity(intensity) as f32 / SCANLINE_OPACITY_DIVISOR
}

/// Darken every `stride`-th row with translucent black.
pub fn scanlines(mut frame: Frame, intensity: i32) -> Frame {
    let intensity = clamp_intensity(intensity);
    if intensity == 0 {
        return frame;
    }
    let alpha = ((scanline_opacity(intensity) * 255.0).round() as u16).min(255);
    let keep = 255 - alpha;
    let stride = scanline_stride(intensity) as usize;

    for y in (0..frame.height()).step_by(stride) {
        for px in frame.row_mut(y).chunks_exact_mut(4) {
            for c in &mut px[0..3] {
                *c = mul_div255_u8(u16::from(*c), keep);
            }
        }
    }
    frame
}

/// Copy random horizontal strips and paste them back shifted sideways.
///
/// Pixels shifted past either edge are dropped; the uncovered gap keeps what was there before.
pub fn vhs_corruption(mut frame: Frame, intensity: i32, rng: &mut dyn RandomSource) -> Frame {
    let intensity = clamp_intensity(intensity);
    if intensity == 0 {
        return frame;
    }
    let i = unit(intensity);
    // ceil(10 * i) without float error.
    let strips = (VHS_MAX_STRIPS * intensity + MAX_INTENSITY - 1) / MAX_INTENSITY;
    let h = frame.height();

    for _ in 0..strips {
        let y0 = ((rng.next_unit() * h as f32).floor() as u32).min(h - 1);
        let strip_h = (rng.next_unit() * VHS_STRIP_JITTER_PX + VHS_MIN_STRIP_PX).floor() as u32;
        let shift = ((rng.next_unit() - 0.5) * VHS_MAX_SHIFT_SPAN_PX * i).round() as i64;
        let y1 = y0.saturating_add(strip_h).min(h);
        for y in y0..y1 {
            shift_row(frame.row_mut(y), shift);
        }
    }
    frame
}

fn shift_row(row: &mut [u8], shift: i64) {
    let width = row.len() / 4;
    let s = shift.unsigned_abs() as usize;
    if s == 0 || s >= width {
        return;
    }
    if shift > 0 {
        row.copy_within(0..(width - s) * 4, s * 4);
    } else {
        row.copy_within(s * 4.., 0);
    }
}

/// Intermediate size used by the resolution crunch for a `width x height` frame.
///
/// Never below [`CRUNCH_MIN_DIM`] (unless the frame itself is smaller) and never above the
/// frame size.
pub fn crunch_dimensions(width: u32, height: u32, intensity: i32) -> (u32, u32) {
    let q = (1.0 - clamp_intensity(intensity) as f32 / 150.0).max(CRUNCH_MIN_SCALE);
    let scale = |v: u32| ((v as f32 * q).floor() as u32).max(CRUNCH_MIN_DIM).min(v).max(1);
    (scale(width), scale(height))
}

/// Nearest-neighbour downscale followed by a nearest-neighbour upscale.
pub fn resolution_crunch(mut frame: Frame, intensity: i32) -> Frame {
    let intensity = clamp_intensity(intensity);
    if intensity == 0 {
        return frame;
    }
    let (w, h) = (frame.width(), frame.height());
    let (sw, sh) = crunch_dimensions(w, h, intensity);
    if (sw, sh) == (w, h) {
        return frame;
    }

    let small = {
        let Some(view) = frame.as_image_view() else {
            return frame;
        };
        imageops::resize(&view, sw, sh, FilterType::Nearest)
    };
    let restored = imageops::resize(&small, w, h, FilterType::Nearest);
    frame.data_mut().copy_from_slice(restored.as_raw());
    frame
}

/// Scale each channel's distance from BT.601 luma by `1 + intensity/100`.
pub fn saturation(mut frame: Frame, intensity: i32) -> Frame {
    let intensity = clamp_intensity(intensity);
    if intensity == 0 {
        return frame;
    }
    let factor = 1.0 + unit(intensity);

    for px in frame.data_mut().chunks_exact_mut(4) {
        let l = luma_bt601(px[0], px[1], px[2]);
        for c in &mut px[0..3] {
            *c = round_clamp_u8(l + (f32::from(*c) - l) * factor);
        }
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
