use crate::foundation::error::{MemeError, MemeResult};
use crate::foundation::math::{mul_div255_u16, mul_div255_u8};

/// Straight-alpha RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];
/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of a straight-alpha `src` onto a straight-alpha `dst`.
pub fn over_straight(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        _ => over_premul_onto_straight(dst, premultiply(src)),
    }
}

/// Source-over of a premultiplied `src` onto a straight-alpha `dst`, returning straight alpha.
pub fn over_premul_onto_straight(dst: StraightRgba8, src: PremulRgba8) -> StraightRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255 - sa;
    let da = mul_div255_u16(u16::from(dst[3]), inv);
    let out_a = sa + da;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        // premultiplied sum, then back to straight
        let dc = mul_div255_u16(u16::from(dst[i]), da);
        let pc = u32::from(u16::from(src[i]) + dc).min(255);
        out[i] = ((pc * 255 + u32::from(out_a) / 2) / u32::from(out_a)).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Composite a premultiplied overlay buffer onto a straight-alpha frame buffer of equal size.
pub fn over_premul_in_place(dst: &mut [u8], overlay: &[u8]) -> MemeResult<()> {
    if dst.len() != overlay.len() || !dst.len().is_multiple_of(4) {
        return Err(MemeError::render(
            "overlay composite expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over_premul_onto_straight([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn premultiply(px: StraightRgba8) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
