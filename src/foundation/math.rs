pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Inverse of premultiplication for a single channel.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Fraction of a pixel covered by a disc edge at signed distance `radius - dist`.
///
/// One-pixel wide linear ramp centred on the circle boundary.
pub(crate) fn disc_coverage(dist: f64, radius: f64) -> f64 {
    (radius - dist + 0.5).clamp(0.0, 1.0)
}
