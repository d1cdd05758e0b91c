/// Blend two 8-bit channel values as `a * w + b * (1 - w)`, rounded to nearest.
///
/// `w` is clamped to `[0, 1]` so the result always stays within `[min(a, b), max(a, b)]`.
pub(crate) fn blend_u8(a: u8, b: u8, w: f64) -> u8 {
    let w = w.clamp(0.0, 1.0);
    let v = f64::from(a) * w + f64::from(b) * (1.0 - w);
    quantize_u8(v)
}

/// Round a real channel value to the nearest representable 8-bit value.
pub(crate) fn quantize_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two reals at parameter `s` (`s = 0` yields `a`).
pub(crate) fn lerp(a: f64, b: f64, s: f64) -> f64 {
    a + (b - a) * s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
