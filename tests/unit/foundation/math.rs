use super::*;

#[test]
fn blend_endpoints_select_one_side() {
    assert_eq!(blend_u8(10, 200, 1.0), 10);
    assert_eq!(blend_u8(10, 200, 0.0), 200);
    assert_eq!(blend_u8(100, 200, 0.5), 150);
}

#[test]
fn blend_weight_is_clamped() {
    assert_eq!(blend_u8(10, 200, 3.0), 10);
    assert_eq!(blend_u8(10, 200, -1.0), 200);
}

#[test]
fn quantize_rounds_and_saturates() {
    assert_eq!(quantize_u8(12.5), 13);
    assert_eq!(quantize_u8(-4.0), 0);
    assert_eq!(quantize_u8(300.0), 255);
    assert_eq!(quantize_u8(f64::NAN), 0);
}

#[test]
fn lerp_hits_both_ends() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}
