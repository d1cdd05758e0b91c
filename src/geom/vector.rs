//! Elementary 2-D vector operations.
//!
//! Addition, subtraction, scaling and dot products come straight from [`kurbo::Vec2`]
//! (`a + b`, `a - b`, `v * s`, `a.dot(b)`); the helpers here cover the operations whose exact
//! convention matters to the warp field.

use crate::foundation::core::Vec2;

/// Vector sum `a + b`.
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Vector difference `a - b`.
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Scale `v` by `s`.
#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    v * s
}

/// Divide `v` by `s`, returning `None` when `s` is zero.
#[inline]
pub fn divide(v: Vec2, s: f64) -> Option<Vec2> {
    if s == 0.0 { None } else { Some(v / s) }
}

/// Dot product.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.dot(b)
}

/// Euclidean norm.
#[inline]
pub fn magnitude(v: Vec2) -> f64 {
    v.hypot()
}

/// 90° rotation `(x, y) -> (-y, x)`.
///
/// The orientation fixes the sign of the `v` line coordinate; the opposite rotation would
/// mirror every warp across its feature line.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[cfg(test)]
#[path = "../../tests/unit/geom/vector.rs"]
mod tests;
