//! Line-relative coordinates for the feature-line field.
//!
//! A point is located against a directed line as `(u, v)`: `u` is the normalized projection
//! along the line (`0` at `p`, `1` at `q`) and `v` the signed perpendicular distance in
//! pixels. Re-applying the same `(u, v)` to a different line maps the point into that line's
//! frame.

use crate::foundation::core::Point;
use crate::geom::line::LineSegment;
use crate::geom::vector::{dot, magnitude, perpendicular};

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineCoords {
    /// Fraction along the line; outside `[0, 1]` beyond the endpoints.
    pub u: f64,
    /// Signed perpendicular offset; positive on the `perpendicular(q - p)` side.
    pub v: f64,
}

/// Projection parameter of `x` onto `line`.
pub fn calc_u(x: Point, line: &LineSegment) -> f64 {
    let pq = line.vector();
    dot(x - line.p(), pq) / pq.hypot2()
}

/// Signed perpendicular distance from `x` to the infinite extension of `line`.
pub fn calc_v(x: Point, line: &LineSegment) -> f64 {
    let pq = line.vector();
    dot(x - line.p(), perpendicular(pq)) / magnitude(pq)
}

/// Both line coordinates of `x`.
pub fn line_coords(x: Point, line: &LineSegment) -> LineCoords {
    LineCoords {
        u: calc_u(x, line),
        v: calc_v(x, line),
    }
}

/// Reconstruct the point with coordinates `c` relative to `line`.
pub fn calc_x_prime(line: &LineSegment, c: LineCoords) -> Point {
    let pq = line.vector();
    line.p() + pq * c.u + perpendicular(pq) * (c.v / magnitude(pq))
}

/// Distance from `x` to the segment, given its precomputed coordinates.
///
/// Past either end the distance is measured to that endpoint; alongside the segment it is
/// `|v|`.
pub fn distance_to_segment(x: Point, line: &LineSegment, c: LineCoords) -> f64 {
    if c.u >= 1.0 {
        magnitude(line.q() - x)
    } else if c.u <= 0.0 {
        magnitude(line.p() - x)
    } else {
        c.v.abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/warp.rs"]
mod tests;
