use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{MorphError, MorphResult};
use crate::geom::vector::magnitude;

/// Directed feature line from `p` to `q`.
///
/// Endpoints are always finite and distinct; every constructor enforces this, so downstream
/// field math may divide by [`LineSegment::length`] freely.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    /// Build a segment, rejecting zero-length or non-finite lines.
    ///
    /// `index` is only used to label the error.
    pub fn new(p: Point, q: Point, index: usize) -> MorphResult<Self> {
        if !is_proper(p, q) {
            return Err(MorphError::DegenerateLine { index });
        }
        Ok(Self { p, q })
    }

    /// Convenience constructor from raw coordinates.
    pub fn from_coords(px: f64, py: f64, qx: f64, qy: f64, index: usize) -> MorphResult<Self> {
        Self::new(Point::new(px, py), Point::new(qx, qy), index)
    }

    /// Start point.
    pub fn p(&self) -> Point {
        self.p
    }

    /// End point.
    pub fn q(&self) -> Point {
        self.q
    }

    /// Direction vector `q - p`.
    pub fn vector(&self) -> Vec2 {
        self.q - self.p
    }

    /// Euclidean length, always `> 0`.
    pub fn length(&self) -> f64 {
        magnitude(self.vector())
    }

    /// Endpoint-wise affine blend `self * w + other * (1 - w)`.
    ///
    /// The blend of two valid lines can still collapse (e.g. two lines of opposite
    /// direction at `w = 0.5`), so the result is re-validated.
    pub fn blend(&self, other: &LineSegment, w: f64, index: usize) -> MorphResult<Self> {
        let mix = |a: Point, b: Point| -> Point {
            Point::new(a.x * w + b.x * (1.0 - w), a.y * w + b.y * (1.0 - w))
        };
        Self::new(mix(self.p, other.p), mix(self.q, other.q), index)
    }
}

fn is_proper(p: Point, q: Point) -> bool {
    p.is_finite() && q.is_finite() && p != q
}

/// A lone deserialized segment has no position in a sequence, so the error carries no index.
impl<'de> serde::Deserialize<'de> for LineSegment {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            p: Point,
            q: Point,
        }
        let raw = Raw::deserialize(d)?;
        if !is_proper(raw.p, raw.q) {
            return Err(serde::de::Error::custom(
                "degenerate line: endpoints must be finite and distinct",
            ));
        }
        Ok(Self { p: raw.p, q: raw.q })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geom/line.rs"]
mod tests;
