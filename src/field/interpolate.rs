use crate::foundation::error::MorphResult;
use crate::geom::line::LineSegment;
use crate::lines::correspondence::ensure_same_len;

/// Blend two index-aligned line sets endpoint by endpoint.
///
/// Every endpoint becomes `source * t + destination * (1 - t)`, so `t = 1` reproduces
/// `source` and `t = 0` reproduces `destination`. Mismatched lengths are reported rather than
/// truncated, and an intermediate line that collapses to a point is rejected.
pub fn interpolate_lines(
    source: &[LineSegment],
    destination: &[LineSegment],
    t: f64,
) -> MorphResult<Vec<LineSegment>> {
    ensure_same_len(source, destination)?;
    source
        .iter()
        .zip(destination)
        .enumerate()
        .map(|(i, (s, d))| s.blend(d, t, i))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/field/interpolate.rs"]
mod tests;
