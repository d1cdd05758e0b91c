use crate::foundation::error::{MorphError, MorphResult};
use crate::geom::line::LineSegment;

/// Two index-aligned sequences of feature lines.
///
/// Line `i` of `source` marks the same feature as line `i` of `destination`. Construction
/// guarantees equal, non-zero lengths; the set is read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct LineCorrespondence {
    source: Vec<LineSegment>,
    destination: Vec<LineSegment>,
}

impl LineCorrespondence {
    /// Pair up two line sequences.
    pub fn new(source: Vec<LineSegment>, destination: Vec<LineSegment>) -> MorphResult<Self> {
        ensure_same_len(&source, &destination)?;
        Ok(Self {
            source,
            destination,
        })
    }

    /// Lines drawn on the first image.
    pub fn source(&self) -> &[LineSegment] {
        &self.source
    }

    /// Lines drawn on the second image.
    pub fn destination(&self) -> &[LineSegment] {
        &self.destination
    }

    /// Number of corresponding line pairs (`N >= 1`).
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Iterate `(source, destination)` pairs in index order.
    pub fn pairs(&self) -> impl Iterator<Item = (&LineSegment, &LineSegment)> {
        self.source.iter().zip(self.destination.iter())
    }
}

/// Check that two line sequences are non-empty and index-aligned.
pub(crate) fn ensure_same_len(reference: &[LineSegment], other: &[LineSegment]) -> MorphResult<()> {
    if reference.is_empty() {
        return Err(MorphError::EmptyLineSet);
    }
    if reference.len() != other.len() {
        return Err(MorphError::LineCountMismatch {
            expected: reference.len(),
            actual: other.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/lines/correspondence.rs"]
mod tests;
