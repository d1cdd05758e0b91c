//! Planar geometry primitives: vector helpers and directed feature lines.

/// Directed feature line segments.
pub mod line;
/// 2-D vector operations on [`kurbo::Vec2`].
pub mod vector;
