//! Feature-line field math: line interpolation, line-relative coordinates and weights.

/// Intermediate line sets between two correspondences.
pub mod interpolate;
/// Line-relative `(u, v)` coordinates and their reconstruction.
pub mod warp;
/// Per-line influence weights.
pub mod weight;
