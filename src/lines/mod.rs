//! Feature-line correspondences and their on-disk `.mld` format.

/// Index-aligned source/destination line sets.
pub mod correspondence;
/// Whitespace-separated `.mld` line files.
pub mod mld;
