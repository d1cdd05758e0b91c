/// Warp field evaluation and per-frame compositing.
pub mod compositor;
/// RGB8 frame buffer and sampling.
pub mod frame;
/// Feature-line debug overlay.
pub mod overlay;
