//! Frame sinks.
//!
//! Sinks consume rendered morph frames in sequence order and are driven by
//! `MorphSession::render_range`.

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// Numbered PNG file sink.
pub mod png_seq;
/// Sink trait and the in-memory sink.
pub mod sink;
