//! linemorph morphs one image into another by warping both along corresponding feature
//! lines and cross-dissolving the results.
//!
//! The public API is session-oriented:
//!
//! - Load two images and a [`LineCorrespondence`] (for example from `.mld` line files)
//! - Create a [`MorphSession`] with a [`MorphConfig`]
//! - Render single frames, iterate the sequence, or stream a range into a [`FrameSink`]
//!
//! The lower-level pieces ([`interpolate_lines`], [`compose`], the `(u, v)` line coordinates in
//! [`field::warp`]) are public for callers that drive their own frame loop.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image decode and encode.
pub mod assets;
/// JSON-loadable morph settings.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Feature-line field math.
pub mod field;
/// Vectors and feature lines.
pub mod geom;
/// Line correspondences and line files.
pub mod lines;
/// Frame buffers, compositing and overlays.
pub mod render;
/// Sequence rendering.
pub mod session;

pub use crate::foundation::core::{Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{MorphError, MorphResult};

pub use crate::assets::decode::{decode_image, load_image, save_png};
pub use crate::config::MorphConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::png_seq::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::field::interpolate::interpolate_lines;
pub use crate::field::weight::WarpParams;
pub use crate::geom::line::LineSegment;
pub use crate::lines::correspondence::LineCorrespondence;
pub use crate::lines::mld::{parse_mld, read_mld, save_mld, write_mld};
pub use crate::render::compositor::{BlendMode, ComposeOpts, Sampling, compose};
pub use crate::render::frame::FrameRGB;
pub use crate::render::overlay::{OverlayStyle, draw_lines};
pub use crate::session::morph_session::{MorphSession, MorphSessionOpts, RenderStats};
