//! JSON-loadable morph settings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::field::weight::WarpParams;
use crate::foundation::core::Fps;
use crate::foundation::error::{MorphError, MorphResult};
use crate::render::compositor::{BlendMode, ComposeOpts, Sampling};
use crate::render::overlay::OverlayStyle;

/// Largest accepted number of frame steps (about 11.5 hours at 24 fps).
pub const MAX_FRAME_COUNT: u64 = 1_000_000;

/// Everything that shapes a morph sequence apart from the inputs themselves.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Field weighting constants.
    pub warp: WarpParams,
    /// Playback rate.
    pub fps: Fps,
    /// Sequence length in seconds, used when `frame_count` is unset.
    pub duration_secs: f64,
    /// Explicit number of frame steps; overrides `fps * duration_secs`.
    pub frame_count: Option<u64>,
    /// How warped images are combined.
    pub blend: BlendMode,
    /// Image sampling filter.
    pub sampling: Sampling,
    /// Draw the intermediate feature lines onto each frame.
    pub overlay_lines: bool,
    /// Stroke used when `overlay_lines` is set.
    pub overlay_style: OverlayStyle,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            warp: WarpParams::default(),
            fps: Fps::default(),
            duration_secs: 2.0,
            frame_count: None,
            blend: BlendMode::default(),
            sampling: Sampling::default(),
            overlay_lines: false,
            overlay_style: OverlayStyle::default(),
        }
    }
}

impl MorphConfig {
    /// Parse a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> MorphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MorphError::validation(format!("parse morph config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MorphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MorphError::validation(format!("open morph config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every value, including the resolved frame count.
    pub fn validate(&self) -> MorphResult<()> {
        self.warp.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.frame_count.is_none()
            && (!self.duration_secs.is_finite() || self.duration_secs <= 0.0)
        {
            return Err(MorphError::validation(
                "duration_secs must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.overlay_style.opacity) {
            return Err(MorphError::validation(
                "overlay_style opacity must be within [0, 1]",
            ));
        }
        let frame_count = self.resolved_frame_count();
        if frame_count == 0 {
            return Err(MorphError::validation(
                "frame count must be >= 1 (raise fps, duration_secs or frame_count)",
            ));
        }
        if frame_count > MAX_FRAME_COUNT {
            return Err(MorphError::validation(format!(
                "frame count {frame_count} exceeds the maximum of {MAX_FRAME_COUNT}"
            )));
        }
        Ok(())
    }

    /// Number of frame steps: `frame_count`, else `floor(fps * duration_secs)`.
    ///
    /// A session renders this many steps plus one, so both end images appear.
    pub fn resolved_frame_count(&self) -> u64 {
        self.frame_count
            .unwrap_or_else(|| self.fps.secs_to_frames_floor(self.duration_secs))
    }

    /// Per-frame compositor options derived from this config.
    pub fn compose_opts(&self, parallel_rows: bool) -> ComposeOpts {
        ComposeOpts {
            warp: self.warp,
            blend: self.blend,
            sampling: self.sampling,
            parallel_rows,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
