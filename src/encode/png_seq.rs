use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::decode::save_png;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MorphError, MorphResult};
use crate::render::frame::FrameRGB;

/// Sink that writes each frame to `<dir>/<prefix><index>.png`, zero-padded.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    digits: usize,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Write `frame_00000.png`, `frame_00001.png`, ... into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame_".to_owned(),
            digits: 5,
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Replace the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Path a frame index is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!(
            "{}{:0width$}.png",
            self.prefix,
            idx.0,
            width = self.digits
        ))
    }

    /// Files written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create frame directory '{}'", self.dir.display()))?;
        // Widen the counter for very long sequences so names still sort.
        if let Some(last) = cfg.last_index() {
            self.digits = self.digits.max(last.0.to_string().len());
        }
        tracing::info!(
            dir = %self.dir.display(),
            frames = cfg.frame_count,
            "png sequence started"
        );
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> MorphResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| MorphError::encode("png sequence sink not started"))?;
        if frame.dimensions() != (cfg.width, cfg.height) {
            return Err(MorphError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.frame_path(idx);
        save_png(frame, &path)?;
        tracing::trace!(path = %path.display(), "frame written");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        if self.cfg.take().is_none() {
            return Err(MorphError::encode("png sequence sink not started"));
        }
        tracing::info!(
            dir = %self.dir.display(),
            frames = self.written.len(),
            "png sequence finished"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png_seq.rs"]
mod tests;
