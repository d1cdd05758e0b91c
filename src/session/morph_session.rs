use crate::config::MorphConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::field::interpolate::interpolate_lines;
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{MorphError, MorphResult};
use crate::geom::line::LineSegment;
use crate::lines::correspondence::LineCorrespondence;
use crate::render::compositor::{ComposeOpts, compose, ensure_same_size};
use crate::render::frame::FrameRGB;
use crate::render::overlay::draw_lines;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::mpsc;

const MAX_REORDER_BUFFER_BYTES: u64 = 128 * 1024 * 1024;

/// Options controlling how `MorphSession` spreads work over threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphSessionOpts {
    /// Render several frames at once on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames handed to the pool per batch (parallel mode only).
    pub chunk_size: usize,
    /// Override the number of worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Bounded channel capacity between render workers and the encoder thread.
    pub channel_capacity: usize,
    /// Split each frame's rows over the pool.
    pub parallel_rows: bool,
}

impl Default for MorphSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            channel_capacity: 4,
            parallel_rows: false,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames rendered and delivered to the sink.
    pub frames_rendered: u64,
    /// Batches the range was split into.
    pub chunks: u64,
}

/// A validated morph between two images.
///
/// Construction checks image sizes, the line correspondence and the config, and makes sure no
/// intermediate line collapses at any frame, so rendering only fails on sink or IO errors.
/// Frame `i` of `frame_count() + 1` frames sits at `t = i / frame_count()`; frame 0 is the
/// source image and the last frame is the destination image.
pub struct MorphSession {
    source: FrameRGB,
    destination: FrameRGB,
    lines: LineCorrespondence,
    config: MorphConfig,
    compose_opts: ComposeOpts,
    frame_count: u64,
    opts: MorphSessionOpts,
}

impl MorphSession {
    /// Validate inputs and build a session.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            width = source.width,
            height = source.height,
            lines = lines.len(),
            parallel = opts.parallel
        )
    )]
    pub fn new(
        source: FrameRGB,
        destination: FrameRGB,
        lines: LineCorrespondence,
        config: MorphConfig,
        opts: MorphSessionOpts,
    ) -> MorphResult<Self> {
        ensure_same_size(&source, &destination)?;
        config.validate()?;
        if let Some(n) = opts.threads
            && n == 0
        {
            return Err(MorphError::validation("'threads' must be >= 1 when set"));
        }

        let frame_count = config.resolved_frame_count();
        if frame_count.checked_add(1).is_none() {
            return Err(MorphError::validation("frame count is too large"));
        }
        let session = Self {
            compose_opts: config.compose_opts(opts.parallel_rows),
            source,
            destination,
            lines,
            config,
            frame_count,
            opts,
        };
        for f in 0..session.total_frames() {
            session.lines_at(session.t_at(FrameIndex(f))?)?;
        }
        tracing::debug!(frame_count, "morph session ready");
        Ok(session)
    }

    /// Number of frame steps between the two images.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames in the full sequence, both end images included.
    pub fn total_frames(&self) -> u64 {
        self.frame_count.saturating_add(1)
    }

    /// Full sequence as a range.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total_frames()),
        }
    }

    /// Output `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Active config.
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Feature-line correspondence.
    pub fn lines(&self) -> &LineCorrespondence {
        &self.lines
    }

    /// Morph progress of `frame`: `0` at the first image, `1` at the second.
    pub fn t_at(&self, frame: FrameIndex) -> MorphResult<f64> {
        if frame.0 > self.frame_count {
            return Err(MorphError::validation(format!(
                "frame {} is outside the sequence (last frame is {})",
                frame.0, self.frame_count
            )));
        }
        Ok(frame.0 as f64 / self.frame_count as f64)
    }

    /// Intermediate feature lines at morph progress `t`.
    pub fn lines_at(&self, t: f64) -> MorphResult<Vec<LineSegment>> {
        check_progress(t)?;
        interpolate_lines(self.lines.source(), self.lines.destination(), 1.0 - t)
    }

    /// Render the frame at morph progress `t` in `[0, 1]`.
    pub fn render_at(&self, t: f64) -> MorphResult<FrameRGB> {
        let intermediate = self.lines_at(t)?;
        let mut frame = compose(
            &self.source,
            &self.destination,
            self.lines.source(),
            &intermediate,
            self.lines.destination(),
            1.0 - t,
            &self.compose_opts,
        )?;
        if self.config.overlay_lines {
            draw_lines(&mut frame, &intermediate, self.config.overlay_style);
        }
        Ok(frame)
    }

    /// Render one frame of the sequence.
    pub fn render_frame(&self, frame: FrameIndex) -> MorphResult<FrameRGB> {
        let t = self.t_at(frame)?;
        tracing::debug!(frame = frame.0, t, "render frame");
        self.render_at(t)
    }

    /// Lazily render the whole sequence in order.
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            session: self,
            next: 0,
        }
    }

    /// Render a frame range and stream it into a sink.
    ///
    /// The sink receives frames in strictly increasing index order. With `parallel` enabled,
    /// out-of-order worker completion is reordered at the sink boundary, with bounded channel
    /// backpressure.
    #[tracing::instrument(level = "info", skip(self, sink))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> MorphResult<RenderStats> {
        if range.is_empty() {
            return Err(MorphError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end.0 > self.total_frames() {
            return Err(MorphError::validation(format!(
                "render_range end {} exceeds the sequence length {}",
                range.end.0,
                self.total_frames()
            )));
        }

        let (width, height) = self.dimensions();
        let cfg = SinkConfig {
            width,
            height,
            fps: self.config.fps,
            start: range.start,
            frame_count: range.len_frames(),
        };

        let cap = self.opts.channel_capacity.max(1);
        let bytes_per_frame = u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(3)
            .max(1);
        let max_chunk_by_mem = (MAX_REORDER_BUFFER_BYTES / bytes_per_frame).max(1);
        let chunk_size = normalized_chunk_size(self.opts.chunk_size)
            .min(max_chunk_by_mem)
            .min(range.len_frames());

        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        std::thread::scope(|scope| -> MorphResult<RenderStats> {
            let (tx, rx) = mpsc::sync_channel::<FrameMsg>(cap);
            let range_start = range.start.0;
            let range_end = range.end.0;
            let sink_ref: &mut dyn FrameSink = sink;

            let enc = scope.spawn(move || -> MorphResult<()> {
                sink_ref.begin(cfg)?;

                let mut next = range_start;
                let mut pending = HashMap::<u64, FrameRGB>::new();
                while next < range_end {
                    if let Some(frame) = pending.remove(&next) {
                        sink_ref.push_frame(FrameIndex(next), &frame)?;
                        next += 1;
                        continue;
                    }
                    let msg = rx.recv().map_err(|_| {
                        MorphError::encode("encoder channel disconnected unexpectedly")
                    })?;
                    pending.insert(msg.idx.0, msg.frame);
                }

                sink_ref.end()?;
                Ok(())
            });

            let mut stats = RenderStats::default();
            let produce_res = self.produce(pool.as_ref(), &tx, range, chunk_size, &mut stats);

            drop(tx);
            let enc_res = enc
                .join()
                .map_err(|_| MorphError::encode("encoder thread panicked"))?;

            match (produce_res, enc_res) {
                (Ok(()), enc_res) => enc_res?,
                // The sink failed first and closed the channel under the producer.
                (Err(MorphError::Encode(_)), Err(enc_err)) => return Err(enc_err),
                (Err(e), _) => return Err(e),
            }
            tracing::info!(
                frames = stats.frames_rendered,
                chunks = stats.chunks,
                "range rendered"
            );
            Ok(stats)
        })
    }

    fn produce(
        &self,
        pool: Option<&rayon::ThreadPool>,
        tx: &mpsc::SyncSender<FrameMsg>,
        range: FrameRange,
        chunk_size: u64,
        stats: &mut RenderStats,
    ) -> MorphResult<()> {
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            match pool {
                Some(pool) => self.render_chunk_parallel(pool, tx, chunk_start, chunk_end)?,
                None => {
                    for f in chunk_start..chunk_end {
                        let frame = self.render_frame(FrameIndex(f))?;
                        send_frame(tx, FrameIndex(f), frame)?;
                    }
                }
            }
            stats.frames_total += chunk_end - chunk_start;
            stats.frames_rendered += chunk_end - chunk_start;
            stats.chunks += 1;
            chunk_start = chunk_end;
        }
        Ok(())
    }

    fn render_chunk_parallel(
        &self,
        pool: &rayon::ThreadPool,
        tx: &mpsc::SyncSender<FrameMsg>,
        start: u64,
        end: u64,
    ) -> MorphResult<()> {
        pool.install(|| {
            (start..end).into_par_iter().try_for_each(|f| {
                let frame = self.render_frame(FrameIndex(f))?;
                send_frame(tx, FrameIndex(f), frame)
            })
        })
    }
}

/// Ordered, lazily rendered frames of a [`MorphSession`].
pub struct Frames<'a> {
    session: &'a MorphSession,
    next: u64,
}

impl Iterator for Frames<'_> {
    type Item = MorphResult<(FrameIndex, FrameRGB)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.session.total_frames() {
            return None;
        }
        let idx = FrameIndex(self.next);
        self.next += 1;
        Some(self.session.render_frame(idx).map(|f| (idx, f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.session.total_frames().saturating_sub(self.next);
        let left = usize::try_from(left).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl std::iter::FusedIterator for Frames<'_> {}

#[derive(Debug)]
struct FrameMsg {
    idx: FrameIndex,
    frame: FrameRGB,
}

fn send_frame(tx: &mpsc::SyncSender<FrameMsg>, idx: FrameIndex, frame: FrameRGB) -> MorphResult<()> {
    tx.send(FrameMsg { idx, frame })
        .map_err(|_| MorphError::encode("encoder thread is not accepting frames"))
}

fn check_progress(t: f64) -> MorphResult<()> {
    if !(0.0..=1.0).contains(&t) {
        return Err(MorphError::validation(format!(
            "morph progress must be within [0, 1], got {t}"
        )));
    }
    Ok(())
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 { 1 } else { chunk_size as u64 }
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MorphError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/morph_session.rs"]
mod tests;
