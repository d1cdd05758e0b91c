//! Multi-line warp and cross-dissolve of one output frame.
//!
//! For every output pixel `X`, each feature line contributes the displacement that maps `X`
//! from the intermediate line geometry back into the first and the second image. The
//! displacements are averaged with distance/length weights, the two images are sampled at the
//! resulting positions and the samples are blended.

use rayon::prelude::*;

use crate::field::warp::{calc_x_prime, distance_to_segment, line_coords};
use crate::field::weight::WarpParams;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::quantize_u8;
use crate::geom::line::LineSegment;
use crate::lines::correspondence::ensure_same_len;
use crate::render::frame::FrameRGB;

/// How the two warped images are combined into the output pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `source * w + destination * (1 - w)`.
    #[default]
    CrossDissolve,
    /// Warped source image only.
    SourceOnly,
    /// Warped destination image only.
    DestinationOnly,
}

/// How an image is read at a warped, sub-pixel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Round to the nearest pixel.
    #[default]
    Nearest,
    /// Bilinear filtering between the four surrounding pixels.
    Bilinear,
}

/// Options for [`compose`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComposeOpts {
    /// Field weighting constants.
    pub warp: WarpParams,
    /// Output blend.
    pub blend: BlendMode,
    /// Image sampling filter.
    pub sampling: Sampling,
    /// Distribute rows over the current rayon pool. Output is identical either way.
    pub parallel_rows: bool,
}

/// Warped sampling positions of one output pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpedPositions {
    /// Where to read the source image.
    pub source: Point,
    /// Where to read the destination image.
    pub destination: Point,
}

/// One feature line seen from all three geometries, with its length term precomputed.
#[derive(Clone, Copy, Debug)]
struct FieldLine {
    mid: LineSegment,
    src: LineSegment,
    dst: LineSegment,
    length_term: f64,
}

/// Per-frame line field, built once and queried for every pixel.
#[derive(Clone, Debug)]
pub struct WarpField {
    lines: Vec<FieldLine>,
    params: WarpParams,
}

impl WarpField {
    /// Validate the three index-aligned line sets and precompute per-line terms.
    pub fn new(
        source_lines: &[LineSegment],
        intermediate_lines: &[LineSegment],
        destination_lines: &[LineSegment],
        params: WarpParams,
    ) -> MorphResult<Self> {
        params.validate()?;
        ensure_same_len(source_lines, intermediate_lines)?;
        ensure_same_len(source_lines, destination_lines)?;
        let lines = intermediate_lines
            .iter()
            .zip(source_lines)
            .zip(destination_lines)
            .map(|((mid, src), dst)| FieldLine {
                mid: *mid,
                src: *src,
                dst: *dst,
                length_term: params.length_term(mid.length()),
            })
            .collect();
        Ok(Self { lines, params })
    }

    /// Weighted-average sampling positions for the output pixel at `x`.
    ///
    /// If every weight underflows to zero the pixel is left in place.
    pub fn warp(&self, x: Point) -> WarpedPositions {
        let mut src_sum = Vec2::ZERO;
        let mut dst_sum = Vec2::ZERO;
        let mut weight_sum = 0.0f64;

        for line in &self.lines {
            let c = line_coords(x, &line.mid);
            let d_src = calc_x_prime(&line.src, c) - x;
            let d_dst = calc_x_prime(&line.dst, c) - x;
            let dist = distance_to_segment(x, &line.mid, c);
            let weight = self.params.weight_with_term(line.length_term, dist);

            src_sum += d_src * weight;
            dst_sum += d_dst * weight;
            weight_sum += weight;
        }

        if weight_sum <= 0.0 || !weight_sum.is_finite() {
            return WarpedPositions {
                source: x,
                destination: x,
            };
        }
        WarpedPositions {
            source: x + src_sum / weight_sum,
            destination: x + dst_sum / weight_sum,
        }
    }
}

/// Render one morph frame.
///
/// `t` weights the source image: the output pixel is `source * t + destination * (1 - t)`
/// (for [`BlendMode::CrossDissolve`]). Sizes and line counts are checked before any pixel is
/// computed. A warped position outside an image falls back to that image's pixel at the
/// output coordinate.
#[tracing::instrument(
    level = "trace",
    skip(source, destination, source_lines, intermediate_lines, destination_lines, opts)
)]
pub fn compose(
    source: &FrameRGB,
    destination: &FrameRGB,
    source_lines: &[LineSegment],
    intermediate_lines: &[LineSegment],
    destination_lines: &[LineSegment],
    t: f64,
    opts: &ComposeOpts,
) -> MorphResult<FrameRGB> {
    ensure_same_size(source, destination)?;
    if !t.is_finite() {
        return Err(MorphError::validation("blend weight t must be finite"));
    }
    let field = WarpField::new(source_lines, intermediate_lines, destination_lines, opts.warp)?;

    let width = source.width;
    let row_len = width as usize * 3;
    let mut out = FrameRGB::filled(width, source.height, [0, 0, 0])?;

    let fill = |(y, row): (usize, &mut [u8])| {
        fill_row(&field, source, destination, t, opts, y as u32, row);
    };
    if opts.parallel_rows {
        out.data.par_chunks_mut(row_len).enumerate().for_each(fill);
    } else {
        out.data.chunks_mut(row_len).enumerate().for_each(fill);
    }
    Ok(out)
}

/// Fail unless both images have identical dimensions.
pub fn ensure_same_size(source: &FrameRGB, destination: &FrameRGB) -> MorphResult<()> {
    if source.dimensions() != destination.dimensions() {
        return Err(MorphError::DimensionMismatch {
            source_size: source.dimensions(),
            destination_size: destination.dimensions(),
        });
    }
    Ok(())
}

fn fill_row(
    field: &WarpField,
    source: &FrameRGB,
    destination: &FrameRGB,
    t: f64,
    opts: &ComposeOpts,
    y: u32,
    row: &mut [u8],
) {
    for (x, px) in row.chunks_exact_mut(3).enumerate() {
        let x = x as u32;
        let at = Point::new(f64::from(x), f64::from(y));
        let pos = field.warp(at);

        let rgb = match opts.blend {
            BlendMode::CrossDissolve => {
                let s = sample_or_home(source, pos.source, x, y, opts.sampling);
                let d = sample_or_home(destination, pos.destination, x, y, opts.sampling);
                [0, 1, 2].map(|c| s[c] * t + d[c] * (1.0 - t))
            }
            BlendMode::SourceOnly => sample_or_home(source, pos.source, x, y, opts.sampling),
            BlendMode::DestinationOnly => {
                sample_or_home(destination, pos.destination, x, y, opts.sampling)
            }
        };
        for (dst, v) in px.iter_mut().zip(rgb) {
            *dst = quantize_u8(v);
        }
    }
}

fn sample_or_home(img: &FrameRGB, pos: Point, x: u32, y: u32, sampling: Sampling) -> [f64; 3] {
    let sampled = match sampling {
        Sampling::Nearest => img.sample_nearest(pos),
        Sampling::Bilinear => img.sample_bilinear(pos),
    };
    sampled.unwrap_or_else(|| img.pixel(x, y).map(f64::from))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
