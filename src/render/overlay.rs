//! Debug overlay of feature lines on a rendered frame.

use crate::foundation::math::blend_u8;
use crate::geom::line::LineSegment;
use crate::render::frame::FrameRGB;

/// Stroke style for [`draw_lines`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayStyle {
    /// Line color.
    pub color: [u8; 3],
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            opacity: 1.0,
        }
    }
}

/// Stroke every line one pixel wide onto `frame`. Pixels outside the frame are skipped.
pub fn draw_lines(frame: &mut FrameRGB, lines: &[LineSegment], style: OverlayStyle) {
    for line in lines {
        draw_segment(frame, line, style);
    }
}

fn draw_segment(frame: &mut FrameRGB, line: &LineSegment, style: OverlayStyle) {
    let (p, q) = (line.p(), line.q());
    let d = q - p;
    let steps = d.x.abs().max(d.y.abs()).ceil().max(1.0) as u64;
    let step = d / steps as f64;

    let mut last = None;
    for i in 0..=steps {
        let at = p + step * i as f64;
        let (x, y) = (at.x.round(), at.y.round());
        if x < 0.0 || y < 0.0 || x >= f64::from(frame.width) || y >= f64::from(frame.height) {
            continue;
        }
        let xy = (x as u32, y as u32);
        // DDA can land on the same pixel twice; blend it once.
        if last == Some(xy) {
            continue;
        }
        last = Some(xy);
        let under = frame.pixel(xy.0, xy.1);
        let over = [0, 1, 2].map(|c| blend_u8(style.color[c], under[c], style.opacity));
        frame.put_pixel(xy.0, xy.1, over);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
