use crate::foundation::core::Point;
use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::lerp;

/// An image as tightly packed, row-major RGB8 pixels.
///
/// Used both for the two input images and for every rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB8 bytes, `width * height * 3` long.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Wrap an RGB8 buffer, checking its size against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> MorphResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(MorphError::validation(format!(
                "rgb buffer holds {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> MorphResult<Self> {
        let len = byte_len(width, height)?;
        let data = rgb.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at integer coordinates. Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite a pixel. Panics when out of bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Nearest-pixel sample, or `None` when `pos` rounds outside the frame.
    #[inline]
    pub fn sample_nearest(&self, pos: Point) -> Option<[f64; 3]> {
        let x = pos.x.round();
        let y = pos.y.round();
        if !(x >= 0.0 && y >= 0.0 && x < f64::from(self.width) && y < f64::from(self.height)) {
            return None;
        }
        let [r, g, b] = self.pixel(x as u32, y as u32);
        Some([f64::from(r), f64::from(g), f64::from(b)])
    }

    /// Bilinear sample, or `None` unless `pos` lies within `[0, w-1] x [0, h-1]`.
    pub fn sample_bilinear(&self, pos: Point) -> Option<[f64; 3]> {
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        if !(pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= max_x && pos.y <= max_y) {
            return None;
        }
        let x0 = pos.x.floor();
        let y0 = pos.y.floor();
        let fx = pos.x - x0;
        let fy = pos.y - y0;
        let (x0, y0) = (x0 as u32, y0 as u32);
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let p00 = self.pixel(x0, y0);
        let p10 = self.pixel(x1, y0);
        let p01 = self.pixel(x0, y1);
        let p11 = self.pixel(x1, y1);
        let mut out = [0.0f64; 3];
        for (c, o) in out.iter_mut().enumerate() {
            let top = lerp(f64::from(p00[c]), f64::from(p10[c]), fx);
            let bottom = lerp(f64::from(p01[c]), f64::from(p11[c]), fx);
            *o = lerp(top, bottom, fy);
        }
        Some(out)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * 3
    }
}

fn byte_len(width: u32, height: u32) -> MorphResult<usize> {
    if width == 0 || height == 0 {
        return Err(MorphError::validation(format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| MorphError::validation("image buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
