use std::path::Path;

use anyhow::Context;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{MorphError, MorphResult};
use crate::render::frame::FrameRGB;

/// Decode any format supported by `image` into an opaque RGB8 frame. Alpha is dropped.
pub fn decode_image(bytes: &[u8]) -> MorphResult<FrameRGB> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    FrameRGB::new(width, height, rgb.into_raw())
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> MorphResult<FrameRGB> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes).map_err(|e| {
        MorphError::Other(anyhow::anyhow!("decode image '{}': {e}", path.display()))
    })
}

/// Write a frame as PNG, creating the parent directory when needed.
pub fn save_png(frame: &FrameRGB, path: &Path) -> MorphResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGB) -> MorphResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
        .context("rgb buffer does not match frame dimensions")?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
