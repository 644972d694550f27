use std::io::Cursor;

use image::{ImageFormat, RgbImage, RgbaImage, buffer::ConvertBuffer, codecs::jpeg::JpegEncoder};

use crate::foundation::error::{ApodError, ApodResult};

/// JPEG quality used for annotated output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Decode JPEG bytes into a straight RGBA8 buffer.
///
/// Anything that is not a decodable JPEG is a [`ApodError::Decode`].
pub fn decode_jpeg(bytes: &[u8]) -> ApodResult<RgbaImage> {
    let dyn_img = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
        .map_err(|e| ApodError::decode(format!("jpeg: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Encode an RGBA8 buffer as JPEG at `quality` (clamped to 1..=100).
///
/// JPEG has no alpha channel; it is dropped.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> ApodResult<Vec<u8>> {
    let rgb: RgbImage = image.convert();
    let mut out = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| ApodError::encode(format!("jpeg: {e}")))?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
