//! PNG encoding to an in-memory buffer.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;

use super::{ByteSink, EncodeError};
use crate::decode::PixelLayout;

/// Encode pixel data to PNG bytes, preserving the channel layout.
///
/// Unlike JPEG, PNG supports an alpha channel, so RGBA input is written
/// as-is with alpha intact.
///
/// # Arguments
///
/// * `pixels` - Interleaved pixel data, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `layout` - Channel layout of `pixels` (RGB or RGBA)
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for zero width or height and
/// `EncodeError::InvalidPixelData` if the buffer length does not match
/// width * height * channel count.
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * layout.channel_count() as usize;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut sink = ByteSink::new();

    let encoder = PngEncoder::new(&mut sink);
    encoder
        .write_image(pixels, width, height, layout.to_color_type())
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(sink.into_bytes())
}
