//! JPEG encoding to an in-memory buffer.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG
//! encoder, writing into a [`ByteSink`](super::ByteSink) so the complete
//! bitstream is available as one contiguous buffer when the call returns.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{ByteSink, EncodeError};

/// Encode RGB pixel data to JPEG bytes.
///
/// JPEG output is always 3-channel; callers holding RGBA data must strip
/// the alpha channel first (see [`crate::convert::strip_alpha`]).
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (nominally 1-100; values outside the range
///   are handed to the encoder unmodified)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use pixpress_core::encode::encode_jpeg;
///
/// let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
/// let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();
///
/// // Verify JPEG magic bytes
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut sink = ByteSink::new();

    let encoder = JpegEncoder::new_with_quality(&mut sink, quality);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(sink.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_basic() {
        let width = 100;
        let height = 100;
        let pixels = vec![128u8; width * height * 3];

        let result = encode_jpeg(&pixels, width as u32, height as u32, 90);
        assert!(result.is_ok());

        let jpeg_bytes = result.unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let pixels = vec![128u8; 100 * 100 * 3];

        let low_q = encode_jpeg(&pixels, 100, 100, 20).unwrap();
        let high_q = encode_jpeg(&pixels, 100, 100, 95).unwrap();

        // Higher quality generally produces larger files
        // (may not always be true for very simple images, but usually is)
        assert!(high_q.len() > low_q.len() || (low_q.len() - high_q.len()) < 100);
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data_short() {
        let pixels = vec![128u8; 99 * 100 * 3]; // One row short

        let result = encode_jpeg(&pixels, 100, 100, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data_long() {
        let pixels = vec![128u8; 101 * 100 * 3]; // One row extra

        let result = encode_jpeg(&pixels, 100, 100, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_width() {
        let pixels = vec![];

        let result = encode_jpeg(&pixels, 0, 100, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_height() {
        let pixels = vec![];

        let result = encode_jpeg(&pixels, 100, 0, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_small_image() {
        // 1x1 pixel image
        let pixels = vec![255, 0, 0]; // Red pixel

        let result = encode_jpeg(&pixels, 1, 1, 90);
        assert!(result.is_ok());

        let jpeg_bytes = result.unwrap();
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_non_square() {
        // Wide image
        let pixels = vec![128u8; 200 * 50 * 3];
        let result = encode_jpeg(&pixels, 200, 50, 90);
        assert!(result.is_ok());

        // Tall image
        let pixels = vec![128u8; 50 * 200 * 3];
        let result = encode_jpeg(&pixels, 50, 200, 90);
        assert!(result.is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
