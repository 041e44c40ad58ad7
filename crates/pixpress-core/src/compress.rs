//! In-memory JPEG compression entry point.
//!
//! This is the embeddable half of Pixpress: given raw decoded pixels,
//! dimensions, a channel count, and a quality level, produce a complete
//! JPEG bitstream as an owned buffer. The function performs no file or
//! network I/O, holds no state between calls, and is reentrant.
//!
//! Hosts on the other side of the WASM boundary call this through the
//! `pixpress-wasm` bindings, which wrap the returned buffer in an
//! explicitly releasable handle.

use thiserror::Error;

use crate::convert::{strip_alpha, ConvertError};
use crate::decode::PixelLayout;
use crate::encode::{encode_jpeg, EncodeError};

/// Errors from in-memory compression.
#[derive(Debug, Error)]
pub enum CompressError {
    /// Channel count is not 3 (RGB) or 4 (RGBA)
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length doesn't match width * height * channels
    #[error("Invalid pixel buffer: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Alpha stripping failed
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// JPEG encoding failed
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Compress raw pixel data to an in-memory JPEG buffer.
///
/// RGBA input loses its alpha channel before encoding; alpha is never
/// written to a JPEG output. RGB input is encoded as-is, without a copy
/// of the pixel buffer.
///
/// # Arguments
///
/// * `pixels` - Interleaved pixel data, row-major order
/// * `width` - Image width in pixels, must be non-zero
/// * `height` - Image height in pixels, must be non-zero
/// * `channels` - Bytes per pixel: 3 (RGB) or 4 (RGBA)
/// * `quality` - JPEG quality (nominally 1-100; out-of-range values are
///   handed to the encoder unmodified)
///
/// # Returns
///
/// The complete JPEG bitstream as an owned `Vec<u8>`.
///
/// # Errors
///
/// Fails before touching the encoder on zero dimensions, unsupported
/// channel counts, or a pixel buffer whose length doesn't match the
/// stated dimensions. Encoder failures are passed through.
///
/// # Example
///
/// ```
/// use pixpress_core::compress::compress_to_jpeg;
///
/// let pixels = vec![200u8; 32 * 32 * 4]; // RGBA
/// let jpeg = compress_to_jpeg(&pixels, 32, 32, 4, 85).unwrap();
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn compress_to_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: u8,
    quality: u8,
) -> Result<Vec<u8>, CompressError> {
    let layout = PixelLayout::from_channel_count(channels)
        .ok_or(CompressError::UnsupportedChannels(channels))?;

    if width == 0 || height == 0 {
        return Err(CompressError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels as usize;
    if pixels.len() != expected {
        return Err(CompressError::BufferLength {
            expected,
            actual: pixels.len(),
        });
    }

    let jpeg = match layout {
        PixelLayout::Rgba => {
            let rgb = strip_alpha(pixels, width, height)?;
            encode_jpeg(&rgb, width, height, quality)?
        }
        PixelLayout::Rgb => encode_jpeg(pixels, width, height, quality)?,
    };

    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_compress_rgb() {
        let pixels = vec![128u8; 20 * 10 * 3];
        let jpeg = compress_to_jpeg(&pixels, 20, 10, 3, 90).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_compress_rgba_matches_pre_stripped_rgb() {
        let mut rgba = Vec::with_capacity(8 * 8 * 4);
        for i in 0..(8 * 8) {
            rgba.extend_from_slice(&[(i * 3) as u8, (i * 5) as u8, (i * 7) as u8, 128]);
        }
        let rgb = strip_alpha(&rgba, 8, 8).unwrap();

        // Encoding is deterministic, so the RGBA path must produce exactly
        // the bytes the pre-stripped RGB path does
        let from_rgba = compress_to_jpeg(&rgba, 8, 8, 4, 90).unwrap();
        let from_rgb = compress_to_jpeg(&rgb, 8, 8, 3, 90).unwrap();
        assert_eq!(from_rgba, from_rgb);
    }

    #[test]
    fn test_compress_roundtrip_dimensions() {
        // Solid color at quality 100: decoded dimensions must match exactly
        let pixels = vec![77u8; 24 * 16 * 3];
        let jpeg = compress_to_jpeg(&pixels, 24, 16, 3, 100).unwrap();

        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!(decoded.width, 24);
        assert_eq!(decoded.height, 16);
    }

    #[test]
    fn test_compress_rejects_zero_width() {
        let result = compress_to_jpeg(&[], 0, 10, 3, 90);
        assert!(matches!(
            result,
            Err(CompressError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_compress_rejects_zero_height() {
        let result = compress_to_jpeg(&[], 10, 0, 3, 90);
        assert!(matches!(
            result,
            Err(CompressError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_compress_rejects_bad_channel_counts() {
        for channels in [0u8, 1, 2, 5, 255] {
            let pixels = vec![0u8; 4 * 4 * channels.max(1) as usize];
            let result = compress_to_jpeg(&pixels, 4, 4, channels, 90);
            assert!(
                matches!(result, Err(CompressError::UnsupportedChannels(c)) if c == channels),
                "channel count {} should be rejected",
                channels
            );
        }
    }

    #[test]
    fn test_compress_rejects_length_mismatch() {
        let pixels = vec![0u8; 4 * 4 * 3 - 1];
        let result = compress_to_jpeg(&pixels, 4, 4, 3, 90);
        assert!(matches!(
            result,
            Err(CompressError::BufferLength {
                expected: 48,
                actual: 47
            })
        ));
    }

    #[test]
    fn test_compress_error_display() {
        let err = CompressError::UnsupportedChannels(2);
        assert_eq!(
            err.to_string(),
            "Unsupported channel count: 2 (expected 3 or 4)"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
