//! Pixel layout conversion.
//!
//! JPEG output is always 3-channel, so RGBA buffers must lose their alpha
//! channel before encoding. The conversion preserves pixel order and
//! row-major layout; only the fourth byte of each pixel is dropped.

use thiserror::Error;

/// Errors from pixel layout conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Buffer length doesn't match the stated dimensions
    #[error("Invalid RGBA buffer: expected {expected} bytes (width * height * 4), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Produce a 3-channel RGB buffer from a 4-channel RGBA input.
///
/// Output pixel `i`'s three bytes equal input pixel `i`'s first three
/// bytes; the alpha byte is discarded. Input that already has 3 channels
/// never goes through this function — callers use the original buffer
/// as-is, without a copy.
///
/// # Arguments
///
/// * `rgba` - RGBA pixel data, length exactly width * height * 4
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns `ConvertError::LengthMismatch` if the buffer length does not
/// match the dimensions.
pub fn strip_alpha(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ConvertError> {
    let pixel_count = (width as usize) * (height as usize);
    let expected = pixel_count * 4;
    if rgba.len() != expected {
        return Err(ConvertError::LengthMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for pixel in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }

    Ok(rgb)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
