//! Image compression WASM bindings.
//!
//! This module exposes the pixpress-core compression path to JavaScript:
//! raw decoded pixels in, an owned JPEG buffer handle out.
//!
//! # Example
//!
//! ```typescript
//! import { compress_jpeg } from '@pixpress/wasm';
//!
//! // RGBA pixels straight from a canvas
//! const image = compress_jpeg(pixels, width, height, 4, 80);
//! const jpegBytes = image.bytes();
//! image.free();
//! ```

use crate::types::JsCompressedImage;
use pixpress_core::compress;
use wasm_bindgen::prelude::*;

/// Compress raw pixel data to an in-memory JPEG.
///
/// RGBA input (channels = 4) loses its alpha channel before encoding;
/// RGB input (channels = 3) is encoded as-is. Any other channel count is
/// rejected.
///
/// # Arguments
///
/// * `pixels` - Interleaved pixel data as a `Uint8Array`, row-major order
/// * `width` - Image width in pixels, must be non-zero
/// * `height` - Image height in pixels, must be non-zero
/// * `channels` - Bytes per pixel: 3 (RGB) or 4 (RGBA)
/// * `quality` - JPEG quality (1-100)
///
/// # Returns
///
/// A [`JsCompressedImage`] handle owning the JPEG bytes, or an error if
/// validation or encoding fails. The host should call `free()` on the
/// handle once the bytes have been copied out.
///
/// # Errors
///
/// Throws if:
/// - Width or height is zero
/// - The channel count is not 3 or 4
/// - The pixel buffer length doesn't match width * height * channels
/// - Encoding fails internally
///
/// # Example
///
/// ```typescript
/// const pixels = new Uint8Array(100 * 100 * 4).fill(128);
/// const image = compress_jpeg(pixels, 100, 100, 4, 80);
/// console.log(`Compressed to ${image.byte_length} bytes`);
/// ```
#[wasm_bindgen]
pub fn compress_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: u8,
    quality: u8,
) -> Result<JsCompressedImage, JsValue> {
    compress::compress_to_jpeg(pixels, width, height, channels, quality)
        .map(JsCompressedImage::from_bytes)
        .map_err(|e| {
            let message = format!("Image compression failed: {e}");
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_compress_jpeg_rgb() {
        let pixels = vec![128u8; 50 * 50 * 3];
        let result = compress_jpeg(&pixels, 50, 50, 3, 90);
        assert!(result.is_ok());

        let image = result.unwrap();
        assert_eq!(&image.bytes()[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_compress_jpeg_rgba() {
        let pixels = vec![200u8; 32 * 32 * 4];
        let result = compress_jpeg(&pixels, 32, 32, 4, 80);
        assert!(result.is_ok());
    }

    #[wasm_bindgen_test]
    fn test_compress_jpeg_rejects_zero_dimensions() {
        let result = compress_jpeg(&[], 0, 50, 3, 90);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_compress_jpeg_rejects_bad_channels() {
        let pixels = vec![0u8; 10 * 10 * 2];
        let result = compress_jpeg(&pixels, 10, 10, 2, 90);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_compress_jpeg_rejects_length_mismatch() {
        let pixels = vec![0u8; 10]; // Wrong size for 10x10x3
        let result = compress_jpeg(&pixels, 10, 10, 3, 90);
        assert!(result.is_err());
    }
}
