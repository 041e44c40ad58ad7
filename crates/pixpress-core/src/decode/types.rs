//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Interleaved channel layout of a raw pixel buffer.
///
/// Only the two layouts the re-compression pipeline works with are
/// representable: 3-channel RGB and 4-channel RGBA. Any other channel
/// count has no layout and is rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelLayout {
    /// 3 bytes per pixel, no alpha.
    #[default]
    Rgb,
    /// 4 bytes per pixel, alpha last.
    Rgba,
}

impl PixelLayout {
    /// Number of bytes per pixel for this layout.
    #[inline]
    pub fn channel_count(self) -> u8 {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Returns true if this layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::Rgba)
    }

    /// Map a raw channel count to a layout.
    ///
    /// Returns `None` for anything other than 3 or 4 — callers at the
    /// embeddable boundary use this to reject unsupported inputs.
    pub fn from_channel_count(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelLayout::Rgb),
            4 => Some(PixelLayout::Rgba),
            _ => None,
        }
    }

    /// Convert to the image crate's extended color type for encoding.
    pub fn to_color_type(self) -> image::ExtendedColorType {
        match self {
            PixelLayout::Rgb => image::ExtendedColorType::Rgb8,
            PixelLayout::Rgba => image::ExtendedColorType::Rgba8,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with interleaved 8-bit pixel data.
///
/// The pixel buffer is row-major with `layout.channel_count()` bytes per
/// pixel. Sources with an alpha channel decode to [`PixelLayout::Rgba`];
/// everything else decodes to [`PixelLayout::Rgb`].
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of the pixel buffer.
    pub layout: PixelLayout,
    /// Pixel data in row-major order.
    /// Length should be width * height * layout.channel_count().
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.channel_count() as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create a DecodedImage from a decoded dynamic image.
    ///
    /// Sources with an alpha channel keep it (RGBA); everything else is
    /// converted to RGB.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Self {
                width,
                height,
                layout: PixelLayout::Rgba,
                pixels: rgba.into_raw(),
            }
        } else {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            Self {
                width,
                height,
                layout: PixelLayout::Rgb,
                pixels: rgb.into_raw(),
            }
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_layout_channel_count() {
        assert_eq!(PixelLayout::Rgb.channel_count(), 3);
        assert_eq!(PixelLayout::Rgba.channel_count(), 4);
    }

    #[test]
    fn test_pixel_layout_from_channel_count() {
        assert_eq!(PixelLayout::from_channel_count(3), Some(PixelLayout::Rgb));
        assert_eq!(PixelLayout::from_channel_count(4), Some(PixelLayout::Rgba));
        assert_eq!(PixelLayout::from_channel_count(0), None);
        assert_eq!(PixelLayout::from_channel_count(1), None);
        assert_eq!(PixelLayout::from_channel_count(2), None);
        assert_eq!(PixelLayout::from_channel_count(5), None);
    }

    #[test]
    fn test_pixel_layout_alpha() {
        assert!(!PixelLayout::Rgb.has_alpha());
        assert!(PixelLayout::Rgba.has_alpha());
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_decoded_image_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let img = DecodedImage::new(100, 50, PixelLayout::Rgb, pixels);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_rgba() {
        let pixels = vec![0u8; 10 * 10 * 4];
        let img = DecodedImage::new(10, 10, PixelLayout::Rgba, pixels);

        assert_eq!(img.layout.channel_count(), 4);
        assert_eq!(img.byte_size(), 400);
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, PixelLayout::Rgb, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_from_dynamic_keeps_alpha() {
        let rgba = image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 200]));
        let img = DecodedImage::from_dynamic(image::DynamicImage::ImageRgba8(rgba));

        assert_eq!(img.layout, PixelLayout::Rgba);
        assert_eq!(img.byte_size(), 4 * 2 * 4);
        assert_eq!(&img.pixels[0..4], &[1, 2, 3, 200]);
    }

    #[test]
    fn test_from_dynamic_rgb_stays_rgb() {
        let rgb = image::RgbImage::from_pixel(3, 3, image::Rgb([10, 20, 30]));
        let img = DecodedImage::from_dynamic(image::DynamicImage::ImageRgb8(rgb));

        assert_eq!(img.layout, PixelLayout::Rgb);
        assert_eq!(img.byte_size(), 3 * 3 * 3);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated scan".to_string());
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete image file: truncated scan"
        );

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
