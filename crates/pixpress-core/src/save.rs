//! Extension-dispatched file output.
//!
//! Given an output path, the saver classifies the path's extension into a
//! closed [`OutputFormat`] and picks an encoding strategy from it:
//! JPEG output is forced to 3 channels (alpha stripped first), PNG output
//! preserves the original layout and is optionally handed to a
//! [`PngPostProcessor`] after writing. Unsupported extensions fail before
//! any file is written.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::convert::{strip_alpha, ConvertError};
use crate::decode::{DecodedImage, PixelLayout};
use crate::encode::{encode_jpeg, encode_png, EncodeError};
use crate::optimize::PngPostProcessor;

/// Errors from saving an image to a file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The output path's extension maps to no known format
    #[error("Unsupported output image format: {0}")]
    UnsupportedFormat(String),

    /// Alpha stripping failed
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Encoding failed
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format selected from a file extension.
///
/// Classification is a pure function over the lower-cased substring after
/// the last `.` of the file name; paths with no extension (or a leading
/// dot only) classify as `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy JPEG, always 3-channel.
    Jpeg,
    /// Lossless PNG, alpha preserved.
    Png,
    /// No encoding strategy for this extension.
    Unsupported,
}

impl OutputFormat {
    /// Classify an output path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        match file_extension(path).as_str() {
            "jpg" | "jpeg" => OutputFormat::Jpeg,
            "png" => OutputFormat::Png,
            _ => OutputFormat::Unsupported,
        }
    }
}

/// Lower-cased extension tag of a path.
///
/// Empty when the file name has no `.`, or when the only `.` leads the
/// name (dotfiles have no extension).
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Encode `image` to `path`, choosing the format from the path's extension.
///
/// * `jpg` / `jpeg` — encode as JPEG at `quality`, stripping alpha first
///   if the image is RGBA.
/// * `png` — encode as PNG with the original channel layout; afterwards,
///   run the post-processor against the written file when one is present.
///   A failed optimization pass is tolerated with a warning and the file
///   remains as first written; an absent post-processor warns that the
///   PNG stays unoptimized.
/// * anything else — fails without writing a file.
///
/// # Errors
///
/// Returns `SaveError::UnsupportedFormat` for unknown extensions, and
/// passes through conversion, encoding, and I/O failures.
pub fn save_image(
    path: &Path,
    image: &DecodedImage,
    quality: u8,
    post_processor: Option<&dyn PngPostProcessor>,
) -> Result<(), SaveError> {
    match OutputFormat::from_path(path) {
        OutputFormat::Jpeg => {
            let bytes = match image.layout {
                PixelLayout::Rgba => {
                    let rgb = strip_alpha(&image.pixels, image.width, image.height)?;
                    encode_jpeg(&rgb, image.width, image.height, quality)?
                }
                PixelLayout::Rgb => encode_jpeg(&image.pixels, image.width, image.height, quality)?,
            };
            fs::write(path, bytes)?;
            Ok(())
        }
        OutputFormat::Png => {
            let bytes = encode_png(&image.pixels, image.width, image.height, image.layout)?;
            fs::write(path, bytes)?;

            match post_processor {
                Some(processor) => {
                    if let Err(err) = processor.optimize(path) {
                        eprintln!("Warning: PNG optimization failed, keeping unoptimized file: {err}");
                    }
                }
                None => {
                    eprintln!("Warning: optipng not found, PNG not optimized.");
                }
            }
            Ok(())
        }
        OutputFormat::Unsupported => Err(SaveError::UnsupportedFormat(file_extension(path))),
    }
}
