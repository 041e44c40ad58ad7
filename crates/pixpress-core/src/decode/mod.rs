//! Image decoding pipeline for Pixpress.
//!
//! This module turns an encoded image file into a raw interleaved pixel
//! buffer plus dimension and channel metadata:
//! - Format detection from byte content (JPEG, PNG)
//! - EXIF orientation correction applied to the decoded pixels
//! - Alpha-aware layout selection: sources with an alpha channel decode
//!   to RGBA, everything else to RGB
//!
//! # Examples
//!
//! ```ignore
//! use pixpress_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod loader;
mod types;

pub use loader::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation, PixelLayout};
