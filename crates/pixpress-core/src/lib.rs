//! Pixpress Core - Image re-compression library
//!
//! This crate provides the core functionality for Pixpress: decoding a
//! raster image into a raw pixel buffer, converting its channel layout,
//! and re-encoding it as JPEG or PNG — to an in-memory buffer for
//! embedding hosts, or to a file with extension-dispatched format
//! selection for the CLI.

pub mod compress;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod optimize;
pub mod save;

pub use compress::{compress_to_jpeg, CompressError};
pub use convert::{strip_alpha, ConvertError};
pub use decode::{decode_image, DecodeError, DecodedImage, Orientation, PixelLayout};
pub use encode::{encode_jpeg, encode_png, ByteSink, EncodeError};
pub use optimize::{OptiPng, OptimizeError, PngPostProcessor};
pub use save::{file_extension, save_image, OutputFormat, SaveError};
