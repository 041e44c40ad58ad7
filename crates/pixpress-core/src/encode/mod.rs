//! Image encoding pipeline for Pixpress.
//!
//! This module provides functionality for:
//! - Encoding RGB pixel data to JPEG with configurable quality
//! - Encoding RGB/RGBA pixel data to PNG, alpha preserved
//! - Accumulating encoder output chunks into one contiguous buffer
//!
//! # Architecture
//!
//! Encoders write their bitstream into a [`ByteSink`], an in-memory
//! accumulator, so the complete encoded image is available as a single
//! owned buffer when the encode call returns. All operations are
//! synchronous and single-threaded.

use thiserror::Error;

mod jpeg;
mod png;
mod sink;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use sink::ByteSink;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder reported failure
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
