//! Pixpress WASM - WebAssembly bindings for Pixpress
//!
//! This crate exposes the pixpress-core compression path to
//! JavaScript/TypeScript hosts.
//!
//! # Module Structure
//!
//! - `compress` - In-memory JPEG compression binding
//! - `types` - The owned buffer handle handed back to JavaScript
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_jpeg } from '@pixpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Compress RGBA canvas pixels to JPEG
//! const image = compress_jpeg(pixels, width, height, 4, 80);
//! const blob = new Blob([image.bytes()], { type: 'image/jpeg' });
//! image.free();
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod types;

// Re-export public types
pub use compress::compress_jpeg;
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
