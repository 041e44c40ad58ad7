//! WASM-compatible wrapper types for compressed image data.
//!
//! This module provides the JavaScript-facing handle around an encoded
//! image buffer, handling the ownership handoff between Rust and
//! JavaScript memory.

use wasm_bindgen::prelude::*;

/// An owned, encoded image buffer handed across the WASM boundary.
///
/// The encoded bytes live in WASM memory. `bytes()` copies them out to a
/// JavaScript `Uint8Array`; `byte_length` reports the size without
/// copying.
///
/// # Memory Management
///
/// The buffer is released exactly once: either by an explicit `free()`
/// call from the host, or by wasm-bindgen's finalizer when the handle is
/// garbage collected. Never use a handle after freeing it.
#[wasm_bindgen]
pub struct JsCompressedImage {
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Size of the encoded image in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded bytes as a Uint8Array.
    ///
    /// Note: This creates a copy of the buffer, which is necessary for
    /// safe memory management across the boundary.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Explicitly release the WASM-side buffer.
    ///
    /// Optional — wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately reclaim memory for a
    /// large image.
    pub fn free(self) {
        // Dropping self releases the buffer
    }
}

impl JsCompressedImage {
    /// Wrap an encoded buffer produced by the core compression path.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}
