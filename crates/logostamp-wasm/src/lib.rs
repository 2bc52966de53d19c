//! Logostamp WASM - WebAssembly bindings for Logostamp
//!
//! This crate provides WASM bindings to expose the logostamp-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `decode` - Image decoding bindings (PNG/JPEG decoding, resize, thumbnails)
//! - `encode` - Image encoding bindings (JPEG export)
//! - `overlay` - Logo preparation and compositing bindings
//! - `params` - Transform parameter bindings (scale, rotation, opacity, anchor)
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, prepare_logo, overlay_logo } from '@logostamp/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode the uploaded logo and a background
//! const logo = decode_image(new Uint8Array(await logoFile.arrayBuffer()));
//! const bg = decode_image(new Uint8Array(await bgFile.arrayBuffer()));
//!
//! // Prepare once, composite per background
//! const prepared = prepare_logo(logo, bg.width, params, 1);
//! const result = overlay_logo(bg, prepared, params.anchor);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod overlay;
mod params;
mod types;

// Re-export public types
pub use decode::{decode_image, generate_thumbnail, resize, resize_to_fit};
pub use encode::{encode_composite, encode_jpeg};
pub use overlay::{apply_logo, overlay_logo, prepare_logo, JsTransformedLogo};
pub use params::OverlayParams;
pub use types::{JsCompositeImage, JsRasterImage};

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

/// Simple function to verify WASM is working
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    format!("Hello, {}! Logostamp WASM is ready.", name)
}
