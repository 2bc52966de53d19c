//! Image encoding WASM bindings.
//!
//! This module exposes the logostamp-core JPEG encoding functions to JavaScript,
//! enabling the export workflow to encode finished composites as JPEG files.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode RGB pixel data to JPEG bytes
//! - [`encode_composite`] - Encode a JsCompositeImage to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_composite } from '@logostamp/wasm';
//!
//! // Encode raw pixel data
//! const jpegBytes = encode_jpeg(pixels, width, height, 90);
//!
//! // Encode a finished composite
//! const jpegBytes = encode_composite(composite, 90);
//! ```

use crate::types::JsCompositeImage;
use logostamp_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// This function takes raw RGB pixel data and encodes it to JPEG format with
/// the specified quality setting.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality, recommended: 90)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes, or an error if encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a finished composite to JPEG bytes.
///
/// This is a convenience function for the export path: composites are
/// already opaque RGB, exactly what the JPEG encoder expects.
///
/// # Arguments
///
/// * `image` - The composite to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality, recommended: 90)
///
/// # Example
///
/// ```typescript
/// const composite = overlay_logo(background, preparedLogo, 4); // Center
/// const jpeg = encode_composite(composite, 90);
///
/// // Hand the bytes to the zip packager or a download link
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_composite(image: &JsCompositeImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_composite(&image.to_composite(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
