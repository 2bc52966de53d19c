//! Image decoding WASM bindings.
//!
//! This module exposes the logostamp-core image decoding functions to JavaScript,
//! providing PNG/JPEG decoding and image resizing for the upload flow.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a PNG or JPEG image from bytes (RGBA output)
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resize_to_fit`] - Resize an image to fit within a max edge, preserving aspect ratio
//! - [`generate_thumbnail`] - Generate a thumbnail for the upload preview strip
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, generate_thumbnail } from '@logostamp/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const thumb = generate_thumbnail(image, 100);
//! console.log(`Preview: ${thumb.width}x${thumb.height}`);
//! ```

use crate::types::{filter_from_u8, JsRasterImage};
use logostamp_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// The format is sniffed from the file header. Decoding always produces
/// RGBA pixel data and automatically applies EXIF orientation correction
/// so that anchor placement matches what the user sees.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsRasterImage` containing the decoded RGBA pixel data, or an error if
/// decoding fails.
///
/// # Errors
///
/// Returns an error if the bytes are not valid PNG or JPEG data, or the
/// file is corrupted or truncated.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// This function resizes the image to the specified width and height, regardless
/// of the original aspect ratio. If you want to preserve aspect ratio, use
/// `resize_to_fit` instead.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Errors
///
/// Returns an error if width or height is zero.
#[wasm_bindgen]
pub fn resize(
    image: &JsRasterImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let raster = image.to_raster();
    let filter_type = filter_from_u8(filter);

    decode::resize(&raster, width, height, filter_type)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge size, preserving aspect ratio.
///
/// The image is scaled so that its longest edge equals `max_edge` pixels, while
/// the shorter edge is scaled proportionally to maintain the original aspect ratio.
///
/// If the image is already smaller than `max_edge` in both dimensions, it is
/// returned unchanged (no upscaling).
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `max_edge` - Maximum size for the longest edge in pixels
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsRasterImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let raster = image.to_raster();
    let filter_type = filter_from_u8(filter);

    decode::resize_to_fit(&raster, max_edge, filter_type)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a thumbnail for the upload preview strip.
///
/// This is a convenience function that uses bilinear filtering to create a
/// small thumbnail suitable for the uploaded-images strip. It preserves the
/// aspect ratio and fits the image within a square of `size` pixels.
///
/// # Example
///
/// ```typescript
/// // Generate 100px thumbnails for the preview strip
/// const thumb = generate_thumbnail(image, 100);
/// ```
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsRasterImage, size: u32) -> Result<JsRasterImage, JsValue> {
    let raster = image.to_raster();

    decode::generate_thumbnail(&raster, size)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Note: Most decode tests use functions that return `Result<T, JsValue>`, which
/// only work on wasm32 targets. For comprehensive decode testing, see the tests
/// in `logostamp_core::decode` which test the underlying functionality.
#[cfg(test)]
mod tests {
    use crate::types::JsRasterImage;

    #[test]
    fn test_js_raster_image_from_raster() {
        let img = JsRasterImage::from_raster(logostamp_core::decode::RasterImage {
            width: 100,
            height: 50,
            pixels: vec![128u8; 100 * 50 * 4],
        });
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_raster_image_to_raster() {
        let img = JsRasterImage::from_raster(logostamp_core::decode::RasterImage {
            width: 100,
            height: 50,
            pixels: vec![128u8; 100 * 50 * 4],
        });
        let raster = img.to_raster();
        assert_eq!(raster.width, 100);
        assert_eq!(raster.height, 50);
        assert_eq!(raster.pixels.len(), 20000);
    }
}
