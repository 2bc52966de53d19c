//! WASM bindings for the overlay pipeline.
//!
//! This module exposes logo preparation and compositing to JavaScript.
//! The batch driver in the frontend calls [`prepare_logo`] once per
//! parameter set, holds on to the returned [`JsTransformedLogo`], and
//! calls [`overlay_logo`] for every background image.
//!
//! # Example
//!
//! ```typescript
//! import { prepare_logo, overlay_logo, encode_composite } from '@logostamp/wasm';
//!
//! const prepared = prepare_logo(cutoutLogo, backgrounds[0].width, params, 2);
//! for (const bg of backgrounds) {
//!   const composite = overlay_logo(bg, prepared, params.anchor);
//!   zip.add(encode_composite(composite, 90));
//! }
//! ```

use crate::params::OverlayParams;
use crate::types::{anchor_from_u8, filter_from_u8, JsCompositeImage, JsRasterImage};
use logostamp_core::overlay;
use wasm_bindgen::prelude::*;

/// A prepared logo handle for JavaScript.
///
/// Wraps the core `TransformedLogo`: the resized, rotated,
/// opacity-adjusted buffer bound to the background width it was prepared
/// for. Hold one of these for the duration of a batch and pass it to
/// every `overlay_logo` call.
#[wasm_bindgen]
pub struct JsTransformedLogo {
    inner: overlay::TransformedLogo,
}

#[wasm_bindgen]
impl JsTransformedLogo {
    /// Transformed logo width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Transformed logo height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// The background width this logo was prepared for
    #[wasm_bindgen(getter)]
    pub fn bg_width(&self) -> u32 {
        self.inner.bg_width()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

/// Run the transform pipeline on a raw cutout logo.
///
/// Resizes relative to `bg_width`, rotates counter-clockwise with canvas
/// expansion, and scales the alpha channel by the opacity - in that order.
///
/// # Arguments
///
/// * `logo` - Raw logo, RGBA with background alpha already removed
/// * `bg_width` - Width of the background(s) the logo will be placed on
/// * `params` - Transform parameters (validated here)
/// * `filter` - Resampling: 0=Nearest, 1=Bilinear (default), 2=Lanczos3
///
/// # Errors
///
/// Returns an error for out-of-range parameters, a scale that collapses
/// the logo to zero pixels, or an unusable logo buffer.
#[wasm_bindgen]
pub fn prepare_logo(
    logo: &JsRasterImage,
    bg_width: u32,
    params: &OverlayParams,
    filter: u8,
) -> Result<JsTransformedLogo, JsValue> {
    let raster = logo.to_raster();
    let filter_type = filter_from_u8(filter);

    overlay::prepare_logo(&raster, bg_width, params.params(), filter_type)
        .map(|inner| JsTransformedLogo { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Composite a prepared logo onto one background.
///
/// # Arguments
///
/// * `background` - The background image (alpha, if any, is discarded)
/// * `logo` - A logo prepared for this background's width
/// * `anchor` - Placement code: 0=TopLeft, 1=TopRight, 2=BottomLeft,
///   3=BottomRight, 4=Center. Unknown codes are a hard error.
///
/// # Returns
///
/// A `JsCompositeImage`: opaque RGB at the background's dimensions.
#[wasm_bindgen]
pub fn overlay_logo(
    background: &JsRasterImage,
    logo: &JsTransformedLogo,
    anchor: u8,
) -> Result<JsCompositeImage, JsValue> {
    let anchor = anchor_from_u8(anchor)
        .ok_or_else(|| JsValue::from_str(&format!("Unrecognized anchor code: {}", anchor)))?;
    let bg = background.to_raster();

    overlay::overlay_logo(&bg, &logo.inner, anchor)
        .map(JsCompositeImage::from_composite)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Single-image convenience path: prepare and overlay in one call.
///
/// This is the preview flow. For batches, use `prepare_logo` once and
/// `overlay_logo` per background instead.
#[wasm_bindgen]
pub fn apply_logo(
    background: &JsRasterImage,
    logo: &JsRasterImage,
    params: &OverlayParams,
    filter: u8,
) -> Result<JsCompositeImage, JsValue> {
    let bg = background.to_raster();
    let raster = logo.to_raster();
    let filter_type = filter_from_u8(filter);

    overlay::apply_logo(&bg, &raster, params.params(), filter_type)
        .map(JsCompositeImage::from_composite)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> JsRasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        JsRasterImage::new(width, height, pixels)
    }

    #[wasm_bindgen_test]
    fn test_prepare_and_overlay() {
        let logo = solid_image(40, 40, [0, 0, 255, 255]);
        let bg = solid_image(400, 300, [255, 0, 0, 255]);
        let mut params = OverlayParams::new();
        params.set_scale_percent(10);

        let prepared = prepare_logo(&logo, 400, &params, 1).unwrap();
        assert_eq!(prepared.width(), 40);

        let composite = overlay_logo(&bg, &prepared, 4).unwrap(); // Center
        assert_eq!(composite.width(), 400);
        assert_eq!(composite.height(), 300);
    }

    #[wasm_bindgen_test]
    fn test_overlay_rejects_unknown_anchor() {
        let logo = solid_image(40, 40, [0, 0, 255, 255]);
        let bg = solid_image(400, 300, [255, 0, 0, 255]);
        let params = OverlayParams::new();

        let prepared = prepare_logo(&logo, 400, &params, 1).unwrap();
        let result = overlay_logo(&bg, &prepared, 9);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_prepare_rejects_invalid_scale() {
        let logo = solid_image(40, 40, [0, 0, 255, 255]);
        let mut params = OverlayParams::new();
        params.set_scale_percent(101);

        let result = prepare_logo(&logo, 400, &params, 1);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_logo_single_image() {
        let logo = solid_image(40, 40, [0, 0, 255, 255]);
        let bg = solid_image(400, 300, [255, 0, 0, 255]);
        let params = OverlayParams::new();

        let result = apply_logo(&bg, &logo, &params, 1);
        assert!(result.is_ok());
    }

    #[wasm_bindgen_test]
    fn test_overlay_rejects_width_mismatch() {
        let logo = solid_image(40, 40, [0, 0, 255, 255]);
        let bg = solid_image(500, 300, [255, 0, 0, 255]);
        let params = OverlayParams::new();

        let prepared = prepare_logo(&logo, 400, &params, 1).unwrap();
        let result = overlay_logo(&bg, &prepared, 0);
        assert!(result.is_err());
    }
}
