//! Transform parameter WASM bindings.
//!
//! This module provides JavaScript bindings for the TransformParams type,
//! allowing the overlay controls (scale, rotation, opacity, anchor) to be
//! manipulated from TypeScript and persisted as JSON.

use crate::types::{anchor_from_u8, anchor_to_u8};
use logostamp_core::TransformParams;
use wasm_bindgen::prelude::*;

/// Transform parameters wrapper for JavaScript.
///
/// Anchor values cross the boundary as integer codes:
/// 0=TopLeft, 1=TopRight, 2=BottomLeft, 3=BottomRight, 4=Center.
/// Unknown codes are a hard error, never a silent default.
#[wasm_bindgen]
pub struct OverlayParams {
    inner: TransformParams,
}

#[wasm_bindgen]
impl OverlayParams {
    /// Create new parameters with default control values
    /// (scale 20, rotation 0, opacity 100, anchor TopLeft).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: TransformParams::new(),
        }
    }

    /// Get scale percent (logo width as a fraction of background width)
    #[wasm_bindgen(getter)]
    pub fn scale_percent(&self) -> u32 {
        self.inner.scale_percent
    }

    /// Set scale percent (5-100)
    #[wasm_bindgen(setter)]
    pub fn set_scale_percent(&mut self, value: u32) {
        self.inner.scale_percent = value;
    }

    /// Get rotation in degrees (counter-clockwise)
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> u32 {
        self.inner.rotation_degrees
    }

    /// Set rotation in degrees (0-360)
    #[wasm_bindgen(setter)]
    pub fn set_rotation_degrees(&mut self, value: u32) {
        self.inner.rotation_degrees = value;
    }

    /// Get opacity percent
    #[wasm_bindgen(getter)]
    pub fn opacity_percent(&self) -> u32 {
        self.inner.opacity_percent
    }

    /// Set opacity percent (0-100)
    #[wasm_bindgen(setter)]
    pub fn set_opacity_percent(&mut self, value: u32) {
        self.inner.opacity_percent = value;
    }

    /// Get the anchor as its integer code
    #[wasm_bindgen(getter)]
    pub fn anchor(&self) -> u8 {
        anchor_to_u8(self.inner.anchor)
    }

    /// Set the anchor from its integer code.
    ///
    /// Errors on unknown codes - anchors are a closed set.
    pub fn set_anchor(&mut self, value: u8) -> Result<(), JsValue> {
        let anchor = anchor_from_u8(value)
            .ok_or_else(|| JsValue::from_str(&format!("Unrecognized anchor code: {}", value)))?;
        self.inner.anchor = anchor;
        Ok(())
    }

    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<(), JsValue> {
        self.inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize to a plain JavaScript object (for persisting settings).
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JavaScript object.
    ///
    /// The serde path also rejects unknown anchor names, so restored
    /// settings go through the same closed-set check as live edits.
    pub fn from_js(value: JsValue) -> Result<OverlayParams, JsValue> {
        let inner: TransformParams =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayParams {
    /// Access the wrapped core parameters.
    pub(crate) fn params(&self) -> &TransformParams {
        &self.inner
    }
}


/// WASM-specific tests that require JsValue.
///
/// The error paths construct `JsValue`s and can only run on wasm32
/// targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_anchor_rejects_unknown_code() {
        let mut params = OverlayParams::new();
        assert!(params.set_anchor(5).is_err());
        // Anchor unchanged after the failed set
        assert_eq!(params.anchor(), 0);
    }

    #[wasm_bindgen_test]
    fn test_validate_rejects_out_of_range() {
        let mut params = OverlayParams::new();
        params.set_scale_percent(101);
        assert!(params.validate().is_err());
    }

    #[wasm_bindgen_test]
    fn test_js_round_trip() {
        let mut params = OverlayParams::new();
        params.set_scale_percent(35);
        params.set_anchor(3).unwrap();

        let value = params.to_js().unwrap();
        let back = OverlayParams::from_js(value).unwrap();
        assert_eq!(back.scale_percent(), 35);
        assert_eq!(back.anchor(), 3);
    }
}
