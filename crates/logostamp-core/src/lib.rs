//! Logostamp Core - Logo compositing library
//!
//! This crate provides the core logo compositing functionality for Logostamp:
//! decoding uploaded images, the logo transform pipeline (resize, rotate,
//! opacity), anchor-based placement, alpha blending onto backgrounds, and
//! JPEG export of the finished composites.

pub mod decode;
pub mod encode;
pub mod overlay;
pub mod transform;

pub use overlay::{
    apply_logo, composite_over, overlay_logo, prepare_logo, resolve_anchor, CompositeImage,
    TransformedLogo, ANCHOR_MARGIN,
};
pub use transform::{
    apply_opacity, apply_rotation, compute_rotated_bounds, resize_logo, scaled_logo_size,
    InterpolationFilter,
};

use thiserror::Error;

/// Error types for the overlay pipeline.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// A transform parameter is outside its documented range, or an anchor
    /// encoding is unrecognized at a conversion boundary.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An input image is unusable: zero-area, inconsistent buffer length,
    /// or a transformed logo applied to the wrong background.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Named placement point for the logo within the background frame.
///
/// A closed set: unknown anchor encodings are rejected at conversion
/// boundaries instead of falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    /// Top-left corner, inset by the fixed margin.
    #[default]
    TopLeft,
    /// Top-right corner, inset by the fixed margin.
    TopRight,
    /// Bottom-left corner, inset by the fixed margin.
    BottomLeft,
    /// Bottom-right corner, inset by the fixed margin.
    BottomRight,
    /// Centered on the background (no margin).
    Center,
}

/// Transform parameters for placing a logo on a background.
///
/// An immutable value shared read-only across all images in a batch.
/// Defaults mirror the application's initial control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransformParams {
    /// Logo width as a percentage of the background width (5 to 100).
    pub scale_percent: u32,
    /// Counter-clockwise rotation in degrees (0 to 360).
    pub rotation_degrees: u32,
    /// Logo opacity (0 to 100). 100 keeps the cutout's alpha unchanged.
    pub opacity_percent: u32,
    /// Placement anchor.
    pub anchor: Anchor,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale_percent: 20,
            rotation_degrees: 0,
            opacity_percent: 100,
            anchor: Anchor::TopLeft,
        }
    }
}

impl TransformParams {
    /// Create parameters with the default control values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every parameter against its documented range.
    ///
    /// Callers are expected to reject bad values before invoking the
    /// pipeline; the pipeline also validates defensively and fails fast.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.scale_percent < 5 || self.scale_percent > 100 {
            return Err(OverlayError::InvalidParameter(format!(
                "scale_percent must be 5-100, got {}",
                self.scale_percent
            )));
        }
        if self.rotation_degrees > 360 {
            return Err(OverlayError::InvalidParameter(format!(
                "rotation_degrees must be 0-360, got {}",
                self.rotation_degrees
            )));
        }
        if self.opacity_percent > 100 {
            return Err(OverlayError::InvalidParameter(format!(
                "opacity_percent must be 0-100, got {}",
                self.opacity_percent
            )));
        }
        Ok(())
    }
}
