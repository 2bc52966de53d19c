//! Pipeline orchestration: prepare a logo once, overlay it many times.
//!
//! The transformed logo is a pure function of the raw logo, the target
//! background width, and the transform parameters. When a batch shares one
//! background width and one parameter set, callers should call
//! [`prepare_logo`] once and reuse the [`TransformedLogo`] by reference
//! across every [`overlay_logo`] call; nothing in the pipeline mutates it.

use crate::decode::{FilterType, RasterImage};
use crate::transform::{apply_opacity, apply_rotation, resize_logo, InterpolationFilter};
use crate::{Anchor, OverlayError, TransformParams};

use super::anchor::resolve_anchor;
use super::composite::{composite_over, CompositeImage};

/// A resized, rotated, opacity-adjusted logo, bound to the background
/// width it was prepared for.
///
/// Immutable after construction: safe to share by reference across any
/// number of composites (including from parallel workers).
#[derive(Debug, Clone)]
pub struct TransformedLogo {
    image: RasterImage,
    bg_width: u32,
}

impl TransformedLogo {
    /// The transformed pixel buffer.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    /// The background width this logo was prepared for.
    pub fn bg_width(&self) -> u32 {
        self.bg_width
    }

    /// Transformed logo width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Transformed logo height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height
    }
}

/// Run the full transform pipeline on a raw cutout logo.
///
/// Steps, in order: resize relative to `bg_width`, rotate counter-clockwise
/// with canvas expansion, scale the alpha channel by the opacity. A
/// rotation of 0 still flows through the resize and opacity steps so the
/// single-image and batch paths behave identically.
///
/// # Arguments
///
/// * `logo` - Raw logo, RGBA with background alpha already zeroed by the
///   cutout service
/// * `bg_width` - Width of the background(s) this logo will be placed on
/// * `params` - Validated transform parameters
/// * `filter` - Resampling filter (Lanczos3 selects the high-quality
///   rotation kernel as well)
///
/// # Errors
///
/// Returns `OverlayError::InvalidParameter` for out-of-range parameters or
/// a scale that collapses the logo to zero pixels, and
/// `OverlayError::InvalidInput` for unusable image buffers.
pub fn prepare_logo(
    logo: &RasterImage,
    bg_width: u32,
    params: &TransformParams,
    filter: FilterType,
) -> Result<TransformedLogo, OverlayError> {
    params.validate()?;

    let resized = resize_logo(logo, bg_width, params.scale_percent, filter)?;

    let rotation_filter = match filter {
        FilterType::Lanczos3 => InterpolationFilter::Lanczos3,
        _ => InterpolationFilter::Bilinear,
    };
    let rotated = apply_rotation(&resized, params.rotation_degrees as f64, rotation_filter);

    let faded = apply_opacity(&rotated, params.opacity_percent)?;

    Ok(TransformedLogo {
        image: faded,
        bg_width,
    })
}

/// Composite a prepared logo onto one background.
///
/// Enforces the reuse contract: the transformed logo must have been
/// prepared for this background's width, otherwise its size would be
/// wrong relative to the frame.
///
/// # Errors
///
/// Returns `OverlayError::InvalidInput` for an unusable background or a
/// background width mismatch.
pub fn overlay_logo(
    background: &RasterImage,
    logo: &TransformedLogo,
    anchor: Anchor,
) -> Result<CompositeImage, OverlayError> {
    if background.is_empty() || !background.is_consistent() {
        return Err(OverlayError::InvalidInput(format!(
            "background buffer is empty or inconsistent ({}x{}, {} bytes)",
            background.width,
            background.height,
            background.pixels.len()
        )));
    }
    if background.width != logo.bg_width {
        return Err(OverlayError::InvalidInput(format!(
            "logo was prepared for background width {}, got {}",
            logo.bg_width, background.width
        )));
    }

    let (x, y) = resolve_anchor(
        background.width,
        background.height,
        logo.width(),
        logo.height(),
        anchor,
    );

    composite_over(background, logo.image(), x, y)
}

/// Single-image convenience path: prepare the logo for this background
/// and overlay it in one call.
///
/// For batches sharing one background width, prefer [`prepare_logo`] +
/// repeated [`overlay_logo`] so the transform work is done once.
pub fn apply_logo(
    background: &RasterImage,
    logo: &RasterImage,
    params: &TransformParams,
    filter: FilterType,
) -> Result<CompositeImage, OverlayError> {
    let transformed = prepare_logo(logo, background.width, params, filter)?;
    overlay_logo(background, &transformed, params.anchor)
}
