//! Background-relative logo resizing.
//!
//! The logo's target size is expressed as a fraction of the *background's*
//! width rather than the logo's own width: `scale_percent = 20` means the
//! logo becomes 20% as wide as the background it will be placed on. The
//! logo's own aspect ratio is always preserved.

use crate::decode::{resize, FilterType, RasterImage};
use crate::OverlayError;

/// Compute the transformed logo's target dimensions.
///
/// # Arguments
///
/// * `logo_width` - Original logo width in pixels
/// * `logo_height` - Original logo height in pixels
/// * `bg_width` - Width of the background the logo will be placed on
/// * `scale_percent` - Logo width as a percentage of `bg_width` (5-100)
///
/// # Returns
///
/// `(target_width, target_height)` where
/// `target_width = floor(bg_width * scale_percent / 100)` and
/// `target_height` scales `logo_height` by the same background-relative
/// factor, preserving the logo's aspect ratio.
///
/// # Errors
///
/// Returns `OverlayError::InvalidInput` for a zero-area logo or zero
/// background width, and `OverlayError::InvalidParameter` when the computed
/// target collapses to zero pixels (logo too small for the requested scale).
pub fn scaled_logo_size(
    logo_width: u32,
    logo_height: u32,
    bg_width: u32,
    scale_percent: u32,
) -> Result<(u32, u32), OverlayError> {
    if logo_width == 0 || logo_height == 0 {
        return Err(OverlayError::InvalidInput(format!(
            "logo has zero area ({}x{})",
            logo_width, logo_height
        )));
    }
    if bg_width == 0 {
        return Err(OverlayError::InvalidInput(
            "background width is zero".to_string(),
        ));
    }

    let scale = scale_percent as f64 / 100.0;
    let target_width = (bg_width as f64 * scale).floor() as u32;
    let target_height =
        (logo_height as f64 * scale * bg_width as f64 / logo_width as f64).floor() as u32;

    if target_width == 0 || target_height == 0 {
        return Err(OverlayError::InvalidParameter(format!(
            "scale_percent {} produces a zero-size logo ({}x{})",
            scale_percent, target_width, target_height
        )));
    }

    Ok((target_width, target_height))
}

/// Resize a logo for placement on a background of the given width.
///
/// This is step one of the transform pipeline. The result keeps the logo's
/// aspect ratio; its absolute size is a fraction of the background width.
///
/// # Errors
///
/// Returns `OverlayError::InvalidInput` for unusable images and
/// `OverlayError::InvalidParameter` when the target size collapses to zero.
pub fn resize_logo(
    logo: &RasterImage,
    bg_width: u32,
    scale_percent: u32,
    filter: FilterType,
) -> Result<RasterImage, OverlayError> {
    if logo.is_empty() || !logo.is_consistent() {
        return Err(OverlayError::InvalidInput(format!(
            "logo buffer is empty or inconsistent ({}x{}, {} bytes)",
            logo.width,
            logo.height,
            logo.pixels.len()
        )));
    }

    let (target_width, target_height) =
        scaled_logo_size(logo.width, logo.height, bg_width, scale_percent)?;

    resize(logo, target_width, target_height, filter)
        .map_err(|e| OverlayError::InvalidInput(e.to_string()))
}
