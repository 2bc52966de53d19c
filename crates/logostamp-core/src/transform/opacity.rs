//! Alpha channel opacity scaling.
//!
//! The final step of the transform pipeline: every pixel's alpha is scaled
//! by `opacity_percent / 100`, rounded to nearest and clamped to [0, 255].
//! Color channels are never touched here; pre-multiplication by alpha only
//! happens later, during compositing.

use crate::decode::RasterImage;
use crate::OverlayError;

/// Scale every pixel's alpha by `opacity_percent / 100`.
///
/// The scaling is monotonic: `output_alpha = round(alpha * opacity / 100)`.
/// `opacity_percent == 100` is an exact no-op and `0` makes the whole
/// image fully transparent.
///
/// # Errors
///
/// Returns `OverlayError::InvalidParameter` if `opacity_percent > 100` and
/// `OverlayError::InvalidInput` for an inconsistent pixel buffer.
pub fn apply_opacity(
    image: &RasterImage,
    opacity_percent: u32,
) -> Result<RasterImage, OverlayError> {
    if opacity_percent > 100 {
        return Err(OverlayError::InvalidParameter(format!(
            "opacity_percent must be 0-100, got {}",
            opacity_percent
        )));
    }
    if !image.is_consistent() {
        return Err(OverlayError::InvalidInput(format!(
            "pixel buffer length {} does not match {}x{} RGBA",
            image.pixels.len(),
            image.width,
            image.height
        )));
    }

    // Fast path: full opacity leaves the alpha channel untouched
    if opacity_percent == 100 {
        return Ok(image.clone());
    }

    let mut result = image.clone();
    for pixel in result.pixels.chunks_exact_mut(4) {
        // Integer round-to-nearest of alpha * opacity / 100
        pixel[3] = ((pixel[3] as u32 * opacity_percent + 50) / 100) as u8;
    }

    Ok(result)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
