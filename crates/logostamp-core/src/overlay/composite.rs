//! Per-pixel alpha blending of a transformed logo onto a background.

use crate::decode::RasterImage;
use crate::OverlayError;

/// A finished composite: opaque RGB pixels ready for JPEG export.
///
/// Always has the background's original dimensions and never shares
/// storage with the input background.
#[derive(Debug, Clone)]
pub struct CompositeImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl CompositeImage {
    /// Create a new CompositeImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Alpha-blend a transformed logo onto a background at the given coordinate.
///
/// For every logo pixel whose target coordinate lands inside the background,
/// each color channel is blended as
/// `out = logo * (a/255) + bg * (1 - a/255)` with integer round-to-nearest,
/// where `a` is the logo pixel's (opacity-adjusted) alpha. Logo pixels
/// outside the background are silently skipped - no wraparound, no error.
///
/// The background's own alpha is discarded: the output is always fully
/// opaque RGB with the background's dimensions. The input background is
/// never mutated.
///
/// # Arguments
///
/// * `background` - The background image (alpha ignored)
/// * `logo` - The transformed logo (alpha drives the blend)
/// * `x`, `y` - Top-left placement coordinate, may be negative
///
/// # Errors
///
/// Returns `OverlayError::InvalidInput` if either image is zero-area or
/// has a buffer length inconsistent with its dimensions.
pub fn composite_over(
    background: &RasterImage,
    logo: &RasterImage,
    x: i64,
    y: i64,
) -> Result<CompositeImage, OverlayError> {
    if background.is_empty() || !background.is_consistent() {
        return Err(OverlayError::InvalidInput(format!(
            "background buffer is empty or inconsistent ({}x{}, {} bytes)",
            background.width,
            background.height,
            background.pixels.len()
        )));
    }
    if logo.is_empty() || !logo.is_consistent() {
        return Err(OverlayError::InvalidInput(format!(
            "logo buffer is empty or inconsistent ({}x{}, {} bytes)",
            logo.width,
            logo.height,
            logo.pixels.len()
        )));
    }

    let bg_w = background.width as usize;
    let bg_h = background.height as usize;

    // Copy the background into a fresh opaque RGB buffer
    let mut output = Vec::with_capacity(bg_w * bg_h * 3);
    for pixel in background.pixels.chunks_exact(4) {
        output.extend_from_slice(&pixel[0..3]);
    }

    for ly in 0..logo.height as i64 {
        let ty = y + ly;
        if ty < 0 || ty >= bg_h as i64 {
            continue;
        }
        for lx in 0..logo.width as i64 {
            let tx = x + lx;
            if tx < 0 || tx >= bg_w as i64 {
                continue;
            }

            let logo_idx = ((ly as usize) * logo.width as usize + lx as usize) * 4;
            let alpha = logo.pixels[logo_idx + 3] as u32;
            if alpha == 0 {
                continue;
            }

            let out_idx = ((ty as usize) * bg_w + tx as usize) * 3;
            for c in 0..3 {
                let logo_c = logo.pixels[logo_idx + c] as u32;
                let bg_c = output[out_idx + c] as u32;
                // Integer round-to-nearest of logo*a/255 + bg*(1 - a/255)
                output[out_idx + c] = ((logo_c * alpha + bg_c * (255 - alpha) + 127) / 255) as u8;
            }
        }
    }

    Ok(CompositeImage::new(
        background.width,
        background.height,
        output,
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
