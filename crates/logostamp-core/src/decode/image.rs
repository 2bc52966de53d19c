//! PNG/JPEG decoding with EXIF orientation handling.
//!
//! Uploads arrive as PNG or JPEG bytes; the format is sniffed from the
//! file header. Decoding always produces RGBA so that logo cutouts keep
//! their transparency and opaque backgrounds get a full alpha channel.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, RasterImage};

/// Decode a PNG or JPEG image from bytes, applying EXIF orientation correction.
///
/// Orientation correction matters for the overlay pipeline: anchor placement
/// is computed against the image as the user sees it, not as it is stored.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes (PNG or JPEG, format is sniffed)
///
/// # Returns
///
/// A `RasterImage` with RGBA pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    // First, extract EXIF orientation before decoding
    let orientation = extract_orientation(bytes);

    // Decode the image using the image crate
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    // Apply orientation transformation
    let oriented_img = apply_orientation(img, orientation);

    // Convert to RGBA8
    let rgba_img = oriented_img.into_rgba8();
    Ok(RasterImage::from_rgba_image(rgba_img))
}

/// Decode a PNG or JPEG image from bytes without applying EXIF orientation.
///
/// Use this when you want to handle orientation separately or when
/// the image is already correctly oriented.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba_img = img.into_rgba8();
    Ok(RasterImage::from_rgba_image(rgba_img))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined (PNG files usually have none).
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
