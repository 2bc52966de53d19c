//! Image decoding pipeline for Logostamp.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG uploads to RGBA pixel data
//! - EXIF orientation correction for photographed backgrounds
//! - Image resizing for thumbnails and previews
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! Everything decodes to RGBA: logo cutouts arrive with their background
//! alpha already zeroed by the external cutout service, and opaque
//! backgrounds simply carry a full alpha channel until export.
//!
//! # Examples
//!
//! ```ignore
//! use logostamp_core::decode::decode_image;
//!
//! let bytes = std::fs::read("background.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod image;
mod resize;
mod types;

pub use self::image::{decode_image, decode_image_no_orientation, get_orientation};
pub use resize::{generate_thumbnail, resize, resize_to_fit};
pub use types::{DecodeError, FilterType, Orientation, RasterImage};
