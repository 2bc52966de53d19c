//! Logo transform operations: resize, rotation, and opacity.
//!
//! These are the three steps that turn a raw cutout logo into a
//! placement-ready buffer. Order matters:
//! 1. Resize (relative to the target background's width)
//! 2. Rotation (canvas expanded, corners transparent)
//! 3. Opacity (alpha channel scaled)
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is top-left corner

mod opacity;
mod resize;
mod rotation;

pub use opacity::apply_opacity;
pub use resize::{resize_logo, scaled_logo_size};
pub use rotation::{apply_rotation, compute_rotated_bounds, InterpolationFilter};
