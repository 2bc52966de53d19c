//! Logo overlay pipeline: anchor resolution, alpha blending, and the
//! prepare-once/composite-many orchestration.
//!
//! # Pipeline Order
//!
//! For each distinct (parameters, background width) pair:
//! 1. [`prepare_logo`] - resize, rotate, and fade the raw cutout once
//! 2. [`overlay_logo`] - resolve the anchor and blend onto each background
//!
//! [`apply_logo`] bundles both steps for the single-image preview path.

mod anchor;
mod composite;
mod pipeline;

pub use anchor::{resolve_anchor, ANCHOR_MARGIN};
pub use composite::{composite_over, CompositeImage};
pub use pipeline::{apply_logo, overlay_logo, prepare_logo, TransformedLogo};
