//! Anchor-based placement resolution.
//!
//! Maps a named anchor to the top-left coordinate where the transformed
//! logo will be pasted. Corner anchors are inset by a fixed margin; the
//! center anchor uses floor division. Results may be negative or exceed
//! the background bounds when the logo is large - clipping is the
//! compositor's job, not the resolver's.

use crate::Anchor;

/// Fixed inset, in pixels, between a corner anchor and the logo edge.
pub const ANCHOR_MARGIN: i64 = 50;

/// Resolve an anchor to a top-left placement coordinate.
///
/// # Arguments
///
/// * `bg_width`, `bg_height` - Background dimensions
/// * `logo_width`, `logo_height` - Transformed logo dimensions
/// * `anchor` - Placement anchor
///
/// # Returns
///
/// `(x, y)` of the logo's top-left pixel in background coordinates.
/// The coordinate is intentionally unclipped.
pub fn resolve_anchor(
    bg_width: u32,
    bg_height: u32,
    logo_width: u32,
    logo_height: u32,
    anchor: Anchor,
) -> (i64, i64) {
    let bg_w = bg_width as i64;
    let bg_h = bg_height as i64;
    let logo_w = logo_width as i64;
    let logo_h = logo_height as i64;

    match anchor {
        Anchor::TopLeft => (ANCHOR_MARGIN, ANCHOR_MARGIN),
        Anchor::TopRight => (bg_w - logo_w - ANCHOR_MARGIN, ANCHOR_MARGIN),
        Anchor::BottomLeft => (ANCHOR_MARGIN, bg_h - logo_h - ANCHOR_MARGIN),
        Anchor::BottomRight => (
            bg_w - logo_w - ANCHOR_MARGIN,
            bg_h - logo_h - ANCHOR_MARGIN,
        ),
        // Floor division, also when the logo overhangs and the difference
        // goes negative
        Anchor::Center => ((bg_w - logo_w).div_euclid(2), (bg_h - logo_h).div_euclid(2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 800x600 background, 100x80 logo - the reference placement table

    #[test]
    fn test_top_left() {
        assert_eq!(resolve_anchor(800, 600, 100, 80, Anchor::TopLeft), (50, 50));
    }

    #[test]
    fn test_top_right() {
        assert_eq!(
            resolve_anchor(800, 600, 100, 80, Anchor::TopRight),
            (650, 50)
        );
    }

    #[test]
    fn test_bottom_left() {
        assert_eq!(
            resolve_anchor(800, 600, 100, 80, Anchor::BottomLeft),
            (50, 470)
        );
    }

    #[test]
    fn test_bottom_right() {
        assert_eq!(
            resolve_anchor(800, 600, 100, 80, Anchor::BottomRight),
            (650, 470)
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(
            resolve_anchor(800, 600, 100, 80, Anchor::Center),
            (350, 260)
        );
    }

    #[test]
    fn test_center_uses_floor_division() {
        // (801 - 100) / 2 = 350 (floor), (601 - 80) / 2 = 260 (floor)
        assert_eq!(
            resolve_anchor(801, 601, 100, 80, Anchor::Center),
            (350, 260)
        );
    }

    #[test]
    fn test_oversized_logo_goes_negative() {
        // A logo wider than the background pushes right-anchored and
        // centered placements to negative x; that is allowed here
        let (x, _) = resolve_anchor(100, 100, 300, 300, Anchor::TopRight);
        assert_eq!(x, 100 - 300 - 50);

        let (cx, cy) = resolve_anchor(100, 100, 300, 300, Anchor::Center);
        assert_eq!(cx, -100);
        assert_eq!(cy, -100);

        // Odd overhang floors toward negative infinity: (100 - 301) / 2
        // is -100.5, which centers at -101, not -100
        let (cx, cy) = resolve_anchor(100, 100, 301, 301, Anchor::Center);
        assert_eq!(cx, -101);
        assert_eq!(cy, -101);
    }

    #[test]
    fn test_small_background_keeps_margin() {
        // Corner anchors always honor the margin even when it lands the
        // logo outside a tiny background
        assert_eq!(resolve_anchor(30, 30, 10, 10, Anchor::TopLeft), (50, 50));
    }
}
