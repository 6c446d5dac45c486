//! Helpers for hosts that drive the title from a scrolling header.
//!
//! Offsets follow the usual app-bar convention: 0 when fully expanded and
//! increasingly negative as the header scrolls away.

/// Expansion fraction for a header scrolled by `vertical_offset`.
///
/// The scroll range is `height - min_height - inset_top`; a header with no
/// range never leaves the expanded state.
pub fn expansion_fraction_for_offset(
    vertical_offset: f32,
    height: f32,
    min_height: f32,
    inset_top: f32,
) -> f32 {
    let range = height - min_height - inset_top;
    if range <= 0.0 {
        return 0.0;
    }
    (vertical_offset.abs() / range).clamp(0.0, 1.0)
}

/// Height below which the content scrim should be shown.
pub fn scrim_trigger_height(min_height: f32) -> f32 {
    min_height * 2.0
}

pub fn scrim_visible(height: f32, vertical_offset: f32, min_height: f32, inset_top: f32) -> bool {
    height + vertical_offset < scrim_trigger_height(min_height) + inset_top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_tracks_offset() {
        // range = 256 - 56 - 24 = 176
        assert_eq!(expansion_fraction_for_offset(0.0, 256.0, 56.0, 24.0), 0.0);
        assert_eq!(expansion_fraction_for_offset(-88.0, 256.0, 56.0, 24.0), 0.5);
        assert_eq!(expansion_fraction_for_offset(-176.0, 256.0, 56.0, 24.0), 1.0);
        assert_eq!(expansion_fraction_for_offset(-400.0, 256.0, 56.0, 24.0), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(expansion_fraction_for_offset(0.0, 56.0, 56.0, 0.0), 0.0);
        assert_eq!(expansion_fraction_for_offset(-1.0, 56.0, 56.0, 0.0), 0.0);
        assert_eq!(expansion_fraction_for_offset(-1.0, 40.0, 56.0, 0.0), 0.0);
    }

    #[test]
    fn test_scrim_shows_near_collapse() {
        assert!(!scrim_visible(256.0, 0.0, 56.0, 24.0));
        // 256 - 130 = 126 < 112 + 24
        assert!(scrim_visible(256.0, -130.0, 56.0, 24.0));
    }
}
