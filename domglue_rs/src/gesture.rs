//! Pure swipe decision rules for the panel widget.
//!
//! Deltas are computed as touch-start minus current position, so a
//! leftward drag produces a positive horizontal delta and an upward
//! drag a positive vertical delta. Keeping the rules free of DOM types
//! lets them run under plain `cargo test`.

use crate::config::Side;

/// Off-axis tolerance band for a dismissal swipe (CSS pixels).
pub const SWIPE_BOUNDARY: f64 = 20.0;

/// On-axis travel required before a swipe dismisses the panel.
pub const SWIPE_DELTA: f64 = 50.0;

/// Whether a gesture with the given deltas dismisses a panel on `side`.
///
/// The gesture must stay inside the tolerance band on the off axis and
/// travel past [`SWIPE_DELTA`] on the axis pointing back off-screen:
/// a left panel is dismissed by swiping left, a top panel by swiping
/// up, and so on. [`Side::None`] never matches.
pub fn swipe_dismisses(side: Side, delta_x: f64, delta_y: f64) -> bool {
    let within = |delta: f64| delta < SWIPE_BOUNDARY && delta > -SWIPE_BOUNDARY;
    match side {
        Side::Left => within(delta_y) && delta_x > SWIPE_DELTA,
        Side::Right => within(delta_y) && delta_x < -SWIPE_DELTA,
        Side::Top => within(delta_x) && delta_y > SWIPE_DELTA,
        Side::Bottom => within(delta_x) && delta_y < -SWIPE_DELTA,
        Side::None => false,
    }
}

/// Whether a vertical drag on the panel should be suppressed to stop
/// the page underneath from rubber-banding.
///
/// Fires when the panel is already rubber-banded past its top and the
/// drag keeps pulling down, or the panel sits at its bottom (remaining
/// scroll within 2px of the panel's outer height) and the drag keeps
/// pulling up.
pub fn suppress_overscroll(
    scroll_top: f64,
    scroll_height: f64,
    outer_height: f64,
    delta_y: f64,
) -> bool {
    let remaining = scroll_height - scroll_top;
    (scroll_top < 0.0 && delta_y < 0.0)
        || (remaining > outer_height - 2.0 && remaining < outer_height + 2.0 && delta_y > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_panel_swipe_left_dismisses() {
        assert!(swipe_dismisses(Side::Left, 60.0, 5.0));
    }

    #[test]
    fn test_left_panel_short_swipe_does_not() {
        assert!(!swipe_dismisses(Side::Left, 40.0, 5.0));
    }

    #[test]
    fn test_left_panel_diagonal_swipe_does_not() {
        // Off-axis travel outside the tolerance band.
        assert!(!swipe_dismisses(Side::Left, 60.0, 25.0));
        assert!(!swipe_dismisses(Side::Left, 60.0, -25.0));
    }

    #[test]
    fn test_right_panel_mirrors_left() {
        assert!(swipe_dismisses(Side::Right, -60.0, 5.0));
        assert!(!swipe_dismisses(Side::Right, 60.0, 5.0));
    }

    #[test]
    fn test_top_panel_swipe_up_dismisses() {
        assert!(swipe_dismisses(Side::Top, -5.0, 60.0));
        assert!(!swipe_dismisses(Side::Top, -25.0, 60.0));
    }

    #[test]
    fn test_bottom_panel_swipe_down_dismisses() {
        assert!(swipe_dismisses(Side::Bottom, 0.0, -60.0));
        assert!(!swipe_dismisses(Side::Bottom, 0.0, 60.0));
    }

    #[test]
    fn test_side_none_never_dismisses() {
        assert!(!swipe_dismisses(Side::None, 500.0, 0.0));
        assert!(!swipe_dismisses(Side::None, 0.0, 500.0));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // Exactly on the band edge or the travel threshold: no dismissal.
        assert!(!swipe_dismisses(Side::Left, 50.0, 0.0));
        assert!(!swipe_dismisses(Side::Left, 60.0, 20.0));
    }

    #[test]
    fn test_overscroll_past_top_dragging_down() {
        assert!(suppress_overscroll(-5.0, 400.0, 200.0, -10.0));
        // Dragging up while past the top scrolls content back: allowed.
        assert!(!suppress_overscroll(-5.0, 400.0, 200.0, 10.0));
    }

    #[test]
    fn test_overscroll_at_bottom_dragging_up() {
        // scroll_height 400, scroll_top 200 => remaining 200 == outer height.
        assert!(suppress_overscroll(200.0, 400.0, 200.0, 10.0));
        assert!(!suppress_overscroll(200.0, 400.0, 200.0, -10.0));
    }

    #[test]
    fn test_mid_scroll_is_never_suppressed() {
        assert!(!suppress_overscroll(100.0, 400.0, 200.0, 10.0));
        assert!(!suppress_overscroll(100.0, 400.0, 200.0, -10.0));
    }
}
