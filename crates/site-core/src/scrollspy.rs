use crate::constants::{NAV_SCROLLED_AFTER_PX, REVEAL_TRIGGER_FRACTION, SCROLLSPY_PROBE_PX};

/// Viewport-relative bounding box of a page section, in document order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

/// Index of the first section whose bounding box crosses the fixed probe
/// line below the viewport top, or None when no section does (e.g. scrolled
/// past the footer or rects not yet measured).
pub fn active_section(rects: &[SectionRect]) -> Option<usize> {
    rects
        .iter()
        .position(|r| r.top <= SCROLLSPY_PROBE_PX && r.bottom >= SCROLLSPY_PROBE_PX)
}

/// Whether the navigation bar should use its scrolled (translucent, bordered)
/// treatment for the given vertical scroll offset.
#[inline]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Whether a section whose top edge sits at `rect_top` has entered the
/// viewport far enough to play its one-shot reveal.
#[inline]
pub fn section_in_reveal_zone(rect_top: f32, viewport_height: f32) -> bool {
    rect_top <= viewport_height * REVEAL_TRIGGER_FRACTION
}
