use crate::constants::{
    DOT_SCALE_CLICK, DOT_SCALE_IDLE, GLOW_SCALE_CLICK, GLOW_SCALE_HOVER, GLOW_SCALE_IDLE,
    RING_SCALE_CLICK, RING_SCALE_HOVER, RING_SCALE_IDLE, RING_OPACITY_HOVER, RING_OPACITY_IDLE,
};
use crate::cursor::CursorState;

/// Resolved render parameters for the cursor layers on one frame.
///
/// Clicking and hovering are independent axes: a press shrinks the ring and
/// dot even while hovering, but the ring opacity and the corner brackets
/// keep following the hover flag alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorVisuals {
    pub visible: bool,
    pub ring_scale: f32,
    pub ring_opacity: f32,
    pub dot_scale: f32,
    pub glow_scale: f32,
    pub brackets: bool,
}

pub fn cursor_visuals(state: &CursorState) -> CursorVisuals {
    let ring_scale = if state.is_clicking() {
        RING_SCALE_CLICK
    } else if state.is_hovering() {
        RING_SCALE_HOVER
    } else {
        RING_SCALE_IDLE
    };
    let glow_scale = if state.is_clicking() {
        GLOW_SCALE_CLICK
    } else if state.is_hovering() {
        GLOW_SCALE_HOVER
    } else {
        GLOW_SCALE_IDLE
    };
    CursorVisuals {
        visible: state.is_visible(),
        ring_scale,
        ring_opacity: if state.is_hovering() {
            RING_OPACITY_HOVER
        } else {
            RING_OPACITY_IDLE
        },
        dot_scale: if state.is_clicking() {
            DOT_SCALE_CLICK
        } else {
            DOT_SCALE_IDLE
        },
        glow_scale,
        brackets: state.is_hovering(),
    }
}
