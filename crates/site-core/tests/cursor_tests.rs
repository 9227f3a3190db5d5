// Host-side tests for the cursor state machine, its render mapping, and
// hover-target classification.

use site_core::{
    cursor_visuals, CursorPhase, CursorState, TargetSnapshot, DOT_SCALE_CLICK, DOT_SCALE_IDLE,
    GLOW_SCALE_CLICK, GLOW_SCALE_HOVER, RING_OPACITY_HOVER, RING_OPACITY_IDLE, RING_SCALE_CLICK,
    RING_SCALE_HOVER, RING_SCALE_IDLE,
};

#[test]
fn starts_hidden() {
    let state = CursorState::new();
    assert_eq!(state.phase(), CursorPhase::Hidden);
    assert!(!cursor_visuals(&state).visible);
}

#[test]
fn first_move_reveals_the_cursor() {
    let mut state = CursorState::new();
    state.pointer_moved(false);
    assert_eq!(state.phase(), CursorPhase::Idle);
    assert!(cursor_visuals(&state).visible);
}

#[test]
fn hover_flag_follows_move_samples() {
    let mut state = CursorState::new();
    state.pointer_moved(true);
    assert_eq!(state.phase(), CursorPhase::Hovering);

    state.pointer_moved(false);
    assert_eq!(state.phase(), CursorPhase::Idle);
}

#[test]
fn press_takes_priority_over_hover() {
    let mut state = CursorState::new();
    state.pointer_moved(true);
    state.pointer_down();
    assert_eq!(state.phase(), CursorPhase::Clicking);

    state.pointer_up();
    assert_eq!(state.phase(), CursorPhase::Hovering);
}

#[test]
fn ripple_fires_once_per_press() {
    let mut state = CursorState::new();
    state.pointer_moved(false);

    // Only the false->true edge reports a press; repeats while held do not.
    assert!(state.pointer_down());
    assert!(!state.pointer_down());
    assert!(!state.pointer_down());

    assert!(state.pointer_up());
    assert!(!state.pointer_up());

    // A fresh press after release fires again.
    assert!(state.pointer_down());
}

#[test]
fn leave_hides_until_the_next_move() {
    let mut state = CursorState::new();
    state.pointer_moved(true);
    state.pointer_left();
    assert_eq!(state.phase(), CursorPhase::Hidden);

    state.pointer_moved(true);
    assert_eq!(state.phase(), CursorPhase::Hovering);
}

#[test]
fn visuals_for_each_mode() {
    let mut state = CursorState::new();
    state.pointer_moved(false);
    let idle = cursor_visuals(&state);
    assert_eq!(idle.ring_scale, RING_SCALE_IDLE);
    assert_eq!(idle.ring_opacity, RING_OPACITY_IDLE);
    assert_eq!(idle.dot_scale, DOT_SCALE_IDLE);
    assert!(!idle.brackets);

    state.pointer_moved(true);
    let hover = cursor_visuals(&state);
    assert_eq!(hover.ring_scale, RING_SCALE_HOVER);
    assert_eq!(hover.ring_opacity, RING_OPACITY_HOVER);
    assert_eq!(hover.glow_scale, GLOW_SCALE_HOVER);
    assert!(hover.brackets);

    state.pointer_down();
    let click = cursor_visuals(&state);
    assert_eq!(click.ring_scale, RING_SCALE_CLICK);
    assert_eq!(click.dot_scale, DOT_SCALE_CLICK);
    assert_eq!(click.glow_scale, GLOW_SCALE_CLICK);
}

#[test]
fn click_while_hovering_keeps_hover_styling() {
    // Press shrinks the ring, but opacity and brackets stay on the hover
    // treatment because the pointer is still over the link.
    let mut state = CursorState::new();
    state.pointer_moved(true);
    state.pointer_down();

    let v = cursor_visuals(&state);
    assert_eq!(v.ring_scale, RING_SCALE_CLICK);
    assert_eq!(v.ring_opacity, RING_OPACITY_HOVER);
    assert!(v.brackets);
}

fn plain_snapshot(tag: &str) -> TargetSnapshot {
    TargetSnapshot {
        tag_name: tag.to_string(),
        has_interactive_ancestor: false,
        role: None,
        cursor_style: None,
    }
}

#[test]
fn links_and_buttons_are_interactive() {
    assert!(plain_snapshot("A").is_interactive());
    assert!(plain_snapshot("a").is_interactive());
    assert!(plain_snapshot("BUTTON").is_interactive());
    assert!(plain_snapshot("button").is_interactive());
}

#[test]
fn plain_elements_are_not_interactive() {
    assert!(!plain_snapshot("DIV").is_interactive());
    assert!(!plain_snapshot("SPAN").is_interactive());
    assert!(!plain_snapshot("IMG").is_interactive());
}

#[test]
fn descendants_of_links_are_interactive() {
    // e.g. the <span> inside a nav link.
    let snapshot = TargetSnapshot {
        tag_name: "SPAN".to_string(),
        has_interactive_ancestor: true,
        role: None,
        cursor_style: None,
    };
    assert!(snapshot.is_interactive());
}

#[test]
fn role_button_is_interactive() {
    let mut snapshot = plain_snapshot("DIV");
    snapshot.role = Some("button".to_string());
    assert!(snapshot.is_interactive());

    // Other roles do not count.
    snapshot.role = Some("navigation".to_string());
    assert!(!snapshot.is_interactive());
}

#[test]
fn pointer_cursor_style_is_interactive() {
    let mut snapshot = plain_snapshot("DIV");
    snapshot.cursor_style = Some("pointer".to_string());
    assert!(snapshot.is_interactive());

    snapshot.cursor_style = Some("default".to_string());
    assert!(!snapshot.is_interactive());
}
