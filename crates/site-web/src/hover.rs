use site_core::TargetSnapshot;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Capture everything hover classification needs from the event target. The
/// DOM lookups live here; the verdict is `TargetSnapshot::is_interactive`.
pub fn snapshot_target(ev: &web::MouseEvent) -> TargetSnapshot {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return TargetSnapshot::default();
    };
    // closest() also matches the element itself, which is what we want
    let has_interactive_ancestor = el.closest("a, button").ok().flatten().is_some();
    let cursor_style = web::window()
        .and_then(|w| w.get_computed_style(&el).ok().flatten())
        .and_then(|s| s.get_property_value("cursor").ok());
    TargetSnapshot {
        tag_name: el.tag_name(),
        has_interactive_ancestor,
        role: el.get_attribute("role"),
        cursor_style,
    }
}
