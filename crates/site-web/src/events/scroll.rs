use site_core::{
    active_section, nav_is_scrolled, section_in_reveal_zone, SectionRect, NAV_ITEMS, SECTION_IDS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// One window scroll listener drives the nav chrome, the active link
/// highlight and the first-view section reveals.
pub fn wire_scroll_handlers(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || on_scroll(&doc)) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Recompute scroll-dependent state. Also called once at startup so the
/// initial viewport is styled before the first scroll event.
pub fn on_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    if let Some(nav) = document.get_element_by_id("site-nav") {
        dom::set_class_flag(&nav, "is-scrolled", nav_is_scrolled(scroll_y));
    }

    // viewport-space rects in section order; a missing section gets a rect
    // the probe can never hit so the indexes stay aligned
    let rects: Vec<SectionRect> = SECTION_IDS
        .iter()
        .map(|id| match document.get_element_by_id(id) {
            Some(el) => {
                let r = el.get_bounding_client_rect();
                SectionRect {
                    top: r.top() as f32,
                    bottom: r.bottom() as f32,
                }
            }
            None => SectionRect {
                top: f32::MAX,
                bottom: f32::MAX,
            },
        })
        .collect();

    let active = active_section(&rects);
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let is_active = active == Some(i);
        if let Some(link) = document.get_element_by_id(&format!("nav-link-{}", item.anchor)) {
            dom::set_class_flag(&link, "is-active", is_active);
        }
        if let Some(link) = document.get_element_by_id(&format!("nav-mobile-link-{}", item.anchor))
        {
            dom::set_class_flag(&link, "is-active", is_active);
        }
    }

    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    for (id, rect) in SECTION_IDS.iter().copied().zip(&rects) {
        if let Some(el) = document.get_element_by_id(id) {
            // reveal fires once; scrolling back up never hides a section
            if !el.class_list().contains("is-revealed")
                && section_in_reveal_zone(rect.top, viewport_h)
            {
                _ = el.class_list().add_1("is-revealed");
                log::debug!("[scroll] reveal #{id}");
            }
        }
    }
}
