// Fixed top navigation plus the slide-in mobile menu. Links are buttons that
// smooth-scroll to their section; the scroll handler owns the active
// highlight and the scrolled backdrop.

use site_core::{BRAND_TAG, NAV_ITEMS, WHOAMI_ANSWER, WHOAMI_COMMAND};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, fmt};

pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    let nav = dom::create_el(document, "nav", "site-nav")?;
    nav.set_id("site-nav");

    let mut links = String::new();
    let mut mobile_links = String::new();
    for item in &NAV_ITEMS {
        let glyph = fmt::escape_html(item.glyph);
        let name = fmt::escape_html(item.name);
        links.push_str(&format!(
            r#"<button class="nav-link" id="nav-link-{anchor}"><span class="nav-glyph">{glyph}</span><span class="nav-name">{name}</span></button>"#,
            anchor = item.anchor,
        ));
        mobile_links.push_str(&format!(
            r#"<button class="nav-link nav-mobile-link" id="nav-mobile-link-{anchor}"><span class="nav-glyph">{glyph}</span><span class="nav-name">{name}</span></button>"#,
            anchor = item.anchor,
        ));
    }

    nav.set_inner_html(&format!(
        r#"<div class="nav-inner">
  <button class="nav-brand" id="nav-brand">{brand}</button>
  <div class="nav-links">{links}</div>
  <button class="btn btn-primary nav-hire" id="nav-hire">Hire Me</button>
  <button class="nav-burger" id="nav-burger" aria-label="Open menu" aria-expanded="false"><span></span><span></span><span></span></button>
</div>
<div class="nav-backdrop" id="nav-backdrop"></div>
<aside class="nav-mobile" id="nav-mobile">
  <div class="nav-mobile-head">
    <span class="nav-mobile-title"><span class="tok-op">&gt;_</span> Menu</span>
    <button class="nav-mobile-close" id="nav-mobile-close" aria-label="Close menu">&times;</button>
  </div>
  <div class="nav-mobile-links">{mobile_links}</div>
  <button class="btn btn-primary nav-mobile-hire" id="nav-mobile-hire">Hire Me</button>
  <div class="nav-mobile-whoami">
    <div class="tok-comment">{whoami_cmd}</div>
    <div class="tok-str">{whoami_out}</div>
  </div>
</aside>"#,
        brand = fmt::escape_html(BRAND_TAG),
        whoami_cmd = fmt::escape_html(WHOAMI_COMMAND),
        whoami_out = fmt::escape_html(WHOAMI_ANSWER),
    ));
    _ = root.append_child(&nav);

    wire(document);
    Ok(())
}

fn wire(document: &web::Document) {
    for item in &NAV_ITEMS {
        wire_jump(document, &format!("nav-link-{}", item.anchor), item.anchor);
        wire_jump(
            document,
            &format!("nav-mobile-link-{}", item.anchor),
            item.anchor,
        );
    }
    wire_jump(document, "nav-brand", "home");
    wire_jump(document, "nav-hire", "contact");
    wire_jump(document, "nav-mobile-hire", "contact");

    let doc = document.clone();
    dom::add_click_listener(document, "nav-burger", move || {
        let open = !menu_is_open(&doc);
        set_menu_open(&doc, open);
    });
    let doc = document.clone();
    dom::add_click_listener(document, "nav-mobile-close", move || {
        set_menu_open(&doc, false);
    });
    let doc = document.clone();
    dom::add_click_listener(document, "nav-backdrop", move || {
        set_menu_open(&doc, false);
    });
    wire_menu_escape(document);
}

fn wire_jump(document: &web::Document, element_id: &str, anchor: &'static str) {
    let doc = document.clone();
    dom::add_click_listener(document, element_id, move || jump_to_section(&doc, anchor));
}

/// Smooth-scroll a section into view and close the mobile menu if it was
/// open. Used by every nav link and the hero call-to-action buttons.
pub fn jump_to_section(document: &web::Document, anchor: &str) {
    if let Some(el) = document.get_element_by_id(anchor) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        log::info!("[nav] jump to #{anchor}");
    } else {
        log::warn!("[nav] no section #{anchor}");
    }
    set_menu_open(document, false);
}

fn menu_is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id("site-nav")
        .map(|nav| nav.class_list().contains("menu-open"))
        .unwrap_or(false)
}

fn set_menu_open(document: &web::Document, open: bool) {
    let Some(nav) = document.get_element_by_id("site-nav") else {
        return;
    };
    dom::set_class_flag(&nav, "menu-open", open);
    if let Some(burger) = document.get_element_by_id("nav-burger") {
        _ = burger.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

fn wire_menu_escape(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_menu_open(&doc, false);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
