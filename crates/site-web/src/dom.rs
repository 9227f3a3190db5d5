use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create a `<div>` with the given class, typed so callers can reach its
/// inline style.
pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    create_el(document, "div", class)
}

pub fn create_el(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{tag}> is not an HtmlElement: {e:?}"))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Toggle a class to match a boolean without churning the attribute when
/// nothing changed.
pub fn set_class_flag(el: &web::Element, class: &str, on: bool) {
    let has = el.class_list().contains(class);
    if on && !has {
        _ = el.class_list().add_1(class);
    } else if !on && has {
        _ = el.class_list().remove_1(class);
    }
}

/// Attach a click handler to an element looked up by id. The sections are
/// built from the content tables with predictable ids, so a missing element
/// is a bug worth logging.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] no #{element_id} to wire");
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
