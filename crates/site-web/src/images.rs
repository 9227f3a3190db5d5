use site_core::{retry_url, FALLBACK_IMAGE_DATA_URL};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Error and retry wiring for one remote image (the project screenshots).
///
/// On load failure the source is swapped for an inline SVG placeholder;
/// clicking the placeholder retries the original URL with a cache-busting
/// query parameter. If the placeholder itself errors the element is hidden
/// so the error handler cannot loop.
pub fn wire_fallback(img: &web::HtmlImageElement, original: &'static str) {
    let img_err = img.clone();
    let on_error = Closure::wrap(Box::new(move |_ev: web::Event| {
        if img_err.src().starts_with("data:") {
            log::error!("[img] placeholder failed, hiding element");
            _ = img_err.style().set_property("display", "none");
        } else {
            log::warn!("[img] failed to load {original}, showing placeholder");
            _ = img_err.class_list().add_1("img-fallback");
            _ = img_err.set_attribute("data-original-url", original);
            _ = img_err.set_attribute("role", "img");
            _ = img_err.set_attribute("aria-label", "Image failed to load");
            img_err.set_src(FALLBACK_IMAGE_DATA_URL);
        }
    }) as Box<dyn FnMut(_)>);
    _ = img.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let attempts = Rc::new(Cell::new(0u32));
    let img_retry = img.clone();
    let on_click = Closure::wrap(Box::new(move |_ev: web::Event| {
        // only the placeholder is clickable-to-retry
        if !img_retry.class_list().contains("img-fallback") {
            return;
        }
        let attempt = attempts.get() + 1;
        attempts.set(attempt);
        _ = img_retry.class_list().remove_1("img-fallback");
        _ = img_retry.remove_attribute("role");
        _ = img_retry.remove_attribute("aria-label");
        log::info!("[img] retry {attempt} for {original}");
        img_retry.set_src(&retry_url(original, attempt));
    }) as Box<dyn FnMut(_)>);
    _ = img.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
