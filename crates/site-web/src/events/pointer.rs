use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::cursor::CursorHandle;
use crate::hover;

/// Wire the pointer listeners that feed the cursor overlay. Listeners go on
/// the window so the overlay tracks the pointer over every section.
pub fn wire_pointer_handlers(fx: &CursorHandle) {
    wire_pointermove(fx);
    wire_pointerdown(fx);
    wire_pointerup(fx);
    wire_leave(fx);
}

fn wire_pointermove(fx: &CursorHandle) {
    let fx = fx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let hovering = hover::snapshot_target(&ev).is_interactive();
        fx.borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32, hovering);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(fx: &CursorHandle) {
    let fx = fx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        fx.borrow_mut()
            .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(fx: &CursorHandle) {
    let fx = fx.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        fx.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// mouseleave on the root element fires when the pointer exits the viewport.
fn wire_leave(fx: &CursorHandle) {
    let fx = fx.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        fx.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);
    if let Some(root) = crate::dom::window_document().and_then(|d| d.document_element()) {
        _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
