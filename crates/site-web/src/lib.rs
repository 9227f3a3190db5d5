#![cfg(target_arch = "wasm32")]

mod cursor;
mod dom;
mod events;
mod fmt;
mod frame;
mod hover;
mod images;
mod sections;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // the start hook can run again on hot reload; mount only once
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id("site-root")
        .ok_or_else(|| anyhow::anyhow!("missing #site-root"))?;

    sections::mount(&document, &root)?;
    sections::hero::start_typewriter(&document);

    // particle visuals vary per visit, seeded from the clock
    let seed = (js_sys::Date::now() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let fx = cursor::CursorFx::mount(&document, seed)?;
    events::wire_pointer_handlers(&fx);
    events::wire_scroll_handlers(&document);
    events::scroll::on_scroll(&document);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        fx,
        last_instant: Instant::now(),
    })));

    log::info!("[init] page mounted");
    Ok(())
}
