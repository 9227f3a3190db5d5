// Hero: terminal window typing out the name, tagline and the two
// call-to-action buttons.

use site_core::{Typewriter, HERO_TAGLINE, HERO_WINDOW_TITLE, TYPEWRITER_STEP_MS, TYPEWRITER_TEXT};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::nav;
use crate::{dom, fmt};

pub fn mount(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = dom::create_el(document, "section", "site-section hero")?;
    section.set_id("home");
    section.set_inner_html(&format!(
        r#"<div class="hero-orb hero-orb-cyan"></div>
<div class="hero-orb hero-orb-violet"></div>
<div class="hero-grid"></div>
<div class="hero-inner">
  <div class="code-window hero-window">
    <div class="window-chrome">
      <span class="chrome-dot chrome-dot-red"></span><span class="chrome-dot chrome-dot-yellow"></span><span class="chrome-dot chrome-dot-green"></span>
      <span class="window-title">{title}</span>
    </div>
    <div class="hero-code">
      <span class="hero-line-no">1</span>
      <h1 class="hero-headline"><span class="tok-kw">const</span> <span class="tok-ident">dev</span> <span class="tok-op">=</span> <span class="tok-str">&#39;<span id="hero-typed"></span><span class="hero-caret">|</span>&#39;</span><span class="tok-punct">;</span></h1>
    </div>
  </div>
  <p class="hero-tagline">{tagline}</p>
  <div class="hero-actions">
    <button class="btn btn-primary" id="hero-cta-projects">View Projects</button>
    <button class="btn btn-outline" id="hero-cta-contact">Get In Touch</button>
  </div>
  <div class="hero-scroll-hint"><svg viewBox="0 0 24 24" width="28" height="28" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg></div>
</div>"#,
        title = fmt::escape_html(HERO_WINDOW_TITLE),
        tagline = fmt::escape_html(HERO_TAGLINE),
    ));
    _ = main.append_child(&section);

    let doc = document.clone();
    dom::add_click_listener(document, "hero-cta-projects", move || {
        nav::jump_to_section(&doc, "projects");
    });
    let doc = document.clone();
    dom::add_click_listener(document, "hero-cta-contact", move || {
        nav::jump_to_section(&doc, "contact");
    });
    Ok(())
}

/// Reveal the name one character per tick, then cancel the interval. The
/// caret keeps pulsing after typing finishes.
pub fn start_typewriter(document: &web::Document) {
    let Some(el) = document.get_element_by_id("hero-typed") else {
        log::warn!("[hero] no #hero-typed to type into");
        return;
    };
    let mut typewriter = Typewriter::new(TYPEWRITER_TEXT);
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let id_slot = interval_id.clone();
    let tick = Closure::wrap(Box::new(move || {
        if typewriter.step() {
            el.set_text_content(Some(typewriter.visible()));
        } else if let Some(id) = id_slot.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
            log::debug!("[hero] typewriter complete");
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TYPEWRITER_STEP_MS,
        ) {
            Ok(id) => interval_id.set(Some(id)),
            Err(e) => log::error!("[hero] typewriter interval: {e:?}"),
        }
    }
    tick.forget();
}
