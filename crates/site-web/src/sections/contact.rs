// Contact: the code-styled form, social links and the status readout.
// Submission has no backend; it logs the payload and leaves the fields
// intact.

use site_core::{CONTACT_FORM_TITLE, CONTACT_INTRO, CONTACT_STATUS_LINES, SOCIAL_LINKS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, fmt};

pub fn mount(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = dom::create_el(document, "section", "site-section contact")?;
    section.set_id("contact");

    let mut socials = String::new();
    for link in &SOCIAL_LINKS {
        socials.push_str(&format!(
            r#"<a class="social-row social-{accent}" href="{url}" target="_blank" rel="noopener noreferrer">
  <span class="social-glyph">{glyph}</span>
  <span class="social-text"><span class="social-name">{name}</span><span class="social-user">{user}</span></span>
</a>"#,
            accent = link.accent,
            url = link.url,
            glyph = social_glyph(link.name),
            name = fmt::escape_html(link.name),
            user = fmt::escape_html(link.username),
        ));
    }

    let mut status = String::new();
    for (key, value, accent) in CONTACT_STATUS_LINES {
        status.push_str(&format!(
            r#"<div class="status-line"><span class="status-key">{key}</span> <span class="status-val status-{accent}">{value}</span></div>"#,
            key = fmt::escape_html(key),
            value = fmt::escape_html(value),
        ));
    }

    section.set_inner_html(&format!(
        r#"<div class="section-inner">
  <div class="section-heading"><span class="heading-glyph tok-str">&gt;_</span><h2>Let&#39;s Collaborate</h2></div>
  <p class="section-intro">{intro}</p>
  <div class="contact-grid">
    <form class="panel contact-form" id="contact-form">
      <div class="window-chrome card-chrome">
        <span class="chrome-dot chrome-dot-red"></span><span class="chrome-dot chrome-dot-yellow"></span><span class="chrome-dot chrome-dot-green"></span>
        <span class="window-title">{form_title}</span>
      </div>
      <div class="form-body">
        <label class="form-row">
          <span class="form-label"><span class="tok-kw">const</span> <span class="tok-ident">name</span> <span class="tok-op">=</span></span>
          <input class="form-input" id="contact-name" type="text" placeholder="Your Name" required>
        </label>
        <label class="form-row">
          <span class="form-label"><span class="tok-kw">const</span> <span class="tok-ident">email</span> <span class="tok-op">=</span></span>
          <input class="form-input" id="contact-email" type="email" placeholder="your.email@example.com" required>
        </label>
        <label class="form-row">
          <span class="form-label"><span class="tok-kw">const</span> <span class="tok-ident">message</span> <span class="tok-op">=</span></span>
          <textarea class="form-input form-textarea" id="contact-message" rows="5" placeholder="Your message..." required></textarea>
        </label>
        <button class="btn btn-primary form-submit" type="submit">Send Message</button>
      </div>
    </form>
    <div class="contact-aside">
      <div class="panel contact-connect">
        <h3 class="panel-title">Connect With Me</h3>
        <div class="social-list">{socials}</div>
      </div>
      <div class="panel contact-status">
        <div class="tok-comment">$ cat status.txt</div>
        {status}
        <div class="status-prompt">$ <span class="hero-caret">_</span></div>
      </div>
    </div>
  </div>
</div>"#,
        intro = fmt::escape_html(CONTACT_INTRO),
        form_title = fmt::escape_html(CONTACT_FORM_TITLE),
    ));
    _ = main.append_child(&section);

    wire_submit(document);
    Ok(())
}

fn social_glyph(name: &str) -> &'static str {
    match name {
        "GitHub" => "git",
        "LinkedIn" => "in",
        "Email" => "@",
        _ => ">",
    }
}

fn wire_submit(document: &web::Document) {
    let Some(form) = document.get_element_by_id("contact-form") else {
        log::warn!("[form] no #contact-form to wire");
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let name = input_value(&doc, "contact-name");
        let email = input_value(&doc, "contact-email");
        let message = textarea_value(&doc, "contact-message");
        log::info!(
            "[form] submitted: name=\"{name}\" email=\"{email}\" message_chars={}",
            message.chars().count()
        );
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}
