// About: bio paragraphs, availability badge and the tech stack grid.

use site_core::{ABOUT_FOLLOWUP, ABOUT_LEAD, AVAILABILITY_NOTE, TECH_STACK};
use web_sys as web;

use crate::{dom, fmt};

pub fn mount(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = dom::create_el(document, "section", "site-section about")?;
    section.set_id("about");

    let mut tiles = String::new();
    for entry in &TECH_STACK {
        let name = fmt::escape_html(entry.name);
        tiles.push_str(&format!(
            r#"<div class="stack-tile">
  <img src="{icon}" alt="{name}" width="40" height="40" loading="lazy">
  <span class="stack-name">{name}</span>
  <span class="stack-glow stack-glow-{accent}"></span>
</div>"#,
            icon = entry.icon,
            accent = entry.accent,
        ));
    }

    section.set_inner_html(&format!(
        r#"<div class="section-accent section-accent-violet"></div>
<div class="section-accent section-accent-cyan section-accent-bl"></div>
<div class="section-inner">
  <div class="section-heading"><span class="tok-punct">&lt;</span><h2>About</h2><span class="tok-punct">/&gt;</span></div>
  <div class="about-grid">
    <div class="about-text">
      <div class="panel about-bio">
        <p>{lead}</p>
        <p>{followup}</p>
      </div>
      <div class="badge-available"><span class="badge-dot"></span><span>{availability}</span></div>
    </div>
    <div class="about-stack panel">
      <h3 class="panel-title">Tech Stack</h3>
      <div class="stack-grid">{tiles}</div>
    </div>
  </div>
</div>"#,
        lead = fmt::escape_html(ABOUT_LEAD),
        followup = fmt::escape_html(ABOUT_FOLLOWUP),
        availability = fmt::escape_html(AVAILABILITY_NOTE),
    ));
    _ = main.append_child(&section);
    Ok(())
}
