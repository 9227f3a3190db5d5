// Projects: terminal-framed cards with a screenshot, tags and outbound
// Live/Code links. Screenshot loads come from an image CDN, so every card
// gets the fallback-and-retry wiring.

use site_core::{PROJECTS, PROJECTS_INTRO};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, fmt, images};

pub fn mount(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = dom::create_el(document, "section", "site-section projects")?;
    section.set_id("projects");

    let mut cards = String::new();
    for (i, project) in PROJECTS.iter().enumerate() {
        let mut tags = String::new();
        for tag in &project.tags {
            tags.push_str(&format!(
                r#"<span class="tag">{}</span>"#,
                fmt::escape_html(tag)
            ));
        }
        cards.push_str(&format!(
            r#"<article class="project-card panel">
  <div class="window-chrome card-chrome">
    <span class="chrome-dot chrome-dot-red"></span><span class="chrome-dot chrome-dot-yellow"></span><span class="chrome-dot chrome-dot-green"></span>
    <span class="window-title">{path}</span>
  </div>
  <div class="card-shot">
    <img id="project-img-{i}" src="{image}" alt="{title}" width="{w}" height="{h}" loading="lazy">
    <div class="card-shade"></div>
  </div>
  <div class="card-body">
    <h3 class="card-title">{title}</h3>
    <p class="card-desc">{desc}</p>
    <div class="card-tags">{tags}</div>
    <div class="card-actions">
      <a class="btn btn-ghost" href="{live}" target="_blank" rel="noopener noreferrer">Live &#8599;</a>
      <a class="btn btn-ghost" href="{code}" target="_blank" rel="noopener noreferrer">Code</a>
    </div>
  </div>
</article>"#,
            path = fmt::escape_html(&project.terminal_path()),
            image = project.image_url,
            title = fmt::escape_html(project.title),
            w = project.image_width,
            h = project.image_height,
            desc = fmt::escape_html(project.description),
            live = project.live_url,
            code = project.code_url,
        ));
    }

    section.set_inner_html(&format!(
        r#"<div class="projects-grid-bg"></div>
<div class="section-inner">
  <div class="section-heading"><span class="heading-glyph tok-ident">&gt;_</span><h2>Featured Projects</h2></div>
  <p class="section-intro">{intro}</p>
  <div class="project-grid">{cards}</div>
</div>"#,
        intro = fmt::escape_html(PROJECTS_INTRO),
    ));
    _ = main.append_child(&section);

    // wiring needs the imgs in the document, so this runs after the append
    for (i, project) in PROJECTS.iter().enumerate() {
        let img = document
            .get_element_by_id(&format!("project-img-{i}"))
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        match img {
            Some(img) => images::wire_fallback(&img, project.image_url),
            None => log::warn!("[img] missing #project-img-{i}"),
        }
    }
    Ok(())
}
