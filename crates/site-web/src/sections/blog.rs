// Blog: post cards with category, date and read-time metadata. The posts
// have no routes behind them yet, so the read buttons only log.

use site_core::{BLOG_INTRO, BLOG_POSTS};
use web_sys as web;

use crate::{dom, fmt};

pub fn mount(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = dom::create_el(document, "section", "site-section blog")?;
    section.set_id("blog");

    let mut cards = String::new();
    for (i, post) in BLOG_POSTS.iter().enumerate() {
        cards.push_str(&format!(
            r#"<article class="post-card panel">
  <div class="post-meta">
    <span class="post-category">{category}</span>
    <span class="post-dates">{date} &middot; {read_time}</span>
  </div>
  <h3 class="post-title">{title}</h3>
  <p class="post-excerpt">{excerpt}</p>
  <button class="btn btn-ghost post-read" id="post-read-{i}">Read article <span class="arrow">&rarr;</span></button>
</article>"#,
            category = fmt::escape_html(post.category),
            date = fmt::escape_html(post.date),
            read_time = fmt::escape_html(post.read_time),
            title = fmt::escape_html(post.title),
            excerpt = fmt::escape_html(post.excerpt),
        ));
    }

    section.set_inner_html(&format!(
        r#"<div class="section-inner">
  <div class="section-heading"><span class="tok-punct">&lt;/</span><h2>Blog &amp; Thoughts</h2><span class="tok-punct">&gt;</span></div>
  <p class="section-intro">{intro}</p>
  <div class="post-grid">{cards}</div>
  <div class="blog-more"><button class="btn btn-outline" id="blog-view-all">View All Articles</button></div>
</div>"#,
        intro = fmt::escape_html(BLOG_INTRO),
    ));
    _ = main.append_child(&section);

    for (i, post) in BLOG_POSTS.iter().enumerate() {
        let title = post.title;
        dom::add_click_listener(document, &format!("post-read-{i}"), move || {
            log::info!("[nav] read article \"{title}\" (no route yet)");
        });
    }
    dom::add_click_listener(document, "blog-view-all", move || {
        log::info!("[nav] view all articles (no route yet)");
    });
    Ok(())
}
