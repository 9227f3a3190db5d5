use site_core::{FOOTER_CREDIT, FOOTER_OWNER};
use web_sys as web;

use crate::{dom, fmt};

pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    let footer = dom::create_el(document, "footer", "site-footer")?;
    let year = js_sys::Date::new_0().get_full_year();
    footer.set_inner_html(&format!(
        r#"<div class="footer-inner">
  <span class="footer-credit">{credit}</span>
  <span class="footer-copy">&copy; {year} {owner}. All rights reserved.</span>
</div>"#,
        credit = fmt::escape_html(FOOTER_CREDIT),
        owner = fmt::escape_html(FOOTER_OWNER),
    ));
    _ = root.append_child(&footer);
    Ok(())
}
