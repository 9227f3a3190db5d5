pub mod about;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;

use web_sys as web;

/// Build the whole page under the root element, in display order. `<main>`
/// is appended before the sections fill it so their id-based wiring can find
/// elements through the document.
pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    nav::mount(document, root)?;
    let main = crate::dom::create_el(document, "main", "site-main")?;
    _ = root.append_child(&main);
    hero::mount(document, &main)?;
    about::mount(document, &main)?;
    projects::mount(document, &main)?;
    blog::mount(document, &main)?;
    contact::mount(document, &main)?;
    footer::mount(document, root)?;
    Ok(())
}
