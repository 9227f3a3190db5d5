// Host-side tests for the pure style-string builders.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod fmt {
    include!("../src/fmt.rs");
}

use fmt::*;

#[test]
fn escapes_markup_in_content_strings() {
    assert_eq!(escape_html("<FardinMahadi />"), "&lt;FardinMahadi /&gt;");
    assert_eq!(escape_html("</>"), "&lt;/&gt;");
    assert_eq!(escape_html("MERN & beyond"), "MERN &amp; beyond");
    assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    assert_eq!(escape_html("it's"), "it&#39;s");
}

#[test]
fn escape_leaves_plain_text_alone() {
    assert_eq!(escape_html("Featured Projects"), "Featured Projects");
    assert_eq!(escape_html(""), "");
}

#[test]
fn centered_transform_pins_the_element_center() {
    assert_eq!(
        translate_centered(12.0, 34.5),
        "translate3d(12.00px, 34.50px, 0) translate(-50%, -50%)"
    );
}

#[test]
fn offset_transform_keeps_whole_pixel_nudges() {
    assert_eq!(
        translate_offset(100.0, 50.0, -20.0, -10.0),
        "translate3d(100.00px, 50.00px, 0) translate(-20px, -10px)"
    );
}

#[test]
fn scale_renders_three_decimals() {
    assert_eq!(scale(1.5), "scale(1.500)");
    assert_eq!(scale(0.8), "scale(0.800)");
}

#[test]
fn particle_style_carries_the_fade_custom_properties() {
    assert_eq!(
        particle_style(10.0, 20.0, 0.75, 0.5),
        "left:10.0px;top:20.0px;--p-scale:0.750;--p-opacity:0.500"
    );
}

#[test]
fn point_style_pins_left_and_top() {
    assert_eq!(point_style(3.25, 4.5), "left:3.2px;top:4.5px");
}
