// Style and markup string builders. Pure string code, no DOM types, so the
// host-side tests can include this module directly.

/// Escape text for interpolation into an HTML fragment. The content tables
/// are full of angle brackets (`<FardinMahadi />`, the `</>` nav glyph), so
/// every table string goes through here before `set_inner_html`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Transform that puts an element's center on the pointer position.
pub fn translate_centered(x: f32, y: f32) -> String {
    format!("translate3d({x:.2}px, {y:.2}px, 0) translate(-50%, -50%)")
}

/// Transform for the hover brackets: pinned to the pointer, then nudged by a
/// fixed pixel offset instead of centered.
pub fn translate_offset(x: f32, y: f32, dx: f32, dy: f32) -> String {
    format!("translate3d({x:.2}px, {y:.2}px, 0) translate({dx:.0}px, {dy:.0}px)")
}

pub fn scale(factor: f32) -> String {
    format!("scale({factor:.3})")
}

/// Inline style for one trail particle. The fade animation reads the two
/// custom properties for its starting scale and opacity.
pub fn particle_style(x: f32, y: f32, scale: f32, opacity: f32) -> String {
    format!("left:{x:.1}px;top:{y:.1}px;--p-scale:{scale:.3};--p-opacity:{opacity:.3}")
}

/// Inline style pinning a one-shot element (the click ripple) to a point.
pub fn point_style(x: f32, y: f32) -> String {
    format!("left:{x:.1}px;top:{y:.1}px")
}
