/// Snapshot of a pointer event's target, taken by the frontend before
/// classification. Classification itself is a pure function of this value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSnapshot {
    /// DOM tag name as reported by the element (uppercase for HTML).
    pub tag_name: String,
    /// Whether the element sits inside an `<a>` or `<button>`.
    pub has_interactive_ancestor: bool,
    /// Explicit ARIA role attribute, if any.
    pub role: Option<String>,
    /// Computed `cursor` style, if it could be resolved.
    pub cursor_style: Option<String>,
}

impl TargetSnapshot {
    /// Whether the pointer should be treated as hovering an interactive
    /// element: the target is itself a link or button, descends from one,
    /// declares `role="button"`, or resolves to the `pointer` cursor.
    pub fn is_interactive(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("a")
            || self.tag_name.eq_ignore_ascii_case("button")
            || self.has_interactive_ancestor
            || self.role.as_deref() == Some("button")
            || self.cursor_style.as_deref() == Some("pointer")
    }
}
