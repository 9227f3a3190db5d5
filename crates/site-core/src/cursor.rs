/// Composite interaction mode of the cursor effect, derived from the flags
/// below for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPhase {
    /// No pointer sample yet, or the pointer left the viewport.
    Hidden,
    Idle,
    /// Pointer is over an interactive element.
    Hovering,
    /// Pointer button held down.
    Clicking,
}

/// Pointer-driven state for the cursor ring, glow and ripple.
///
/// Owned by the effect for the page's lifetime; mutated only by the
/// pointer-event handlers and read by the per-frame render pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorState {
    visible: bool,
    clicking: bool,
    hovering: bool,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A raw pointer-move sample arrived; `hovering` is the classifier's
    /// verdict for the sample's event target.
    pub fn pointer_moved(&mut self, hovering: bool) {
        self.visible = true;
        self.hovering = hovering;
    }

    /// Pointer button pressed. Returns true only on the false→true edge so
    /// a held or repeated down produces exactly one ripple.
    pub fn pointer_down(&mut self) -> bool {
        let changed = !self.clicking;
        self.clicking = true;
        changed
    }

    /// Pointer button released. Redundant releases are no-ops.
    pub fn pointer_up(&mut self) -> bool {
        let changed = self.clicking;
        self.clicking = false;
        changed
    }

    /// Pointer left the viewport; the effect is force-hidden until the next
    /// move sample.
    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_clicking(&self) -> bool {
        self.clicking
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn phase(&self) -> CursorPhase {
        if !self.visible {
            CursorPhase::Hidden
        } else if self.clicking {
            CursorPhase::Clicking
        } else if self.hovering {
            CursorPhase::Hovering
        } else {
            CursorPhase::Idle
        }
    }
}
