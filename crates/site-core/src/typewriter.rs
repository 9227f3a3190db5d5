/// Timer-driven typewriter over a fixed headline: one character per step
/// until complete, then inert.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: &'static str,
    shown_bytes: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            shown_bytes: 0,
        }
    }

    /// Reveal one more character. Returns true while the step advanced;
    /// false once the full text is already visible (callers cancel their
    /// interval on false).
    pub fn step(&mut self) -> bool {
        match self.text[self.shown_bytes..].chars().next() {
            Some(c) => {
                self.shown_bytes += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Currently visible prefix.
    #[inline]
    pub fn visible(&self) -> &str {
        &self.text[..self.shown_bytes]
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.shown_bytes == self.text.len()
    }
}
