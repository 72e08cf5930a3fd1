//! Character-by-character reveal of a fixed title string.
//!
//! [`Typewriter`] is the cursor the DOM effect drives from timer callbacks;
//! [`reveal_schedule`] flattens the same cursor into a timeline so the timing
//! contract can be checked without a browser.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Cursor over captured title text.
///
/// Each [`step`](Self::step) appends exactly one character, in original order.
/// Once the cursor reaches the end it stays there; there is no rewind.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
    revealed: String,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let revealed = String::with_capacity(text.len());
        Self { chars, cursor: 0, revealed }
    }

    /// Reveal the next character. Returns the text shown so far, or `None`
    /// when nothing is left to reveal.
    pub fn step(&mut self) -> Option<&str> {
        let ch = *self.chars.get(self.cursor)?;
        self.cursor += 1;
        self.revealed.push(ch);
        Some(&self.revealed)
    }

    #[must_use]
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Wait before the next [`step`](Self::step): `start_ms` before the
    /// first character, `step_ms` before each later one, `None` once done.
    #[must_use]
    pub fn next_delay(&self, start_ms: u32, step_ms: u32) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        Some(if self.cursor == 0 { start_ms } else { step_ms })
    }

    /// Characters still hidden.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.cursor
    }
}

/// Timeline of `(elapsed_ms, revealed_text)` pairs the effect produces for
/// `text`: the first character lands at `start_delay_ms`, each further one
/// `step_ms` later.
#[must_use]
pub fn reveal_schedule(text: &str, start_delay_ms: u32, step_ms: u32) -> Vec<(u64, String)> {
    let mut writer = Typewriter::new(text);
    let mut at = 0u64;
    let mut out = Vec::with_capacity(writer.remaining());
    while let Some(delay) = writer.next_delay(start_delay_ms, step_ms) {
        at += u64::from(delay);
        if let Some(shown) = writer.step() {
            out.push((at, shown.to_owned()));
        }
    }
    out
}
