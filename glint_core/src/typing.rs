// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-by-character typing reveal.
//!
//! ```text
//!   Idle (text captured, element cleared) ──start()──► Typing ──last char──► Complete
//! ```
//!
//! Each [`tick`](TypingAnimation::tick) reveals exactly one more Unicode
//! scalar of the captured text. Completion cancels the timer; there is no
//! replay.

use alloc::string::String;

use crate::time::Duration;
use crate::timer::{Stagger, Step};

/// Timing of a typing reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypingSpec {
    /// Time between characters.
    pub interval: Duration,
    /// Delay before the first character.
    pub delay: Duration,
}

impl TypingSpec {
    /// Hero headline: 100 ms per character after a one-second pause.
    #[must_use]
    pub const fn headline() -> Self {
        Self {
            interval: Duration::from_millis(100),
            delay: Duration::from_millis(1000),
        }
    }

    /// Code line in a showcase snippet.
    #[must_use]
    pub const fn code_line(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            delay: Duration::ZERO,
        }
    }

    /// Returns this spec delayed for line `index` of a staggered block.
    #[must_use]
    pub const fn staggered(self, stagger: Stagger, index: usize) -> Self {
        Self {
            interval: self.interval,
            delay: self.delay.saturating_add(stagger.delay(index)),
        }
    }
}

/// Lifecycle of a typing reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypingPhase {
    /// Text captured; nothing shown.
    Idle,
    /// Timer running.
    Typing,
    /// Full text shown; terminal.
    Complete,
}

/// Typing state machine for one element.
#[derive(Clone, Debug)]
pub struct TypingAnimation {
    text: String,
    /// Byte offset of the end of the revealed prefix; always on a char
    /// boundary.
    cursor: usize,
    phase: TypingPhase,
}

impl TypingAnimation {
    /// Captures `text`. The caller clears the element.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            phase: TypingPhase::Idle,
        }
    }

    /// Begins typing. Empty text completes immediately. Returns `false` if
    /// already started.
    pub fn start(&mut self) -> bool {
        if self.phase != TypingPhase::Idle {
            return false;
        }
        self.phase = if self.text.is_empty() {
            TypingPhase::Complete
        } else {
            TypingPhase::Typing
        };
        true
    }

    /// Reveals one more character.
    pub fn tick(&mut self) -> Step {
        if self.phase != TypingPhase::Typing {
            return Step::Done;
        }
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
        if self.cursor >= self.text.len() {
            self.phase = TypingPhase::Complete;
            return Step::Done;
        }
        Step::Continue
    }

    /// The revealed prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// The full captured text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TypingPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick() {
        let text = "Hi, I'm Zoë · dev";
        let mut anim = TypingAnimation::new(text);
        assert_eq!(anim.visible(), "");
        assert!(anim.start());

        let mut last_len = 0;
        let mut ticks = 0;
        loop {
            let step = anim.tick();
            ticks += 1;
            let len = anim.visible().chars().count();
            assert_eq!(len, last_len + 1, "exactly one char per tick");
            last_len = len;
            if step.is_done() {
                break;
            }
        }
        assert_eq!(ticks, text.chars().count());
        assert_eq!(anim.visible(), text);
        assert_eq!(anim.phase(), TypingPhase::Complete);
    }

    #[test]
    fn complete_is_terminal() {
        let mut anim = TypingAnimation::new("ok");
        anim.start();
        anim.tick();
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.visible(), "ok");
        assert!(!anim.start(), "no replay");
    }

    #[test]
    fn empty_text_completes_on_start() {
        let mut anim = TypingAnimation::new("");
        assert!(anim.start());
        assert_eq!(anim.phase(), TypingPhase::Complete);
        assert_eq!(anim.tick(), Step::Done);
    }

    #[test]
    fn idle_does_not_type() {
        let mut anim = TypingAnimation::new("abc");
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.visible(), "");
    }

    #[test]
    fn staggered_lines_start_later() {
        let spec = TypingSpec::code_line(40).staggered(Stagger::every(Duration::from_millis(200)), 3);
        assert_eq!(spec.delay, Duration::from_millis(600));
        assert_eq!(spec.interval, Duration::from_millis(40));
    }
}
