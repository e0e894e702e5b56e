// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient banner shown after the contact form is submitted.
//!
//! The banner slides in, stays for [`Notice::HOLD`], slides out over
//! [`Notice::EXIT`] and is then removed.

use alloc::format;
use alloc::string::String;

use crate::time::Duration;

/// Outcome the banner reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Green.
    Success,
    /// Red.
    Error,
}

impl NoticeKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    const fn background(self) -> &'static str {
        match self {
            Self::Success => "#4CAF50",
            Self::Error => "#f44336",
        }
    }
}

/// A banner message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice<'a> {
    /// Banner text.
    pub message: &'a str,
    /// Outcome.
    pub kind: NoticeKind,
}

impl<'a> Notice<'a> {
    /// How long the banner stays before leaving.
    pub const HOLD: Duration = Duration::from_millis(3000);
    /// Length of the exit animation; the element is removed after it.
    pub const EXIT: Duration = Duration::from_millis(300);
    /// Animation played when the banner leaves.
    pub const EXIT_ANIMATION: &'static str = "slideOutRight 0.3s ease";
    /// Confirmation shown after the contact form is sent.
    pub const THANKS: &'static str = "Thank you for your message! I'll get back to you soon.";

    /// A success banner.
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self {
            message,
            kind: NoticeKind::Success,
        }
    }

    /// `class` attribute of the banner.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("form-message {}", self.kind.class())
    }

    /// Inline `style` attribute of the banner.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 2rem; border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); \
             z-index: 10000; animation: slideInRight 0.3s ease;",
            self.kind.background()
        )
    }

    /// Time from insertion to removal.
    #[must_use]
    pub const fn lifetime() -> Duration {
        Self::HOLD.saturating_add(Self::EXIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_style_follows_kind() {
        let ok = Notice::success(Notice::THANKS);
        assert_eq!(ok.class_name(), "form-message success");
        assert!(ok.css_text().contains("#4CAF50"));

        let err = Notice {
            message: "nope",
            kind: NoticeKind::Error,
        };
        assert!(err.css_text().contains("#f44336"));
    }

    #[test]
    fn removed_after_hold_and_exit() {
        assert_eq!(Notice::lifetime(), Duration::from_millis(3300));
    }
}
