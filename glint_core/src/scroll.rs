// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked page chrome: progress bar, auto-hiding navbar, active
//! section tracking and in-page anchor targets.

/// Reading progress in percent, clamped to `[0, 100]`.
///
/// A document that does not scroll reports zero.
#[must_use]
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Inline style of the reading progress bar. Its `width` then tracks
/// [`scroll_progress`].
pub const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(90deg, #3BAFDA, #C6D300); z-index: 10000; \
     transition: width 0.1s ease;";

/// Height of the fixed navbar that anchor scrolling leaves clear.
pub const NAVBAR_CLEARANCE: f64 = 70.0;

/// Scroll target for an in-page anchor whose section starts at `offset_top`.
#[must_use]
pub fn anchor_target(offset_top: f64) -> f64 {
    offset_top - NAVBAR_CLEARANCE
}

/// A style change for the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavbarAction {
    /// Slide out of view.
    Hide,
    /// Show with the resting (top of page) style.
    ShowAtTop,
    /// Show with the raised style used mid-page.
    ShowScrolled,
}

impl NavbarAction {
    /// Style declarations for this action.
    #[must_use]
    pub const fn declarations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Hide => &[("transform", "translateY(-100%)")],
            Self::ShowAtTop => &[
                ("transform", "translateY(0)"),
                ("background", "rgba(11, 20, 38, 0.95)"),
                ("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.3)"),
            ],
            Self::ShowScrolled => &[
                ("transform", "translateY(0)"),
                ("background", "rgba(11, 20, 38, 0.98)"),
                ("box-shadow", "0 4px 25px rgba(0, 0, 0, 0.4)"),
            ],
        }
    }
}

/// Decides when the navbar hides and reappears.
///
/// Deltas under [`MIN_DELTA`](Self::MIN_DELTA) are ignored entirely (the last
/// position is not updated either), so slow scrolling accumulates until it
/// counts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarTracker {
    last_y: f64,
    hidden: bool,
}

impl NavbarTracker {
    /// Smallest scroll delta that is acted on.
    pub const MIN_DELTA: f64 = 5.0;
    /// Above this the page counts as "at the top".
    pub const TOP_ZONE: f64 = 50.0;

    /// Creates a tracker for a page scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_y: 0.0,
            hidden: false,
        }
    }

    /// Feeds the current scroll position.
    pub fn update(&mut self, y: f64) -> Option<NavbarAction> {
        if (y - self.last_y).abs() < Self::MIN_DELTA {
            return None;
        }
        let previous = self.last_y;
        self.last_y = y;

        if y < Self::TOP_ZONE {
            self.hidden = false;
            return Some(NavbarAction::ShowAtTop);
        }
        if y > previous {
            if self.hidden {
                return None;
            }
            self.hidden = true;
            Some(NavbarAction::Hide)
        } else {
            if !self.hidden {
                return None;
            }
            self.hidden = false;
            Some(NavbarAction::ShowScrolled)
        }
    }

    /// Whether the navbar is currently hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// How far below the viewport top the "current" reading line sits.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Vertical extent of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    /// Document offset of the section's top edge.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

impl SectionSpan {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section under the reading line, if any. When sections
/// overlap the last one wins.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<usize> {
    let line = scroll_y + ACTIVE_SECTION_OFFSET;
    sections.iter().rposition(|s| s.contains(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-10.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0, "page shorter than viewport");
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn navbar_hides_once_and_shows_once() {
        let mut nav = NavbarTracker::new();
        assert_eq!(nav.update(100.0), Some(NavbarAction::Hide));
        assert_eq!(nav.update(200.0), None, "already hidden");
        assert_eq!(nav.update(150.0), Some(NavbarAction::ShowScrolled));
        assert_eq!(nav.update(120.0), None, "already shown");
        assert_eq!(nav.update(20.0), Some(NavbarAction::ShowAtTop));
        assert!(!nav.is_hidden());
    }

    #[test]
    fn small_deltas_are_ignored() {
        let mut nav = NavbarTracker::new();
        assert_eq!(nav.update(100.0), Some(NavbarAction::Hide));
        assert_eq!(nav.update(97.0), None);
        assert_eq!(nav.update(95.0), Some(NavbarAction::ShowScrolled), "a delta of exactly 5 counts");
    }

    #[test]
    fn top_zone_always_shows() {
        let mut nav = NavbarTracker::new();
        assert_eq!(nav.update(30.0), Some(NavbarAction::ShowAtTop));
        assert_eq!(nav.update(45.0), Some(NavbarAction::ShowAtTop));
    }

    #[test]
    fn active_section_uses_offset_line() {
        let sections = [
            SectionSpan { top: 0.0, height: 600.0 },
            SectionSpan { top: 600.0, height: 800.0 },
            SectionSpan { top: 1400.0, height: 500.0 },
        ];
        assert_eq!(active_section(0.0, &sections), Some(0));
        assert_eq!(active_section(500.0, &sections), Some(1));
        assert_eq!(active_section(1299.0, &sections), Some(1));
        assert_eq!(active_section(1300.0, &sections), Some(2));
        assert_eq!(active_section(5000.0, &sections), None);
        assert_eq!(anchor_target(600.0), 530.0);
    }
}
