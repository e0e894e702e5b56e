// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport intersection and visibility-triggered actions.
//!
//! [`intersection_ratio`] computes the visible fraction of an element's box
//! against a (margin-adjusted) viewport. [`VisibilityWatcher`] keeps the
//! observed-element set and turns successive ratios into
//! [`Transition`]s, firing exactly once per not-visible → visible crossing.
//!
//! On the web the ratios come from an `IntersectionObserver`; tests feed them
//! directly or derive them from rectangles.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Per-edge adjustment applied to the viewport before intersecting, in CSS
/// pixels. Positive values grow the viewport, negative values shrink it
/// (the `rootMargin` convention).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    /// Top edge adjustment.
    pub top: f64,
    /// Right edge adjustment.
    pub right: f64,
    /// Bottom edge adjustment.
    pub bottom: f64,
    /// Left edge adjustment.
    pub left: f64,
}

impl RootMargin {
    /// No adjustment.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Shrinks only the bottom edge, so elements trigger once they are
    /// `px` pixels above the fold.
    #[must_use]
    pub const fn bottom_inset(px: f64) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: -px,
            left: 0.0,
        }
    }

    /// Applies the margin to a viewport rectangle.
    #[must_use]
    pub fn apply(self, viewport: Rect) -> Rect {
        Rect::new(
            viewport.x0 - self.left,
            viewport.y0 - self.top,
            viewport.x1 + self.right,
            viewport.y1 + self.bottom,
        )
    }

    /// Formats the margin as a CSS `rootMargin` string.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Returns the fraction (0.0–1.0) of `element`'s area that lies inside
/// `viewport` after applying `margin`.
///
/// Zero-area elements count as fully visible when their origin lies inside
/// the viewport, matching how browsers report empty boxes.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect, margin: RootMargin) -> f64 {
    let root = margin.apply(viewport);
    let area = element.area();
    if area <= 0.0 {
        let inside = element.x0 >= root.x0
            && element.x0 <= root.x1
            && element.y0 >= root.y0
            && element.y0 <= root.y1;
        return if inside { 1.0 } else { 0.0 };
    }
    let visible = element.intersect(root).area();
    (visible / area).clamp(0.0, 1.0)
}

/// Whether a watcher fires once per element or on every crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserveMode {
    /// Fire on the first entry only; later crossings are ignored.
    Once,
    /// Fire on every entry and report exits.
    Repeat,
}

/// Threshold, margin, and mode for one watcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatcherConfig {
    /// Fraction of the element that must be visible (0.0–1.0).
    pub threshold: f64,
    /// Viewport adjustment.
    pub margin: RootMargin,
    /// Firing mode.
    pub mode: ObserveMode,
}

impl WatcherConfig {
    /// Scroll-reveal of cards and timeline items: 10% visible, 50 px above
    /// the fold, re-fires on every entry.
    #[must_use]
    pub const fn reveal() -> Self {
        Self {
            threshold: 0.1,
            margin: RootMargin::bottom_inset(50.0),
            mode: ObserveMode::Repeat,
        }
    }

    /// Staggered fade-in of portfolio items: 10% visible, fires once.
    #[must_use]
    pub const fn fade_in() -> Self {
        Self {
            threshold: 0.1,
            margin: RootMargin::ZERO,
            mode: ObserveMode::Once,
        }
    }

    /// Stat counters: half the element must be visible, fires once.
    #[must_use]
    pub const fn counter() -> Self {
        Self {
            threshold: 0.5,
            margin: RootMargin::ZERO,
            mode: ObserveMode::Once,
        }
    }

    /// Typing lines: any intersection, fires once.
    #[must_use]
    pub const fn any_pixel() -> Self {
        Self {
            threshold: 0.0,
            margin: RootMargin::ZERO,
            mode: ObserveMode::Once,
        }
    }

    /// Returns `true` if `ratio` counts as visible under this config.
    #[must_use]
    pub fn is_visible(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

/// A reported change in an observed element's visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The element crossed into view; run the action.
    Entered,
    /// The element left view (only reported in [`ObserveMode::Repeat`]).
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryState {
    Hidden,
    Visible,
    /// One-shot entry that already fired.
    Spent,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    state: EntryState,
}

/// The observed-element set for one watcher.
///
/// Entries are never removed: the page is a single static document and
/// observed elements live as long as it does.
#[derive(Clone, Debug)]
pub struct VisibilityWatcher<K> {
    config: WatcherConfig,
    entries: Vec<Entry<K>>,
}

impl<K: PartialEq> VisibilityWatcher<K> {
    /// Creates an empty watcher.
    #[must_use]
    pub const fn new(config: WatcherConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Returns the watcher configuration.
    #[must_use]
    pub const fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Adds `key` to the observed set. Returns `false` if it was already
    /// observed.
    pub fn observe(&mut self, key: K) -> bool {
        if self.position(&key).is_some() {
            return false;
        }
        self.entries.push(Entry {
            key,
            state: EntryState::Hidden,
        });
        true
    }

    /// Feeds a new intersection ratio for `key`.
    ///
    /// Returns the transition to act on, if any. Unobserved keys are ignored.
    pub fn update(&mut self, key: &K, ratio: f64) -> Option<Transition> {
        let visible = self.config.is_visible(ratio);
        let mode = self.config.mode;
        let idx = self.position(key)?;
        let entry = &mut self.entries[idx];
        match (entry.state, visible, mode) {
            (EntryState::Hidden, true, ObserveMode::Once) => {
                entry.state = EntryState::Spent;
                Some(Transition::Entered)
            }
            (EntryState::Hidden, true, ObserveMode::Repeat) => {
                entry.state = EntryState::Visible;
                Some(Transition::Entered)
            }
            (EntryState::Visible, false, _) => {
                entry.state = EntryState::Hidden;
                Some(Transition::Left)
            }
            _ => None,
        }
    }

    /// Computes the ratio from rectangles and feeds it to
    /// [`update`](Self::update).
    pub fn update_rect(&mut self, key: &K, element: Rect, viewport: Rect) -> Option<Transition> {
        let ratio = intersection_ratio(element, viewport, self.config.margin);
        self.update(key, ratio)
    }

    /// Returns `true` if `key` is currently considered in view (or, for
    /// one-shot watchers, has already fired).
    #[must_use]
    pub fn has_entered(&self, key: &K) -> bool {
        self.position(key)
            .is_some_and(|i| self.entries[i].state != EntryState::Hidden)
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|e| e.key == *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    /// A 100 px tall box whose top sits `top` px from the viewport top.
    fn card(top: f64) -> Rect {
        Rect::new(100.0, top, 300.0, top + 100.0)
    }

    #[test]
    fn ratio_of_partially_visible_box() {
        assert_eq!(intersection_ratio(card(0.0), VIEWPORT, RootMargin::ZERO), 1.0);
        assert_eq!(intersection_ratio(card(540.0), VIEWPORT, RootMargin::ZERO), 0.6);
        assert_eq!(intersection_ratio(card(900.0), VIEWPORT, RootMargin::ZERO), 0.0);
    }

    #[test]
    fn bottom_inset_shrinks_viewport() {
        let margin = RootMargin::bottom_inset(50.0);
        // Bottom 50 px of the viewport no longer count.
        assert_eq!(intersection_ratio(card(540.0), VIEWPORT, margin), 0.1);
        assert_eq!(margin.to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn fires_once_at_half_threshold_crossing() {
        let mut watcher = VisibilityWatcher::new(WatcherConfig::counter());
        assert!(watcher.observe(7_u32));

        // Scroll in gradually: 0%, 20%, 40%, then 60% visible.
        let mut fired = 0;
        for top in [700.0, 580.0, 560.0, 540.0, 500.0, 300.0] {
            if watcher.update_rect(&7, card(top), VIEWPORT) == Some(Transition::Entered) {
                fired += 1;
                assert_eq!(top, 540.0, "must fire at the 60% sample, not before");
            }
        }
        assert_eq!(fired, 1);

        // Scrolling away and back never re-fires a one-shot entry.
        assert_eq!(watcher.update_rect(&7, card(900.0), VIEWPORT), None);
        assert_eq!(watcher.update_rect(&7, card(0.0), VIEWPORT), None);
        assert!(watcher.has_entered(&7));
    }

    #[test]
    fn repeat_mode_reports_every_crossing() {
        let mut watcher = VisibilityWatcher::new(WatcherConfig::reveal());
        watcher.observe("timeline");
        assert_eq!(watcher.update(&"timeline", 0.5), Some(Transition::Entered));
        assert_eq!(watcher.update(&"timeline", 0.8), None);
        assert_eq!(watcher.update(&"timeline", 0.0), Some(Transition::Left));
        assert_eq!(watcher.update(&"timeline", 0.2), Some(Transition::Entered));
    }

    #[test]
    fn zero_threshold_needs_some_pixels() {
        let cfg = WatcherConfig::any_pixel();
        assert!(!cfg.is_visible(0.0));
        assert!(cfg.is_visible(0.01));
    }

    #[test]
    fn unobserved_and_duplicate_keys() {
        let mut watcher = VisibilityWatcher::new(WatcherConfig::fade_in());
        assert_eq!(watcher.update(&1_u8, 1.0), None, "unknown key ignored");
        assert!(watcher.observe(1));
        assert!(!watcher.observe(1), "duplicate observe rejected");
        assert_eq!(watcher.len(), 1);
    }
}
