// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click ripples: geometry and lifetime.
//!
//! A ripple is a transient circle appended to the clicked element, centred on
//! the click point and sized to cover the element. It must be gone once its
//! animation finishes; [`RippleSchedule`] tracks the live marks so a host can
//! retire exactly the ones whose window has closed.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::style::Declarations;
use crate::time::{Duration, HostTime};

/// Look of one ripple family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleSpec {
    /// Animation length; the mark is removed after this.
    pub duration: Duration,
    /// CSS `background` of the mark.
    pub background: &'static str,
    /// CSS `z-index` of the mark.
    pub z_index: i32,
}

impl RippleSpec {
    /// Plain buttons.
    pub const BUTTON: Self = Self {
        duration: Duration::from_millis(600),
        background: "rgba(255, 255, 255, 0.4)",
        z_index: 10,
    };

    /// Portfolio-site showcase card.
    pub const PORTFOLIO_CARD: Self = Self {
        duration: Duration::from_millis(600),
        background: "radial-gradient(circle, rgba(102, 126, 234, 0.6) 0%, transparent 70%)",
        z_index: 1000,
    };

    /// Landing-page showcase card; slower and warmer.
    pub const LANDING_CARD: Self = Self {
        duration: Duration::from_millis(800),
        background: "radial-gradient(circle, rgba(255, 107, 107, 0.8) 0%, transparent 70%)",
        z_index: 1000,
    };

    /// CSS `animation` shorthand for the mark.
    #[must_use]
    pub fn animation(&self) -> String {
        let ms = self.duration.as_millis();
        format!("ripple {}.{}s ease-out", ms / 1000, (ms % 1000) / 100)
    }

    /// Inline style of a mark placed at `geometry`.
    #[must_use]
    pub fn css_text(&self, geometry: &RippleGeometry) -> String {
        let RippleGeometry { size, left, top } = *geometry;
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; \
             top: {top}px; background: {}; border-radius: 50%; transform: scale(0); \
             animation: {}; pointer-events: none; z-index: {};",
            self.background,
            self.animation(),
            self.z_index,
        )
    }
}

/// Style the host needs so a mark is clipped to it.
pub const RIPPLE_HOST: Declarations = &[("position", "relative"), ("overflow", "hidden")];

/// Position and size of a ripple inside its host element, in CSS pixels
/// relative to the element's padding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter.
    pub size: f64,
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
}

impl RippleGeometry {
    /// Ripple for a pointer click at `client` on an element at `rect`.
    #[must_use]
    pub fn at_click(client: Point, rect: Rect) -> Self {
        let size = rect.width().max(rect.height());
        Self {
            size,
            left: client.x - rect.x0 - size / 2.0,
            top: client.y - rect.y0 - size / 2.0,
        }
    }

    /// Ripple for keyboard activation: centred on the element.
    #[must_use]
    pub fn centered(rect: Rect) -> Self {
        Self::at_click(rect.center(), rect)
    }
}

/// Keys that activate a focused element like a click.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Identifier of a live ripple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(pub u32);

/// Live ripple marks and their removal deadlines.
#[derive(Clone, Debug, Default)]
pub struct RippleSchedule {
    live: Vec<(RippleId, HostTime)>,
    next: u32,
}

impl RippleSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            next: 0,
        }
    }

    /// Registers a ripple spawned at `now` that lives for `duration`.
    pub fn spawn(&mut self, now: HostTime, duration: Duration) -> RippleId {
        let id = RippleId(self.next);
        self.next = self.next.wrapping_add(1);
        let deadline = now.checked_add(duration).unwrap_or(HostTime(u64::MAX));
        self.live.push((id, deadline));
        id
    }

    /// Removes and returns every ripple whose deadline is at or before `now`.
    pub fn expire(&mut self, now: HostTime) -> Vec<RippleId> {
        let mut expired = Vec::new();
        self.live.retain(|&(id, deadline)| {
            if deadline <= now {
                expired.push(id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Forgets one ripple (its removal timer fired). Returns `false` if it
    /// was not live.
    pub fn retire(&mut self, id: RippleId) -> bool {
        let before = self.live.len();
        self.live.retain(|&(live, _)| live != id);
        self.live.len() != before
    }

    /// Number of ripples still in the document.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::FRAME_INTERVAL;

    #[test]
    fn geometry_covers_element_and_centres_on_click() {
        let button = Rect::new(100.0, 50.0, 260.0, 90.0);
        let g = RippleGeometry::at_click(Point::new(120.0, 60.0), button);
        assert_eq!(g.size, 160.0);
        assert_eq!(g.left, 20.0 - 80.0);
        assert_eq!(g.top, 10.0 - 80.0);
    }

    #[test]
    fn keyboard_ripple_is_centred() {
        let card = Rect::new(0.0, 0.0, 200.0, 100.0);
        let g = RippleGeometry::centered(card);
        assert_eq!((g.left, g.top), (0.0, -50.0));
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn ripple_removed_within_one_tick_of_its_duration() {
        for spec in [RippleSpec::BUTTON, RippleSpec::LANDING_CARD] {
            let mut sched = RippleSchedule::new();
            let spawned = HostTime(5_000);
            let id = sched.spawn(spawned, spec.duration);

            let mut now = spawned;
            let removed_at = loop {
                now = now + FRAME_INTERVAL;
                if sched.expire(now).contains(&id) {
                    break now;
                }
                assert!(now.micros() < 10_000_000, "ripple never expired");
            };
            let lived = removed_at - spawned;
            assert!(lived >= spec.duration, "removed early: {lived:?}");
            assert!(lived <= spec.duration + FRAME_INTERVAL, "lingered: {lived:?}");
            assert_eq!(sched.live(), 0);
        }
    }

    #[test]
    fn retire_and_expire_are_exclusive() {
        let mut sched = RippleSchedule::new();
        let a = sched.spawn(HostTime(0), Duration::from_millis(600));
        let b = sched.spawn(HostTime(0), Duration::from_millis(800));
        assert!(sched.retire(a));
        assert!(!sched.retire(a));
        assert_eq!(sched.expire(HostTime(700_000)), []);
        assert_eq!(sched.expire(HostTime(800_000)), [b]);
    }

    #[test]
    fn animation_shorthand() {
        assert_eq!(RippleSpec::BUTTON.animation(), "ripple 0.6s ease-out");
        assert_eq!(RippleSpec::LANDING_CARD.animation(), "ripple 0.8s ease-out");
    }

    #[test]
    fn mark_style_places_and_animates() {
        let g = RippleGeometry {
            size: 40.0,
            left: -5.0,
            top: 2.5,
        };
        let css = RippleSpec::BUTTON.css_text(&g);
        assert!(css.contains("width: 40px; height: 40px;"), "size: {css}");
        assert!(css.contains("left: -5px;") && css.contains("top: 2.5px;"), "offset: {css}");
        assert!(css.contains("animation: ripple 0.6s ease-out;"), "animation: {css}");
        assert!(css.ends_with("z-index: 10;"), "z-index: {css}");
    }
}
