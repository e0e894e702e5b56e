// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance animations.
//!
//! An [`Entrance`] hides a group of elements up front and shows each one
//! after its staggered delay, relying on a CSS transition for the motion.
//! Scroll reveals instead add [`ANIMATE_IN_CLASS`] when an element crosses
//! the reveal threshold.

use crate::style::{self, Declarations, StyleSink};
use crate::time::Duration;
use crate::timer::Stagger;
use crate::visibility::WatcherConfig;

/// Class added to elements revealed on scroll.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Elements revealed by [`ANIMATE_IN_CLASS`].
pub const SCROLL_REVEAL_TARGETS: &str =
    ".service-card, .portfolio-item, .testimonial-card, .timeline-item";

/// Watcher settings for scroll reveals.
#[must_use]
pub const fn scroll_reveal() -> WatcherConfig {
    WatcherConfig::reveal()
}

/// Staggered hide-then-show of a group of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    /// Selector of the group.
    pub targets: &'static str,
    /// Offset the elements start from.
    pub hidden: Declarations,
    /// CSS transition driving the motion.
    pub transition: &'static str,
    /// Per-element start delay.
    pub stagger: Stagger,
}

const SETTLED: Declarations = &[("opacity", "1"), ("transform", "translateY(0)")];

impl Entrance {
    /// Lines of the hero title.
    pub const HERO_TITLE_LINES: Self = Self {
        targets: ".hero-title .title-line",
        hidden: &[("opacity", "0"), ("transform", "translateY(50px)")],
        transition: "all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        stagger: Stagger {
            base: Duration::from_millis(500),
            step: Duration::from_millis(300),
        },
    };

    /// Hero badge, title, description, stats and buttons.
    pub const HERO_BLOCKS: Self = Self {
        targets: ".hero-badge, .hero-title, .hero-description, .hero-stats, .hero-buttons",
        hidden: &[("opacity", "0"), ("transform", "translateY(30px)")],
        transition: "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)",
        stagger: Stagger::every(Duration::from_millis(200)),
    };

    /// Portfolio items; shown when they scroll into view rather than on load.
    pub const PORTFOLIO_ITEMS: Self = Self {
        targets: ".portfolio-item",
        hidden: &[("opacity", "0"), ("transform", "translateY(50px)")],
        transition: "all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        stagger: Stagger::every(Duration::from_millis(200)),
    };

    /// Puts an element in its starting pose.
    pub fn hide(&self, sink: &mut dyn StyleSink) {
        style::apply(sink, self.hidden);
    }

    /// Starts the transition to the resting pose.
    pub fn show(&self, sink: &mut dyn StyleSink) {
        sink.set_style("transition", self.transition);
        style::apply(sink, SETTLED);
    }

    /// Delay before element `index` is shown.
    #[must_use]
    pub const fn delay(&self, index: usize) -> Duration {
        self.stagger.delay(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RecordingStyle;

    #[test]
    fn title_lines_stagger_after_initial_pause() {
        let e = Entrance::HERO_TITLE_LINES;
        assert_eq!(e.delay(0), Duration::from_millis(500));
        assert_eq!(e.delay(2), Duration::from_millis(1100));
    }

    #[test]
    fn hide_then_show() {
        let e = Entrance::HERO_BLOCKS;
        let mut el = RecordingStyle::new();
        e.hide(&mut el);
        assert_eq!(el.get("opacity"), Some("0"));
        e.show(&mut el);
        assert_eq!(el.get("opacity"), Some("1"));
        assert_eq!(el.get("transform"), Some("translateY(0)"));
        assert_eq!(el.get("transition"), Some(e.transition));
    }
}
