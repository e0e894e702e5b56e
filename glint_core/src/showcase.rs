// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project showcase cards.
//!
//! A showcase is a project card holding tech badges (`.tech-item` with a
//! `data-tech` attribute), code snippets (`.code-snippet`, each tagged with a
//! `<tech>-code` class and made of `.code-line`s) and stat numbers
//! (`.stat-number`). Hovering the card animates the badges in a stagger and
//! types out the snippets; hovering a badge promotes its snippet; stats count
//! up once they are half visible.
//!
//! The four cards on the page differ only in the values of a
//! [`ShowcaseConfig`], so there is one implementation and four presets.

use alloc::format;
use alloc::string::String;

use crate::counter::{CounterDurations, CounterSpec};
use crate::ripple::RippleSpec;
use crate::style::{self, Declarations, StyleSink, Toggle};
use crate::time::Duration;
use crate::timer::Stagger;
use crate::typing::TypingSpec;
use crate::visibility::WatcherConfig;

/// Code snippet emphasis when a tech badge is hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnippetFocus {
    /// The snippet whose class is `<tech>-code`.
    pub related: Declarations,
    /// Every other snippet.
    pub others: Declarations,
}

/// Card-level hover extras: logo, stats and the overlay panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardHover {
    /// `.logo-icon`.
    pub logo: Toggle,
    /// Every `.stat-number`.
    pub stats: Toggle,
    /// `.portfolio-overlay`.
    pub overlay: Toggle,
    /// Delay before the overlay appears.
    pub overlay_delay: Duration,
}

const OVERLAY: Toggle = Toggle {
    on: &[("opacity", "1"), ("visibility", "visible"), ("transform", "translateY(0) scale(1)")],
    off: &[
        ("opacity", "0"),
        ("visibility", "hidden"),
        ("transform", "translateY(30px) scale(0.9)"),
    ],
};

/// Everything that distinguishes one showcase card from another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseConfig {
    /// Selector of the card; every other selector is scoped under it.
    pub root: &'static str,
    /// Delay between successive tech badges when the card is entered.
    pub tech_stagger: Stagger,
    /// Badge style while the card is hovered.
    pub tech_card_hover: Toggle,
    /// Delay between successive snippets when the card is entered.
    pub snippet_stagger: Stagger,
    /// Snippet style while the card is hovered.
    pub snippet_card_hover: Toggle,
    /// Typing of each code line once its snippet is shown. `None` shows
    /// snippets without retyping them.
    pub typing: Option<(TypingSpec, Stagger)>,
    /// Badge style while the badge itself is hovered.
    pub tech_hover: Toggle,
    /// `animation` of the badge's `<i>` icon while hovered.
    pub icon_pulse: Option<&'static str>,
    /// Snippet emphasis for the hovered badge.
    pub focus: SnippetFocus,
    /// Code line style on hover.
    pub line_hover: Toggle,
    /// Counter durations by suffix.
    pub counters: CounterDurations,
    /// When stat counters start.
    pub counter_watch: WatcherConfig,
    /// Ripple on click and keyboard activation.
    pub ripple: Option<RippleSpec>,
    /// Card-level hover extras.
    pub card_hover: Option<CardHover>,
}

impl ShowcaseConfig {
    /// The e-commerce project card.
    #[must_use]
    pub const fn ecommerce() -> Self {
        Self {
            root: ".ecommerce-project",
            tech_stagger: Stagger::every(Duration::from_millis(80)),
            tech_card_hover: Toggle {
                on: &[
                    ("animation", "techFloat 1.5s ease-in-out infinite"),
                    ("transform", "scale(1.2) rotate(5deg)"),
                    ("box-shadow", "0 0 20px rgba(255, 107, 107, 0.6)"),
                ],
                off: &[("transform", "scale(1)"), ("box-shadow", "")],
            },
            snippet_stagger: Stagger::every(Duration::from_millis(150)),
            snippet_card_hover: Toggle {
                on: &[("opacity", "1"), ("transform", "scale(1.1) rotate(2deg)")],
                off: &[("opacity", "0"), ("transform", "scale(0.8)")],
            },
            typing: Some((
                TypingSpec::code_line(40),
                Stagger::every(Duration::from_millis(200)),
            )),
            tech_hover: Toggle {
                on: &[
                    ("box-shadow", "0 0 25px rgba(255, 107, 107, 0.8)"),
                    ("transform", "scale(1.3) rotate(10deg)"),
                ],
                off: &[("box-shadow", ""), ("transform", "")],
            },
            icon_pulse: Some("techIconPulse 0.4s ease-in-out"),
            focus: SnippetFocus {
                related: &[
                    ("z-index", "15"),
                    ("transform", "scale(1.2) rotate(3deg)"),
                    ("box-shadow", "0 10px 30px rgba(255, 107, 107, 0.4)"),
                ],
                others: &[("z-index", "3"), ("transform", "scale(1)"), ("box-shadow", "")],
            },
            line_hover: Toggle {
                on: &[
                    ("background-color", "rgba(255, 107, 107, 0.2)"),
                    ("padding", "0.3rem 0.7rem"),
                    ("border-radius", "8px"),
                    ("transition", "all 0.3s ease"),
                    ("box-shadow", "0 2px 8px rgba(255, 107, 107, 0.3)"),
                ],
                off: &[],
            },
            counters: CounterDurations::STANDARD,
            counter_watch: WatcherConfig::any_pixel(),
            ripple: None,
            card_hover: None,
        }
    }

    /// The skills-platform project card.
    #[must_use]
    pub const fn skills() -> Self {
        Self {
            root: ".skiller7-project",
            tech_stagger: Stagger::every(Duration::from_millis(100)),
            tech_card_hover: Toggle {
                on: &[
                    ("animation", "techFloat 2s ease-in-out infinite"),
                    ("transform", "scale(1.1)"),
                ],
                off: &[("transform", "scale(1)")],
            },
            snippet_stagger: Stagger::every(Duration::from_millis(200)),
            snippet_card_hover: Toggle {
                on: &[("opacity", "1"), ("transform", "scale(1)")],
                off: &[("opacity", "0"), ("transform", "scale(0.8)")],
            },
            typing: Some((
                TypingSpec::code_line(50),
                Stagger::every(Duration::from_millis(300)),
            )),
            tech_hover: Toggle {
                on: &[("box-shadow", "0 0 20px rgba(0, 255, 255, 0.5)")],
                off: &[("box-shadow", "")],
            },
            icon_pulse: Some("techIconPulse 0.6s ease-in-out"),
            focus: SnippetFocus {
                related: &[("z-index", "10"), ("transform", "scale(1.1)")],
                others: &[("z-index", "3"), ("transform", "scale(1)")],
            },
            line_hover: Toggle {
                on: &[
                    ("background-color", "rgba(255, 255, 255, 0.1)"),
                    ("padding", "0.2rem 0.5rem"),
                    ("border-radius", "5px"),
                    ("transition", "all 0.3s ease"),
                ],
                off: &[],
            },
            counters: CounterDurations::STANDARD,
            counter_watch: WatcherConfig::any_pixel(),
            ripple: None,
            card_hover: None,
        }
    }

    /// The portfolio-website project card.
    #[must_use]
    pub const fn portfolio_site() -> Self {
        Self {
            root: ".portfolio-website-project",
            tech_stagger: Stagger::NONE,
            tech_card_hover: Toggle::NONE,
            snippet_stagger: Stagger::NONE,
            snippet_card_hover: Toggle::NONE,
            typing: None,
            tech_hover: Toggle {
                on: &[
                    ("transform", "scale(1.2)"),
                    ("box-shadow", "0 0 20px rgba(102, 126, 234, 0.8)"),
                    ("animation", "techIconPulse 0.6s ease-in-out"),
                ],
                off: &[("transform", "scale(1)"), ("box-shadow", "none"), ("animation", "none")],
            },
            icon_pulse: None,
            focus: SnippetFocus {
                related: &[
                    ("z-index", "10"),
                    ("transform", "scale(1) rotate(0deg)"),
                    ("opacity", "0.9"),
                ],
                others: &[("z-index", "2"), ("transform", "scale(0.8) rotate(1deg)")],
            },
            line_hover: Toggle {
                on: &[
                    ("color", "#667eea"),
                    ("text-shadow", "0 0 10px rgba(102, 126, 234, 0.8)"),
                    ("transform", "translateX(10px)"),
                ],
                off: &[("color", ""), ("text-shadow", ""), ("transform", "translateX(0)")],
            },
            counters: CounterDurations::STANDARD,
            counter_watch: WatcherConfig::counter(),
            ripple: Some(RippleSpec::PORTFOLIO_CARD),
            card_hover: Some(CardHover {
                logo: Toggle {
                    on: &[("animation", "logoFloat 2s ease-in-out infinite")],
                    off: &[("animation", "none")],
                },
                stats: Toggle {
                    on: &[
                        ("transform", "scale(1.1)"),
                        ("text-shadow", "0 0 15px rgba(102, 126, 234, 0.8)"),
                    ],
                    off: &[("transform", "scale(1)"), ("text-shadow", "none")],
                },
                overlay: OVERLAY,
                overlay_delay: Duration::from_millis(200),
            }),
        }
    }

    /// The landing-page project card.
    #[must_use]
    pub const fn landing_page() -> Self {
        Self {
            root: ".landing-page-project",
            tech_stagger: Stagger::NONE,
            tech_card_hover: Toggle::NONE,
            snippet_stagger: Stagger::NONE,
            snippet_card_hover: Toggle::NONE,
            typing: None,
            tech_hover: Toggle {
                on: &[
                    ("transform", "scale(1.3) rotate(5deg)"),
                    ("box-shadow", "0 0 25px rgba(255, 107, 107, 0.9)"),
                    ("animation", "techIconPulse 0.5s ease-in-out"),
                    ("background", "rgba(255, 255, 255, 0.3)"),
                ],
                off: &[
                    ("transform", "scale(1)"),
                    ("box-shadow", "none"),
                    ("animation", "techFloat 2s ease-in-out infinite"),
                    ("background", "rgba(255, 255, 255, 0.2)"),
                ],
            },
            icon_pulse: None,
            focus: SnippetFocus {
                related: &[
                    ("z-index", "15"),
                    ("transform", "scale(1.1) rotate(0deg)"),
                    ("opacity", "0.9"),
                    ("box-shadow", "0 10px 30px rgba(0, 255, 136, 0.4)"),
                    ("border", "2px solid rgba(0, 255, 136, 0.6)"),
                ],
                others: &[
                    ("z-index", "2"),
                    ("transform", "scale(0.8) rotate(2deg)"),
                    ("opacity", "0.1"),
                ],
            },
            line_hover: Toggle {
                on: &[
                    ("color", "#00ff88"),
                    ("text-shadow", "0 0 15px rgba(0, 255, 136, 1)"),
                    ("transform", "translateX(15px) scale(1.05)"),
                    ("background-color", "rgba(0, 255, 136, 0.2)"),
                    ("padding", "0.3rem 0.8rem"),
                    ("border-radius", "8px"),
                    ("border", "1px solid rgba(0, 255, 136, 0.4)"),
                ],
                off: &[
                    ("color", "#00ff88"),
                    ("text-shadow", "0 0 5px rgba(0, 255, 136, 0.5)"),
                    ("transform", "translateX(0) scale(1)"),
                    ("background-color", "transparent"),
                    ("padding", "0.2rem 0"),
                    ("border-radius", "0"),
                    ("border", "none"),
                ],
            },
            counters: CounterDurations {
                percent: Duration::from_millis(2500),
                ..CounterDurations::STANDARD
            },
            counter_watch: WatcherConfig::counter(),
            ripple: Some(RippleSpec::LANDING_CARD),
            card_hover: Some(CardHover {
                logo: Toggle {
                    on: &[
                        ("animation", "rocketFloat 2s ease-in-out infinite"),
                        ("filter", "drop-shadow(0 0 20px rgba(255, 107, 107, 1.2))"),
                    ],
                    off: &[
                        ("animation", "rocketFloat 3s ease-in-out infinite"),
                        ("filter", "drop-shadow(0 0 10px rgba(255, 107, 107, 0.8))"),
                    ],
                },
                stats: Toggle {
                    on: &[
                        ("transform", "scale(1.15)"),
                        ("text-shadow", "0 0 20px rgba(255, 255, 255, 1)"),
                        ("color", "#ffeb3b"),
                    ],
                    off: &[
                        ("transform", "scale(1)"),
                        ("text-shadow", "0 0 15px rgba(255, 255, 255, 0.8)"),
                        ("color", "#ffffff"),
                    ],
                },
                overlay: OVERLAY,
                overlay_delay: Duration::from_millis(300),
            }),
        }
    }

    /// All presets, in page order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::ecommerce(),
            Self::skills(),
            Self::portfolio_site(),
            Self::landing_page(),
        ]
    }

    /// `selector` scoped under this card.
    #[must_use]
    pub fn scoped(&self, selector: &str) -> String {
        format!("{} {selector}", self.root)
    }

    /// Applies the badge-hover focus to one snippet given its class list.
    pub fn focus_snippet(&self, sink: &mut dyn StyleSink, tech: &str, class_list: &str) {
        let decls = if is_related_snippet(tech, class_list) {
            self.focus.related
        } else {
            self.focus.others
        };
        style::apply(sink, decls);
    }

    /// What to do with a stat number once it becomes visible.
    #[must_use]
    pub fn stat_action(&self, text: &str) -> StatAction {
        match CounterSpec::from_markup_with(text, self.counters) {
            Some(spec) => StatAction::Count(spec),
            None => StatAction::Pulse,
        }
    }
}

/// Class naming the code snippet that belongs to `tech`.
#[must_use]
pub fn snippet_class(tech: &str) -> String {
    format!("{tech}-code")
}

/// Whether a snippet with `class_list` belongs to `tech`.
#[must_use]
pub fn is_related_snippet(tech: &str, class_list: &str) -> bool {
    let wanted = snippet_class(tech);
    !tech.is_empty() && class_list.split_ascii_whitespace().any(|c| c == wanted)
}

/// Reaction of a stat number to becoming visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatAction {
    /// Count up from zero.
    Count(CounterSpec),
    /// Not a plain number (`24/7`): briefly highlight instead.
    Pulse,
}

/// Highlight for stats that cannot count.
pub const STAT_PULSE: Toggle = Toggle {
    on: &[("transform", "scale(1.2)"), ("color", "#FFD700")],
    off: &[("transform", "scale(1)"), ("color", "")],
};

/// How long [`STAT_PULSE`] stays on.
pub const STAT_PULSE_HOLD: Duration = Duration::from_millis(1000);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::NumberFormat;
    use crate::style::RecordingStyle;

    #[test]
    fn related_snippet_matches_whole_class() {
        assert!(is_related_snippet("react", "code-snippet react-code"));
        assert!(!is_related_snippet("react", "code-snippet preact-code"));
        assert!(!is_related_snippet("", "code-snippet -code"));
        assert_eq!(snippet_class("node"), "node-code");
    }

    #[test]
    fn badge_hover_promotes_only_its_snippet() {
        let cfg = ShowcaseConfig::ecommerce();
        let mut related = RecordingStyle::new();
        let mut other = RecordingStyle::new();
        cfg.focus_snippet(&mut related, "stripe", "code-snippet stripe-code");
        cfg.focus_snippet(&mut other, "stripe", "code-snippet react-code");
        assert_eq!(related.get("z-index"), Some("15"));
        assert_eq!(other.get("z-index"), Some("3"));
    }

    #[test]
    fn landing_percent_counts_slower() {
        let landing = ShowcaseConfig::landing_page();
        let StatAction::Count(spec) = landing.stat_action("95%") else {
            panic!("95% should count");
        };
        assert_eq!(spec.duration, Duration::from_millis(2500));

        let StatAction::Count(secs) = landing.stat_action("2.3s") else {
            panic!("2.3s should count");
        };
        assert_eq!(secs.format, NumberFormat::OneDecimal);
        assert_eq!(landing.stat_action("24/7"), StatAction::Pulse);
    }

    #[test]
    fn presets_are_distinct_and_scoped() {
        let all = ShowcaseConfig::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.root, b.root);
            }
        }
        assert_eq!(
            ShowcaseConfig::skills().scoped(".tech-item"),
            ".skiller7-project .tech-item"
        );
    }

    #[test]
    fn only_clickable_cards_ripple() {
        assert!(ShowcaseConfig::ecommerce().ripple.is_none());
        assert_eq!(
            ShowcaseConfig::landing_page().ripple.map(|r| r.duration),
            Some(Duration::from_millis(800))
        );
        assert!(ShowcaseConfig::portfolio_site().card_hover.is_some());
    }

    #[test]
    fn toggle_writes_both_states() {
        let cfg = ShowcaseConfig::portfolio_site();
        let mut line = RecordingStyle::new();
        cfg.line_hover.apply(&mut line, true);
        assert_eq!(line.get("color"), Some("#667eea"));
        cfg.line_hover.apply(&mut line, false);
        assert_eq!(line.get("color"), None);
        assert_eq!(line.get("transform"), Some("translateX(0)"));
    }
}
