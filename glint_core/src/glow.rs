// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover glow on decorations, buttons and the logo.
//!
//! Every enter has a matching leave that restores the element. Shape hovers
//! also scale and spin the shape; that part goes through the
//! [`Hover`](crate::transform::TransformSource::Hover) slot of the shape's
//! [`TransformStack`] so it composes with parallax instead of replacing it.

use alloc::format;
use alloc::string::String;

use crate::style::{self, Declarations, StyleSink, Toggle};
use crate::transform::{Transform3d, TransformSource, TransformStack};

/// An indexed color list. Indices past the end use the first entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(pub &'static [&'static str]);

impl Palette {
    /// Color for element `index`.
    #[must_use]
    pub fn color(&self, index: usize) -> &'static str {
        self.0
            .get(index)
            .or_else(|| self.0.first())
            .copied()
            .unwrap_or("transparent")
    }
}

/// Ring glow colors.
pub const RING_PALETTE: Palette = Palette(&[
    "rgba(255, 107, 107, 0.6)",
    "rgba(78, 205, 196, 0.6)",
    "rgba(102, 126, 234, 0.6)",
]);

/// Shape glow colors.
pub const SHAPE_PALETTE: Palette = Palette(&[
    "rgba(255, 107, 107, 0.6)",
    "rgba(78, 205, 196, 0.6)",
    "rgba(102, 126, 234, 0.6)",
    "rgba(255, 215, 0, 0.6)",
    "rgba(138, 43, 226, 0.6)",
    "rgba(0, 255, 255, 0.6)",
]);

/// Resting spin period of a ring, seconds.
const RING_SPIN_SECS: f64 = 20.0;

/// Hovered ring `index`: spins faster, thicker border, brighter, glowing.
pub fn ring_enter(sink: &mut dyn StyleSink, index: usize) {
    let speed = 1.0 + index as f64 * 0.5;
    sink.set_style("animation-duration", &format!("{}s", RING_SPIN_SECS / speed));
    sink.set_style("border-width", "3px");
    sink.set_style("filter", "brightness(1.5)");
    sink.set_style("box-shadow", &glow_shadow(20, RING_PALETTE.color(index)));
}

/// Restores a ring after hover.
pub fn ring_leave(sink: &mut dyn StyleSink) {
    sink.clear_style("animation-duration");
    sink.set_style("border-width", "2px");
    sink.clear_style("filter");
    sink.clear_style("box-shadow");
}

/// Scale and spin applied to a hovered shape.
#[must_use]
pub fn shape_hover_transform() -> Transform3d {
    Transform3d::from_scale(1.5) * Transform3d::from_rotation_z_deg(180.0)
}

/// Hovered shape `index`. Updates `stack` and writes the composed transform.
pub fn shape_enter(sink: &mut dyn StyleSink, stack: &mut TransformStack, index: usize) {
    stack.set(TransformSource::Hover, shape_hover_transform());
    write_transform(sink, stack);
    sink.set_style("filter", "brightness(1.8)");
    sink.set_style("box-shadow", &glow_shadow(15, SHAPE_PALETTE.color(index)));
}

/// Restores a shape after hover, keeping any parallax offset.
pub fn shape_leave(sink: &mut dyn StyleSink, stack: &mut TransformStack) {
    stack.clear(TransformSource::Hover);
    write_transform(sink, stack);
    sink.clear_style("filter");
    sink.clear_style("box-shadow");
}

/// Writes the composed transform of `stack`, or clears it when empty.
pub fn write_transform(sink: &mut dyn StyleSink, stack: &TransformStack) {
    match stack.to_css() {
        Some(css) => sink.set_style("transform", &css),
        None => sink.clear_style("transform"),
    }
}

/// Drop-shadow glow for buttons and the logo.
pub const BUTTON_GLOW: Declarations = &[("filter", "drop-shadow(0 0 20px rgba(99, 102, 241, 0.6))")];

/// Applies [`BUTTON_GLOW`].
pub fn button_enter(sink: &mut dyn StyleSink) {
    style::apply(sink, BUTTON_GLOW);
}

/// Removes [`BUTTON_GLOW`].
pub fn button_leave(sink: &mut dyn StyleSink) {
    style::clear(sink, BUTTON_GLOW);
}

/// Hover pose of a floating hero card.
#[must_use]
pub fn card_hover_transform() -> Transform3d {
    Transform3d::from_scale(1.15) * Transform3d::from_rotation_z_deg(10.0)
}

/// Floating card frame while hovered. Its pose goes through the stack.
pub const CARD_HOVER: Toggle = Toggle {
    on: &[
        ("box-shadow", "0 25px 50px rgba(102, 126, 234, 0.6)"),
        ("border-color", "rgba(255, 215, 0, 0.8)"),
        ("border-width", "4px"),
    ],
    off: &[("box-shadow", ""), ("border-color", ""), ("border-width", "")],
};

/// The card's `<i>` icon.
pub const CARD_ICON_HOVER: Toggle = Toggle {
    on: &[("transform", "scale(1.3) rotate(-15deg)"), ("color", "#FFD700")],
    off: &[("transform", ""), ("color", "")],
};

/// The card's `.card-glow` layer.
pub const CARD_GLOW_HOVER: Toggle = Toggle {
    on: &[("opacity", "0.8"), ("animation", "cardGlowPulse 1s ease-in-out infinite")],
    off: &[("opacity", "0"), ("animation", "")],
};

/// The card's `.card-trail` layer.
pub const CARD_TRAIL_HOVER: Toggle = Toggle {
    on: &[
        ("width", "200%"),
        ("height", "200%"),
        ("opacity", "1"),
        ("animation", "trailRotate 2s linear infinite"),
    ],
    off: &[("width", "0"), ("height", "0"), ("opacity", "0"), ("animation", "")],
};

/// Hovered floating card: pose via `stack`, frame via [`CARD_HOVER`].
pub fn card_enter(sink: &mut dyn StyleSink, stack: &mut TransformStack) {
    stack.set(TransformSource::Hover, card_hover_transform());
    write_transform(sink, stack);
    CARD_HOVER.apply(sink, true);
}

/// Restores a floating card, keeping its parallax offset.
pub fn card_leave(sink: &mut dyn StyleSink, stack: &mut TransformStack) {
    stack.clear(TransformSource::Hover);
    write_transform(sink, stack);
    CARD_HOVER.apply(sink, false);
}

/// Call-to-action button lift.
pub const BUTTON_LIFT: Toggle = Toggle {
    on: &[("transform", "translateY(-3px) scale(1.05)")],
    off: &[("transform", ""), ("box-shadow", "")],
};

/// Shadow of a lifted button, chosen by its variant class.
#[must_use]
pub fn button_lift_shadow(class_list: &str) -> Option<&'static str> {
    let has = |class: &str| class_list.split_ascii_whitespace().any(|c| c == class);
    if has("btn-primary") {
        Some("0 20px 40px rgba(255, 215, 0, 0.6)")
    } else if has("btn-secondary") {
        Some("0 15px 35px rgba(0, 255, 255, 0.4)")
    } else {
        None
    }
}

/// The button's `.btn-icon`.
pub const BUTTON_ICON_HOVER: Toggle = Toggle {
    on: &[("transform", "translateX(8px) scale(1.1)")],
    off: &[("transform", "")],
};

/// The button's `.btn-glow` layer.
pub const BUTTON_GLOW_LAYER: Toggle = Toggle {
    on: &[("width", "200%"), ("height", "200%"), ("opacity", "1")],
    off: &[("width", "0"), ("height", "0"), ("opacity", "0")],
};

/// Background grid lines.
pub const GRID_LINE_HOVER: Toggle = Toggle {
    on: &[("opacity", "0.5"), ("transform", "scaleX(1.2)")],
    off: &[("opacity", "0.1"), ("transform", "scaleX(1)")],
};

/// The hero's scroll indicator.
pub const SCROLL_INDICATOR_HOVER: Toggle = Toggle {
    on: &[("transform", "translateX(-50%) scale(1.1)")],
    off: &[("transform", "translateX(-50%) scale(1)")],
};

/// Label next to the scroll indicator.
pub const SCROLL_TEXT_HOVER: Toggle = Toggle {
    on: &[("opacity", "1"), ("transform", "translateY(-5px)")],
    off: &[("opacity", "0.7"), ("transform", "translateY(0px)")],
};

/// Portfolio item shadow while hovered. The lift itself is
/// [`portfolio_item_lift`], composed with the item's tilt.
pub const PORTFOLIO_ITEM_HOVER: Toggle = Toggle {
    on: &[("box-shadow", "0 40px 80px rgba(255, 215, 0, 0.3)")],
    off: &[("box-shadow", "0 20px 40px rgba(0, 0, 0, 0.3)")],
};

/// Raise and slight zoom of a hovered portfolio item.
#[must_use]
pub fn portfolio_item_lift() -> Transform3d {
    Transform3d::from_translation(0.0, -20.0, 0.0) * Transform3d::from_scale(1.03)
}

/// Border accent of a skill card, by its `data-skill`.
#[must_use]
pub fn skill_accent(skill: &str) -> Option<&'static str> {
    match skill {
        "html" => Some("#e34c26"),
        "css" => Some("#1572b6"),
        "javascript" => Some("#f7df1e"),
        "responsive" => Some("#61dafb"),
        _ => None,
    }
}

/// Pulse played on a skill card's icon while hovered.
pub const SKILL_ICON_PULSE: &str = "skillIconPulse 0.6s ease-in-out";

fn glow_shadow(blur_px: u32, color: &str) -> String {
    format!("0 0 {blur_px}px {color}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RecordingStyle;
    use crate::transform::Anchor;

    #[test]
    fn palette_falls_back_to_first() {
        assert_eq!(RING_PALETTE.color(1), "rgba(78, 205, 196, 0.6)");
        assert_eq!(RING_PALETTE.color(7), "rgba(255, 107, 107, 0.6)");
        assert_eq!(SHAPE_PALETTE.color(5), "rgba(0, 255, 255, 0.6)");
        assert_eq!(Palette(&[]).color(0), "transparent");
    }

    #[test]
    fn ring_hover_round_trip() {
        let mut ring = RecordingStyle::new();
        ring_enter(&mut ring, 2);
        assert_eq!(ring.get("animation-duration"), Some("10s"));
        assert_eq!(ring.get("box-shadow"), Some("0 0 20px rgba(102, 126, 234, 0.6)"));
        ring_leave(&mut ring);
        assert_eq!(ring.get("border-width"), Some("2px"));
        assert_eq!(ring.len(), 1, "only the border reset remains: {ring:?}");
    }

    #[test]
    fn shape_hover_keeps_parallax() {
        let mut shape = RecordingStyle::new();
        let mut stack = TransformStack::new(Anchor::None);
        stack.set(TransformSource::Scroll, Transform3d::from_translation(0.0, 12.0, 0.0));

        shape_enter(&mut shape, &mut stack, 9);
        assert!(stack.get(TransformSource::Hover).is_some());
        assert_eq!(shape.get("box-shadow"), Some("0 0 15px rgba(255, 107, 107, 0.6)"));

        shape_leave(&mut shape, &mut stack);
        let css = shape.get("transform").unwrap_or_default();
        assert_eq!(css, Transform3d::from_translation(0.0, 12.0, 0.0).to_css());
        assert_eq!(shape.get("filter"), None);
    }

    #[test]
    fn bare_shape_leave_clears_transform() {
        let mut shape = RecordingStyle::new();
        let mut stack = TransformStack::new(Anchor::None);
        shape_enter(&mut shape, &mut stack, 0);
        shape_leave(&mut shape, &mut stack);
        assert!(shape.is_empty(), "{shape:?}");
    }

    #[test]
    fn card_hover_composes_with_scroll() {
        let mut card = RecordingStyle::new();
        let mut stack = TransformStack::new(Anchor::None);
        let drift = Transform3d::from_translation(0.0, -40.0, 0.0);
        stack.set(TransformSource::Scroll, drift);

        card_enter(&mut card, &mut stack);
        assert_eq!(stack.compose(), drift * card_hover_transform());
        assert_eq!(card.get("border-width"), Some("4px"));

        card_leave(&mut card, &mut stack);
        assert_eq!(card.get("transform"), Some(drift.to_css().as_str()));
        assert!(card.get("border-width").is_none());
    }

    #[test]
    fn button_variants_and_skill_accents() {
        assert!(button_lift_shadow("btn btn-primary").is_some_and(|s| s.contains("255, 215, 0")));
        assert!(button_lift_shadow("btn btn-secondary").is_some_and(|s| s.contains("0, 255, 255")));
        assert_eq!(button_lift_shadow("btn"), None);
        assert_eq!(skill_accent("css"), Some("#1572b6"));
        assert_eq!(skill_accent("cobol"), None);
    }

    #[test]
    fn button_glow_pair() {
        let mut btn = RecordingStyle::new();
        button_enter(&mut btn);
        assert!(btn.get("filter").is_some());
        button_leave(&mut btn);
        assert!(btn.is_empty());
    }
}
