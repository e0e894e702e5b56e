// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer- and scroll-driven offsets for layered decorations.
//!
//! Every function here is a pure mapping from the current input sample to an
//! offset. Elements later in a collection move faster ([`SpeedRamp`]), which
//! gives the depth illusion.

use kurbo::{Point, Rect, Size, Vec2};

use crate::transform::Transform3d;

/// Per-element speed that grows linearly with the element's index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRamp {
    /// Speed of the first element.
    pub base: f64,
    /// Added speed per index.
    pub step: f64,
}

impl SpeedRamp {
    /// Creates a ramp.
    #[must_use]
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    /// Ramp of the form `(index + 1) * k`.
    #[must_use]
    pub const fn multiples_of(k: f64) -> Self {
        Self { base: k, step: k }
    }

    /// Speed of the element at `index`.
    #[must_use]
    pub fn speed(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step
    }
}

/// Normalizes a pointer position to `[0, 1]` on both axes of the viewport.
///
/// An empty viewport maps every pointer to the centre, so offsets are zero.
#[must_use]
pub fn normalize_pointer(client: Point, viewport: Size) -> Point {
    let axis = |v: f64, extent: f64| {
        if extent > 0.0 {
            (v / extent).clamp(0.0, 1.0)
        } else {
            0.5
        }
    };
    Point::new(axis(client.x, viewport.width), axis(client.y, viewport.height))
}

/// Offset for a pointer layer: `(normalized - 0.5) * speed * scale`.
#[must_use]
pub fn pointer_offset(normalized: Point, speed: f64, scale: f64) -> Vec2 {
    Vec2::new(
        (normalized.x - 0.5) * speed * scale,
        (normalized.y - 0.5) * speed * scale,
    )
}

/// Vertical offset for a scroll layer: `scroll * speed`.
#[must_use]
pub fn scroll_offset(scroll: f64, speed: f64) -> f64 {
    scroll * speed
}

/// A collection of decorations that drift with the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLayer {
    /// Per-index speed.
    pub ramp: SpeedRamp,
    /// Pixel scale applied after the speed.
    pub scale: f64,
}

impl PointerLayer {
    /// Hero rings: speed `(i + 1) * 0.5`, 20 px scale.
    pub const HERO_RINGS: Self = Self {
        ramp: SpeedRamp::multiples_of(0.5),
        scale: 20.0,
    };
    /// Hero shapes: speed `(i + 1) * 0.3`, 10 px scale.
    pub const HERO_SHAPES: Self = Self {
        ramp: SpeedRamp::multiples_of(0.3),
        scale: 10.0,
    };
    /// Portfolio rings: speed `(i + 1) * 0.3`, 15 px scale.
    pub const PORTFOLIO_RINGS: Self = Self {
        ramp: SpeedRamp::multiples_of(0.3),
        scale: 15.0,
    };
    /// Portfolio shapes: speed `(i + 1) * 0.2`, 8 px scale.
    pub const PORTFOLIO_SHAPES: Self = Self {
        ramp: SpeedRamp::multiples_of(0.2),
        scale: 8.0,
    };

    /// Offset of the element at `index` for a normalized pointer.
    #[must_use]
    pub fn offset(&self, index: usize, normalized: Point) -> Vec2 {
        pointer_offset(normalized, self.ramp.speed(index), self.scale)
    }

    /// The offset as a translation.
    #[must_use]
    pub fn transform(&self, index: usize, normalized: Point) -> Transform3d {
        let v = self.offset(index, normalized);
        Transform3d::from_translation(v.x, v.y, 0.0)
    }
}

/// A collection of decorations that drift with the page scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollLayer {
    /// Section-wide factor applied to the raw scroll offset first.
    pub rate: f64,
    /// Per-index speed.
    pub ramp: SpeedRamp,
}

impl ScrollLayer {
    /// Hero floating cards.
    pub const HERO_CARDS: Self = Self {
        rate: 0.5,
        ramp: SpeedRamp::new(0.1, 0.05),
    };
    /// Hero particles.
    pub const HERO_PARTICLES: Self = Self {
        rate: 0.5,
        ramp: SpeedRamp::new(0.05, 0.02),
    };
    /// Hero rings.
    pub const HERO_RINGS: Self = Self {
        rate: 0.5,
        ramp: SpeedRamp::new(0.02, 0.01),
    };
    /// Portfolio rings.
    pub const PORTFOLIO_RINGS: Self = Self {
        rate: 0.3,
        ramp: SpeedRamp::new(0.01, 0.005),
    };
    /// Portfolio shapes.
    pub const PORTFOLIO_SHAPES: Self = Self {
        rate: 0.3,
        ramp: SpeedRamp::new(0.008, 0.003),
    };
    /// Portfolio particles.
    pub const PORTFOLIO_PARTICLES: Self = Self {
        rate: 0.3,
        ramp: SpeedRamp::new(0.005, 0.002),
    };

    /// Vertical offset of the element at `index`.
    #[must_use]
    pub fn offset(&self, index: usize, scroll: f64) -> f64 {
        scroll_offset(scroll * self.rate, self.ramp.speed(index))
    }

    /// The offset as a translation.
    #[must_use]
    pub fn transform(&self, index: usize, scroll: f64) -> Transform3d {
        Transform3d::from_translation(0.0, self.offset(index, scroll), 0.0)
    }
}

/// Returns `true` if `p` lies inside `rect`, edges included.
#[must_use]
pub fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Returns `true` if any part of `rect` is on screen vertically.
#[must_use]
pub fn is_on_screen(rect: Rect, viewport_height: f64) -> bool {
    rect.y0 < viewport_height && rect.y1 > 0.0
}

/// Card tilt following the pointer inside the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    /// Rotation about X, degrees.
    pub rotate_x: f64,
    /// Rotation about Y, degrees.
    pub rotate_y: f64,
}

impl Tilt {
    /// Perspective distance in pixels.
    pub const PERSPECTIVE: f64 = 1000.0;
    /// Lift toward the viewer while tilted, in pixels.
    pub const LIFT: f64 = 10.0;
    /// Pixels of pointer travel per degree of rotation.
    pub const SENSITIVITY: f64 = 10.0;

    /// Computes the tilt for a pointer at `client` over a card at `rect`.
    #[must_use]
    pub fn at(client: Point, rect: Rect) -> Self {
        let local = client - rect.origin();
        let center = Vec2::new(rect.width() / 2.0, rect.height() / 2.0);
        Self {
            rotate_x: (local.y - center.y) / Self::SENSITIVITY,
            rotate_y: (center.x - local.x) / Self::SENSITIVITY,
        }
    }

    /// `perspective(1000px) rotateX(..) rotateY(..) translateZ(10px)`.
    #[must_use]
    pub fn transform(&self) -> Transform3d {
        Transform3d::perspective(Self::PERSPECTIVE)
            * Transform3d::from_rotation_x_deg(self.rotate_x)
            * Transform3d::from_rotation_y_deg(self.rotate_y)
            * Transform3d::from_translation(0.0, 0.0, Self::LIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn speed_grows_with_index() {
        let ramp = SpeedRamp::new(0.1, 0.05);
        assert!(approx(ramp.speed(0), 0.1));
        assert!(approx(ramp.speed(4), 0.3));
        let mult = SpeedRamp::multiples_of(0.5);
        assert!(approx(mult.speed(2), 1.5));
    }

    #[test]
    fn pointer_normalization() {
        let vp = Size::new(1000.0, 500.0);
        assert_eq!(normalize_pointer(Point::new(250.0, 500.0), vp), Point::new(0.25, 1.0));
        assert_eq!(normalize_pointer(Point::new(-5.0, 900.0), vp), Point::new(0.0, 1.0));
        assert_eq!(normalize_pointer(Point::new(3.0, 3.0), Size::ZERO), Point::new(0.5, 0.5));
    }

    #[test]
    fn centred_pointer_means_no_drift() {
        let v = PointerLayer::HERO_RINGS.offset(3, Point::new(0.5, 0.5));
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn later_rings_drift_further() {
        let corner = Point::new(1.0, 0.0);
        let first = PointerLayer::HERO_RINGS.offset(0, corner);
        let third = PointerLayer::HERO_RINGS.offset(2, corner);
        // (1.0 - 0.5) * 0.5 * 20 = 5, and three times that for index 2.
        assert!(approx(first.x, 5.0));
        assert!(approx(third.x, 15.0));
        assert!(approx(third.y, -15.0));
    }

    #[test]
    fn scroll_offset_is_not_normalized() {
        // 1000 px scroll, section rate 0.5, second card speed 0.15.
        assert!(approx(ScrollLayer::HERO_CARDS.offset(1, 1000.0), 75.0));
        assert_eq!(scroll_offset(200.0, 0.0), 0.0);
        let xf = ScrollLayer::PORTFOLIO_RINGS.transform(0, 1000.0);
        assert!(approx(xf.translation_2d().1, 3.0));
    }

    #[test]
    fn inclusive_region_test() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_inclusive(r, Point::new(10.0, 10.0)));
        assert!(!contains_inclusive(r, Point::new(10.1, 5.0)));
        assert!(is_on_screen(Rect::new(0.0, -50.0, 10.0, 1.0), 600.0));
        assert!(!is_on_screen(Rect::new(0.0, 600.0, 10.0, 700.0), 600.0));
    }

    #[test]
    fn tilt_follows_pointer() {
        let card = Rect::new(100.0, 100.0, 300.0, 200.0);
        let centre = Tilt::at(Point::new(200.0, 150.0), card);
        assert_eq!(centre, Tilt { rotate_x: 0.0, rotate_y: 0.0 });

        let top_left = Tilt::at(Point::new(100.0, 100.0), card);
        assert!(approx(top_left.rotate_x, -5.0));
        assert!(approx(top_left.rotate_y, 10.0));

        let lifted = centre.transform();
        assert!(approx(lifted.col(3)[2], Tilt::LIFT));
    }
}
