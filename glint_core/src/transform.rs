// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 transforms and per-source transform composition.
//!
//! [`Transform3d`] covers the subset of CSS transform functions the effects
//! use (translate, scale, rotate about each axis, perspective) and renders as
//! a CSS `matrix3d()` value.
//!
//! Several effects may move the same element at once: scroll parallax,
//! pointer parallax, and a hover pose. Writing each one straight into the
//! element's `transform` would let the last writer erase the others, so each
//! source owns one slot of a [`TransformStack`] and the element receives the
//! composed result.

use alloc::format;
use alloc::string::String;
use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, the order CSS
/// `matrix3d()` lists its arguments in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform (CSS pixels).
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a uniform 2-D scale, like CSS `scale(s)`.
    #[inline]
    #[must_use]
    pub const fn from_scale(s: f64) -> Self {
        Self {
            cols: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation around the X axis, like CSS `rotateX(deg)`.
    #[must_use]
    pub fn from_rotation_x_deg(deg: f64) -> Self {
        let (s, c) = sin_cos_deg(deg);
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation around the Y axis, like CSS `rotateY(deg)`.
    #[must_use]
    pub fn from_rotation_y_deg(deg: f64) -> Self {
        let (s, c) = sin_cos_deg(deg);
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation in the page plane, like CSS `rotate(deg)`.
    #[must_use]
    pub fn from_rotation_z_deg(deg: f64) -> Self {
        let (s, c) = sin_cos_deg(deg);
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// CSS `perspective(d)`. Non-positive distances yield the identity.
    #[must_use]
    pub fn perspective(distance: f64) -> Self {
        let mut out = Self::IDENTITY;
        if distance > 0.0 {
            out.cols[2][3] = -1.0 / distance;
        }
        out
    }

    /// Translation component `(x, y)`.
    #[must_use]
    pub const fn translation_2d(&self) -> (f64, f64) {
        (self.cols[3][0], self.cols[3][1])
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// Renders the matrix as a CSS `matrix3d()` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let [c0, c1, c2, c3] = self.cols;
        format!(
            "matrix3d({},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{})",
            c0[0],
            c0[1],
            c0[2],
            c0[3],
            c1[0],
            c1[1],
            c1[2],
            c1[3],
            c2[0],
            c2[1],
            c2[2],
            c2[3],
            c3[0],
            c3[1],
            c3[2],
            c3[3],
        )
    }
}

fn sin_cos_deg(deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (rad.sin(), rad.cos())
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}

/// Which effect wrote a transform slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformSource {
    /// Scroll-driven parallax.
    Scroll,
    /// Pointer-driven parallax.
    Pointer,
    /// Hover pose (scale, rotate, tilt).
    Hover,
}

/// How the element is anchored before any effect moves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// No anchoring transform.
    #[default]
    None,
    /// Centered on its own box: `translate(-50%, -50%)`. Decorative rings are
    /// positioned this way in the stylesheet and must keep it.
    Centered,
}

/// Composes the transforms of all active sources on one element.
///
/// The composed matrix is `scroll × pointer × hover`: the hover pose applies
/// in the element's own frame, then pointer drift, then scroll drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformStack {
    anchor: Anchor,
    scroll: Option<Transform3d>,
    pointer: Option<Transform3d>,
    hover: Option<Transform3d>,
}

impl TransformStack {
    /// Creates an empty stack with the given anchor.
    #[must_use]
    pub const fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            scroll: None,
            pointer: None,
            hover: None,
        }
    }

    /// Sets the slot for `source`.
    pub fn set(&mut self, source: TransformSource, xf: Transform3d) {
        *self.slot(source) = Some(xf);
    }

    /// Clears the slot for `source`.
    pub fn clear(&mut self, source: TransformSource) {
        *self.slot(source) = None;
    }

    /// Returns the slot for `source`.
    #[must_use]
    pub const fn get(&self, source: TransformSource) -> Option<Transform3d> {
        match source {
            TransformSource::Scroll => self.scroll,
            TransformSource::Pointer => self.pointer,
            TransformSource::Hover => self.hover,
        }
    }

    /// The composed matrix of all set slots.
    #[must_use]
    pub fn compose(&self) -> Transform3d {
        [self.scroll, self.pointer, self.hover]
            .into_iter()
            .flatten()
            .fold(Transform3d::IDENTITY, |acc, xf| acc * xf)
    }

    /// The CSS `transform` value, or `None` if nothing applies and the
    /// inline property should be removed.
    #[must_use]
    pub fn to_css(&self) -> Option<String> {
        let any = self.scroll.is_some() || self.pointer.is_some() || self.hover.is_some();
        let xf = self.compose();
        if !xf.is_finite() {
            return None;
        }
        match (self.anchor, any) {
            (Anchor::None, false) => None,
            (Anchor::Centered, false) => Some(String::from("translate(-50%, -50%)")),
            (Anchor::None, true) => Some(xf.to_css()),
            (Anchor::Centered, true) => Some(format!("translate(-50%, -50%) {}", xf.to_css())),
        }
    }

    fn slot(&mut self, source: TransformSource) -> &mut Option<Transform3d> {
        match source {
            TransformSource::Scroll => &mut self.scroll,
            TransformSource::Pointer => &mut self.pointer,
            TransformSource::Hover => &mut self.hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn translation_composition() {
        let c = Transform3d::from_translation(1.0, 0.0, 0.0) * Transform3d::from_translation(0.0, 2.0, 0.0);
        assert_eq!(c.col(3), [1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_z_matches_css_rotate() {
        let r = Transform3d::from_rotation_z_deg(90.0);
        assert!(approx(r.col(0)[0], 0.0));
        assert!(approx(r.col(0)[1], 1.0));
        assert!(approx(r.col(1)[0], -1.0));
    }

    #[test]
    fn rotation_x_and_y_keep_their_axis() {
        let rx = Transform3d::from_rotation_x_deg(30.0);
        assert_eq!(rx.col(0), [1.0, 0.0, 0.0, 0.0]);
        let ry = Transform3d::from_rotation_y_deg(30.0);
        assert_eq!(ry.col(1), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn perspective_sets_w_row() {
        let p = Transform3d::perspective(1000.0);
        assert!(approx(p.col(2)[3], -0.001));
        assert_eq!(Transform3d::perspective(0.0), Transform3d::IDENTITY);
    }

    #[test]
    fn stack_keeps_every_source() {
        let mut stack = TransformStack::new(Anchor::None);
        stack.set(TransformSource::Scroll, Transform3d::from_translation(0.0, 40.0, 0.0));
        stack.set(TransformSource::Pointer, Transform3d::from_translation(5.0, -3.0, 0.0));
        // Scroll and pointer drift add up instead of overwriting each other.
        assert_eq!(stack.compose().translation_2d(), (5.0, 37.0));

        stack.set(TransformSource::Hover, Transform3d::from_scale(2.0));
        let xf = stack.compose();
        assert_eq!(xf.translation_2d(), (5.0, 37.0), "hover scales in place");
        assert_eq!(xf.col(0)[0], 2.0);

        stack.clear(TransformSource::Hover);
        assert_eq!(stack.compose().col(0)[0], 1.0);
        assert_eq!(stack.get(TransformSource::Hover), None);
    }

    #[test]
    fn css_output_respects_anchor() {
        let mut ring = TransformStack::new(Anchor::Centered);
        assert_eq!(ring.to_css().as_deref(), Some("translate(-50%, -50%)"));
        ring.set(TransformSource::Pointer, Transform3d::from_translation(2.0, 3.0, 0.0));
        assert_eq!(
            ring.to_css().as_deref(),
            Some("translate(-50%, -50%) matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,2,3,0,1)")
        );

        let plain = TransformStack::new(Anchor::None);
        assert_eq!(plain.to_css(), None);
    }

    #[test]
    fn non_finite_stack_renders_nothing() {
        let mut stack = TransformStack::new(Anchor::None);
        stack.set(TransformSource::Scroll, Transform3d::from_translation(f64::NAN, 0.0, 0.0));
        assert_eq!(stack.to_css(), None);
    }
}
