// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between effect logic and the element it styles.
//!
//! Effects describe their output as inline style declarations and text. The
//! web backend implements [`StyleSink`] over a real element's
//! `CSSStyleDeclaration`; [`RecordingStyle`] keeps the writes in memory so
//! effect output can be inspected without a document.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

/// Receives inline style and text writes for one element.
pub trait StyleSink {
    /// Sets an inline style property. An empty value removes it.
    fn set_style(&mut self, property: &str, value: &str);

    /// Removes an inline style property, restoring the stylesheet value.
    fn clear_style(&mut self, property: &str) {
        self.set_style(property, "");
    }

    /// Replaces the element's text content.
    fn set_text(&mut self, text: &str);
}

/// A fixed list of `(property, value)` declarations.
pub type Declarations = &'static [(&'static str, &'static str)];

/// Writes every declaration in order.
pub fn apply(sink: &mut dyn StyleSink, declarations: &[(&str, &str)]) {
    for (property, value) in declarations {
        sink.set_style(property, value);
    }
}

/// Clears every property named in `declarations`.
pub fn clear(sink: &mut dyn StyleSink, declarations: &[(&str, &str)]) {
    for (property, _) in declarations {
        sink.clear_style(property);
    }
}

/// Inline styles for one element in two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggle {
    /// Applied on enter.
    pub on: Declarations,
    /// Applied on leave.
    pub off: Declarations,
}

impl Toggle {
    /// A toggle that does nothing.
    pub const NONE: Self = Self { on: &[], off: &[] };

    /// Writes the declarations for `active`.
    pub fn apply(&self, sink: &mut dyn StyleSink, active: bool) {
        apply(sink, if active { self.on } else { self.off });
    }
}

/// An in-memory [`StyleSink`].
///
/// Keeps the current inline style map and counts every write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingStyle {
    properties: Vec<(String, String)>,
    text: String,
    writes: usize,
}

impl RecordingStyle {
    /// Creates an unstyled element.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            text: String::new(),
            writes: 0,
        }
    }

    /// Current value of `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Current text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total number of style and text writes.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Number of inline properties currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no inline property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSink for RecordingStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        self.writes += 1;
        let slot = self.properties.iter().position(|(p, _)| p == property);
        match (slot, value.is_empty()) {
            (Some(i), true) => {
                self.properties.remove(i);
            }
            (Some(i), false) => value.clone_into(&mut self.properties[i].1),
            (None, true) => {}
            (None, false) => self.properties.push((property.into(), value.into())),
        }
    }

    fn set_text(&mut self, text: &str) {
        self.writes += 1;
        text.clone_into(&mut self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_removes_property() {
        let mut el = RecordingStyle::new();
        el.set_style("filter", "brightness(1.5)");
        el.set_style("filter", "brightness(1.8)");
        assert_eq!(el.get("filter"), Some("brightness(1.8)"));
        el.clear_style("filter");
        assert_eq!(el.get("filter"), None);
        assert!(el.is_empty());
        assert_eq!(el.writes(), 3);
    }

    #[test]
    fn apply_and_clear_lists() {
        let decls: Declarations = &[("opacity", "1"), ("transform", "translateY(0)")];
        let mut el = RecordingStyle::new();
        apply(&mut el, decls);
        assert_eq!(el.len(), 2);
        clear(&mut el, decls);
        assert!(el.is_empty());
    }
}
