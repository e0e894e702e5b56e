// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element transform stacks shared across modules.
//!
//! Tilt, parallax and hover poses can all move the same element. Each
//! module registers the element once and gets a [`StackId`]; updates go
//! through the registry, which writes the composed transform.

use alloc::vec::Vec;
use core::cell::RefCell;

use web_sys::HtmlElement;

use glint_core::glow;
use glint_core::transform::{Anchor, TransformStack};

use crate::dom::ElementStyle;

/// Handle to a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StackId(usize);

#[derive(Default)]
pub(crate) struct TransformRegistry {
    entries: RefCell<Vec<(HtmlElement, TransformStack)>>,
}

impl core::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("len", &self.entries.try_borrow().map_or(0, |e| e.len()))
            .finish()
    }
}

impl TransformRegistry {
    /// Registers `element`, or returns its existing id. The anchor of the
    /// first registration wins.
    pub(crate) fn register(&self, element: &HtmlElement, anchor: Anchor) -> StackId {
        let mut entries = self.entries.borrow_mut();
        if let Some(i) = entries.iter().position(|(el, _)| el == element) {
            return StackId(i);
        }
        entries.push((element.clone(), TransformStack::new(anchor)));
        StackId(entries.len() - 1)
    }

    /// Edits the stack of `id` and writes the result to the element.
    pub(crate) fn update(&self, id: StackId, f: impl FnOnce(&mut ElementStyle<'_>, &mut TransformStack)) {
        let Ok(mut entries) = self.entries.try_borrow_mut() else {
            return;
        };
        let Some((element, stack)) = entries.get_mut(id.0) else {
            return;
        };
        let mut style = ElementStyle::new(element);
        f(&mut style, stack);
        glow::write_transform(&mut style, stack);
    }
}
