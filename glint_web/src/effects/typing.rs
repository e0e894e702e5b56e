// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-by-character typing of the hero headline and code lines.

use alloc::rc::Rc;
use core::cell::Cell;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::trace::AnimationKind;
use glint_core::typing::{TypingAnimation, TypingPhase, TypingSpec};

use crate::dom;
use crate::{Context, after};

/// An element whose authored text is retyped on demand.
///
/// The text is captured once, so a replay started while the element shows a
/// partial line still types the whole line.
#[derive(Clone, Debug)]
pub(super) struct TypedLine {
    element: HtmlElement,
    text: Rc<str>,
    busy: Rc<Cell<bool>>,
}

impl TypedLine {
    pub(super) fn capture(element: HtmlElement) -> Self {
        let text = element.text_content().unwrap_or_default();
        Self {
            element,
            text: Rc::from(text),
            busy: Rc::new(Cell::new(false)),
        }
    }

    /// Empties the element without scheduling anything.
    pub(super) fn clear(&self) {
        self.element.set_text_content(Some(""));
    }

    /// Clears the element now and types the captured text after
    /// `spec.delay`. Returns `false` if a previous run is still typing.
    pub(super) fn play(&self, cx: &Rc<Context>, spec: TypingSpec) -> bool {
        if self.busy.replace(true) {
            return false;
        }
        self.clear();
        let line = self.clone();
        let cx = Rc::clone(cx);
        after(spec.delay, move || {
            let mut anim = TypingAnimation::new(&*line.text);
            anim.start();
            if anim.phase() == TypingPhase::Complete {
                line.busy.set(false);
                return;
            }
            super::drive(&cx, AnimationKind::Typing, spec.interval, move || {
                let step = anim.tick();
                line.element.set_text_content(Some(anim.visible()));
                if step.is_done() {
                    line.busy.set(false);
                }
                step
            });
        });
        true
    }
}

pub(super) fn install_headline(cx: &Rc<Context>) -> Result<usize, JsValue> {
    let Some(title) = dom::query(cx.document(), ".hero-title")? else {
        return Ok(0);
    };
    // Split titles are revealed line by line by the entrance instead.
    if dom::query_in(&title, ".title-line").is_some() {
        return Ok(0);
    }
    TypedLine::capture(title).play(cx, TypingSpec::headline());
    Ok(1)
}
