// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skill cards and the code lines typed as they scroll into view.

use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::JsValue;

use glint_core::glow;
use glint_core::style::StyleSink;
use glint_core::target;
use glint_core::typing::TypingSpec;
use glint_core::visibility::{Transition, WatcherConfig};

use super::typing::TypedLine;
use crate::dom::{self, ElementStyle};
use crate::{Context, Effects, VisibilityObserver};

const CODE_LINE_INTERVAL_MS: u64 = 50;

fn skill_cards(fx: &mut Effects, cx: &Context) -> Result<usize, JsValue> {
    target::bind_each(cx, ".skill-item", |item| {
        let accent = item
            .get_attribute("data-skill")
            .and_then(|skill| glow::skill_accent(&skill));
        let (on, off) = (item.clone(), item.clone());
        super::on_hover(
            fx,
            item,
            move || {
                dom::with_child_style(&on, "i", |s| s.set_style("animation", glow::SKILL_ICON_PULSE));
                if let Some(color) = accent {
                    ElementStyle::new(&on).set_style("border-color", color);
                }
            },
            move || {
                dom::with_child_style(&off, "i", |s| s.set_style("animation", ""));
                ElementStyle::new(&off).set_style("border-color", "");
            },
        )
    })
}

/// Code lines outside the showcases start empty and type once on entry.
fn code_lines(fx: &mut Effects, cx: &Rc<Context>) -> Result<usize, JsValue> {
    let elements: Vec<_> = dom::query_all(cx.document(), ".code-line")?
        .into_iter()
        .filter(|el| !super::in_showcase(el))
        .collect();
    if elements.is_empty() {
        return Ok(0);
    }
    let lines: Vec<_> = elements.iter().cloned().map(TypedLine::capture).collect();
    for line in &lines {
        line.clear();
    }
    let play_cx = Rc::clone(cx);
    let observer = VisibilityObserver::new(
        cx,
        "code-line",
        WatcherConfig::any_pixel(),
        elements,
        move |c| {
            if c.transition == Transition::Entered {
                lines[c.index].play(&play_cx, TypingSpec::code_line(CODE_LINE_INTERVAL_MS));
            }
        },
    )?;
    let count = observer.len();
    fx.keep(observer);
    Ok(count)
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    Ok(skill_cards(fx, cx)? + code_lines(fx, cx)?)
}
