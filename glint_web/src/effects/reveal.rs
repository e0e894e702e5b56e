// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reveals and staggered entrances.

use alloc::rc::Rc;

use wasm_bindgen::JsValue;

use glint_core::reveal::{self, Entrance};
use glint_core::visibility::{Transition, WatcherConfig};

use crate::dom;
use crate::{Context, Effects, VisibilityObserver, after};

pub(super) fn install_scroll_reveal(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let targets = dom::query_all(cx.document(), reveal::SCROLL_REVEAL_TARGETS)?;
    if targets.is_empty() {
        return Ok(0);
    }
    let observer = VisibilityObserver::new(cx, "reveal", reveal::scroll_reveal(), targets, |c| {
        if c.transition == Transition::Entered {
            let _ = c.element.class_list().add_1(reveal::ANIMATE_IN_CLASS);
        }
    })?;
    let count = observer.len();
    fx.keep(observer);
    Ok(count)
}

/// Hides a group now and shows each element after its stagger delay.
fn on_load(cx: &Context, entrance: Entrance) -> Result<usize, JsValue> {
    let targets = dom::query_all(cx.document(), entrance.targets)?;
    for (index, el) in targets.iter().enumerate() {
        dom::with_style(el, |s| entrance.hide(s));
        let el = el.clone();
        after(entrance.delay(index), move || {
            dom::with_style(&el, |s| entrance.show(s));
        });
    }
    Ok(targets.len())
}

/// Hides a group now and shows elements as they scroll into view,
/// staggered within each batch the browser reports together.
fn on_visible(cx: &Rc<Context>, fx: &mut Effects, entrance: Entrance) -> Result<usize, JsValue> {
    let targets = dom::query_all(cx.document(), entrance.targets)?;
    if targets.is_empty() {
        return Ok(0);
    }
    for el in &targets {
        dom::with_style(el, |s| entrance.hide(s));
    }
    let observer = VisibilityObserver::new(
        cx,
        "entrance",
        WatcherConfig::fade_in(),
        targets,
        move |c| {
            if c.transition != Transition::Entered {
                return;
            }
            let el = c.element.clone();
            after(entrance.delay(c.batch_index), move || {
                dom::with_style(&el, |s| entrance.show(s));
            });
        },
    )?;
    let count = observer.len();
    fx.keep(observer);
    Ok(count)
}

pub(super) fn install_entrances(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    Ok(on_load(cx, Entrance::HERO_TITLE_LINES)?
        + on_load(cx, Entrance::HERO_BLOCKS)?
        + on_visible(cx, fx, Entrance::PORTFOLIO_ITEMS)?)
}
