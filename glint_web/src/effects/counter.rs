// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stat numbers that count up, or pulse, once half visible.

use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::counter::{CounterAnimation, CounterSpec};
use glint_core::showcase::{STAT_PULSE, STAT_PULSE_HOLD, StatAction};
use glint_core::timer::FRAME_INTERVAL;
use glint_core::trace::AnimationKind;
use glint_core::visibility::{Transition, WatcherConfig};

use crate::dom;
use crate::{Context, Effects, VisibilityObserver, after};

/// Runs `action` on a stat element.
pub(super) fn play(cx: &Rc<Context>, element: &HtmlElement, action: StatAction) {
    match action {
        StatAction::Count(spec) => {
            let mut anim = CounterAnimation::new(spec);
            if !anim.start() {
                return;
            }
            let el = element.clone();
            super::drive(cx, AnimationKind::Counter, FRAME_INTERVAL, move || {
                let step = anim.tick();
                el.set_text_content(Some(&anim.display()));
                step
            });
        }
        StatAction::Pulse => {
            dom::with_style(element, |s| STAT_PULSE.apply(s, true));
            let el = element.clone();
            after(STAT_PULSE_HOLD, move || {
                dom::with_style(&el, |s| STAT_PULSE.apply(s, false));
            });
        }
    }
}

/// Watches `stats` with `config` and plays each one's action on entry.
///
/// The action is read from the authored text at install time, before any
/// count has overwritten it.
pub(super) fn observe(
    cx: &Rc<Context>,
    fx: &mut Effects,
    label: &'static str,
    config: WatcherConfig,
    stats: Vec<HtmlElement>,
    action: impl Fn(&str) -> StatAction,
) -> Result<usize, JsValue> {
    if stats.is_empty() {
        return Ok(0);
    }
    let actions: Vec<_> = stats
        .iter()
        .map(|el| action(&el.text_content().unwrap_or_default()))
        .collect();
    let play_cx = Rc::clone(cx);
    let observer = VisibilityObserver::new(cx, label, config, stats, move |c| {
        if c.transition == Transition::Entered {
            play(&play_cx, c.element, actions[c.index]);
        }
    })?;
    let count = observer.len();
    fx.keep(observer);
    Ok(count)
}

/// Page-level stats; those inside a showcase card are counted by the card.
pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let stats: Vec<_> = dom::query_all(cx.document(), ".stat-number")?
        .into_iter()
        .filter(|el| !super::in_showcase(el))
        .collect();
    observe(cx, fx, "counter", WatcherConfig::counter(), stats, |text| {
        match CounterSpec::from_markup(text) {
            Some(spec) => StatAction::Count(spec),
            None => StatAction::Pulse,
        }
    })
}
