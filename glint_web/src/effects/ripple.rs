// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click ripples on buttons and showcase cards.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent};

use glint_core::ripple::{self, RippleGeometry, RippleId, RippleSchedule, RippleSpec};
use glint_core::style;
use glint_core::target;
use glint_core::time::HostTime;
use glint_core::trace::{RippleEvent, RipplePhase};

use crate::dom;
use crate::{Context, Effects, Listener, after, now};

/// Live marks of one group of hosts.
#[derive(Debug, Default)]
pub(super) struct Ripples {
    schedule: RippleSchedule,
    marks: Vec<(RippleId, HtmlElement)>,
}

pub(super) type SharedRipples = Rc<RefCell<Ripples>>;

impl Ripples {
    /// Drops every mark that has expired at `at`, plus `id`.
    fn take_expired(&mut self, id: RippleId, at: HostTime) -> Vec<(RippleId, HtmlElement)> {
        let mut gone = self.schedule.expire(at);
        if self.schedule.retire(id) {
            gone.push(id);
        }
        let (done, live): (Vec<_>, Vec<_>) = core::mem::take(&mut self.marks)
            .into_iter()
            .partition(|(m, _)| gone.contains(m));
        self.marks = live;
        done
    }
}

/// Appends a mark to `host` and removes it once its animation is over.
pub(super) fn spawn(
    cx: &Rc<Context>,
    ripples: &SharedRipples,
    host: &HtmlElement,
    geometry: RippleGeometry,
    spec: RippleSpec,
) -> Result<(), JsValue> {
    let mark = cx
        .document()
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    mark.style().set_css_text(&spec.css_text(&geometry));
    host.append_child(&mark)?;

    let at = now();
    let id = {
        let mut r = ripples.borrow_mut();
        let id = r.schedule.spawn(at, spec.duration);
        r.marks.push((id, mark));
        id
    };
    cx.trace(|t| {
        t.ripple(&RippleEvent {
            id,
            phase: RipplePhase::Spawned,
            at,
        });
    });

    let cx = Rc::clone(cx);
    let ripples = Rc::clone(ripples);
    after(spec.duration, move || {
        let at = now();
        let removed = ripples.borrow_mut().take_expired(id, at);
        for (id, mark) in removed {
            mark.remove();
            cx.trace(|t| {
                t.ripple(&RippleEvent {
                    id,
                    phase: RipplePhase::Removed,
                    at,
                });
            });
        }
    });
    Ok(())
}

/// Ripples on click at the pointer and, if `keyboard`, on Enter or Space
/// at the centre.
pub(super) fn attach(
    cx: &Rc<Context>,
    fx: &mut Effects,
    ripples: &SharedRipples,
    host: &HtmlElement,
    spec: RippleSpec,
    keyboard: bool,
) -> Result<(), JsValue> {
    let (click_cx, click_ripples, target) = (Rc::clone(cx), Rc::clone(ripples), host.clone());
    fx.keep(Listener::new(host, "click", move |e| {
        let Some(point) = dom::client_point(&e) else {
            return;
        };
        let geometry = RippleGeometry::at_click(point, dom::client_rect(&target));
        if let Err(err) = spawn(&click_cx, &click_ripples, &target, geometry, spec) {
            web_sys::console::error_1(&err);
        }
    })?);
    if !keyboard {
        return Ok(());
    }
    let (key_cx, key_ripples, target) = (Rc::clone(cx), Rc::clone(ripples), host.clone());
    fx.keep(Listener::new(host, "keydown", move |e| {
        let activated = e
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|k| ripple::is_activation_key(&k.key()));
        if !activated {
            return;
        }
        e.prevent_default();
        let geometry = RippleGeometry::centered(dom::client_rect(&target));
        if let Err(err) = spawn(&key_cx, &key_ripples, &target, geometry, spec) {
            web_sys::console::error_1(&err);
        }
    })?);
    Ok(())
}

pub(super) fn install_buttons(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let ripples = SharedRipples::default();
    target::bind_each(&**cx, ".btn", |button| {
        dom::with_style(button, |s| style::apply(s, ripple::RIPPLE_HOST));
        attach(cx, fx, &ripples, button, RippleSpec::BUTTON, false)
    })
}
