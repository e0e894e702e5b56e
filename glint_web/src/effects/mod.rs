// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect modules wired to the page.
//!
//! Each module queries its targets, attaches listeners and observers, and
//! hands their handles to [`Effects`]. It returns how many target elements
//! it bound; zero means the page has none and nothing was attached.

mod chrome;
mod contact;
mod counter;
mod hover;
mod nav;
mod parallax;
mod particles;
mod reveal;
mod ripple;
mod showcase;
mod skills;
mod tilt;
mod typing;

use alloc::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::config::Module;
use glint_core::showcase::ShowcaseConfig;
use glint_core::time::Duration;
use glint_core::timer::Step;
use glint_core::trace::{AnimationKind, AnimationSettledEvent, AnimationStepEvent};

use crate::{Context, Effects, Listener, now, repeat};

pub(crate) fn install(module: Module, cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    match module {
        Module::Tilt => tilt::install(cx, fx),
        Module::ScrollParallax => parallax::install_scroll(cx, fx),
        Module::PointerParallax => parallax::install_pointer(cx, fx),
        Module::HoverGlow => hover::install(cx, fx),
        Module::SmoothScroll => nav::install_smooth_scroll(cx, fx),
        Module::Navbar => chrome::install_navbar(cx, fx),
        Module::MobileMenu => nav::install_mobile_menu(cx, fx),
        Module::Reveal => reveal::install_scroll_reveal(cx, fx),
        Module::Entrance => reveal::install_entrances(cx, fx),
        Module::ContactForm => contact::install(cx, fx),
        Module::Typing => typing::install_headline(cx),
        Module::Particles => particles::install(cx, fx),
        Module::ScrollProgress => chrome::install_progress(cx, fx),
        Module::Ripple => ripple::install_buttons(cx, fx),
        Module::Counters => counter::install(cx, fx),
        Module::Showcase => showcase::install(cx, fx),
        Module::SkillCards => skills::install(cx, fx),
    }
}

/// Whether `element` sits inside one of the showcase cards, which handle
/// their own stats and code lines.
fn in_showcase(element: &HtmlElement) -> bool {
    ShowcaseConfig::all()
        .iter()
        .any(|c| element.closest(c.root).ok().flatten().is_some())
}

/// Attaches a `mouseenter`/`mouseleave` pair to `element`.
fn on_hover(
    fx: &mut Effects,
    element: &HtmlElement,
    mut enter: impl FnMut() + 'static,
    mut leave: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    fx.keep(Listener::new(element, "mouseenter", move |_| enter())?);
    fx.keep(Listener::new(element, "mouseleave", move |_| leave())?);
    Ok(())
}

/// Runs `tick` every `period` until it reports [`Step::Done`], tracing each
/// step under a fresh animation id.
fn drive(
    cx: &Rc<Context>,
    kind: AnimationKind,
    period: Duration,
    mut tick: impl FnMut() -> Step + 'static,
) {
    let id = cx.animation_id();
    let cx = Rc::clone(cx);
    let mut ticks = 0_u32;
    repeat(period, move || {
        let step = tick();
        ticks = ticks.saturating_add(1);
        let at = now();
        cx.trace(|t| {
            t.animation_step(&AnimationStepEvent {
                kind,
                id,
                step: ticks,
                at,
            });
            if step.is_done() {
                t.animation_settled(&AnimationSettledEvent {
                    kind,
                    id,
                    ticks,
                    at,
                });
            }
        });
        step
    });
}
