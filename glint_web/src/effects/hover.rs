// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover glows and lifts.

use alloc::format;
use alloc::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::glow;
use glint_core::style::{StyleSink, Toggle};
use glint_core::target;
use glint_core::transform::{Anchor, TransformSource};

use crate::dom::{self, ElementStyle};
use crate::{Context, Effects, Listener};

/// Applies `toggle` to the first `selector` match inside `root`.
fn toggle_child(root: &HtmlElement, selector: &str, toggle: Toggle, active: bool) {
    dom::with_child_style(root, selector, |s| toggle.apply(s, active));
}

/// Applies `toggle` to `element` on enter and reverts it on leave.
fn hover_toggle(fx: &mut Effects, element: &HtmlElement, toggle: Toggle) -> Result<(), JsValue> {
    let on = element.clone();
    let off = element.clone();
    super::on_hover(
        fx,
        element,
        move || dom::with_style(&on, |s| toggle.apply(s, true)),
        move || dom::with_style(&off, |s| toggle.apply(s, false)),
    )
}

fn buttons(fx: &mut Effects, cx: &Context) -> Result<usize, JsValue> {
    let glowing = dom::query_all(cx.document(), ".btn, .nav-logo h2")?;
    for el in &glowing {
        let is_button = dom::has_class(el, "btn");
        let shadow = glow::button_lift_shadow(&el.class_name());
        let on = el.clone();
        let off = el.clone();
        super::on_hover(
            fx,
            el,
            move || {
                dom::with_style(&on, |s| {
                    glow::button_enter(s);
                    if is_button {
                        glow::BUTTON_LIFT.apply(s, true);
                        if let Some(shadow) = shadow {
                            s.set_style("box-shadow", shadow);
                        }
                    }
                });
                if is_button {
                    toggle_child(&on, ".btn-icon", glow::BUTTON_ICON_HOVER, true);
                    toggle_child(&on, ".btn-glow", glow::BUTTON_GLOW_LAYER, true);
                }
            },
            move || {
                dom::with_style(&off, |s| {
                    glow::button_leave(s);
                    if is_button {
                        glow::BUTTON_LIFT.apply(s, false);
                    }
                });
                if is_button {
                    toggle_child(&off, ".btn-icon", glow::BUTTON_ICON_HOVER, false);
                    toggle_child(&off, ".btn-glow", glow::BUTTON_GLOW_LAYER, false);
                }
            },
        )?;
    }
    Ok(glowing.len())
}

fn rings_and_shapes(fx: &mut Effects, cx: &Rc<Context>) -> Result<usize, JsValue> {
    let rings = dom::query_all(cx.document(), ".portfolio-ring")?;
    for (index, ring) in rings.iter().enumerate() {
        let on = ring.clone();
        let off = ring.clone();
        super::on_hover(
            fx,
            ring,
            move || dom::with_style(&on, |s| glow::ring_enter(s, index)),
            move || dom::with_style(&off, |s| glow::ring_leave(s)),
        )?;
    }

    let shapes = dom::query_all(cx.document(), ".portfolio-shape")?;
    for (index, shape) in shapes.iter().enumerate() {
        let id = cx.transforms().register(shape, Anchor::None);
        let enter = Rc::clone(cx);
        let leave = Rc::clone(cx);
        super::on_hover(
            fx,
            shape,
            move || {
                enter
                    .transforms()
                    .update(id, |s, stack| glow::shape_enter(s, stack, index));
            },
            move || {
                leave
                    .transforms()
                    .update(id, |s, stack| glow::shape_leave(s, stack));
            },
        )?;
    }
    Ok(rings.len() + shapes.len())
}

fn floating_cards(fx: &mut Effects, cx: &Rc<Context>) -> Result<usize, JsValue> {
    let cards = dom::query_all(cx.document(), ".floating-card")?;
    for card in &cards {
        let delay = cx.rng().f64() * 2.0;
        ElementStyle::new(card).set_style("animation-delay", &format!("{delay}s"));

        let id = cx.transforms().register(card, Anchor::None);
        let (enter_cx, on) = (Rc::clone(cx), card.clone());
        let (leave_cx, off) = (Rc::clone(cx), card.clone());
        super::on_hover(
            fx,
            card,
            move || {
                enter_cx
                    .transforms()
                    .update(id, |s, stack| glow::card_enter(s, stack));
                toggle_child(&on, "i", glow::CARD_ICON_HOVER, true);
                toggle_child(&on, ".card-glow", glow::CARD_GLOW_HOVER, true);
                toggle_child(&on, ".card-trail", glow::CARD_TRAIL_HOVER, true);
            },
            move || {
                leave_cx
                    .transforms()
                    .update(id, |s, stack| glow::card_leave(s, stack));
                toggle_child(&off, "i", glow::CARD_ICON_HOVER, false);
                toggle_child(&off, ".card-glow", glow::CARD_GLOW_HOVER, false);
                toggle_child(&off, ".card-trail", glow::CARD_TRAIL_HOVER, false);
            },
        )?;
    }
    Ok(cards.len())
}

fn portfolio_items(fx: &mut Effects, cx: &Rc<Context>) -> Result<usize, JsValue> {
    target::bind_each(&**cx, ".portfolio-item", |item| {
        let id = cx.transforms().register(item, Anchor::None);
        let enter_cx = Rc::clone(cx);
        let leave_cx = Rc::clone(cx);
        super::on_hover(
            fx,
            item,
            move || {
                enter_cx.transforms().update(id, |s, stack| {
                    stack.set(TransformSource::Hover, glow::portfolio_item_lift());
                    glow::PORTFOLIO_ITEM_HOVER.apply(s, true);
                });
            },
            move || {
                leave_cx.transforms().update(id, |s, stack| {
                    stack.clear(TransformSource::Hover);
                    glow::PORTFOLIO_ITEM_HOVER.apply(s, false);
                });
            },
        )
    })
}

fn page_chrome(fx: &mut Effects, cx: &Context) -> Result<usize, JsValue> {
    let lines = dom::query_all(cx.document(), ".grid-line")?;
    for line in &lines {
        hover_toggle(fx, line, glow::GRID_LINE_HOVER)?;
    }

    let Some(indicator) = dom::query(cx.document(), ".scroll-indicator")? else {
        return Ok(lines.len());
    };
    hover_toggle(fx, &indicator, glow::SCROLL_INDICATOR_HOVER)?;
    if let Some(text) = dom::query(cx.document(), ".scroll-text")? {
        let on = text.clone();
        super::on_hover(
            fx,
            &indicator,
            move || dom::with_style(&on, |s| glow::SCROLL_TEXT_HOVER.apply(s, true)),
            move || dom::with_style(&text, |s| glow::SCROLL_TEXT_HOVER.apply(s, false)),
        )?;
    }
    let window = cx.window().clone();
    fx.keep(Listener::new(&indicator, "click", move |_| {
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        dom::smooth_scroll_to(&window, height);
    })?);
    Ok(lines.len() + 1)
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    Ok(buttons(fx, cx)?
        + rings_and_shapes(fx, cx)?
        + floating_cards(fx, cx)?
        + portfolio_items(fx, cx)?
        + page_chrome(fx, cx)?)
}
