// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3-D tilt of cards toward the pointer.

use alloc::rc::Rc;
use core::cell::Cell;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::config::Module;
use glint_core::glow;
use glint_core::parallax::Tilt;
use glint_core::target;
use glint_core::transform::{Anchor, Transform3d, TransformSource};

use crate::dom;
use crate::{Context, Effects, ThrottledListener};

const TARGETS: &str = ".floating-card, .service-card, .portfolio-item";

/// The hover pose the tilt is layered on.
fn rest_pose(cx: &Context, card: &HtmlElement) -> Transform3d {
    if dom::has_class(card, "portfolio-item") {
        glow::portfolio_item_lift()
    } else if dom::has_class(card, "floating-card")
        && cx.config().runs(Module::HoverGlow, cx.viewport().width)
    {
        glow::card_hover_transform()
    } else {
        Transform3d::IDENTITY
    }
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    target::bind_each(&**cx, TARGETS, |card| {
        let id = cx.transforms().register(card, Anchor::None);
        let pose = rest_pose(cx, card);
        let hovered = Rc::new(Cell::new(false));

        let el = card.clone();
        let moves = ThrottledListener::new(
            cx,
            card,
            "mousemove",
            "tilt",
            move |e| Some(Tilt::at(dom::client_point(e)?, dom::client_rect(&el))),
            {
                let cx = Rc::clone(cx);
                let hovered = Rc::clone(&hovered);
                move |tilt: &Tilt| {
                    // A frame may land after the pointer already left.
                    if !hovered.get() {
                        return;
                    }
                    cx.transforms().update(id, |_, stack| {
                        stack.set(TransformSource::Hover, tilt.transform() * pose);
                    });
                }
            },
        )?;
        fx.keep(moves);

        let entered = Rc::clone(&hovered);
        let cx = Rc::clone(cx);
        super::on_hover(
            fx,
            card,
            move || entered.set(true),
            move || {
                hovered.set(false);
                cx.transforms()
                    .update(id, |_, stack| stack.clear(TransformSource::Hover));
            },
        )
    })
}
