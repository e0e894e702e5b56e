// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll and pointer parallax of hero and portfolio decorations.

use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::Point;
use wasm_bindgen::JsValue;

use glint_core::parallax::{self, PointerLayer, ScrollLayer};
use glint_core::transform::{Anchor, TransformSource};

use crate::dom;
use crate::transforms::StackId;
use crate::{Context, Effects, ThrottledListener};

/// The section whose decorations only move while it is involved.
const PORTFOLIO_SECTION: &str = ".portfolio";

const HERO_SCROLL: [(&str, ScrollLayer, Anchor); 3] = [
    (".floating-card", ScrollLayer::HERO_CARDS, Anchor::None),
    (".particle", ScrollLayer::HERO_PARTICLES, Anchor::None),
    (".ring", ScrollLayer::HERO_RINGS, Anchor::Centered),
];

const PORTFOLIO_SCROLL: [(&str, ScrollLayer, Anchor); 3] = [
    (".portfolio-ring", ScrollLayer::PORTFOLIO_RINGS, Anchor::Centered),
    (".portfolio-shape", ScrollLayer::PORTFOLIO_SHAPES, Anchor::None),
    (".portfolio-particle", ScrollLayer::PORTFOLIO_PARTICLES, Anchor::None),
];

const HERO_POINTER: [(&str, PointerLayer, Anchor); 2] = [
    (".ring", PointerLayer::HERO_RINGS, Anchor::Centered),
    (".shape", PointerLayer::HERO_SHAPES, Anchor::None),
];

const PORTFOLIO_POINTER: [(&str, PointerLayer, Anchor); 2] = [
    (".portfolio-ring", PointerLayer::PORTFOLIO_RINGS, Anchor::Centered),
    (".portfolio-shape", PointerLayer::PORTFOLIO_SHAPES, Anchor::None),
];

/// Registered elements of one layer, in document order.
struct Group<L> {
    layer: L,
    ids: Vec<StackId>,
}

fn groups<L: Copy>(cx: &Context, specs: &[(&str, L, Anchor)]) -> Result<Vec<Group<L>>, JsValue> {
    let mut out = Vec::new();
    for &(selector, layer, anchor) in specs {
        let ids: Vec<_> = dom::query_all(cx.document(), selector)?
            .iter()
            .map(|el| cx.transforms().register(el, anchor))
            .collect();
        if !ids.is_empty() {
            out.push(Group { layer, ids });
        }
    }
    Ok(out)
}

fn bound<L>(groups: &[Group<L>]) -> usize {
    groups.iter().map(|g| g.ids.len()).sum()
}

fn apply_scroll(cx: &Context, groups: &[Group<ScrollLayer>], scroll: f64) {
    for group in groups {
        for (index, &id) in group.ids.iter().enumerate() {
            let xf = group.layer.transform(index, scroll);
            cx.transforms()
                .update(id, |_, stack| stack.set(TransformSource::Scroll, xf));
        }
    }
}

fn apply_pointer(cx: &Context, groups: &[Group<PointerLayer>], normalized: Point) {
    for group in groups {
        for (index, &id) in group.ids.iter().enumerate() {
            let xf = group.layer.transform(index, normalized);
            cx.transforms()
                .update(id, |_, stack| stack.set(TransformSource::Pointer, xf));
        }
    }
}

pub(super) fn install_scroll(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let hero = groups(cx, &HERO_SCROLL)?;
    let portfolio = groups(cx, &PORTFOLIO_SCROLL)?;
    let section = dom::query(cx.document(), PORTFOLIO_SECTION)?;
    let count = bound(&hero) + bound(&portfolio);
    if count == 0 {
        return Ok(0);
    }

    let window = cx.window().clone();
    let handler = ThrottledListener::new(
        cx,
        &window,
        "scroll",
        "scroll-parallax",
        {
            let cx = Rc::clone(cx);
            move |_| Some(cx.scroll_y())
        },
        {
            let cx = Rc::clone(cx);
            move |&scroll: &f64| {
                apply_scroll(&cx, &hero, scroll);
                let on_screen = section.as_ref().is_some_and(|s| {
                    parallax::is_on_screen(dom::client_rect(s), cx.viewport().height)
                });
                if on_screen {
                    apply_scroll(&cx, &portfolio, scroll);
                }
            }
        },
    )?;
    handler.prime(cx.scroll_y());
    fx.keep(handler);
    Ok(count)
}

pub(super) fn install_pointer(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let hero = groups(cx, &HERO_POINTER)?;
    let portfolio = groups(cx, &PORTFOLIO_POINTER)?;
    let section = dom::query(cx.document(), PORTFOLIO_SECTION)?;
    let count = bound(&hero) + bound(&portfolio);
    if count == 0 {
        return Ok(0);
    }

    let document = cx.document().clone();
    let handler = ThrottledListener::new(
        cx,
        &document,
        "mousemove",
        "pointer-parallax",
        dom::client_point,
        {
            let cx = Rc::clone(cx);
            move |&client: &Point| {
                let normalized = parallax::normalize_pointer(client, cx.viewport());
                apply_pointer(&cx, &hero, normalized);
                let inside = section
                    .as_ref()
                    .is_some_and(|s| parallax::contains_inclusive(dom::client_rect(s), client));
                if inside {
                    apply_pointer(&cx, &portfolio, normalized);
                }
            }
        },
    )?;
    fx.keep(handler);
    Ok(count)
}
