// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-page canvas particles and the hero's decorative particles.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::f64::consts::TAU;

use kurbo::Size;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use glint_core::particles::{self, DomParticle, ParticleConfig, ParticleField};
use glint_core::style::StyleSink;

use crate::dom::{self, ElementStyle};
use crate::{Context, Effects, Listener, RafLoop};

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "viewport sizes are small non-negative CSS pixel counts"
)]
fn fit(canvas: &HtmlCanvasElement, size: Size) {
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let Size { width, height } = field.bounds();
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in field.particles() {
        ctx.begin_path();
        if ctx
            .arc(p.position.x, p.position.y, p.radius, 0.0, TAU)
            .is_err()
        {
            continue;
        }
        ctx.set_fill_style_str(&field.fill_style(p));
        ctx.fill();
    }
}

fn canvas_field(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let Some(body) = cx.document().body() else {
        return Ok(0);
    };
    let canvas = cx
        .document()
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;
    canvas.style().set_css_text(particles::CANVAS_STYLE);
    body.append_child(&canvas)?;
    let Some(ctx) = canvas
        .get_context("2d")?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return Ok(0);
    };

    let size = cx.viewport();
    fit(&canvas, size);
    let field = Rc::new(RefCell::new(ParticleField::new(
        ParticleConfig::page(),
        size,
        &mut cx.rng(),
    )));

    let resized = Rc::clone(&field);
    let resize_cx = Rc::clone(cx);
    let target = canvas.clone();
    fx.keep(Listener::passive(cx.window(), "resize", move |_| {
        let size = resize_cx.viewport();
        fit(&target, size);
        resized.borrow_mut().resize(size);
    })?);

    let frames = RafLoop::new(move |_, _| {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &field);
    });
    frames.start();
    fx.keep(frames);
    Ok(1)
}

fn hero_particles(cx: &Context) -> Result<usize, JsValue> {
    let Some(container) = dom::query(cx.document(), ".hero-particles")? else {
        return Ok(0);
    };
    for _ in 0..DomParticle::HERO_COUNT {
        let particle = cx
            .document()
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        particle.set_class_name(DomParticle::CLASS);
        let placement = DomParticle::random(&mut cx.rng());
        let mut style = ElementStyle::new(&particle);
        for (property, value) in placement.declarations() {
            style.set_style(property, &value);
        }
        container.append_child(&particle)?;
    }
    Ok(DomParticle::HERO_COUNT)
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    Ok(canvas_field(cx, fx)? + hero_particles(cx)?)
}
