// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form: local acknowledgement banner, no network.

use alloc::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlFormElement};

use glint_core::notice::Notice;

use crate::{Context, Effects, Listener, after};

/// Appends a banner for `notice` to the body and schedules its exit and
/// removal.
fn show(document: &Document, notice: &Notice<'_>) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let banner = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    banner.set_class_name(&notice.class_name());
    banner.set_text_content(Some(notice.message));
    banner.style().set_css_text(&notice.css_text());
    body.append_child(&banner)?;

    after(Notice::HOLD, move || {
        let _ = banner.style().set_property("animation", Notice::EXIT_ANIMATION);
        after(Notice::EXIT, move || banner.remove());
    });
    Ok(())
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let Some(form) = cx
        .document()
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(0);
    };
    let document = cx.document().clone();
    let target = form.clone();
    fx.keep(Listener::new(&form, "submit", move |e| {
        e.prevent_default();
        if let Err(err) = show(&document, &Notice::success(Notice::THANKS)) {
            web_sys::console::error_1(&err);
        }
        target.reset();
    })?);
    Ok(1)
}
