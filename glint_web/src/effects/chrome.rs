// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked chrome: auto-hiding navbar, active nav link, reading
//! progress bar.

use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use glint_core::scroll::{self, NavbarTracker, SectionSpan};
use glint_core::style::{self, StyleSink};

use crate::dom::{self, ElementStyle};
use crate::{Context, Effects, ThrottledListener};

/// Marks the nav link pointing at the section under the reading line.
fn update_active_link(scroll_y: f64, sections: &[HtmlElement], links: &[HtmlElement]) {
    let spans: Vec<_> = sections
        .iter()
        .map(|s| SectionSpan {
            top: f64::from(s.offset_top()),
            height: f64::from(s.offset_height()),
        })
        .collect();
    let Some(active) = scroll::active_section(scroll_y, &spans) else {
        return;
    };
    let href = format!("#{}", sections[active].id());
    for link in links {
        let classes = link.class_list();
        let _ = if link.get_attribute("href").as_deref() == Some(href.as_str()) {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}

pub(super) fn install_navbar(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let Some(navbar) = dom::query(cx.document(), ".navbar")? else {
        return Ok(0);
    };
    let links = dom::query_all(cx.document(), ".nav-link")?;
    let sections = dom::query_all(cx.document(), "section[id]")?;
    // Narrow viewports keep the navbar fixed and only track the section.
    let hides = !cx.config().is_mobile(cx.viewport().width);
    let tracker = RefCell::new(NavbarTracker::new());
    let count = 1 + links.len();

    let window = cx.window().clone();
    let handler = ThrottledListener::new(
        cx,
        &window,
        "scroll",
        "navbar",
        {
            let cx = Rc::clone(cx);
            move |_| Some(cx.scroll_y())
        },
        move |&y: &f64| {
            if hides && let Some(action) = tracker.borrow_mut().update(y) {
                style::apply(&mut ElementStyle::new(&navbar), action.declarations());
            }
            update_active_link(y, &sections, &links);
        },
    )?;
    handler.prime(cx.scroll_y());
    fx.keep(handler);
    Ok(count)
}

pub(super) fn install_progress(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let Some(body) = cx.document().body() else {
        return Ok(0);
    };
    let bar = cx
        .document()
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    bar.style().set_css_text(scroll::PROGRESS_BAR_STYLE);
    body.append_child(&bar)?;

    let window = cx.window().clone();
    let handler = ThrottledListener::new(
        cx,
        &window,
        "scroll",
        "progress",
        {
            let cx = Rc::clone(cx);
            move |_| Some(cx.scroll_y())
        },
        {
            let cx = Rc::clone(cx);
            move |&y: &f64| {
                let percent = scroll::scroll_progress(
                    y,
                    f64::from(body.scroll_height()),
                    cx.viewport().height,
                );
                ElementStyle::new(&bar).set_style("width", &format!("{percent}%"));
            }
        },
    )?;
    fx.keep(handler);
    Ok(1)
}
