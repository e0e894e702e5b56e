// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor scrolling and the hamburger menu.

use alloc::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use glint_core::scroll;
use glint_core::target;

use crate::dom;
use crate::{Context, Effects, Listener};

pub(super) fn install_smooth_scroll(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    target::bind_each(&**cx, r##"a[href^="#"]"##, |link| {
        let anchor = link.clone();
        let cx = Rc::clone(cx);
        fx.keep(Listener::new(link, "click", move |e| {
            e.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; nothing to scroll to.
            let target = cx
                .document()
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                let top = scroll::anchor_target(f64::from(target.offset_top()));
                dom::smooth_scroll_to(cx.window(), top);
            }
        })?);
        Ok(())
    })
}

fn set_open(hamburger: &HtmlElement, menu: &HtmlElement, open: Option<bool>) {
    for el in [hamburger, menu] {
        let classes = el.class_list();
        let _ = match open {
            Some(true) => classes.add_1("active"),
            Some(false) => classes.remove_1("active"),
            None => classes.toggle("active").map(|_| ()),
        };
    }
}

pub(super) fn install_mobile_menu(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let (Some(hamburger), Some(menu)) = (
        dom::query(cx.document(), ".hamburger")?,
        dom::query(cx.document(), ".nav-menu")?,
    ) else {
        return Ok(0);
    };

    let (h, m) = (hamburger.clone(), menu.clone());
    fx.keep(Listener::new(&hamburger, "click", move |_| {
        set_open(&h, &m, None);
    })?);

    let links = dom::query_all(cx.document(), ".nav-link")?;
    for link in &links {
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        fx.keep(Listener::new(link, "click", move |_| {
            set_open(&hamburger, &menu, Some(false));
        })?);
    }
    Ok(2 + links.len())
}
