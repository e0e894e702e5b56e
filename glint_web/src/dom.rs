// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup and inline style writes.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, MouseEvent, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use glint_core::style::StyleSink;

/// [`StyleSink`] over an element's inline style.
///
/// Writes are cosmetic: a property the browser rejects is skipped rather
/// than reported.
pub struct ElementStyle<'a> {
    element: &'a HtmlElement,
    style: CssStyleDeclaration,
}

impl<'a> ElementStyle<'a> {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: &'a HtmlElement) -> Self {
        Self {
            element,
            style: element.style(),
        }
    }
}

impl StyleSink for ElementStyle<'_> {
    fn set_style(&mut self, property: &str, value: &str) {
        let _ = self.style.set_property(property, value);
    }

    fn clear_style(&mut self, property: &str) {
        let _ = self.style.remove_property(property);
    }

    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

impl core::fmt::Debug for ElementStyle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementStyle")
            .field("element", &"HtmlElement")
            .finish_non_exhaustive()
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// All HTML elements in the document matching `selector`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// All HTML descendants of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

/// First HTML element in the document matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// First HTML descendant of `root` matching `selector`.
pub(crate) fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Viewport-relative border box of `element`.
pub(crate) fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Pointer position of a mouse event, in client coordinates.
pub(crate) fn client_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(mouse.client_x()),
        f64::from(mouse.client_y()),
    ))
}

/// Applies `f` to the inline style of `element`.
pub(crate) fn with_style(element: &HtmlElement, f: impl FnOnce(&mut ElementStyle<'_>)) {
    f(&mut ElementStyle::new(element));
}

/// Runs `f` with the inline style of the first descendant of `root`
/// matching `selector`, if there is one.
pub(crate) fn with_child_style(
    root: &Element,
    selector: &str,
    f: impl FnOnce(&mut ElementStyle<'_>),
) {
    if let Some(child) = query_in(root, selector) {
        with_style(&child, f);
    }
}

/// Whether `element` carries `class`.
pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Smoothly scrolls the page so its top edge is at `top`.
pub(crate) fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
