// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` bound to a [`VisibilityWatcher`].
//!
//! The browser computes intersection ratios; the watcher decides which
//! reports are crossings. Each [`VisibilityObserver`] owns its observer, and
//! observed elements stay observed for as long as it lives.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use glint_core::trace::VisibilityEvent;
use glint_core::visibility::{Transition, VisibilityWatcher, WatcherConfig};

use crate::{Context, now};

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One threshold crossing, handed to the observer's action.
#[derive(Clone, Copy, Debug)]
pub struct Crossing<'a> {
    /// Direction of the crossing.
    pub transition: Transition,
    /// Index of the element in the observed list.
    pub index: usize,
    /// Position of the report in the browser's batch, for staggering
    /// elements that appear together.
    pub batch_index: usize,
    /// The element.
    pub element: &'a HtmlElement,
}

/// Watches a fixed list of elements and runs an action on each crossing.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
    len: usize,
}

impl VisibilityObserver {
    /// Starts observing `targets`. `label` names the watcher in trace events.
    ///
    /// # Errors
    ///
    /// Propagates a throwing `IntersectionObserver` constructor (for example
    /// a malformed root margin).
    pub fn new(
        cx: &Rc<Context>,
        label: &'static str,
        config: WatcherConfig,
        targets: Vec<HtmlElement>,
        mut action: impl FnMut(&Crossing<'_>) + 'static,
    ) -> Result<Self, JsValue> {
        let mut watcher = VisibilityWatcher::new(config);
        for index in 0..targets.len() {
            watcher.observe(index);
        }
        let len = targets.len();
        let observed = targets.clone();
        let cx = Rc::clone(cx);

        let closure = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let mut batch_index = 0;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| {
                    let el: &Element = el;
                    *el == target
                }) else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                let Some(transition) = watcher.update(&index, ratio) else {
                    continue;
                };
                cx.trace(|t| {
                    t.visibility(&VisibilityEvent {
                        watcher: label,
                        index: u32::try_from(index).unwrap_or(u32::MAX),
                        transition,
                        ratio,
                        at: now(),
                    });
                });
                action(&Crossing {
                    transition,
                    index,
                    batch_index,
                    element: &observed[index],
                });
                batch_index += 1;
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.margin.to_css());
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        for el in &targets {
            observer.observe(el);
        }

        Ok(Self {
            observer,
            _closure: closure,
            len,
        })
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("observer", &"IntersectionObserver")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
