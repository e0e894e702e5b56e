// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for glint.
//!
//! This crate binds the state machines of [`glint_core`] to browser APIs:
//!
//! - [`FrameRequest`] and [`RafLoop`]: `requestAnimationFrame`, one-shot and
//!   continuous
//! - [`ThrottledListener`]: a DOM event coalesced to one update per frame
//! - [`VisibilityObserver`]: an owned `IntersectionObserver` feeding a
//!   [`VisibilityWatcher`](glint_core::visibility::VisibilityWatcher)
//! - [`ElementStyle`]: [`StyleSink`](glint_core::style::StyleSink) over an
//!   element's inline style
//! - [`ConsoleSink`]: trace events on the browser console
//!
//! [`install`] wires every effect module that the [`EffectsConfig`] enables
//! for the current viewport and returns the [`Effects`] that own their
//! listeners.
//!
//! ```ignore
//! let cx = Context::new(EffectsConfig::page())?;
//! glint_web::install(cx)?.keep_alive();
//! ```

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod console;
mod dom;
mod effects;
mod listener;
mod observer;
mod raf;
mod timer;
mod transforms;

pub use console::ConsoleSink;
pub use dom::ElementStyle;
pub use listener::{Listener, ThrottledListener};
pub use observer::{Crossing, VisibilityObserver};
pub use raf::{FrameRequest, RafLoop};
pub use timer::{after, repeat};

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::{Cell, RefCell};

use glint_core::config::{EffectsConfig, Module};
use glint_core::time::HostTime;
use glint_core::target::{InstallOutcome, TargetQuery};
use glint_core::trace::{ModuleEvent, TraceSink, Tracer};
use kurbo::Size;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::transforms::TransformRegistry;

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    let ms = raf::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// A trace sink shared by every installed module.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Browser handles and settings shared by all effect modules.
pub struct Context {
    window: Window,
    document: Document,
    config: EffectsConfig,
    sink: Option<SharedSink>,
    transforms: TransformRegistry,
    rng: RefCell<fastrand::Rng>,
    next_animation: Cell<u32>,
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("window", &"Window")
            .field("document", &"Document")
            .field("config", &self.config)
            .field("tracing", &self.sink.is_some())
            .field("transforms", &self.transforms)
            .field("rng", &"Rng")
            .field("next_animation", &self.next_animation.get())
            .finish()
    }
}

impl Context {
    /// Captures the global window and document.
    ///
    /// # Errors
    ///
    /// Fails outside a window context (for example in a worker).
    pub fn new(config: EffectsConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        // 2^53: every integer below it is exact in an f64.
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Math.random() is in [0, 1); the product fits in u64"
        )]
        let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        Ok(Self {
            window,
            document,
            config,
            sink: None,
            transforms: TransformRegistry::default(),
            rng: RefCell::new(fastrand::Rng::with_seed(seed ^ now().micros())),
            next_animation: Cell::new(0),
        })
    }

    /// Sends trace events from every module to `sink`.
    #[must_use]
    pub fn with_trace(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The global window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The page document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The effect settings.
    #[must_use]
    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    /// Size of the layout viewport in CSS pixels, or zero if unavailable.
    #[must_use]
    pub fn viewport(&self) -> Size {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    /// Vertical scroll position of the page.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub(crate) fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub(crate) fn rng(&self) -> core::cell::RefMut<'_, fastrand::Rng> {
        self.rng.borrow_mut()
    }

    /// Fresh id for a timer-driven animation's trace events.
    pub(crate) fn animation_id(&self) -> u32 {
        let id = self.next_animation.get();
        self.next_animation.set(id.wrapping_add(1));
        id
    }

    /// Runs `f` with a tracer bound to the shared sink.
    ///
    /// Re-entrant emission (a sink that triggers another event) is dropped.
    pub(crate) fn trace(&self, f: impl FnOnce(&mut Tracer<'_>)) {
        if let Some(sink) = &self.sink
            && let Ok(mut sink) = sink.try_borrow_mut()
        {
            let mut tracer = Tracer::new(&mut *sink);
            f(&mut tracer);
        }
    }
}

impl TargetQuery for Context {
    type Element = HtmlElement;
    type Error = JsValue;

    fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
        dom::query_all(&self.document, selector)
    }
}

/// Owns the listeners, observers and loops of installed modules.
///
/// Dropping it detaches everything. Pages that never tear effects down call
/// [`keep_alive`](Self::keep_alive).
#[derive(Default)]
pub struct Effects {
    handles: Vec<Box<dyn Any>>,
}

impl core::fmt::Debug for Effects {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Effects")
            .field("handles", &self.handles.len())
            .finish()
    }
}

impl Effects {
    /// Takes ownership of a handle.
    pub fn keep(&mut self, handle: impl Any) {
        self.handles.push(Box::new(handle));
    }

    /// Number of owned handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing was installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Leaves every handle attached for the rest of the page's life.
    pub fn keep_alive(self) {
        core::mem::forget(self);
    }
}

/// Installs every module enabled for the current viewport.
///
/// Modules whose target elements are absent install nothing and are
/// reported as [`Inactive`](glint_core::trace::ModuleStatus::Inactive). A module whose DOM calls throw is
/// logged to the console, reported inactive, and the remaining modules
/// still install.
///
/// # Errors
///
/// Currently never fails; the `Result` is kept for callers using `?`.
pub fn install(cx: Context) -> Result<Effects, JsValue> {
    let cx = Rc::new(cx);
    let width = cx.viewport().width;
    let mut effects = Effects::default();
    for module in Module::ALL {
        let outcome = InstallOutcome::attempt(cx.config.runs(module, width), || {
            effects::install(module, &cx, &mut effects)
        });
        if let Some(err) = &outcome.error {
            web_sys::console::error_2(&JsValue::from_str(module.name()), err);
        }
        cx.trace(|t| {
            t.module(&ModuleEvent {
                module,
                status: outcome.status,
                targets: outcome.targets,
            });
        });
    }
    Ok(effects)
}

/// Runs [`install`] once the document has been parsed.
///
/// If parsing already finished the effects install immediately; otherwise
/// they install on `DOMContentLoaded` and are kept alive for the page.
///
/// # Errors
///
/// Propagates failures of an immediate install or of attaching the
/// `DOMContentLoaded` listener.
pub fn install_when_ready(cx: Context) -> Result<(), JsValue> {
    if cx.document.ready_state() != "loading" {
        install(cx)?.keep_alive();
        return Ok(());
    }
    let document = cx.document.clone();
    let mut pending = Some(cx);
    let listener = Listener::new(&document, "DOMContentLoaded", move |_| {
        if let Some(cx) = pending.take() {
            match install(cx) {
                Ok(effects) => effects.keep_alive(),
                Err(err) => web_sys::console::error_1(&err),
            }
        }
    })?;
    listener.keep_alive();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_count_handles() {
        let mut effects = Effects::default();
        assert!(effects.is_empty(), "fresh registry owns nothing");
        effects.keep(7_u32);
        effects.keep(Rc::new(()));
        assert_eq!(effects.len(), 2, "every kept handle is counted");
    }
}
