// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` callbacks.
//!
//! [`FrameRequest`] asks for a single frame on demand; it is what a
//! [`ThrottledListener`](crate::ThrottledListener) uses to run its update
//! once per refresh. [`RafLoop`] keeps one asking every frame and drives the
//! particle canvas.
//!
//! Callbacks convert the callback's [`DOMHighResTimeStamp`][mdn] to a
//! [`HostTime`].
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use glint_core::time::HostTime;

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching the Window/Performance objects on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// A reusable one-shot frame callback.
///
/// [`request`](Self::request) schedules the callback for the next frame
/// unless it is already scheduled, so any number of requests between two
/// frames produce one call. The JS closure is created once and reused.
pub struct FrameRequest {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    closure: RefCell<Option<RafClosure>>,
    /// Id of the outstanding request, if any.
    raf_id: Cell<Option<i32>>,
}

impl FrameRequest {
    /// Creates a request that runs `callback` on each frame it is asked for.
    pub fn new(mut callback: impl FnMut(HostTime) + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            raf_id: Cell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // Clear first so the callback may request the next frame.
            if inner.raf_id.take().is_none() {
                return;
            }
            callback(HostTime::from_millis_f64(timestamp_ms));
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    /// Schedules the callback for the next frame. Returns `false` if a frame
    /// was already scheduled.
    pub fn request(&self) -> bool {
        if self.inner.raf_id.get().is_some() {
            return false;
        }
        let slot = self.inner.closure.borrow();
        let Some(closure) = slot.as_ref() else {
            return false;
        };
        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(Some(id));
        true
    }

    /// Cancels the scheduled frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }

    /// Returns `true` while a frame is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        self.cancel();
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameRequest")
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// A frame callback that keeps asking for the next frame while running.
///
/// Built on a [`FrameRequest`] that re-requests itself after each call, so a
/// stopped loop simply stops asking. The callback receives the frame time and
/// how many frames the loop has delivered before this one.
pub struct RafLoop {
    frame: Rc<FrameRequest>,
    running: Rc<Cell<bool>>,
    delivered: Rc<Cell<u64>>,
}

impl RafLoop {
    /// Creates a stopped loop around `callback`.
    pub fn new(mut callback: impl FnMut(HostTime, u64) + 'static) -> Self {
        let running = Rc::new(Cell::new(false));
        let delivered = Rc::new(Cell::new(0_u64));
        let frame = Rc::new_cyclic(|this: &Weak<FrameRequest>| {
            let this = this.clone();
            let (running, delivered) = (Rc::clone(&running), Rc::clone(&delivered));
            FrameRequest::new(move |at| {
                if !running.get() {
                    return;
                }
                let index = delivered.get();
                delivered.set(index + 1);
                callback(at, index);
                if running.get()
                    && let Some(frame) = this.upgrade()
                {
                    frame.request();
                }
            })
        });
        Self {
            frame,
            running,
            delivered,
        }
    }

    /// Starts asking for frames. No-op while running.
    pub fn start(&self) {
        if !self.running.replace(true) {
            self.frame.request();
        }
    }

    /// Stops after cancelling the pending frame. The loop can be restarted.
    pub fn stop(&self) {
        self.running.set(false);
        self.frame.cancel();
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.running.get())
            .field("delivered", &self.delivered.get())
            .finish_non_exhaustive()
    }
}
