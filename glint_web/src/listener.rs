// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event listeners.
//!
//! [`Listener`] owns a JS closure attached to an event target and detaches
//! it on drop. [`ThrottledListener`] puts a
//! [`FrameThrottle`](glint_core::throttle::FrameThrottle) between the event
//! and the update so the update runs at most once per frame with the latest
//! sample.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use glint_core::throttle::FrameThrottle;
use glint_core::time::HostTime;
use glint_core::trace::ThrottleFlushEvent;

use crate::Context;
use crate::raf::FrameRequest;

type EventClosure = Closure<dyn FnMut(Event)>;

/// An event handler attached to a target.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

impl Listener {
    /// Attaches `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Propagates a throwing `addEventListener`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Attaches a passive handler, one that never calls `preventDefault`.
    /// Scroll and touch handlers should be passive.
    ///
    /// # Errors
    ///
    /// Propagates a throwing `addEventListener`.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// The event name.
    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Leaves the handler attached for the rest of the page's life.
    pub fn keep_alive(self) {
        core::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("target", &"EventTarget")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// A passive event listener whose update runs at most once per frame.
///
/// `sample` runs on every raw event and extracts what the update needs
/// (returning `None` ignores the event). `update` runs in the next animation
/// frame with the most recent sample.
pub struct ThrottledListener<T> {
    state: Rc<RefCell<FrameThrottle<T>>>,
    // Field order: the listener holds a clone of the frame request, so it
    // is detached first.
    listener: Listener,
    frame: Rc<FrameRequest>,
}

impl<T: 'static> ThrottledListener<T> {
    /// Attaches a throttled handler for `event` on `target`. `source` labels
    /// the handler in trace events.
    ///
    /// # Errors
    ///
    /// Propagates a throwing `addEventListener`.
    pub fn new(
        cx: &Rc<Context>,
        target: &EventTarget,
        event: &'static str,
        source: &'static str,
        mut sample: impl FnMut(&Event) -> Option<T> + 'static,
        mut update: impl FnMut(&T) + 'static,
    ) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(FrameThrottle::new()));

        let frame = {
            let state = Rc::clone(&state);
            let cx = Rc::clone(cx);
            Rc::new_cyclic(|this: &Weak<FrameRequest>| {
                let this = this.clone();
                FrameRequest::new(move |at: HostTime| {
                    // Busy throttle: keep the sample pending and retry next frame.
                    let Ok(mut throttle) = state.try_borrow_mut() else {
                        if let Some(frame) = this.upgrade() {
                            frame.request();
                        }
                        return;
                    };
                    let coalesced = throttle.coalesced();
                    if throttle.run(&mut update).is_some() {
                        cx.trace(|t| {
                            t.throttle_flush(&ThrottleFlushEvent {
                                source,
                                coalesced,
                                at,
                            });
                        });
                    }
                })
            })
        };

        let listener = {
            let state = Rc::clone(&state);
            let frame = Rc::clone(&frame);
            Listener::passive(target, event, move |e| {
                let Some(s) = sample(&e) else {
                    return;
                };
                let schedule = state
                    .try_borrow_mut()
                    .is_ok_and(|mut throttle| throttle.record(s));
                if schedule {
                    frame.request();
                }
            })?
        };

        Ok(Self {
            state,
            listener,
            frame,
        })
    }

    /// Schedules an update with `sample` as if an event had delivered it.
    /// Used to paint the initial state before the first event.
    pub fn prime(&self, sample: T) {
        let schedule = self
            .state
            .try_borrow_mut()
            .is_ok_and(|mut throttle| throttle.record(sample));
        if schedule {
            self.frame.request();
        }
    }
}

impl<T> core::fmt::Debug for ThrottledListener<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ThrottledListener")
            .field("listener", &self.listener)
            .field("frame", &self.frame)
            .field("pending", &self.state.try_borrow().is_ok_and(|t| t.is_pending()))
            .finish()
    }
}
