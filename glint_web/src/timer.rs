// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` and `setInterval`.
//!
//! Both timers own themselves: a timeout frees its closure after it fires,
//! and an interval clears itself and frees its closure once the tick
//! returns [`Step::Done`].

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use glint_core::time::Duration;
use glint_core::timer::Step;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// Runs `f` once after `delay`.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    set_timeout(&callback, delay.as_timer_millis());
}

struct Recurring {
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    id: Cell<i32>,
}

/// Calls `tick` every `period` until it returns [`Step::Done`].
pub fn repeat(period: Duration, mut tick: impl FnMut() -> Step + 'static) {
    let timer = Rc::new(Recurring {
        closure: RefCell::new(None),
        id: Cell::new(0),
    });
    let this = Rc::clone(&timer);
    let closure = Closure::wrap(Box::new(move || {
        if tick().is_done() {
            clear_interval(this.id.get());
            // Breaks the cycle between the closure and its own state. The
            // JS side defers the free until this call returns.
            this.closure.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>);
    let id = set_interval(closure.as_ref(), period.as_timer_millis());
    timer.id.set(id);
    *timer.closure.borrow_mut() = Some(closure);
}
