// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace events on the browser console.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;

use glint_core::time::HostTime;
use glint_core::trace::{
    AnimationSettledEvent, AnimationStepEvent, ModuleEvent, RippleEvent, ThrottleFlushEvent,
    TraceSink, VisibilityEvent,
};

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Animation steps and throttle flushes fire every frame; they are only
/// printed when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also print per-frame events.
    pub verbose: bool,
}

impl ConsoleSink {
    /// A sink that prints module, visibility, settle and ripple events.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    fn line(text: &str) {
        web_sys::console::debug_1(&JsValue::from_str(text));
    }
}

fn ms(at: HostTime) -> String {
    format!("{:.1}ms", at.as_millis_f64())
}

impl TraceSink for ConsoleSink {
    fn on_throttle_flush(&mut self, e: &ThrottleFlushEvent) {
        if self.verbose {
            Self::line(&format!(
                "[glint] flush {} coalesced={} at {}",
                e.source,
                e.coalesced,
                ms(e.at)
            ));
        }
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        Self::line(&format!(
            "[glint] {} #{} {:?} ratio={:.2} at {}",
            e.watcher,
            e.index,
            e.transition,
            e.ratio,
            ms(e.at)
        ));
    }

    fn on_animation_step(&mut self, e: &AnimationStepEvent) {
        if self.verbose {
            Self::line(&format!(
                "[glint] {} {} step {} at {}",
                e.kind.name(),
                e.id,
                e.step,
                ms(e.at)
            ));
        }
    }

    fn on_animation_settled(&mut self, e: &AnimationSettledEvent) {
        Self::line(&format!(
            "[glint] {} {} settled after {} ticks at {}",
            e.kind.name(),
            e.id,
            e.ticks,
            ms(e.at)
        ));
    }

    fn on_ripple(&mut self, e: &RippleEvent) {
        Self::line(&format!(
            "[glint] ripple {} {:?} at {}",
            e.id.0,
            e.phase,
            ms(e.at)
        ));
    }

    fn on_module(&mut self, e: &ModuleEvent) {
        Self::line(&format!(
            "[glint] module {} {:?} targets={}",
            e.module, e.status, e.targets
        ));
    }
}
