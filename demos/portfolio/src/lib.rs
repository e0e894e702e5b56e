// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio page entry point.
//!
//! Installs every effect module the page configuration enables once the
//! document has been parsed, and logs module installs, visibility changes
//! and finished animations to the browser console.
//!
//! Build with: `wasm-pack build --target web demos/portfolio`
//!
//! Then load the generated `pkg/portfolio.js` as a module from the page.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;

use glint_core::config::EffectsConfig;
use glint_web::{ConsoleSink, Context};

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let cx = Context::new(EffectsConfig::page())?
        .with_trace(Rc::new(RefCell::new(ConsoleSink::new())));
    glint_web::install_when_ready(cx)
}
