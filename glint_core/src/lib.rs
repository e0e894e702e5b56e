// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect state machines and geometry for decorative page effects.
//!
//! `glint_core` holds everything about the effects that does not need a
//! browser: throttling, visibility tracking, animation state machines,
//! parallax and tilt math, ripple lifetimes, particle motion, and the style
//! declarations each effect writes. It is `no_std` compatible (with `alloc`)
//! so the same logic runs under `wasm32-unknown-unknown` and in host tests.
//!
//! # Architecture
//!
//! ```text
//!   DOM event ──► FrameThrottle::record() ──► (one rAF) ──► FrameThrottle::run()
//!                                                               │
//!   IntersectionObserver ──► VisibilityWatcher::update()        │
//!        │                                                      ▼
//!        ▼                                  parallax / scroll / glow math
//!   CounterAnimation / TypingAnimation ──┐                      │
//!        (interval ticks)                ▼                      ▼
//!                                   StyleSink::set_style / set_text
//! ```
//!
//! **[`throttle`]**: At most one pending update per input source; the update
//! sees the latest sample.
//!
//! **[`visibility`]**: Intersection ratios with root margins, and watchers
//! that fire once per crossing.
//!
//! **[`counter`]** and **[`typing`]**: Interval-driven animations that settle
//! in a terminal state.
//!
//! **[`transform`]** and **[`parallax`]**: 3-D transforms, per-source
//! composition, and pointer/scroll/tilt mappings.
//!
//! **[`ripple`]**, **[`particles`]**, **[`scroll`]**, **[`glow`]**,
//! **[`reveal`]**, **[`notice`]**, **[`showcase`]**: Individual effects.
//!
//! **[`style`]**: The [`StyleSink`](style::StyleSink) seam the web backend
//! implements.
//!
//! **[`target`]**: The [`TargetQuery`](target::TargetQuery) lookup seam and
//! the per-module [`InstallOutcome`](target::InstallOutcome).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod counter;
pub mod glow;
pub mod notice;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod showcase;
pub mod style;
pub mod target;
pub mod throttle;
pub mod time;
pub mod timer;
pub mod trace;
pub mod transform;
pub mod typing;
pub mod visibility;
