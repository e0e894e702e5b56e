// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for effect modules.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! web backend calls as modules install, throttles flush, watchers fire and
//! animations tick. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.

use crate::config::Module;
use crate::ripple::RippleId;
use crate::time::HostTime;
use crate::visibility::Transition;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which timer-driven animation an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Count-up stat.
    Counter,
    /// Typing reveal.
    Typing,
}

impl AnimationKind {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Typing => "typing",
        }
    }
}

/// Outcome of installing a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    /// Listeners attached.
    Installed,
    /// Turned off by configuration or viewport.
    Skipped,
    /// Its target elements are not on the page.
    Inactive,
}

/// Lifecycle point of a ripple mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RipplePhase {
    /// Appended to its host element.
    Spawned,
    /// Removed after its animation.
    Removed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a throttled handler runs its update.
#[derive(Clone, Copy, Debug)]
pub struct ThrottleFlushEvent {
    /// Handler label, e.g. `"scroll"`.
    pub source: &'static str,
    /// Raw events folded into this update.
    pub coalesced: u32,
    /// Frame time of the update.
    pub at: HostTime,
}

/// Emitted when a watched element crosses its threshold.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityEvent {
    /// Watcher label.
    pub watcher: &'static str,
    /// Index of the element within the watcher.
    pub index: u32,
    /// Direction of the crossing.
    pub transition: Transition,
    /// Intersection ratio reported with the crossing.
    pub ratio: f64,
    /// Host time of the report.
    pub at: HostTime,
}

/// Emitted for every animation tick.
#[derive(Clone, Copy, Debug)]
pub struct AnimationStepEvent {
    /// Animation kind.
    pub kind: AnimationKind,
    /// Per-kind animation id.
    pub id: u32,
    /// Tick number, starting at 1.
    pub step: u32,
    /// Host time of the tick.
    pub at: HostTime,
}

/// Emitted once when an animation reaches its terminal state.
#[derive(Clone, Copy, Debug)]
pub struct AnimationSettledEvent {
    /// Animation kind.
    pub kind: AnimationKind,
    /// Per-kind animation id.
    pub id: u32,
    /// Total ticks run.
    pub ticks: u32,
    /// Host time of the final tick.
    pub at: HostTime,
}

/// Emitted when a ripple mark is added or removed.
#[derive(Clone, Copy, Debug)]
pub struct RippleEvent {
    /// The mark.
    pub id: RippleId,
    /// Added or removed.
    pub phase: RipplePhase,
    /// Host time.
    pub at: HostTime,
}

/// Emitted once per module during installation.
#[derive(Clone, Copy, Debug)]
pub struct ModuleEvent {
    /// The module.
    pub module: Module,
    /// What happened.
    pub status: ModuleStatus,
    /// Matched target elements.
    pub targets: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from effect modules.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a throttled handler flushes.
    fn on_throttle_flush(&mut self, e: &ThrottleFlushEvent) {
        _ = e;
    }

    /// Called when a watched element crosses its threshold.
    fn on_visibility(&mut self, e: &VisibilityEvent) {
        _ = e;
    }

    /// Called on every animation tick.
    fn on_animation_step(&mut self, e: &AnimationStepEvent) {
        _ = e;
    }

    /// Called when an animation settles.
    fn on_animation_settled(&mut self, e: &AnimationSettledEvent) {
        _ = e;
    }

    /// Called when a ripple is added or removed.
    fn on_ripple(&mut self, e: &RippleEvent) {
        _ = e;
    }

    /// Called once per module at install time.
    fn on_module(&mut self, e: &ModuleEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! emit {
    ($self:ident, $method:ident, $e:ident) => {{
        #[cfg(feature = "trace")]
        if let Some(s) = &mut $self.sink {
            s.$method($e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = $e;
        }
    }};
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ThrottleFlushEvent`].
    #[inline]
    pub fn throttle_flush(&mut self, e: &ThrottleFlushEvent) {
        emit!(self, on_throttle_flush, e);
    }

    /// Emits a [`VisibilityEvent`].
    #[inline]
    pub fn visibility(&mut self, e: &VisibilityEvent) {
        emit!(self, on_visibility, e);
    }

    /// Emits an [`AnimationStepEvent`].
    #[inline]
    pub fn animation_step(&mut self, e: &AnimationStepEvent) {
        emit!(self, on_animation_step, e);
    }

    /// Emits an [`AnimationSettledEvent`].
    #[inline]
    pub fn animation_settled(&mut self, e: &AnimationSettledEvent) {
        emit!(self, on_animation_settled, e);
    }

    /// Emits a [`RippleEvent`].
    #[inline]
    pub fn ripple(&mut self, e: &RippleEvent) {
        emit!(self, on_ripple, e);
    }

    /// Emits a [`ModuleEvent`].
    #[inline]
    pub fn module(&mut self, e: &ModuleEvent) {
        emit!(self, on_module, e);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flush() -> ThrottleFlushEvent {
        ThrottleFlushEvent {
            source: "scroll",
            coalesced: 12,
            at: HostTime(16_000),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_throttle_flush(&sample_flush());
        sink.on_module(&ModuleEvent {
            module: Module::Typing,
            status: ModuleStatus::Inactive,
            targets: 0,
        });
        sink.on_ripple(&RippleEvent {
            id: RippleId(0),
            phase: RipplePhase::Spawned,
            at: HostTime(0),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.throttle_flush(&sample_flush());
        tracer.animation_step(&AnimationStepEvent {
            kind: AnimationKind::Counter,
            id: 0,
            step: 1,
            at: HostTime(0),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            settled: Vec<(AnimationKind, u32)>,
        }
        impl TraceSink for RecordingSink {
            fn on_animation_settled(&mut self, e: &AnimationSettledEvent) {
                self.settled.push((e.kind, e.ticks));
            }
        }

        let mut sink = RecordingSink {
            settled: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.animation_settled(&AnimationSettledEvent {
            kind: AnimationKind::Typing,
            id: 3,
            ticks: 17,
            at: HostTime(1_700_000),
        });
        drop(tracer);
        assert_eq!(sink.settled, &[(AnimationKind::Typing, 17)]);
    }
}
