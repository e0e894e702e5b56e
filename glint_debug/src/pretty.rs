// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host times
//! are printed in milliseconds.

use std::io::Write;

use glint_core::trace::{
    AnimationSettledEvent, AnimationStepEvent, ModuleEvent, ModuleStatus, RippleEvent,
    RipplePhase, ThrottleFlushEvent, TraceSink, VisibilityEvent,
};
use glint_core::visibility::Transition;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    /// Print every animation tick instead of only the settle line.
    steps: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            steps: false,
        }
    }

    /// Also prints a line for every animation tick.
    #[must_use]
    pub fn with_steps(mut self) -> Self {
        self.steps = true;
        self
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_throttle_flush(&mut self, e: &ThrottleFlushEvent) {
        let _ = writeln!(
            self.writer,
            "[flush] {} coalesced={} at={:.1}ms",
            e.source,
            e.coalesced,
            e.at.as_millis_f64(),
        );
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        let dir = match e.transition {
            Transition::Entered => "enter",
            Transition::Left => "leave",
        };
        let _ = writeln!(
            self.writer,
            "[visible] {}#{} {dir} ratio={:.2} at={:.1}ms",
            e.watcher,
            e.index,
            e.ratio,
            e.at.as_millis_f64(),
        );
    }

    fn on_animation_step(&mut self, e: &AnimationStepEvent) {
        if !self.steps {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[step] {}-{} step={} at={:.1}ms",
            e.kind.name(),
            e.id,
            e.step,
            e.at.as_millis_f64(),
        );
    }

    fn on_animation_settled(&mut self, e: &AnimationSettledEvent) {
        let _ = writeln!(
            self.writer,
            "[settled] {}-{} ticks={} at={:.1}ms",
            e.kind.name(),
            e.id,
            e.ticks,
            e.at.as_millis_f64(),
        );
    }

    fn on_ripple(&mut self, e: &RippleEvent) {
        let phase = match e.phase {
            RipplePhase::Spawned => "spawn",
            RipplePhase::Removed => "remove",
        };
        let _ = writeln!(
            self.writer,
            "[ripple] {phase} id={} at={:.1}ms",
            e.id.0,
            e.at.as_millis_f64(),
        );
    }

    fn on_module(&mut self, e: &ModuleEvent) {
        let status = match e.status {
            ModuleStatus::Installed => "installed",
            ModuleStatus::Skipped => "skipped",
            ModuleStatus::Inactive => "inactive",
        };
        let _ = writeln!(
            self.writer,
            "[module] {} {status} targets={}",
            e.module, e.targets,
        );
    }
}

#[cfg(test)]
mod tests {
    use glint_core::config::Module;
    use glint_core::ripple::RippleId;
    use glint_core::time::HostTime;
    use glint_core::trace::AnimationKind;

    use super::*;

    fn lines(sink: PrettyPrintSink<Vec<u8>>) -> Vec<String> {
        String::from_utf8(sink.into_inner())
            .expect("output is UTF-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_module(&ModuleEvent {
            module: Module::HoverGlow,
            status: ModuleStatus::Skipped,
            targets: 0,
        });
        sink.on_throttle_flush(&ThrottleFlushEvent {
            source: "progress",
            coalesced: 4,
            at: HostTime(16_700),
        });
        sink.on_ripple(&RippleEvent {
            id: RippleId(2),
            phase: RipplePhase::Removed,
            at: HostTime(600_000),
        });
        let out = lines(sink);
        assert_eq!(
            out,
            [
                "[module] hover-glow skipped targets=0",
                "[flush] progress coalesced=4 at=16.7ms",
                "[ripple] remove id=2 at=600.0ms",
            ],
            "lines match the documented format"
        );
    }

    #[test]
    fn steps_are_opt_in() {
        let step = AnimationStepEvent {
            kind: AnimationKind::Typing,
            id: 1,
            step: 3,
            at: HostTime(300_000),
        };
        let mut quiet = PrettyPrintSink::with_writer(Vec::new());
        quiet.on_animation_step(&step);
        assert!(lines(quiet).is_empty(), "ticks are hidden by default");

        let mut loud = PrettyPrintSink::with_writer(Vec::new()).with_steps();
        loud.on_animation_step(&step);
        assert_eq!(
            lines(loud),
            ["[step] typing-1 step=3 at=300.0ms"],
            "ticks print once enabled"
        );
    }

    #[test]
    fn visibility_names_the_direction() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_visibility(&VisibilityEvent {
            watcher: "reveal",
            index: 5,
            transition: Transition::Left,
            ratio: 0.0,
            at: HostTime(1_000),
        });
        let out = lines(sink);
        assert_eq!(out.len(), 1, "single line");
        assert!(out[0].starts_with("[visible] reveal#5 leave"), "got {}", out[0]);
    }
}
