// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Animations and ripples become async spans keyed by their id, so each
//! count-up, typing run and ripple mark shows as its own bar.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use glint_core::trace::{AnimationKind, ModuleStatus, RipplePhase};
use glint_core::visibility::Transition;

use crate::recorder::{AnimationSettled, AnimationStep, RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Host times are already microseconds and are written unchanged.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::ThrottleFlush {
                source,
                coalesced,
                at,
            } => {
                events.push(json!({
                    "ph": "i",
                    "name": source,
                    "cat": "Throttle",
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": { "coalesced": coalesced }
                }));
            }
            RecordedEvent::Visibility {
                watcher,
                index,
                transition,
                ratio,
                at,
            } => {
                let name = match transition {
                    Transition::Entered => "Entered",
                    Transition::Left => "Left",
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Visibility",
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "watcher": watcher,
                        "index": index,
                        "ratio": ratio,
                    }
                }));
            }
            RecordedEvent::AnimationStep(AnimationStep { kind, id, step, at }) => {
                // The first tick opens the span; later ones mark progress.
                let ph = if step <= 1 { "b" } else { "n" };
                events.push(json!({
                    "ph": ph,
                    "name": kind.name(),
                    "cat": "Animation",
                    "id": span_id(kind, id),
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "args": { "step": step }
                }));
            }
            RecordedEvent::AnimationSettled(AnimationSettled {
                kind,
                id,
                ticks,
                at,
            }) => {
                events.push(json!({
                    "ph": "e",
                    "name": kind.name(),
                    "cat": "Animation",
                    "id": span_id(kind, id),
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "args": { "ticks": ticks }
                }));
            }
            RecordedEvent::Ripple { id, phase, at } => {
                let ph = match phase {
                    RipplePhase::Spawned => "b",
                    RipplePhase::Removed => "e",
                };
                events.push(json!({
                    "ph": ph,
                    "name": "ripple",
                    "cat": "Ripple",
                    "id": format!("ripple-{}", id.0),
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                }));
            }
            RecordedEvent::Module {
                module,
                status,
                targets,
            } => {
                let status = match status {
                    ModuleStatus::Installed => "installed",
                    ModuleStatus::Skipped => "skipped",
                    ModuleStatus::Inactive => "inactive",
                };
                events.push(json!({
                    "ph": "i",
                    "name": module.name(),
                    "cat": "Module",
                    "ts": 0,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "status": status,
                        "targets": targets,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn span_id(kind: AnimationKind, id: u32) -> String {
    format!("{}-{id}", kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use glint_core::config::Module;
    use glint_core::ripple::RippleId;
    use glint_core::time::HostTime;
    use glint_core::trace::{
        AnimationSettledEvent, AnimationStepEvent, ModuleEvent, RippleEvent, TraceSink,
    };

    fn export_json(rec: &RecorderSink) -> Vec<Value> {
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn animation_becomes_an_async_span() {
        let mut rec = RecorderSink::new();
        for (step, at) in [(1, 16_000), (2, 32_000)] {
            rec.on_animation_step(&AnimationStepEvent {
                kind: AnimationKind::Counter,
                id: 7,
                step,
                at: HostTime(at),
            });
        }
        rec.on_animation_settled(&AnimationSettledEvent {
            kind: AnimationKind::Counter,
            id: 7,
            ticks: 2,
            at: HostTime(32_000),
        });

        let parsed = export_json(&rec);
        assert_eq!(parsed.len(), 3, "one object per event");
        let phases: Vec<_> = parsed.iter().map(|e| e["ph"].as_str().unwrap()).collect();
        assert_eq!(phases, ["b", "n", "e"], "begin, progress, end");
        assert!(
            parsed.iter().all(|e| e["id"] == "counter-7"),
            "all three share the span id"
        );
        assert_eq!(parsed[0]["ts"], 16_000, "times stay in microseconds");
    }

    #[test]
    fn ripples_and_modules() {
        let mut rec = RecorderSink::new();
        rec.on_module(&ModuleEvent {
            module: Module::Ripple,
            status: ModuleStatus::Installed,
            targets: 4,
        });
        rec.on_ripple(&RippleEvent {
            id: RippleId(0),
            phase: RipplePhase::Spawned,
            at: HostTime(10),
        });
        rec.on_ripple(&RippleEvent {
            id: RippleId(0),
            phase: RipplePhase::Removed,
            at: HostTime(600_010),
        });

        let parsed = export_json(&rec);
        assert_eq!(parsed[0]["ph"], "i", "module is an instant");
        assert_eq!(parsed[0]["name"], "ripple", "named after the module");
        assert_eq!(parsed[0]["args"]["targets"], 4, "target count carried");
        assert_eq!(parsed[1]["ph"], "b", "spawn opens the span");
        assert_eq!(parsed[2]["ph"], "e", "removal closes it");
        assert_eq!(parsed[2]["id"], "ripple-0", "span keyed by ripple id");
    }

    #[test]
    fn export_empty_recording() {
        let parsed = export_json(&RecorderSink::new());
        assert!(parsed.is_empty(), "no events, empty array");
    }
}
