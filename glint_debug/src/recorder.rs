// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`].
//!
//! Labels (throttle sources, watcher names) are stored length-prefixed, so
//! decoded events own their strings.

use glint_core::config::Module;
use glint_core::ripple::RippleId;
use glint_core::time::HostTime;
use glint_core::trace::{
    AnimationKind, AnimationSettledEvent, AnimationStepEvent, ModuleEvent, ModuleStatus,
    RippleEvent, RipplePhase, ThrottleFlushEvent, TraceSink, VisibilityEvent,
};
use glint_core::visibility::Transition;

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_THROTTLE_FLUSH: u8 = 1;
const TAG_VISIBILITY: u8 = 2;
const TAG_ANIMATION_STEP: u8 = 3;
const TAG_ANIMATION_SETTLED: u8 = 4;
const TAG_RIPPLE: u8 = 5;
const TAG_MODULE: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Labels longer than 255 bytes are cut at a char boundary.
    fn write_label(&mut self, label: &str) {
        let mut end = label.len().min(usize::from(u8::MAX));
        while !label.is_char_boundary(end) {
            end -= 1;
        }
        let bytes = &label.as_bytes()[..end];
        self.write_u8(u8::try_from(bytes.len()).unwrap_or(u8::MAX));
        self.buf.extend_from_slice(bytes);
    }

    fn write_kind(&mut self, kind: AnimationKind) {
        self.write_u8(match kind {
            AnimationKind::Counter => 0,
            AnimationKind::Typing => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_throttle_flush(&mut self, e: &ThrottleFlushEvent) {
        self.write_u8(TAG_THROTTLE_FLUSH);
        self.write_label(e.source);
        self.write_u32(e.coalesced);
        self.write_u64(e.at.micros());
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        self.write_u8(TAG_VISIBILITY);
        self.write_label(e.watcher);
        self.write_u32(e.index);
        self.write_u8(match e.transition {
            Transition::Entered => 0,
            Transition::Left => 1,
        });
        self.write_f64(e.ratio);
        self.write_u64(e.at.micros());
    }

    fn on_animation_step(&mut self, e: &AnimationStepEvent) {
        self.write_u8(TAG_ANIMATION_STEP);
        self.write_kind(e.kind);
        self.write_u32(e.id);
        self.write_u32(e.step);
        self.write_u64(e.at.micros());
    }

    fn on_animation_settled(&mut self, e: &AnimationSettledEvent) {
        self.write_u8(TAG_ANIMATION_SETTLED);
        self.write_kind(e.kind);
        self.write_u32(e.id);
        self.write_u32(e.ticks);
        self.write_u64(e.at.micros());
    }

    fn on_ripple(&mut self, e: &RippleEvent) {
        self.write_u8(TAG_RIPPLE);
        self.write_u32(e.id.0);
        self.write_u8(match e.phase {
            RipplePhase::Spawned => 0,
            RipplePhase::Removed => 1,
        });
        self.write_u64(e.at.micros());
    }

    fn on_module(&mut self, e: &ModuleEvent) {
        self.write_u8(TAG_MODULE);
        let index = Module::ALL.iter().position(|&m| m == e.module).unwrap_or(0);
        self.write_u8(u8::try_from(index).unwrap_or(0));
        self.write_u8(match e.status {
            ModuleStatus::Installed => 0,
            ModuleStatus::Skipped => 1,
            ModuleStatus::Inactive => 2,
        });
        self.write_u32(e.targets);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`ThrottleFlushEvent`].
    ThrottleFlush {
        /// Handler label.
        source: String,
        /// Raw events folded into the update.
        coalesced: u32,
        /// Frame time of the update.
        at: HostTime,
    },
    /// A [`VisibilityEvent`].
    Visibility {
        /// Watcher label.
        watcher: String,
        /// Element index within the watcher.
        index: u32,
        /// Direction of the crossing.
        transition: Transition,
        /// Reported intersection ratio.
        ratio: f64,
        /// Host time of the report.
        at: HostTime,
    },
    /// An [`AnimationStepEvent`].
    AnimationStep(AnimationStep),
    /// An [`AnimationSettledEvent`].
    AnimationSettled(AnimationSettled),
    /// A [`RippleEvent`].
    Ripple {
        /// The mark.
        id: RippleId,
        /// Added or removed.
        phase: RipplePhase,
        /// Host time.
        at: HostTime,
    },
    /// A [`ModuleEvent`].
    Module {
        /// The module.
        module: Module,
        /// What happened.
        status: ModuleStatus,
        /// Matched target elements.
        targets: u32,
    },
}

/// Decoded [`AnimationStepEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationStep {
    /// Animation kind.
    pub kind: AnimationKind,
    /// Animation id.
    pub id: u32,
    /// Tick number.
    pub step: u32,
    /// Host time of the tick.
    pub at: HostTime,
}

/// Decoded [`AnimationSettledEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSettled {
    /// Animation kind.
    pub kind: AnimationKind,
    /// Animation id.
    pub id: u32,
    /// Total ticks run.
    pub ticks: u32,
    /// Host time of the final tick.
    pub at: HostTime,
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        Some(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Option<u32> {
        Some(u32::from_le_bytes(self.take(4)?.try_into().ok()?))
    }

    fn read_u64(&mut self) -> Option<u64> {
        Some(u64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_label(&mut self) -> Option<String> {
        let len = usize::from(self.read_u8()?);
        let bytes = self.take(len)?;
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_kind(&mut self) -> Option<AnimationKind> {
        Some(match self.read_u8()? {
            0 => AnimationKind::Counter,
            _ => AnimationKind::Typing,
        })
    }

    fn decode_throttle_flush(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ThrottleFlush {
            source: self.read_label()?,
            coalesced: self.read_u32()?,
            at: self.read_time()?,
        })
    }

    fn decode_visibility(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Visibility {
            watcher: self.read_label()?,
            index: self.read_u32()?,
            transition: match self.read_u8()? {
                0 => Transition::Entered,
                _ => Transition::Left,
            },
            ratio: self.read_f64()?,
            at: self.read_time()?,
        })
    }

    fn decode_animation_step(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::AnimationStep(AnimationStep {
            kind: self.read_kind()?,
            id: self.read_u32()?,
            step: self.read_u32()?,
            at: self.read_time()?,
        }))
    }

    fn decode_animation_settled(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::AnimationSettled(AnimationSettled {
            kind: self.read_kind()?,
            id: self.read_u32()?,
            ticks: self.read_u32()?,
            at: self.read_time()?,
        }))
    }

    fn decode_ripple(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Ripple {
            id: RippleId(self.read_u32()?),
            phase: match self.read_u8()? {
                0 => RipplePhase::Spawned,
                _ => RipplePhase::Removed,
            },
            at: self.read_time()?,
        })
    }

    fn decode_module(&mut self) -> Option<RecordedEvent> {
        let module = *Module::ALL.get(usize::from(self.read_u8()?))?;
        Some(RecordedEvent::Module {
            module,
            status: match self.read_u8()? {
                0 => ModuleStatus::Installed,
                1 => ModuleStatus::Skipped,
                _ => ModuleStatus::Inactive,
            },
            targets: self.read_u32()?,
        })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_THROTTLE_FLUSH => self.decode_throttle_flush(),
            TAG_VISIBILITY => self.decode_visibility(),
            TAG_ANIMATION_STEP => self.decode_animation_step(),
            TAG_ANIMATION_SETTLED => self.decode_animation_settled(),
            TAG_RIPPLE => self.decode_ripple(),
            TAG_MODULE => self.decode_module(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_stream_decodes_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_module(&ModuleEvent {
            module: Module::Counters,
            status: ModuleStatus::Installed,
            targets: 3,
        });
        rec.on_visibility(&VisibilityEvent {
            watcher: "counter",
            index: 1,
            transition: Transition::Entered,
            ratio: 0.6,
            at: HostTime(2_000),
        });
        rec.on_animation_step(&AnimationStepEvent {
            kind: AnimationKind::Counter,
            id: 4,
            step: 1,
            at: HostTime(18_000),
        });
        rec.on_animation_settled(&AnimationSettledEvent {
            kind: AnimationKind::Counter,
            id: 4,
            ticks: 125,
            at: HostTime(2_002_000),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4, "every event decodes: {events:?}");
        assert_eq!(
            events[0],
            RecordedEvent::Module {
                module: Module::Counters,
                status: ModuleStatus::Installed,
                targets: 3,
            },
            "module index survives encoding"
        );
        match &events[1] {
            RecordedEvent::Visibility {
                watcher,
                transition,
                ratio,
                ..
            } => {
                assert_eq!(watcher, "counter", "label is owned after decoding");
                assert_eq!(*transition, Transition::Entered, "direction kept");
                assert_eq!(*ratio, 0.6, "ratio stored bit-exact");
            }
            other => panic!("expected Visibility, got {other:?}"),
        }
        assert!(
            matches!(events[3], RecordedEvent::AnimationSettled(AnimationSettled { ticks: 125, .. })),
            "settle keeps its tick count"
        );
    }

    #[test]
    fn ripple_lifecycle() {
        let mut rec = RecorderSink::new();
        for (phase, at) in [(RipplePhase::Spawned, 100), (RipplePhase::Removed, 600_100)] {
            rec.on_ripple(&RippleEvent {
                id: RippleId(9),
                phase,
                at: HostTime(at),
            });
        }
        let phases: Vec<_> = decode(rec.as_bytes())
            .filter_map(|e| match e {
                RecordedEvent::Ripple { id, phase, .. } => Some((id.0, phase)),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            [(9, RipplePhase::Spawned), (9, RipplePhase::Removed)],
            "both ends of the mark's life are recorded"
        );
    }

    #[test]
    fn long_labels_are_truncated_on_a_char_boundary() {
        let mut rec = RecorderSink::new();
        let label: &'static str = "é".repeat(200).leak();
        rec.on_throttle_flush(&ThrottleFlushEvent {
            source: label,
            coalesced: 1,
            at: HostTime(0),
        });
        let Some(RecordedEvent::ThrottleFlush { source, .. }) = decode(rec.as_bytes()).next() else {
            panic!("flush did not decode");
        };
        assert_eq!(source.len(), 254, "cut to the last whole char under 255 bytes");
        assert!(source.chars().all(|c| c == 'é'), "no replacement chars");
    }

    #[test]
    fn truncated_buffer_stops_cleanly() {
        let mut rec = RecorderSink::new();
        rec.on_ripple(&RippleEvent {
            id: RippleId(1),
            phase: RipplePhase::Spawned,
            at: HostTime(5),
        });
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 0, "partial record is dropped");
        assert_eq!(decode(&[]).count(), 0, "empty buffer decodes to nothing");
    }
}
