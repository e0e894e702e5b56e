// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-synchronized input throttling.
//!
//! Pointer and scroll events can fire many times between two display
//! refreshes. [`FrameThrottle`] coalesces them so the expensive visual update
//! runs at most once per frame, always with the most recent sample.
//!
//! The type is pure state: it never talks to a frame source itself. A backend
//! calls [`record`](FrameThrottle::record) from its event listener and, when
//! that returns `true`, asks the host for one frame callback (on the web, a
//! single `requestAnimationFrame`). The frame callback then calls
//! [`run`](FrameThrottle::run).
//!
//! ```text
//!   event ─► record() ──true──► request frame ─► ... ─► frame ─► run(update)
//!   event ─► record() ──false─┐ (already pending; sample replaced)
//!   event ─► record() ──false─┘
//! ```

/// Coalesces high-frequency samples into one update per frame.
///
/// Invariant: at most one frame request is outstanding per throttle. One
/// instance is owned per input source; there is no shared global flag.
#[derive(Clone, Debug)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
    pending: bool,
    coalesced: u32,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameThrottle<T> {
    /// Creates a throttle with no sample and nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: None,
            pending: false,
            coalesced: 0,
        }
    }

    /// Records a raw sample.
    ///
    /// Returns `true` when the caller must schedule a frame callback; `false`
    /// when one is already pending, in which case the new sample simply
    /// replaces the previous one.
    pub fn record(&mut self, sample: T) -> bool {
        self.latest = Some(sample);
        self.coalesced = self.coalesced.saturating_add(1);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Runs the scheduled update with the freshest sample, then clears the
    /// pending flag so the next raw event can schedule again.
    ///
    /// Returns `None` (without calling `update`) if no update was pending,
    /// which guards against a stray frame callback.
    pub fn run<R>(&mut self, update: impl FnOnce(&T) -> R) -> Option<R> {
        if !self.pending {
            return None;
        }
        let out = self.latest.as_ref().map(update);
        self.pending = false;
        self.coalesced = 0;
        out
    }

    /// Returns `true` while a frame callback is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of raw samples recorded since the last update ran.
    #[must_use]
    pub const fn coalesced(&self) -> u32 {
        self.coalesced
    }

    /// The most recent sample, if any event has been recorded.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Stands in for the host's frame source: counts requests and lets the
    /// test decide when the paint callback fires.
    #[derive(Default)]
    struct ManualFrames {
        requested: u32,
    }

    impl ManualFrames {
        fn event(&mut self, throttle: &mut FrameThrottle<(i32, i32)>, sample: (i32, i32)) {
            if throttle.record(sample) {
                self.requested += 1;
            }
        }
    }

    #[test]
    fn burst_between_frames_runs_once_with_last_sample() {
        let mut frames = ManualFrames::default();
        let mut throttle = FrameThrottle::new();
        let mut seen = Vec::new();

        for n in 0..50 {
            frames.event(&mut throttle, (n, -n));
        }
        assert_eq!(frames.requested, 1, "one frame request per burst");
        assert_eq!(throttle.coalesced(), 50);

        throttle.run(|s| seen.push(*s));
        assert_eq!(seen, [(49, -49)], "update sees only the last sample");
        assert!(!throttle.is_pending());

        // A second paint with no new events does nothing.
        assert_eq!(throttle.run(|s| seen.push(*s)), None);
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn next_event_after_flush_schedules_again() {
        let mut frames = ManualFrames::default();
        let mut throttle = FrameThrottle::new();

        frames.event(&mut throttle, (1, 1));
        throttle.run(|_| ());
        frames.event(&mut throttle, (2, 2));
        frames.event(&mut throttle, (3, 3));
        assert_eq!(frames.requested, 2);
        assert_eq!(throttle.run(|s| *s), Some((3, 3)));
    }

    #[test]
    fn frame_that_finds_throttle_busy_must_retry() {
        use core::cell::RefCell;

        let mut frames = ManualFrames::default();
        let shared = RefCell::new(FrameThrottle::new());
        frames.event(&mut shared.borrow_mut(), (1, 1));

        // The frame fires while something else holds the throttle.
        let held = shared.borrow_mut();
        assert!(shared.try_borrow_mut().is_err(), "frame skips");
        drop(held);

        // Still pending, so new events do not ask for another frame.
        frames.event(&mut shared.borrow_mut(), (2, 2));
        assert_eq!(frames.requested, 1, "no second request while pending");
        assert!(shared.borrow().is_pending(), "sample not lost");

        // The retried frame flushes the latest sample.
        assert_eq!(shared.borrow_mut().run(|s| *s), Some((2, 2)));
    }

    #[test]
    fn stray_frame_without_event_is_ignored() {
        let mut throttle: FrameThrottle<f64> = FrameThrottle::new();
        assert_eq!(throttle.run(|v| *v), None);
        assert!(throttle.latest().is_none());
    }
}
