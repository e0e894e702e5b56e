// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recurring-timer vocabulary shared by the counter and typing animations.

use crate::time::Duration;

/// Nominal interval of a frame-rate timer (~60 steps per second). Browsers
/// may stretch it; nothing depends on it being exact.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What a recurring timer should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Keep the timer running.
    Continue,
    /// The animation reached its terminal state; cancel the timer.
    Done,
}

impl Step {
    /// Returns `true` for [`Step::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Linear start-delay ramp for staggered groups: item `i` starts after
/// `base + i * step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stagger {
    /// Delay before the first item.
    pub base: Duration,
    /// Extra delay per item index.
    pub step: Duration,
}

impl Stagger {
    /// No delay for any item.
    pub const NONE: Self = Self::every(Duration::ZERO);

    /// A ramp with no initial delay.
    #[must_use]
    pub const fn every(step: Duration) -> Self {
        Self {
            base: Duration::ZERO,
            step,
        }
    }

    /// Delay for the item at `index`.
    #[must_use]
    pub const fn delay(&self, index: usize) -> Duration {
        self.base.saturating_add(self.step.saturating_mul(index as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear_in_index() {
        let s = Stagger {
            base: Duration::from_millis(500),
            step: Duration::from_millis(300),
        };
        assert_eq!(s.delay(0), Duration::from_millis(500));
        assert_eq!(s.delay(2), Duration::from_millis(1100));
        assert_eq!(Stagger::NONE.delay(9), Duration::ZERO);
    }
}
