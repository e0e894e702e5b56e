// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-up animation for stat numbers.
//!
//! A [`CounterAnimation`] moves a displayed value from 0 to a target over a
//! fixed duration, one [`FRAME_INTERVAL`] tick at a time:
//!
//! ```text
//!   Idle ──start()──► Counting ──tick() reaches target──► Settled
//! ```
//!
//! Each tick adds `target / (duration / FRAME_INTERVAL)`. The final tick
//! clamps to exactly the target and reports [`Step::Done`]; a settled counter
//! never changes again.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::time::Duration;
use crate::timer::{FRAME_INTERVAL, Step};

/// How the running value is rendered each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Truncate to a whole number.
    Integer,
    /// Keep one decimal place.
    OneDecimal,
}

/// Default durations per suffix, used when inferring a counter from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterDurations {
    /// Duration for `N+` counters.
    pub plus: Duration,
    /// Duration for `N%` counters.
    pub percent: Duration,
    /// Duration for `Nfps` counters.
    pub fps: Duration,
    /// Duration for `Ns` (seconds) counters.
    pub seconds: Duration,
}

impl CounterDurations {
    /// Durations used across the page unless a showcase overrides them.
    pub const STANDARD: Self = Self {
        plus: Duration::from_millis(2000),
        percent: Duration::from_millis(2000),
        fps: Duration::from_millis(1500),
        seconds: Duration::from_millis(2000),
    };
}

impl Default for CounterDurations {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Parameters of one count-up animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterSpec {
    /// Final value. Negative targets clamp to zero.
    pub target: f64,
    /// Total animation time.
    pub duration: Duration,
    /// Text appended after the number (`+`, `%`, `fps`, `s`).
    pub suffix: &'static str,
    /// Rendering of the running value.
    pub format: NumberFormat,
}

impl CounterSpec {
    /// Creates an integer counter.
    #[must_use]
    pub const fn integer(target: f64, duration: Duration, suffix: &'static str) -> Self {
        Self {
            target,
            duration,
            suffix,
            format: NumberFormat::Integer,
        }
    }

    /// Infers a counter from the number authored in markup, e.g. `"50+"`,
    /// `"100%"`, `"60fps"`, `"2.3s"`.
    ///
    /// Returns `None` for text that is not a plain count, such as `"24/7"`,
    /// or text without a leading number.
    #[must_use]
    pub fn from_markup(text: &str) -> Option<Self> {
        Self::from_markup_with(text, CounterDurations::STANDARD)
    }

    /// Like [`from_markup`](Self::from_markup) with explicit durations.
    #[must_use]
    pub fn from_markup_with(text: &str, durations: CounterDurations) -> Option<Self> {
        let text = text.trim();
        if text.contains('/') {
            return None;
        }
        let split = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(text.len());
        let (number, rest) = text.split_at(split);
        let target: f64 = number.parse().ok()?;
        let (suffix, duration, format) = match rest.trim() {
            "+" => ("+", durations.plus, NumberFormat::Integer),
            "%" => ("%", durations.percent, NumberFormat::Integer),
            "fps" => ("fps", durations.fps, NumberFormat::Integer),
            "s" => ("s", durations.seconds, NumberFormat::OneDecimal),
            _ => return None,
        };
        Some(Self {
            target,
            duration,
            suffix,
            format,
        })
    }

    /// Amount added per tick.
    #[must_use]
    pub fn increment(&self) -> f64 {
        let steps = self.duration.micros() as f64 / FRAME_INTERVAL.micros() as f64;
        self.target.max(0.0) / steps
    }

    /// Renders `value` with this spec's format and suffix.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        match self.format {
            NumberFormat::Integer => format!("{}{}", value.floor(), self.suffix),
            NumberFormat::OneDecimal => format!("{value:.1}{}", self.suffix),
        }
    }
}

/// Lifecycle of a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterPhase {
    /// Shows the value authored in markup.
    Idle,
    /// Timer running.
    Counting,
    /// Reached the target; terminal.
    Settled,
}

/// Count-up state machine for one element.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    phase: CounterPhase,
    current: f64,
    ticks: u32,
}

impl CounterAnimation {
    /// Creates an idle counter.
    #[must_use]
    pub const fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            phase: CounterPhase::Idle,
            current: 0.0,
            ticks: 0,
        }
    }

    /// Enters [`CounterPhase::Counting`] from idle. Returns `false` (and does
    /// nothing) if the counter already started.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Counting;
        self.current = 0.0;
        true
    }

    /// Advances one timer tick.
    pub fn tick(&mut self) -> Step {
        if self.phase != CounterPhase::Counting {
            return Step::Done;
        }
        self.ticks = self.ticks.saturating_add(1);
        let target = self.spec.target.max(0.0);
        self.current += self.spec.increment();
        if self.current >= target || !self.current.is_finite() {
            self.current = target;
            self.phase = CounterPhase::Settled;
            return Step::Done;
        }
        Step::Continue
    }

    /// Current running value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.current
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Ticks taken so far.
    #[must_use]
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// The animation parameters.
    #[must_use]
    pub const fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Text to display for the current value.
    #[must_use]
    pub fn display(&self) -> String {
        self.spec.render(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(anim: &mut CounterAnimation) -> alloc::vec::Vec<f64> {
        let mut values = alloc::vec::Vec::new();
        assert!(anim.start());
        loop {
            let step = anim.tick();
            values.push(anim.value());
            if step.is_done() {
                break;
            }
            assert!(values.len() < 10_000, "counter never settled");
        }
        values
    }

    #[test]
    fn monotonic_and_lands_exactly_on_target() {
        for (target, ms) in [(50.0, 2000), (100.0, 2000), (60.0, 1500), (2.3, 2000), (7.0, 10)] {
            let spec = CounterSpec::integer(target, Duration::from_millis(ms), "+");
            let mut anim = CounterAnimation::new(spec);
            let values = run_to_end(&mut anim);
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "value decreased: {pair:?}");
            }
            assert!(values.iter().all(|v| *v <= target), "overshoot for {target}");
            assert_eq!(*values.last().unwrap(), target);
            assert_eq!(anim.phase(), CounterPhase::Settled);
        }
    }

    #[test]
    fn two_second_counter_takes_about_125_ticks() {
        let spec = CounterSpec::integer(50.0, Duration::from_millis(2000), "+");
        let mut anim = CounterAnimation::new(spec);
        run_to_end(&mut anim);
        assert!((124..=126).contains(&anim.ticks()), "ticks = {}", anim.ticks());
    }

    #[test]
    fn settled_counter_is_terminal() {
        let mut anim = CounterAnimation::new(CounterSpec::integer(3.0, Duration::from_millis(16), "%"));
        run_to_end(&mut anim);
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.value(), 3.0);
        assert!(!anim.start(), "no replay");
        assert_eq!(anim.display(), "3%");
    }

    #[test]
    fn idle_counter_does_not_move() {
        let mut anim = CounterAnimation::new(CounterSpec::integer(10.0, Duration::from_millis(100), "+"));
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.phase(), CounterPhase::Idle);
    }

    #[test]
    fn zero_duration_and_zero_target_settle_immediately() {
        let mut anim = CounterAnimation::new(CounterSpec::integer(10.0, Duration::ZERO, "+"));
        anim.start();
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.value(), 10.0);

        let mut anim = CounterAnimation::new(CounterSpec::integer(0.0, Duration::from_millis(100), "+"));
        anim.start();
        assert_eq!(anim.tick(), Step::Done);
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn formats_integer_and_decimal() {
        let int = CounterSpec::integer(50.0, Duration::from_millis(2000), "+");
        assert_eq!(int.render(12.9), "12+");
        let secs = CounterSpec::from_markup("2.3s").unwrap();
        assert_eq!(secs.format, NumberFormat::OneDecimal);
        assert_eq!(secs.render(1.26), "1.3s");
        assert_eq!(secs.render(2.3), "2.3s");
    }

    #[test]
    fn infers_counters_from_markup() {
        let plus = CounterSpec::from_markup("50+").unwrap();
        assert_eq!((plus.target, plus.suffix), (50.0, "+"));
        assert_eq!(plus.duration, Duration::from_millis(2000));

        let fps = CounterSpec::from_markup(" 60fps ").unwrap();
        assert_eq!((fps.target, fps.suffix), (60.0, "fps"));
        assert_eq!(fps.duration, Duration::from_millis(1500));

        let pct = CounterSpec::from_markup("95%").unwrap();
        assert_eq!(pct.target, 95.0);

        assert_eq!(CounterSpec::from_markup("24/7"), None);
        assert_eq!(CounterSpec::from_markup("fast"), None);
        assert_eq!(CounterSpec::from_markup("12 apples"), None);
    }
}
