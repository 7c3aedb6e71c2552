//! Test fixtures and utilities for tickspan testing.
//!
//! Provides:
//! - `MockTime`: settable counter source with optional auto-advance per read
//! - `MockPin`/`PinProbe`: trace pin recording writes against the mock clock
//! - `FailingSink`: sink rejecting every write
//! - `TestConfig`: round-number clock rates for readable expectations

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tickspan::{StatusSink, TimeSource, TimingConfig, TracePin};

// ============================================================================
// MockTime - Test Counter Source
// ============================================================================

/// Mock counter source for testing.
///
/// Both counters are set directly by the test. Clones share the same
/// underlying cells, so a test can keep one clone and hand another to the
/// registry. With `auto_advance`, every cycle read bumps the counter
/// afterwards, which makes the relative order of reads observable.
#[derive(Clone, Default)]
pub struct MockTime {
    inner: Rc<Counters>,
}

#[derive(Default)]
struct Counters {
    cycles: Cell<u32>,
    ticks: Cell<u32>,
    step: Cell<u32>,
}

impl MockTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cycles(&self, value: u32) {
        self.inner.cycles.set(value);
    }

    pub fn advance_cycles(&self, delta: u32) {
        let current = self.inner.cycles.get();
        self.inner.cycles.set(current.wrapping_add(delta));
    }

    pub fn set_ticks(&self, value: u32) {
        self.inner.ticks.set(value);
    }

    pub fn advance_ticks(&self, delta: u32) {
        let current = self.inner.ticks.get();
        self.inner.ticks.set(current.wrapping_add(delta));
    }

    /// Bump the cycle counter by `step` after every cycle read.
    pub fn auto_advance(&self, step: u32) {
        self.inner.step.set(step);
    }

    /// Current cycle value without triggering auto-advance.
    pub fn peek_cycles(&self) -> u32 {
        self.inner.cycles.get()
    }
}

impl TimeSource for MockTime {
    fn read_cycles(&self) -> u32 {
        let value = self.inner.cycles.get();
        let step = self.inner.step.get();
        self.inner.cycles.set(value.wrapping_add(step));
        value
    }

    fn read_ticks(&self) -> u32 {
        self.inner.ticks.get()
    }
}

// ============================================================================
// MockPin / PinProbe - Recording Trace Pin
// ============================================================================

/// Trace pin recording every write as `(level, cycle counter at write)`.
///
/// The pin itself moves into the analyzer at creation; the paired
/// `PinProbe` stays with the test to inspect the recorded events.
pub struct MockPin {
    time: MockTime,
    events: Rc<RefCell<Vec<(bool, u32)>>>,
}

/// Inspection handle for a `MockPin`'s recorded events.
pub struct PinProbe {
    events: Rc<RefCell<Vec<(bool, u32)>>>,
}

impl MockPin {
    pub fn new(time: &MockTime) -> (Self, PinProbe) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                time: time.clone(),
                events: Rc::clone(&events),
            },
            PinProbe { events },
        )
    }
}

impl TracePin for MockPin {
    fn set(&mut self, high: bool) {
        self.events
            .borrow_mut()
            .push((high, self.time.peek_cycles()));
    }
}

impl PinProbe {
    /// All recorded `(level, cycles)` events in write order.
    pub fn events(&self) -> Vec<(bool, u32)> {
        self.events.borrow().clone()
    }

    /// Just the level sequence.
    pub fn levels(&self) -> Vec<bool> {
        self.events.borrow().iter().map(|&(level, _)| level).collect()
    }

    /// Level of the most recent write, if any.
    pub fn last_level(&self) -> Option<bool> {
        self.events.borrow().last().map(|&(level, _)| level)
    }

    pub fn write_count(&self) -> usize {
        self.events.borrow().len()
    }
}

// ============================================================================
// Sinks and Configuration
// ============================================================================

/// Sink that rejects every write, for exercising the I/O error path.
pub struct FailingSink;

impl StatusSink for FailingSink {
    type Error = ();

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Err(())
    }
}

/// 1 MHz cycle clock (1000 cycles per millisecond), 1 kHz tick.
#[derive(Debug, Copy, Clone)]
pub struct TestConfig;

impl TimingConfig for TestConfig {
    const CLOCK_HZ: u32 = 1_000_000;
    const TICK_HZ: u32 = 1_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_time_shared_between_clones() {
        let time = MockTime::new();
        let other = time.clone();

        time.set_cycles(42);
        assert_eq!(other.read_cycles(), 42);

        other.set_ticks(7);
        assert_eq!(time.read_ticks(), 7);
    }

    #[test]
    fn test_mock_time_auto_advance() {
        let time = MockTime::new();
        time.set_cycles(100);
        time.auto_advance(1);

        assert_eq!(time.read_cycles(), 100);
        assert_eq!(time.read_cycles(), 101);
        assert_eq!(time.peek_cycles(), 102);
    }

    #[test]
    fn test_mock_pin_records_events() {
        let time = MockTime::new();
        let (mut pin, probe) = MockPin::new(&time);

        time.set_cycles(10);
        pin.set(true);
        time.set_cycles(20);
        pin.set(false);

        assert_eq!(probe.events(), vec![(true, 10), (false, 20)]);
        assert_eq!(probe.last_level(), Some(false));
    }
}
