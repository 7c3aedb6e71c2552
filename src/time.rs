//! Counter sources and wraparound-safe interval arithmetic.
//!
//! Two independent monotonic u32 counters drive all measurements: a
//! free-running hardware cycle counter and a tick counter advanced by a
//! periodic interrupt. Both wrap to zero past `u32::MAX` and keep counting.

use core::sync::atomic::{AtomicU32, Ordering};

/// Uniform access to the two measurement counters.
///
/// `read_cycles` samples the free-running cycle counter (DWT `CYCCNT` on
/// Cortex-M or any equivalent); `read_ticks` samples a counter advanced once
/// per fixed period, typically backed by a static [`TickCounter`].
/// Implementations must be non-blocking and safe to call from any execution
/// context, interrupt handlers included.
///
/// The trait can also be implemented by a mock source for testing.
pub trait TimeSource {
    /// Current value of the free-running cycle counter.
    fn read_cycles(&self) -> u32;

    /// Current value of the periodic tick counter.
    fn read_ticks(&self) -> u32;
}

/// Single-writer tick cell advanced by a periodic interrupt.
///
/// The owning handler calls [`tick`](Self::tick) exactly once per period;
/// everything else only reads. Single-word atomic loads and stores keep
/// every read torn-read-free without locking. A foreground read racing a
/// pending increment may observe either the old or the new count; that is
/// expected, not an error.
///
/// ```
/// static TICKS: tickspan::TickCounter = tickspan::TickCounter::new();
///
/// // from the SysTick (or equivalent) handler:
/// TICKS.tick();
///
/// assert_eq!(TICKS.read(), 1);
/// ```
#[derive(Debug)]
pub struct TickCounter(AtomicU32);

impl TickCounter {
    /// Counter starting at zero. Usable in statics.
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Advance by one period. Call from the owning interrupt handler only.
    pub fn tick(&self) {
        // Sole writer, so a load/store pair is race-free and stays a plain
        // word access even on targets without atomic RMW instructions.
        let next = self.0.load(Ordering::Relaxed).wrapping_add(1);
        self.0.store(next, Ordering::Relaxed);
    }

    /// Current tick count.
    pub fn read(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Elapsed counter units between two raw samples.
///
/// Wrapping subtraction handles exactly one counter wrap between `start` and
/// `stop`. Two raw samples alone cannot recover from multiple wraps; pick
/// the counter whose period exceeds the longest interval being measured.
#[inline]
pub fn elapsed_between(start: u32, stop: u32) -> u32 {
    stop.wrapping_sub(start)
}
