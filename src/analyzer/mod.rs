//! Analyzer instances and the measurement state machine.
//!
//! An [`Analyzer`] marks one code region. It is driven through
//! `start`/`pause`/`resume`/`stop` transitions, sampling its mode's counter
//! at each boundary and accumulating elapsed time across running intervals.
//! Instances are owned by the [`Registry`](registry::Registry) and addressed
//! through [`AnalyzerId`](registry::AnalyzerId) handles.

use crate::error::TimingError;
use crate::pin::TracePin;
use crate::time::{TimeSource, elapsed_between};

pub mod registry;

/// Measurement mode, fixed at creation.
///
/// Selects which counter the transitions sample and whether a trace pin
/// mirrors the running intervals:
///
/// | Mode        | Counter sampled | Pin toggled |
/// |-------------|-----------------|-------------|
/// | `Cycles`    | cycle counter   | no          |
/// | `CyclesPin` | cycle counter   | yes         |
/// | `Ticks`     | tick counter    | no          |
/// | `TicksPin`  | tick counter    | yes         |
/// | `PinOnly`   | none            | yes         |
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Free-running cycle counter
    Cycles,

    /// Cycle counter plus trace pin
    CyclesPin,

    /// Periodic tick counter
    Ticks,

    /// Tick counter plus trace pin
    TicksPin,

    /// Trace pin only, measurement taken externally
    PinOnly,
}

/// Counter kind a mode samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Counter {
    /// Free-running cycle counter
    Cycles,

    /// Periodic tick counter
    Ticks,
}

impl Mode {
    /// Counter this mode samples, if any. `PinOnly` samples neither.
    pub fn counter(self) -> Option<Counter> {
        match self {
            Mode::Cycles | Mode::CyclesPin => Some(Counter::Cycles),
            Mode::Ticks | Mode::TicksPin => Some(Counter::Ticks),
            Mode::PinOnly => None,
        }
    }

    /// True if this mode toggles a trace pin at transition boundaries.
    pub fn uses_pin(self) -> bool {
        matches!(self, Mode::CyclesPin | Mode::TicksPin | Mode::PinOnly)
    }
}

/// Analyzer lifecycle state.
///
/// No state is terminal: a stopped analyzer can be started again, opening a
/// new running interval on top of the accumulated total.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Created, never started
    Configured,

    /// Actively measuring
    Running,

    /// Measurement suspended, accumulated time retained
    Paused,

    /// Measurement finished
    Stopped,
}

impl State {
    /// Human-readable state name used in status lines.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Configured => "CONFIGURED",
            State::Running => "RUNNING",
            State::Paused => "PAUSED",
            State::Stopped => "STOPPED",
        }
    }
}

/// One configured timing-measurement unit.
///
/// Holds the immutable configuration (name, mode, optional pin) and the
/// measurement fields: the raw start/stop marks of the current interval and
/// the accumulated elapsed total in native counter units. The total only
/// grows; it is reset by nothing short of re-creating the instance.
#[derive(Debug)]
pub struct Analyzer<P> {
    name: &'static str,
    mode: Mode,
    state: State,
    pin: Option<P>,
    start_mark: u32,
    stop_mark: u32,
    elapsed: u64,
}

impl<P> Analyzer<P> {
    /// Display name given at creation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Measurement mode given at creation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Accumulated duration in native counter units (cycles or ticks),
    /// summed across every completed running interval. Always zero in
    /// `PinOnly` mode.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl<P: TracePin> Analyzer<P> {
    // Invariant: `pin` is Some iff `mode.uses_pin()`; the registry enforces
    // this at creation.
    pub(crate) fn new(name: &'static str, mode: Mode, pin: Option<P>) -> Self {
        Self {
            name,
            mode,
            state: State::Configured,
            pin,
            start_mark: 0,
            stop_mark: 0,
            elapsed: 0,
        }
    }

    fn sample(&self, time: &impl TimeSource) -> Option<u32> {
        self.mode.counter().map(|kind| match kind {
            Counter::Cycles => time.read_cycles(),
            Counter::Ticks => time.read_ticks(),
        })
    }

    fn set_pin(&mut self, high: bool) {
        if let Some(pin) = self.pin.as_mut() {
            pin.set(high);
        }
    }

    /// Open a running interval. Valid from every state except `Running`,
    /// which is rejected as [`TimingError::Busy`].
    ///
    /// The pin goes HIGH before the counter is sampled, so the external edge
    /// leads the recorded mark instead of trailing it.
    pub(crate) fn start(&mut self, time: &impl TimeSource) -> Result<(), TimingError> {
        if self.state == State::Running {
            return Err(TimingError::Busy);
        }

        self.set_pin(true);
        if let Some(mark) = self.sample(time) {
            self.start_mark = mark;
        }

        self.state = State::Running;
        Ok(())
    }

    /// Suspend the running interval and fold it into the accumulated total.
    /// Valid from `Running` only.
    ///
    /// The counter is sampled first; the pin drops after the interval is
    /// closed.
    pub(crate) fn pause(&mut self, time: &impl TimeSource) -> Result<(), TimingError> {
        if self.state != State::Running {
            return Err(TimingError::InvalidState {
                current: self.state,
            });
        }

        if let Some(mark) = self.sample(time) {
            self.stop_mark = mark;
            self.fold_interval();
        }
        self.set_pin(false);

        self.state = State::Paused;
        Ok(())
    }

    /// Reopen a running interval from `Paused`. Pin HIGH first, then a fresh
    /// start mark.
    pub(crate) fn resume(&mut self, time: &impl TimeSource) -> Result<(), TimingError> {
        if self.state != State::Paused {
            return Err(TimingError::InvalidState {
                current: self.state,
            });
        }

        self.set_pin(true);
        if let Some(mark) = self.sample(time) {
            self.start_mark = mark;
        }

        self.state = State::Running;
        Ok(())
    }

    /// Finish the measurement. Valid from `Running` or `Paused`.
    ///
    /// Coming from `Running` the pending interval is closed and folded in;
    /// coming from `Paused` the preceding `pause` already folded it, so the
    /// total is taken as is.
    pub(crate) fn stop(&mut self, time: &impl TimeSource) -> Result<(), TimingError> {
        match self.state {
            State::Running => {
                if let Some(mark) = self.sample(time) {
                    self.stop_mark = mark;
                    self.fold_interval();
                }
            }
            State::Paused => {}
            _ => {
                return Err(TimingError::InvalidState {
                    current: self.state,
                });
            }
        }

        self.set_pin(false);
        self.state = State::Stopped;
        Ok(())
    }

    // Each interval is computed wraparound-safe in the u32 counter domain;
    // the running total is widened to u64 so it never wraps itself.
    fn fold_interval(&mut self) {
        self.elapsed += u64::from(elapsed_between(self.start_mark, self.stop_mark));
    }
}
