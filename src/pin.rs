//! Output pin capability for external measurement correlation.
//!
//! Analyzers in a pin mode drive the pin HIGH for the duration of every
//! running interval, so an oscilloscope or logic analyzer can observe the
//! measured region alongside the firmware's own numbers.

use embedded_hal::digital::OutputPin;

/// Settable-output contract, injected at analyzer creation.
///
/// Level semantics (active-high vs. active-low wiring) are the
/// implementation's concern; the engine only asserts the logical level.
/// Writes are assumed infallible and must not block.
pub trait TracePin {
    /// Drive the pin to the given logical level.
    fn set(&mut self, high: bool);
}

/// Adapter implementing [`TracePin`] for any [`embedded_hal`] output pin.
///
/// GPIO errors are discarded; on the push-pull pins used for timing
/// correlation the HAL error type is `Infallible` anyway.
#[derive(Debug)]
pub struct HalPin<P>(pub P);

impl<P: OutputPin> TracePin for HalPin<P> {
    fn set(&mut self, high: bool) {
        let _ = if high {
            self.0.set_high()
        } else {
            self.0.set_low()
        };
    }
}

/// Placeholder pin for registries that never use a pin mode.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoPin;

impl TracePin for NoPin {
    fn set(&mut self, _high: bool) {}
}
