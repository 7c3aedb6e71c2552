//! Bounded, append-only registry of analyzer instances.
//!
//! The registry is an arena: it owns every [`Analyzer`] created through it
//! and hands out [`AnalyzerId`] handles instead of references. Instances are
//! never removed, so a handle stays valid for the registry's lifetime and
//! bulk reports walk the instances in registration order.

use crate::analyzer::{Analyzer, Mode};
use crate::config::TimingConfig;
use crate::error::TimingError;
use crate::io::StatusSink;
use crate::pin::TracePin;
use crate::report;
use crate::time::TimeSource;

use core::fmt;
use core::marker::PhantomData;
use log::{debug, warn};

/// Stable handle to a registered analyzer.
///
/// Returned by [`Registry::create`]. Handles are plain indices and are not
/// tied to the registry that issued them; using a handle on a different
/// registry addresses whatever slot shares its index, or fails with
/// [`TimingError::UnknownInstance`] if no such slot exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnalyzerId(usize);

/// Bounded arena of analyzer instances plus the time source they sample.
///
/// Generic over:
/// - `T`: TimeSource implementation
/// - `P`: TracePin implementation
/// - `C`: TimingConfig implementation
/// - `N`: compile-time instance capacity
///
/// The registry itself carries no synchronization; drive it, or each
/// analyzer in it, from a single execution context. The canonical pattern
/// dedicates one instance per context: one for the main loop, one per
/// interrupt handler.
pub struct Registry<T, P, C, const N: usize = 10>
where
    T: TimeSource,
    P: TracePin,
    C: TimingConfig,
{
    slots: heapless::Vec<Analyzer<P>, N>,
    time: T,
    _config: PhantomData<C>,
}

impl<T, P, C, const N: usize> fmt::Debug for Registry<T, P, C, N>
where
    T: TimeSource,
    P: TracePin,
    C: TimingConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.slots.len())
            .field("capacity", &N)
            .finish_non_exhaustive()
    }
}

impl<T, P, C, const N: usize> Registry<T, P, C, N>
where
    T: TimeSource,
    P: TracePin,
    C: TimingConfig,
{
    /// Create an empty registry sampling `time` at every transition.
    pub fn new(time: T) -> Self {
        Self {
            slots: heapless::Vec::new(),
            time,
            _config: PhantomData,
        }
    }

    /// Number of registered analyzers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no analyzer has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Register a new analyzer in `Configured` state with all measurement
    /// fields zeroed.
    ///
    /// `pin` must be supplied when `mode` toggles a pin; a pin handed to a
    /// counter-only mode is dropped so that an instance carries a pin
    /// exactly when its mode uses one.
    pub fn create(
        &mut self,
        name: &'static str,
        mode: Mode,
        pin: Option<P>,
    ) -> Result<AnalyzerId, TimingError> {
        if name.is_empty() {
            return Err(TimingError::EmptyName);
        }
        if mode.uses_pin() && pin.is_none() {
            return Err(TimingError::MissingPin);
        }
        if self.slots.is_full() {
            warn!("analyzer registry full ({N} slots), rejecting '{name}'");
            return Err(TimingError::RegistryFull);
        }

        let pin = if mode.uses_pin() { pin } else { None };
        let id = AnalyzerId(self.slots.len());
        // Capacity checked above.
        let _ = self.slots.push(Analyzer::new(name, mode, pin));

        debug!("registered analyzer '{name}' ({mode:?})");
        Ok(id)
    }

    /// Shared access to a registered analyzer, e.g. to read its state or
    /// accumulated elapsed time.
    pub fn get(&self, id: AnalyzerId) -> Result<&Analyzer<P>, TimingError> {
        self.slots.get(id.0).ok_or(TimingError::UnknownInstance)
    }

    /// Iterate registered analyzers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Analyzer<P>> {
        self.slots.iter()
    }

    /// Start measuring. Valid from every state except `Running`.
    pub fn start(&mut self, id: AnalyzerId) -> Result<(), TimingError> {
        let time = &self.time;
        let analyzer = self.slots.get_mut(id.0).ok_or(TimingError::UnknownInstance)?;
        analyzer.start(time)
    }

    /// Suspend measurement, folding the open interval into the accumulated
    /// total. Valid from `Running` only.
    pub fn pause(&mut self, id: AnalyzerId) -> Result<(), TimingError> {
        let time = &self.time;
        let analyzer = self.slots.get_mut(id.0).ok_or(TimingError::UnknownInstance)?;
        analyzer.pause(time)
    }

    /// Resume measurement after a pause. Valid from `Paused` only.
    pub fn resume(&mut self, id: AnalyzerId) -> Result<(), TimingError> {
        let time = &self.time;
        let analyzer = self.slots.get_mut(id.0).ok_or(TimingError::UnknownInstance)?;
        analyzer.resume(time)
    }

    /// Finish the measurement. Valid from `Running` or `Paused`.
    pub fn stop(&mut self, id: AnalyzerId) -> Result<(), TimingError> {
        let time = &self.time;
        let analyzer = self.slots.get_mut(id.0).ok_or(TimingError::UnknownInstance)?;
        analyzer.stop(time)
    }

    /// Emit one status line for `id`. Pure read; no state changes.
    pub fn status<W: StatusSink>(&self, id: AnalyzerId, out: &mut W) -> Result<(), TimingError> {
        let analyzer = self.get(id)?;
        let line = report::format_status::<P, C>(analyzer);
        out.write_str(&line).map_err(|_| TimingError::Io)
    }

    /// Emit status lines for every registered analyzer in registration
    /// order.
    ///
    /// An empty registry emits a single informational line and reports
    /// [`TimingError::RegistryEmpty`] instead of success.
    pub fn status_all<W: StatusSink>(&self, out: &mut W) -> Result<(), TimingError> {
        if self.slots.is_empty() {
            out.write_str(report::EMPTY_REGISTRY_MSG)
                .map_err(|_| TimingError::Io)?;
            return Err(TimingError::RegistryEmpty);
        }

        for analyzer in &self.slots {
            let line = report::format_status::<P, C>(analyzer);
            out.write_str(&line).map_err(|_| TimingError::Io)?;
        }
        Ok(())
    }
}
