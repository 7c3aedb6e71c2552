//! Error types for timing operations.
//!
//! The `TimingError` enum represents all failure conditions of the analyzer
//! engine. Every condition is a recoverable usage error: operations return a
//! status instead of panicking, and a rejected operation leaves the targeted
//! instance exactly as it was before the call.

use crate::analyzer::State;
use core::fmt;

/// Timing engine error type.
///
/// `Busy` is a specialization of `InvalidState` surfaced distinctly so that a
/// double `start` can be told apart from other off-table transitions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// Handle does not refer to an analyzer registered in this registry
    UnknownInstance,

    /// Analyzer name must not be empty
    EmptyName,

    /// Mode toggles a pin but no pin capability was supplied
    MissingPin,

    /// Registry is at capacity
    RegistryFull,

    /// `start` requested while already running
    Busy,

    /// Transition not permitted from the current state
    InvalidState {
        /// State the analyzer was in when the operation was rejected
        current: State,
    },

    /// Bulk status requested with no analyzers registered
    RegistryEmpty,

    /// The status sink rejected a write
    Io,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::UnknownInstance => write!(f, "Unknown analyzer"),
            TimingError::EmptyName => write!(f, "Analyzer name is empty"),
            TimingError::MissingPin => write!(f, "Mode requires a pin capability"),
            TimingError::RegistryFull => write!(f, "Analyzer registry full"),
            TimingError::Busy => write!(f, "Analyzer already running"),
            TimingError::InvalidState { current } => {
                write!(f, "Operation not permitted in state {}", current.as_str())
            }
            TimingError::RegistryEmpty => write!(f, "No analyzers registered"),
            TimingError::Io => write!(f, "Status sink write failed"),
        }
    }
}
