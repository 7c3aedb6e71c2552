//! # tickspan
//!
//! Lightweight execution-time measurement library for embedded systems with
//! zero heap allocation.
//!
//! **Key features:**
//! - **Static allocation** - Bounded analyzer registry, no heap usage
//! - **Two counter sources** - Free-running cycle counter or periodic tick
//! - **Pause/resume accumulation** - Wraparound-safe interval arithmetic
//! - **Pin correlation** - Mirror measured regions on a GPIO for scope capture
//! - **Flexible I/O** - Platform-agnostic status sink trait
//!
//! ## Usage
//!
//! Bind a [`Registry`] to a [`TimeSource`], create one analyzer per code
//! region, and drive it through `start`/`pause`/`resume`/`stop`:
//!
//! ```
//! use tickspan::{DefaultConfig, Mode, NoPin, Registry, TimeSource};
//!
//! struct Counters; // wraps the hardware counters on a real target
//!
//! impl TimeSource for Counters {
//!     fn read_cycles(&self) -> u32 {
//!         0 // e.g. cortex_m::peripheral::DWT::cycle_count()
//!     }
//!     fn read_ticks(&self) -> u32 {
//!         0 // e.g. a static TickCounter driven by SysTick
//!     }
//! }
//!
//! let mut registry: Registry<Counters, NoPin, DefaultConfig> = Registry::new(Counters);
//! let task = registry.create("task1", Mode::Cycles, None).unwrap();
//!
//! registry.start(task).unwrap();
//! // ... measured region ...
//! registry.stop(task).unwrap();
//!
//! let mut out = heapless::String::<128>::new();
//! registry.status(task, &mut out).unwrap();
//! ```
//!
//! On a real target the periodic tick is produced by pointing the SysTick
//! (or any fixed-rate timer) interrupt at a static [`TickCounter`]:
//! the handler calls [`TickCounter::tick`], the [`TimeSource`]
//! implementation reads it back.
//!
//! Analyzer instances carry no internal synchronization. Dedicate one
//! instance to each execution context (one for the main loop, one per
//! interrupt handler) instead of sharing an instance across contexts.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod analyzer;
pub mod config;
pub mod error;
pub mod io;
pub mod pin;
pub mod time;

mod report;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Analyzer engine
pub use analyzer::registry::{AnalyzerId, Registry};
pub use analyzer::{Analyzer, Counter, Mode, State};

// Configuration
pub use config::{DefaultConfig, TimingConfig};

// Error types
pub use error::TimingError;

// Capability traits
pub use io::StatusSink;
pub use pin::{HalPin, NoPin, TracePin};

// Time sources
pub use time::{TickCounter, TimeSource, elapsed_between};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
